//! Fantasy Football Usage Roles Library
//!
//! Turns per-week usage rows (targets, carries, routes, snap share, fantasy
//! points) into a season-level role record per player: four 0-100
//! sub-scores, a weighted composite role score, a role-specific tier and a
//! set of boolean flags.
//!
//! ## Features
//!
//! - **Scoring Engine**: Pure, deterministic scoring for receivers (WR),
//!   ball-carriers (RB) and auxiliary receivers (TE)
//! - **Database Storage**: Local SQLite store for weekly rows and computed records
//! - **Batch Computation**: Parallel scoring of every eligible player in a season
//!
//! ## Quick Start
//!
//! ```rust
//! use usage_roles::{engine::compute_season_role, PlayerId, Role, Season, Week, WeeklyUsageRow};
//!
//! let rows: Vec<WeeklyUsageRow> = (1..=4)
//!     .map(|week| {
//!         let mut row = WeeklyUsageRow::new(PlayerId::new(1), Season::new(2024), Week::new(week));
//!         row.targets = 8;
//!         row.fantasy_points = 12.0;
//!         row
//!     })
//!     .collect();
//!
//! let record = compute_season_role(Role::WR, &rows).expect("four games played");
//! assert!(record.role_score <= 100);
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export USAGE_ROLES_DB=/path/to/usage.db
//! export USAGE_ROLES_SEASON=2024
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{ids::PlayerId, role::Role, time::Season, time::Week};
pub use engine::{RoleFlags, SeasonRoleRecord, SubScores, Tier, WeeklyUsageRow};
pub use error::{Result, RoleError};

pub const SEASON_ENV_VAR: &str = "USAGE_ROLES_SEASON";
