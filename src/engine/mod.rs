//! Season role engine.
//!
//! Pipeline for one player-season, leaf first:
//! - `aggregate`: weekly rows to per-game rates, volatility and coverage-aligned ratios
//! - `components`: volume, consistency, high-value and momentum sub-scores
//! - `composite`: weighted role score
//! - `tiers`: first-match tier cascade
//! - `flags`: independent diagnostics
//!
//! Every stage is a pure function; the only per-role variation is the
//! [`config::RoleConfig`] passed through it.

pub mod aggregate;
pub mod breakpoints;
pub mod components;
pub mod composite;
pub mod config;
pub mod flags;
pub mod stats;
pub mod tiers;
pub mod types;

pub use aggregate::{aggregate_season, SeasonAggregate};
pub use config::RoleConfig;
pub use types::{RoleFlags, SeasonRoleRecord, SubScores, Tier, WeeklyUsageRow};

use crate::Role;
use tiers::{classify, TierSignals};

/// Score one player-season.
///
/// `rows` must all belong to the same player and season. Returns `None`
/// when the player has no games played; no record should be stored then.
pub fn compute_season_role(role: Role, rows: &[WeeklyUsageRow]) -> Option<SeasonRoleRecord> {
    let first = rows.first()?;
    let config = role.config();
    let agg = aggregate_season(role, rows)?;

    let scores = components::score_components(&agg, config);
    let role_score = composite::role_score(&scores, &config.composite);
    let tier = classify(
        config.tiers,
        &TierSignals {
            volume: scores.volume,
            composite: role_score,
            share: agg.share_avg,
            slot_rate: agg.slot.rate(),
        },
    );
    let flags = flags::evaluate_flags(&agg, &scores, tier, config);

    Some(SeasonRoleRecord {
        player_id: first.player_id,
        season: first.season,
        role,
        games_played: agg.games_played,
        primary_total: agg.primary_total,
        primary_per_game: agg.primary_per_game,
        share_avg: agg.share_avg,
        routes_per_game: agg.routes_per_game,
        fantasy_points_per_game: agg.fantasy_points_per_game,
        primary_stddev: agg.primary_stddev,
        fantasy_points_stddev: agg.fantasy_points_stddev,
        deep_rate: agg.deep.rate(),
        slot_rate: agg.slot.rate(),
        recent_rate: agg.recent_rate,
        scores,
        role_score,
        tier,
        flags,
    })
}
