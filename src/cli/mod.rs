//! CLI argument definitions and parsing.

pub mod types;

use crate::engine::Tier;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{ids::PlayerId, role::Role, time::Season};

#[derive(Debug, Parser)]
#[clap(
    name = "usage-roles",
    about = "Season-level usage role scores for fantasy football players"
)]
pub struct UsageRoles {
    /// Database path (or set `USAGE_ROLES_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Debug logging (overrides `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import players and weekly usage rows from a JSON file
    Import {
        /// JSON file with `players` and `rows` arrays.
        #[clap(long, short)]
        file: PathBuf,

        /// Only import rows for this season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Clear the season's rows and role records before importing (requires --season).
        #[clap(long)]
        replace: bool,

        /// Output the import summary as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Compute and store season role records.
    ///
    /// Scores every player of the role with enough games played, replacing
    /// any records stored by a previous run.
    Compute {
        /// Role to score: WR, RB or TE.
        #[clap(long, short)]
        role: Role,

        /// Season year (or set `USAGE_ROLES_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        /// Minimum games played to be scored.
        #[clap(long, default_value_t = crate::commands::compute_roles::DEFAULT_MIN_GAMES)]
        min_games: u32,

        /// Score without writing records.
        #[clap(long)]
        dry_run: bool,

        /// Score a single player, ignoring --min-games.
        #[clap(long, short)]
        player: Option<PlayerId>,

        /// Output the batch report as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Show stored role records, best score first
    Show {
        /// Role to list: WR, RB or TE.
        #[clap(long, short)]
        role: Role,

        /// Season year (or set `USAGE_ROLES_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        /// Only show this tier (e.g. ALPHA, lead, change-of-pace).
        #[clap(long, short)]
        tier: Option<Tier>,

        /// Maximum number of records.
        #[clap(long, short)]
        limit: Option<u32>,

        /// Output records as JSON.
        #[clap(long)]
        json: bool,
    },
}
