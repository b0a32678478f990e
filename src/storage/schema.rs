//! Database schema and connection management

use crate::error::RoleError;
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::PathBuf;
use tracing::debug;

/// Overrides the on-disk database location.
pub const DB_PATH_ENV_VAR: &str = "USAGE_ROLES_DB";

/// Database connection manager for weekly usage and season role data
pub struct UsageDatabase {
    pub(crate) conn: Connection,
}

impl UsageDatabase {
    /// Create a new database connection and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;
        Self::open(db_path)
    }

    /// Open (or create) a database at an explicit path
    pub fn open(db_path: PathBuf) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %db_path.display(), "opening usage database");
        let conn = Connection::open(&db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests and dry runs over imported files
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    pub fn database_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let cache_dir = cache_dir().ok_or_else(|| RoleError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "could not determine cache directory",
        )))?;
        Ok(cache_dir.join("usage-roles").join("usage.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute("PRAGMA foreign_keys = ON", [])?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                role TEXT NOT NULL,
                team TEXT
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS weekly_usage (
                player_id INTEGER NOT NULL,
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                team TEXT,
                targets INTEGER NOT NULL DEFAULT 0,
                carries INTEGER NOT NULL DEFAULT 0,
                share REAL,
                routes INTEGER,
                fantasy_points REAL NOT NULL DEFAULT 0,
                deep_targets INTEGER,
                slot_routes INTEGER,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (player_id, season, week),
                FOREIGN KEY (player_id) REFERENCES players(player_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS season_roles (
                player_id INTEGER NOT NULL,
                season INTEGER NOT NULL,
                role TEXT NOT NULL,
                games_played INTEGER NOT NULL,
                primary_total INTEGER NOT NULL,
                primary_per_game REAL NOT NULL,
                share_avg REAL,
                routes_per_game REAL,
                fantasy_points_per_game REAL NOT NULL,
                primary_stddev REAL,
                fantasy_points_stddev REAL,
                deep_rate REAL,
                slot_rate REAL,
                recent_rate REAL,
                volume_score INTEGER NOT NULL,
                consistency_score INTEGER NOT NULL,
                high_value_score INTEGER NOT NULL,
                momentum_score INTEGER NOT NULL,
                role_score INTEGER NOT NULL,
                tier TEXT NOT NULL,
                flag_high_opportunity_low_conversion INTEGER NOT NULL,
                flag_emerging_role INTEGER NOT NULL,
                flag_single_game_spike INTEGER NOT NULL,
                computed_at INTEGER NOT NULL,
                PRIMARY KEY (player_id, season),
                FOREIGN KEY (player_id) REFERENCES players(player_id)
            )",
            [],
        )?;

        // Create indexes for the batch and listing queries
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_weekly_usage_season
             ON weekly_usage(season, player_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_season_roles_rank
             ON season_roles(season, role, role_score DESC)",
            [],
        )?;

        Ok(())
    }
}
