//! Command implementations for the usage-roles CLI

pub mod compute_roles;
pub mod import;
pub mod show_roles;

use crate::{
    error::Result,
    storage::UsageDatabase,
    Season, SEASON_ENV_VAR,
};
use std::path::PathBuf;

/// Season from the command line, else `USAGE_ROLES_SEASON`, else the default season.
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    if let Some(season) = season {
        return Ok(season);
    }
    match std::env::var(SEASON_ENV_VAR) {
        Ok(value) => value.parse(),
        Err(_) => Ok(Season::default()),
    }
}

/// Open the database at `--db`, else `USAGE_ROLES_DB`, else the cache directory.
pub fn open_database(db_path: Option<PathBuf>) -> Result<UsageDatabase> {
    let db = match db_path {
        Some(path) => UsageDatabase::open(path)?,
        None => UsageDatabase::new()?,
    };
    Ok(db)
}
