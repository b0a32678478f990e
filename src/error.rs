//! Error types for the usage-roles CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RoleError>;

#[derive(Error, Debug)]
pub enum RoleError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid role: {role}")]
    InvalidRole { role: String },

    #[error("Invalid tier: {tier}")]
    InvalidTier { tier: String },

    #[error("Invalid weekly rows for player {player_id}: {reason}")]
    InvalidRows { player_id: u64, reason: String },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: u64 },
}

impl From<rusqlite::Error> for RoleError {
    fn from(err: rusqlite::Error) -> Self {
        RoleError::Storage(err.into())
    }
}
