//! Data models for the storage layer

use crate::{PlayerId, Role};
use serde::{Deserialize, Serialize};

/// Player information stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub team: Option<String>,
}

/// A stored role record joined with the player's display fields
#[derive(Debug, Clone, Serialize)]
pub struct RankedRoleRecord {
    pub name: String,
    pub team: Option<String>,
    #[serde(flatten)]
    pub record: crate::engine::SeasonRoleRecord,
}
