//! Player role types.

use crate::error::RoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Usage roles scored by the engine.
///
/// Each role selects its own breakpoint tables, weights and tier cascade
/// through [`Role::config`](crate::engine::config::RoleConfig).
///
/// # Examples
///
/// ```rust
/// use usage_roles::Role;
///
/// let role: Role = "wr".parse().unwrap();
/// assert_eq!(role, Role::WR);
/// assert_eq!(role.to_string(), "WR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Wide receiver: targets are the primary volume.
    WR,
    /// Running back: carries plus targets are the primary volume.
    RB,
    /// Tight end: targets are the primary volume, efficiency-based high-value signal.
    TE,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::WR, Role::RB, Role::TE];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::WR => "WR",
            Role::RB => "RB",
            Role::TE => "TE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "WR" => Ok(Role::WR),
            "RB" | "HB" => Ok(Role::RB),
            "TE" => Ok(Role::TE),
            _ => Err(RoleError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}
