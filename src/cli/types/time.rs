//! Time-related types for seasons and weeks.

use crate::error::{Result, RoleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

/// Season used when neither `--season` nor `USAGE_ROLES_SEASON` is given.
/// Bump when a new season's weekly data starts arriving.
pub const DEFAULT_SEASON: u16 = 2025;

impl Default for Season {
    fn default() -> Self {
        Self(DEFAULT_SEASON)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Season {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Week {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_and_display() {
        let season: Season = "2024".parse().unwrap();
        assert_eq!(season, Season::new(2024));
        assert_eq!(season.to_string(), "2024");
        assert!("twenty".parse::<Season>().is_err());
    }

    #[test]
    fn test_default_season_and_padding() {
        assert_eq!(Season::default(), Season::new(DEFAULT_SEASON));
        assert_eq!(format!("[{:>6}]", Season::new(2024)), "[  2024]");
        assert_eq!(format!("[{:<3}]", Week::new(7)), "[7  ]");
    }

    #[test]
    fn test_week_ordering() {
        assert!(Week::new(3) < Week::new(11));
        assert_eq!(Week::default().as_u16(), 1);
    }
}
