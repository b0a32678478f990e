//! Input and output records for the role engine.

use crate::{PlayerId, Role, Season, Week};
use crate::error::RoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One player's usage for one week of one season.
///
/// Optional fields are `None` when the upstream feed did not report them for
/// that week. Play-by-play derived fields (`deep_targets`, `slot_routes`) lag
/// the box-score feed, so recent weeks are routinely `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyUsageRow {
    pub player_id: PlayerId,
    pub season: Season,
    pub week: Week,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub targets: u32,
    #[serde(default)]
    pub carries: u32,
    /// Fraction (0-1) of the team's volume for the role's primary metric.
    #[serde(default)]
    pub share: Option<f64>,
    #[serde(default)]
    pub routes: Option<u32>,
    #[serde(default)]
    pub fantasy_points: f64,
    /// Targets with air yards at or beyond the deep threshold.
    #[serde(default)]
    pub deep_targets: Option<u32>,
    /// Routes run from a slot alignment.
    #[serde(default)]
    pub slot_routes: Option<u32>,
}

impl WeeklyUsageRow {
    /// Row with the identifying fields set and every usage field empty.
    pub fn new(player_id: PlayerId, season: Season, week: Week) -> Self {
        Self {
            player_id,
            season,
            week,
            team: None,
            targets: 0,
            carries: 0,
            share: None,
            routes: None,
            fantasy_points: 0.0,
            deep_targets: None,
            slot_routes: None,
        }
    }

    /// Primary volume for a role: targets for receivers, carries plus targets for backs.
    pub fn primary_volume(&self, role: Role) -> u32 {
        match role {
            Role::WR | Role::TE => self.targets,
            Role::RB => self.carries.saturating_add(self.targets),
        }
    }
}

/// The four 0-100 component scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub volume: u8,
    pub consistency: u8,
    pub high_value: u8,
    pub momentum: u8,
}

/// Boolean diagnostics; each is evaluated independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFlags {
    pub high_opportunity_low_conversion: bool,
    pub emerging_role: bool,
    pub single_game_spike: bool,
}

/// Categorical role labels. Each role draws from its own subset, always ending in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    // Receiver
    Alpha,
    Secondary,
    Slot,
    Rotational,
    Depth,
    // Ball carrier
    Workhorse,
    Lead,
    Committee,
    ChangeOfPace,
    // Auxiliary receiver
    Elite,
    Starter,
    Streamer,
    Blocking,
    Unknown,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Alpha => "ALPHA",
            Tier::Secondary => "SECONDARY",
            Tier::Slot => "SLOT",
            Tier::Rotational => "ROTATIONAL",
            Tier::Depth => "DEPTH",
            Tier::Workhorse => "WORKHORSE",
            Tier::Lead => "LEAD",
            Tier::Committee => "COMMITTEE",
            Tier::ChangeOfPace => "CHANGE_OF_PACE",
            Tier::Elite => "ELITE",
            Tier::Starter => "STARTER",
            Tier::Streamer => "STREAMER",
            Tier::Blocking => "BLOCKING",
            Tier::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tier = match s.to_uppercase().replace(['-', ' '], "_").as_str() {
            "ALPHA" => Tier::Alpha,
            "SECONDARY" => Tier::Secondary,
            "SLOT" => Tier::Slot,
            "ROTATIONAL" => Tier::Rotational,
            "DEPTH" => Tier::Depth,
            "WORKHORSE" => Tier::Workhorse,
            "LEAD" => Tier::Lead,
            "COMMITTEE" => Tier::Committee,
            "CHANGE_OF_PACE" => Tier::ChangeOfPace,
            "ELITE" => Tier::Elite,
            "STARTER" => Tier::Starter,
            "STREAMER" => Tier::Streamer,
            "BLOCKING" => Tier::Blocking,
            "UNKNOWN" => Tier::Unknown,
            _ => {
                return Err(RoleError::InvalidTier {
                    tier: s.to_string(),
                })
            }
        };
        Ok(tier)
    }
}

/// Season-level role classification for one player. Recomputed wholesale on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRoleRecord {
    pub player_id: PlayerId,
    pub season: Season,
    pub role: Role,
    pub games_played: u32,
    pub primary_total: u32,
    pub primary_per_game: f64,
    pub share_avg: Option<f64>,
    pub routes_per_game: Option<f64>,
    pub fantasy_points_per_game: f64,
    pub primary_stddev: Option<f64>,
    pub fantasy_points_stddev: Option<f64>,
    pub deep_rate: Option<f64>,
    pub slot_rate: Option<f64>,
    pub recent_rate: Option<f64>,
    pub scores: SubScores,
    pub role_score: u8,
    pub tier: Tier,
    pub flags: RoleFlags,
}

impl SeasonRoleRecord {
    /// Multi-line, human readable breakdown of how the score was reached.
    pub fn explain(&self) -> String {
        let opt = |v: Option<f64>, digits: usize| match v {
            Some(v) => format!("{:.*}", digits, v),
            None => "-".to_string(),
        };

        let mut lines = vec![
            format!(
                "{} {} season {}: score {} ({})",
                self.role, self.player_id, self.season, self.role_score, self.tier
            ),
            format!(
                "  volume {:>3} | consistency {:>3} | high-value {:>3} | momentum {:>3}",
                self.scores.volume,
                self.scores.consistency,
                self.scores.high_value,
                self.scores.momentum
            ),
            format!(
                "  games {} | volume/g {:.1} | share {} | routes/g {} | pts/g {:.1}",
                self.games_played,
                self.primary_per_game,
                opt(self.share_avg, 3),
                opt(self.routes_per_game, 1),
                self.fantasy_points_per_game
            ),
            format!(
                "  stddev {} | deep rate {} | slot rate {} | recent {}",
                opt(self.primary_stddev, 2),
                opt(self.deep_rate, 3),
                opt(self.slot_rate, 3),
                opt(self.recent_rate, 1)
            ),
        ];

        let flags: Vec<&str> = [
            (self.flags.high_opportunity_low_conversion, "high-opportunity-low-conversion"),
            (self.flags.emerging_role, "emerging-role"),
            (self.flags.single_game_spike, "single-game-spike"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();
        if !flags.is_empty() {
            lines.push(format!("  flags: {}", flags.join(", ")));
        }

        lines.join("\n")
    }
}
