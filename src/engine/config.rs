//! Per-role tuning: breakpoint tables, weights, tier cascades and flag thresholds.
//!
//! The three roles share one pipeline; everything that differs between them
//! lives in a `RoleConfig` constant selected by [`Role::config`].

use super::{
    breakpoints::{band, Breakpoints},
    tiers::TierRule,
    types::Tier,
};
use crate::Role;

/// Consistency score when fewer than two volume weeks exist.
pub const NEUTRAL_CONSISTENCY: f64 = 60.0;
/// High-value score when its ratio is undefined or the sample is too thin.
pub const NEUTRAL_HIGH_VALUE: f64 = 50.0;
/// Alignment score when no week reports an alignment split.
pub const NEUTRAL_ALIGNMENT: f64 = 50.0;
/// Momentum score when either the recent or the season rate is missing.
pub const NEUTRAL_MOMENTUM: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeWeights {
    pub primary: f64,
    pub share: f64,
    pub secondary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeConfig {
    pub primary: Breakpoints,
    pub share: Breakpoints,
    pub secondary: Breakpoints,
    pub weights: VolumeWeights,
}

/// Linear map from stddev 0 (score 100) down to `ceiling` (score `floor`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyConfig {
    pub ceiling: f64,
    pub floor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HighValueConfig {
    /// Deep-target rate blended with slot alignment.
    Receiving {
        deep: Breakpoints,
        alignment: Breakpoints,
        deep_weight: f64,
        alignment_weight: f64,
        min_deep_sample: u32,
    },
    /// Fantasy points per unit of primary volume.
    Efficiency { points_per_opportunity: Breakpoints },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeWeights {
    pub volume: f64,
    pub consistency: f64,
    pub high_value: f64,
    pub momentum: f64,
}

impl CompositeWeights {
    pub fn total(&self) -> f64 {
        self.volume + self.consistency + self.high_value + self.momentum
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlagConfig {
    /// Secondary volume per game must exceed this...
    pub opportunity_above: f64,
    /// ...while primary volume per game stays at or below this.
    pub conversion_at_most: f64,
    pub emerging_volume_below: u8,
    pub emerging_momentum_at_least: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleConfig {
    pub role: Role,
    pub volume: VolumeConfig,
    pub consistency: ConsistencyConfig,
    pub high_value: HighValueConfig,
    /// Keyed on recent rate minus season rate.
    pub momentum: Breakpoints,
    pub composite: CompositeWeights,
    pub tiers: &'static [TierRule],
    pub flags: FlagConfig,
}

impl RoleConfig {
    /// Tier the emerging-role flag treats as already arrived.
    pub fn top_tier(&self) -> Tier {
        self.tiers.first().map(|r| r.tier).unwrap_or(Tier::Unknown)
    }

    /// Every breakpoint table this role evaluates.
    pub fn tables(&self) -> Vec<(&'static str, Breakpoints)> {
        let mut tables = vec![
            ("primary", self.volume.primary),
            ("share", self.volume.share),
            ("secondary", self.volume.secondary),
            ("momentum", self.momentum),
        ];
        match self.high_value {
            HighValueConfig::Receiving {
                deep, alignment, ..
            } => {
                tables.push(("deep", deep));
                tables.push(("alignment", alignment));
            }
            HighValueConfig::Efficiency {
                points_per_opportunity,
            } => tables.push(("points_per_opportunity", points_per_opportunity)),
        }
        tables
    }
}

impl Role {
    pub fn config(&self) -> &'static RoleConfig {
        match self {
            Role::WR => &RECEIVER,
            Role::RB => &BALL_CARRIER,
            Role::TE => &AUXILIARY_RECEIVER,
        }
    }
}

pub static RECEIVER: RoleConfig = RoleConfig {
    role: Role::WR,
    volume: VolumeConfig {
        // targets per game
        primary: Breakpoints {
            bands: &[
                band(10.0, 90.0),
                band(8.5, 80.0),
                band(7.0, 70.0),
                band(5.5, 55.0),
                band(4.0, 40.0),
            ],
            floor: 25.0,
        },
        // target share
        share: Breakpoints {
            bands: &[
                band(0.35, 95.0),
                band(0.30, 80.0),
                band(0.25, 70.0),
                band(0.20, 55.0),
                band(0.15, 40.0),
            ],
            floor: 25.0,
        },
        // routes per game
        secondary: Breakpoints {
            bands: &[
                band(35.0, 95.0),
                band(30.0, 85.0),
                band(25.0, 78.0),
                band(20.0, 70.0),
                band(15.0, 55.0),
                band(10.0, 40.0),
            ],
            floor: 25.0,
        },
        weights: VolumeWeights {
            primary: 0.50,
            share: 0.30,
            secondary: 0.20,
        },
    },
    consistency: ConsistencyConfig {
        ceiling: 6.0,
        floor: 40.0,
    },
    high_value: HighValueConfig::Receiving {
        deep: Breakpoints {
            bands: &[
                band(0.25, 95.0),
                band(0.20, 80.0),
                band(0.15, 65.0),
                band(0.10, 50.0),
                band(0.05, 35.0),
            ],
            floor: 20.0,
        },
        alignment: Breakpoints {
            bands: &[
                band(0.60, 80.0),
                band(0.45, 65.0),
                band(0.30, 50.0),
                band(0.15, 35.0),
            ],
            floor: 25.0,
        },
        deep_weight: 0.67,
        alignment_weight: 0.33,
        min_deep_sample: 30,
    },
    momentum: Breakpoints {
        bands: &[
            band(3.0, 100.0),
            band(2.0, 90.0),
            band(1.0, 75.0),
            band(0.0, 60.0),
            band(-1.0, 50.0),
            band(-2.0, 35.0),
        ],
        floor: 25.0,
    },
    composite: CompositeWeights {
        volume: 0.55,
        consistency: 0.15,
        high_value: 0.22,
        momentum: 0.08,
    },
    tiers: &[
        TierRule::new(Tier::Alpha).volume(90).share(0.27),
        TierRule::new(Tier::Secondary).volume(80).share(0.22),
        TierRule::new(Tier::Slot).slot_rate(0.55).volume(65),
        TierRule::new(Tier::Rotational).volume(60),
        TierRule::new(Tier::Depth).volume(40),
    ],
    flags: FlagConfig {
        opportunity_above: 25.0,
        conversion_at_most: 5.0,
        emerging_volume_below: 80,
        emerging_momentum_at_least: 85,
    },
};

pub static BALL_CARRIER: RoleConfig = RoleConfig {
    role: Role::RB,
    volume: VolumeConfig {
        // carries + targets per game
        primary: Breakpoints {
            bands: &[
                band(22.0, 95.0),
                band(18.0, 85.0),
                band(15.0, 72.0),
                band(12.0, 60.0),
                band(9.0, 45.0),
                band(6.0, 30.0),
            ],
            floor: 15.0,
        },
        // backfield opportunity share
        share: Breakpoints {
            bands: &[
                band(0.70, 95.0),
                band(0.55, 85.0),
                band(0.45, 72.0),
                band(0.35, 60.0),
                band(0.25, 45.0),
            ],
            floor: 25.0,
        },
        secondary: Breakpoints {
            bands: &[
                band(25.0, 90.0),
                band(20.0, 78.0),
                band(15.0, 65.0),
                band(10.0, 50.0),
                band(5.0, 35.0),
            ],
            floor: 20.0,
        },
        weights: VolumeWeights {
            primary: 0.50,
            share: 0.30,
            secondary: 0.20,
        },
    },
    consistency: ConsistencyConfig {
        ceiling: 7.0,
        floor: 45.0,
    },
    high_value: HighValueConfig::Efficiency {
        points_per_opportunity: Breakpoints {
            bands: &[
                band(1.20, 95.0),
                band(1.00, 85.0),
                band(0.85, 72.0),
                band(0.70, 60.0),
                band(0.55, 45.0),
            ],
            floor: 30.0,
        },
    },
    momentum: Breakpoints {
        bands: &[
            band(4.0, 100.0),
            band(2.0, 85.0),
            band(0.5, 70.0),
            band(-0.5, 60.0),
            band(-2.0, 45.0),
            band(-4.0, 30.0),
        ],
        floor: 20.0,
    },
    composite: CompositeWeights {
        volume: 0.50,
        consistency: 0.20,
        high_value: 0.22,
        momentum: 0.08,
    },
    tiers: &[
        TierRule::new(Tier::Workhorse).volume(85).share(0.60),
        TierRule::new(Tier::Lead).volume(72).share(0.45),
        TierRule::new(Tier::Committee).composite(55),
        TierRule::new(Tier::ChangeOfPace).composite(40),
    ],
    flags: FlagConfig {
        opportunity_above: 15.0,
        conversion_at_most: 10.0,
        emerging_volume_below: 80,
        emerging_momentum_at_least: 85,
    },
};

pub static AUXILIARY_RECEIVER: RoleConfig = RoleConfig {
    role: Role::TE,
    volume: VolumeConfig {
        primary: Breakpoints {
            bands: &[
                band(9.0, 95.0),
                band(7.5, 85.0),
                band(6.0, 72.0),
                band(4.5, 58.0),
                band(3.0, 42.0),
            ],
            floor: 25.0,
        },
        share: Breakpoints {
            bands: &[
                band(0.25, 95.0),
                band(0.20, 82.0),
                band(0.15, 68.0),
                band(0.10, 52.0),
            ],
            floor: 30.0,
        },
        secondary: Breakpoints {
            bands: &[
                band(32.0, 92.0),
                band(27.0, 80.0),
                band(22.0, 68.0),
                band(16.0, 52.0),
                band(10.0, 38.0),
            ],
            floor: 25.0,
        },
        weights: VolumeWeights {
            primary: 0.50,
            share: 0.30,
            secondary: 0.20,
        },
    },
    consistency: ConsistencyConfig {
        ceiling: 4.5,
        floor: 42.0,
    },
    high_value: HighValueConfig::Efficiency {
        // fantasy points per target
        points_per_opportunity: Breakpoints {
            bands: &[
                band(2.2, 95.0),
                band(1.9, 85.0),
                band(1.6, 72.0),
                band(1.3, 60.0),
                band(1.0, 45.0),
            ],
            floor: 30.0,
        },
    },
    momentum: Breakpoints {
        bands: &[
            band(2.5, 100.0),
            band(1.5, 88.0),
            band(0.5, 72.0),
            band(-0.5, 58.0),
            band(-1.5, 42.0),
            band(-2.5, 28.0),
        ],
        floor: 20.0,
    },
    composite: CompositeWeights {
        volume: 0.45,
        consistency: 0.25,
        high_value: 0.22,
        momentum: 0.08,
    },
    tiers: &[
        TierRule::new(Tier::Elite).volume(85).share(0.22),
        TierRule::new(Tier::Starter).volume(70).share(0.16),
        TierRule::new(Tier::Streamer).volume(55),
        TierRule::new(Tier::Blocking).volume(35),
    ],
    flags: FlagConfig {
        opportunity_above: 22.0,
        conversion_at_most: 4.0,
        emerging_volume_below: 80,
        emerging_momentum_at_least: 85,
    },
};
