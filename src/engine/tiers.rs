//! Tier classification: an ordered cascade of threshold rules, first match wins.

use super::types::Tier;

/// Signals a tier rule may test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierSignals {
    pub volume: u8,
    pub composite: u8,
    pub share: Option<f64>,
    pub slot_rate: Option<f64>,
}

/// One branch of a tier cascade. Every floor that is set must be met (`>=`);
/// a floor on a signal the player lacks fails the rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRule {
    pub tier: Tier,
    pub min_volume: Option<u8>,
    pub min_composite: Option<u8>,
    pub min_share: Option<f64>,
    pub min_slot_rate: Option<f64>,
}

impl TierRule {
    pub const fn new(tier: Tier) -> Self {
        Self {
            tier,
            min_volume: None,
            min_composite: None,
            min_share: None,
            min_slot_rate: None,
        }
    }

    pub const fn volume(mut self, floor: u8) -> Self {
        self.min_volume = Some(floor);
        self
    }

    pub const fn composite(mut self, floor: u8) -> Self {
        self.min_composite = Some(floor);
        self
    }

    pub const fn share(mut self, floor: f64) -> Self {
        self.min_share = Some(floor);
        self
    }

    pub const fn slot_rate(mut self, floor: f64) -> Self {
        self.min_slot_rate = Some(floor);
        self
    }

    pub fn matches(&self, signals: &TierSignals) -> bool {
        fn meets_f64(floor: Option<f64>, value: Option<f64>) -> bool {
            match (floor, value) {
                (None, _) => true,
                (Some(floor), Some(value)) => value >= floor,
                (Some(_), None) => false,
            }
        }

        self.min_volume.map_or(true, |f| signals.volume >= f)
            && self.min_composite.map_or(true, |f| signals.composite >= f)
            && meets_f64(self.min_share, signals.share)
            && meets_f64(self.min_slot_rate, signals.slot_rate)
    }
}

/// Walk the cascade top-down; nothing matching lands in [`Tier::Unknown`].
pub fn classify(rules: &[TierRule], signals: &TierSignals) -> Tier {
    rules
        .iter()
        .find(|rule| rule.matches(signals))
        .map(|rule| rule.tier)
        .unwrap_or(Tier::Unknown)
}
