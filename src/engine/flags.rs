//! Independent boolean diagnostics over the aggregate and sub-scores.

use super::{
    aggregate::SeasonAggregate,
    config::RoleConfig,
    stats::mean,
    types::{RoleFlags, SubScores, Tier},
};

/// Weeks of history the spike detector needs, including the latest week.
pub const SPIKE_MIN_WEEKS: usize = 3;
/// Latest week must beat the prior average by more than this factor.
pub const SPIKE_POINTS_MULTIPLIER: f64 = 2.0;
/// Latest volume must sit within this many units of the prior average.
pub const SPIKE_VOLUME_TOLERANCE: f64 = 1.0;

pub fn evaluate_flags(
    agg: &SeasonAggregate,
    scores: &SubScores,
    tier: Tier,
    config: &RoleConfig,
) -> RoleFlags {
    RoleFlags {
        high_opportunity_low_conversion: high_opportunity_low_conversion(agg, config),
        emerging_role: emerging_role(scores, tier, config),
        single_game_spike: single_game_spike(agg),
    }
}

/// Running plenty of routes without earning the primary volume.
pub fn high_opportunity_low_conversion(agg: &SeasonAggregate, config: &RoleConfig) -> bool {
    let Some(routes) = agg.routes_per_game else {
        return false;
    };
    routes > config.flags.opportunity_above && agg.primary_per_game <= config.flags.conversion_at_most
}

/// Trending up hard from outside the top tier.
pub fn emerging_role(scores: &SubScores, tier: Tier, config: &RoleConfig) -> bool {
    tier != config.top_tier()
        && scores.volume < config.flags.emerging_volume_below
        && scores.momentum >= config.flags.emerging_momentum_at_least
}

/// Latest week's points far above the prior norm on ordinary volume.
pub fn single_game_spike(agg: &SeasonAggregate) -> bool {
    let Some((latest, prior)) = agg.weeks.split_last() else {
        return false;
    };
    if agg.weeks.len() < SPIKE_MIN_WEEKS {
        return false;
    }

    let prior_points: Vec<f64> = prior
        .iter()
        .map(|w| w.fantasy_points)
        .filter(|p| *p > 0.0)
        .collect();
    let prior_volume: Vec<f64> = prior
        .iter()
        .map(|w| w.primary)
        .filter(|v| *v > 0.0)
        .collect();

    match (mean(&prior_points), mean(&prior_volume)) {
        (Some(avg_points), Some(avg_volume)) => {
            latest.fantasy_points > SPIKE_POINTS_MULTIPLIER * avg_points
                && (latest.primary - avg_volume).abs() <= SPIKE_VOLUME_TOLERANCE
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::aggregate::{CoveredRate, WeekLine};
    use crate::Role;

    fn aggregate(weeks: &[(f64, f64)]) -> SeasonAggregate {
        SeasonAggregate {
            games_played: weeks.len() as u32,
            primary_total: 0,
            primary_per_game: 6.0,
            share_avg: None,
            routes_per_game: Some(20.0),
            fantasy_points_total: 0.0,
            fantasy_points_per_game: 0.0,
            primary_stddev: None,
            fantasy_points_stddev: None,
            deep: CoveredRate::default(),
            slot: CoveredRate::default(),
            recent_rate: None,
            weeks: weeks
                .iter()
                .enumerate()
                .map(|(i, (primary, fantasy_points))| WeekLine {
                    week: i as u16 + 1,
                    primary: *primary,
                    fantasy_points: *fantasy_points,
                })
                .collect(),
        }
    }

    fn scores(volume: u8, momentum: u8) -> SubScores {
        SubScores {
            volume,
            consistency: 60,
            high_value: 50,
            momentum,
        }
    }

    #[test]
    fn test_high_opportunity_low_conversion() {
        let config = Role::WR.config();
        let mut agg = aggregate(&[]);
        agg.routes_per_game = Some(28.0);
        agg.primary_per_game = 5.0;
        assert!(high_opportunity_low_conversion(&agg, config));

        agg.primary_per_game = 5.1;
        assert!(!high_opportunity_low_conversion(&agg, config));

        agg.primary_per_game = 4.0;
        agg.routes_per_game = Some(25.0);
        assert!(!high_opportunity_low_conversion(&agg, config));

        agg.routes_per_game = None;
        assert!(!high_opportunity_low_conversion(&agg, config));
    }

    #[test]
    fn test_emerging_role() {
        let config = Role::WR.config();
        assert!(emerging_role(&scores(70, 90), Tier::Rotational, config));
        assert!(emerging_role(&scores(79, 85), Tier::Depth, config));
        assert!(!emerging_role(&scores(80, 90), Tier::Secondary, config));
        assert!(!emerging_role(&scores(70, 84), Tier::Rotational, config));
        assert!(!emerging_role(&scores(70, 100), Tier::Alpha, config));
    }

    #[test]
    fn test_spike_on_flat_volume() {
        // Prior points average 10, volume average 6.
        let agg = aggregate(&[(6.0, 9.0), (6.0, 11.0), (6.5, 21.0)]);
        assert!(single_game_spike(&agg));
    }

    #[test]
    fn test_spike_explained_by_volume_is_not_flagged() {
        let agg = aggregate(&[(6.0, 9.0), (6.0, 11.0), (12.0, 25.0)]);
        assert!(!single_game_spike(&agg));
    }

    #[test]
    fn test_spike_needs_more_than_double() {
        let agg = aggregate(&[(6.0, 9.0), (6.0, 11.0), (6.0, 20.0)]);
        assert!(!single_game_spike(&agg));
    }

    #[test]
    fn test_spike_needs_three_weeks() {
        let agg = aggregate(&[(6.0, 5.0), (6.0, 30.0)]);
        assert!(!single_game_spike(&agg));
        assert!(!single_game_spike(&aggregate(&[])));
    }

    #[test]
    fn test_spike_ignores_zero_prior_weeks() {
        // Zero weeks would halve the prior averages if counted.
        let agg = aggregate(&[(0.0, 0.0), (6.0, 10.0), (0.0, 0.0), (6.0, 10.0), (6.0, 19.0)]);
        assert!(!single_game_spike(&agg));
    }

    #[test]
    fn test_spike_without_prior_production() {
        let agg = aggregate(&[(0.0, 0.0), (0.0, 0.0), (6.0, 30.0)]);
        assert!(!single_game_spike(&agg));
    }

    #[test]
    fn test_flags_are_independent() {
        let config = Role::WR.config();
        let mut agg = aggregate(&[(5.0, 4.0), (5.0, 6.0), (5.0, 15.0)]);
        agg.routes_per_game = Some(30.0);
        agg.primary_per_game = 5.0;

        let flags = evaluate_flags(&agg, &scores(60, 90), Tier::Rotational, config);
        assert_eq!(
            flags,
            RoleFlags {
                high_opportunity_low_conversion: true,
                emerging_role: true,
                single_game_spike: true,
            }
        );
    }
}
