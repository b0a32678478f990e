//! The four component scorers. Each is a pure function of the season
//! aggregate and the role's configuration, and degrades to a neutral score
//! instead of failing when its inputs are missing.

use super::{
    aggregate::SeasonAggregate,
    config::{
        HighValueConfig, RoleConfig, NEUTRAL_ALIGNMENT, NEUTRAL_CONSISTENCY, NEUTRAL_HIGH_VALUE,
        NEUTRAL_MOMENTUM,
    },
    stats::{clamp, to_score},
    types::SubScores,
};


/// Weighted blend of primary volume, share and secondary volume.
///
/// A missing share or secondary input borrows the primary score.
pub fn volume_score(agg: &SeasonAggregate, config: &RoleConfig) -> f64 {
    let volume = &config.volume;
    let primary = volume.primary.scale(agg.primary_per_game);
    let share = agg
        .share_avg
        .map(|s| volume.share.scale(s))
        .unwrap_or(primary);
    let secondary = agg
        .routes_per_game
        .map(|r| volume.secondary.scale(r))
        .unwrap_or(primary);

    volume.weights.primary * primary
        + volume.weights.share * share
        + volume.weights.secondary * secondary
}

/// Lower week-to-week variance in primary volume scores higher.
pub fn consistency_score(agg: &SeasonAggregate, config: &RoleConfig) -> f64 {
    let Some(sd) = agg.primary_stddev else {
        return NEUTRAL_CONSISTENCY;
    };
    let c = config.consistency;
    let capped = clamp(sd, 0.0, c.ceiling);
    let score = 100.0 - (capped / c.ceiling) * (100.0 - c.floor);
    score.max(c.floor)
}

pub fn high_value_score(agg: &SeasonAggregate, config: &RoleConfig) -> f64 {
    match config.high_value {
        HighValueConfig::Receiving {
            deep,
            alignment,
            deep_weight,
            alignment_weight,
            min_deep_sample,
        } => {
            let deep_score = match agg.deep.rate() {
                Some(rate) if agg.deep.sample >= min_deep_sample => deep.scale(rate),
                _ => NEUTRAL_HIGH_VALUE,
            };
            let alignment_score = agg
                .slot
                .rate()
                .map(|rate| alignment.scale(rate))
                .unwrap_or(NEUTRAL_ALIGNMENT);
            deep_weight * deep_score + alignment_weight * alignment_score
        }
        HighValueConfig::Efficiency {
            points_per_opportunity,
        } => agg
            .points_per_opportunity()
            .map(|ppo| points_per_opportunity.scale(ppo))
            .unwrap_or(NEUTRAL_HIGH_VALUE),
    }
}

/// Recent-window rate against the season per-game rate. Every aggregate has
/// a season rate, so only a missing recent rate falls back to neutral.
pub fn momentum_score(agg: &SeasonAggregate, config: &RoleConfig) -> f64 {
    match agg.recent_rate {
        Some(recent) => config.momentum.scale(recent - agg.primary_per_game),
        None => NEUTRAL_MOMENTUM,
    }
}

/// All four component scores, rounded to integers.
pub fn score_components(agg: &SeasonAggregate, config: &RoleConfig) -> SubScores {
    SubScores {
        volume: to_score(volume_score(agg, config)),
        consistency: to_score(consistency_score(agg, config)),
        high_value: to_score(high_value_score(agg, config)),
        momentum: to_score(momentum_score(agg, config)),
    }
}
