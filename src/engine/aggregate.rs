//! Season aggregation: weekly rows for one player-season in, per-game rates out.

use super::{
    stats::{mean, stddev},
    types::WeeklyUsageRow,
};
use crate::Role;


/// Number of trailing rows (by week order) in the momentum window.
pub const RECENT_WINDOW: usize = 3;

/// A ratio whose numerator and denominator are summed over the same weeks.
///
/// Play-by-play derived counts arrive weeks after the box score, so the
/// denominator only includes weeks where the numerator was reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoveredRate {
    pub events: u32,
    pub sample: u32,
    pub weeks: u32,
}

impl CoveredRate {
    pub fn rate(&self) -> Option<f64> {
        (self.sample > 0).then(|| self.events as f64 / self.sample as f64)
    }

    fn add(&mut self, events: u32, sample: u32) {
        self.events = self.events.saturating_add(events);
        self.sample = self.sample.saturating_add(sample);
        self.weeks += 1;
    }
}

/// Primary volume and fantasy points for one week, in week order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekLine {
    pub week: u16,
    pub primary: f64,
    pub fantasy_points: f64,
}

/// Everything the component scorers need, derived from one player's season.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonAggregate {
    pub games_played: u32,
    pub primary_total: u32,
    pub primary_per_game: f64,
    pub share_avg: Option<f64>,
    pub routes_per_game: Option<f64>,
    pub fantasy_points_total: f64,
    pub fantasy_points_per_game: f64,
    pub primary_stddev: Option<f64>,
    pub fantasy_points_stddev: Option<f64>,
    pub deep: CoveredRate,
    pub slot: CoveredRate,
    pub recent_rate: Option<f64>,
    pub weeks: Vec<WeekLine>,
}

impl SeasonAggregate {
    /// Fantasy points per unit of primary volume; `None` with no opportunities.
    pub fn points_per_opportunity(&self) -> Option<f64> {
        (self.primary_total > 0).then(|| self.fantasy_points_total / self.primary_total as f64)
    }
}

fn played(role: Role, row: &WeeklyUsageRow) -> bool {
    row.primary_volume(role) > 0 || row.fantasy_points > 0.0
}

/// Aggregate one player-season.
///
/// Rows may arrive in any order and may skip weeks. Returns `None` when the
/// player registered no games, so callers never persist a zero-filled record.
pub fn aggregate_season(role: Role, rows: &[WeeklyUsageRow]) -> Option<SeasonAggregate> {
    let mut sorted: Vec<&WeeklyUsageRow> = rows.iter().collect();
    sorted.sort_by_key(|r| r.week);

    let played_rows: Vec<&WeeklyUsageRow> =
        sorted.iter().copied().filter(|r| played(role, r)).collect();
    let games_played = played_rows.len() as u32;
    if games_played == 0 {
        return None;
    }
    let games = games_played as f64;

    let primary_total = played_rows
        .iter()
        .fold(0u32, |total, r| total.saturating_add(r.primary_volume(role)));
    let fantasy_points_total: f64 = played_rows.iter().map(|r| r.fantasy_points).sum();

    let shares: Vec<f64> = sorted.iter().filter_map(|r| r.share).collect();

    let routes: Vec<f64> = played_rows
        .iter()
        .filter_map(|r| r.routes.map(f64::from))
        .collect();

    let positive_volume: Vec<f64> = sorted
        .iter()
        .map(|r| r.primary_volume(role))
        .filter(|v| *v > 0)
        .map(f64::from)
        .collect();
    let played_points: Vec<f64> = played_rows.iter().map(|r| r.fantasy_points).collect();

    let mut deep = CoveredRate::default();
    let mut slot = CoveredRate::default();
    for row in &sorted {
        if let Some(deep_targets) = row.deep_targets {
            deep.add(deep_targets, row.primary_volume(role));
        }
        if let (Some(slot_routes), Some(routes)) = (row.slot_routes, row.routes) {
            slot.add(slot_routes, routes);
        }
    }

    let window_start = sorted.len().saturating_sub(RECENT_WINDOW);
    let recent: Vec<f64> = sorted[window_start..]
        .iter()
        .map(|r| r.primary_volume(role))
        .filter(|v| *v > 0)
        .map(f64::from)
        .collect();

    let weeks = sorted
        .iter()
        .map(|r| WeekLine {
            week: r.week.as_u16(),
            primary: f64::from(r.primary_volume(role)),
            fantasy_points: r.fantasy_points,
        })
        .collect();

    Some(SeasonAggregate {
        games_played,
        primary_total,
        primary_per_game: primary_total as f64 / games,
        share_avg: mean(&shares),
        routes_per_game: mean(&routes),
        fantasy_points_total,
        fantasy_points_per_game: fantasy_points_total / games,
        primary_stddev: stddev(&positive_volume),
        fantasy_points_stddev: stddev(&played_points),
        deep,
        slot,
        recent_rate: mean(&recent),
        weeks,
    })
}
