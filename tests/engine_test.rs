//! Integration tests for season role scoring

use usage_roles::{
    engine::{aggregate_season, compute_season_role},
    PlayerId, Role, Season, Tier, Week, WeeklyUsageRow,
};

fn row(player: u64, week: u16) -> WeeklyUsageRow {
    WeeklyUsageRow::new(PlayerId::new(player), Season::new(2024), Week::new(week))
}

/// Ten games with a week 6 bye. Play-by-play fields only cover the first six games.
fn receiver_season() -> Vec<WeeklyUsageRow> {
    let weeks = [1, 2, 3, 4, 5, 7, 8, 9, 10, 11];
    let targets = [16, 13, 8, 10, 20, 13, 1, 10, 12, 14];
    let routes = [26, 24, 20, 22, 28, 25, 12, 22, 26, 29];
    let slot_routes = [5, 5, 4, 4, 6, 5, 2, 4, 5, 6];
    let deep_targets = [2, 2, 1, 1, 3, 1];
    let share = [
        Some(0.30),
        Some(0.33),
        Some(0.28),
        Some(0.31),
        Some(0.38),
        Some(0.34),
        None,
        Some(0.32),
        Some(0.33),
        Some(0.326),
    ];
    let points = [18.5, 14.2, 9.1, 11.0, 24.3, 15.6, 2.1, 12.4, 16.0, 17.8];

    (0..10)
        .map(|i| {
            let mut r = row(1, weeks[i]);
            r.team = Some("KC".to_string());
            r.targets = targets[i];
            r.routes = Some(routes[i]);
            r.slot_routes = Some(slot_routes[i]);
            r.deep_targets = deep_targets.get(i).copied();
            r.share = share[i];
            r.fantasy_points = points[i];
            r
        })
        .collect()
}

#[test]
fn test_receiver_season_record() {
    let record = compute_season_role(Role::WR, &receiver_season()).unwrap();

    assert_eq!(record.player_id, PlayerId::new(1));
    assert_eq!(record.season, Season::new(2024));
    assert_eq!(record.role, Role::WR);
    assert_eq!(record.games_played, 10);
    assert_eq!(record.primary_total, 117);
    assert!((record.primary_per_game - 11.7).abs() < 1e-9);
    assert!((record.share_avg.unwrap() - 0.324).abs() < 1e-9);
    assert!((record.routes_per_game.unwrap() - 23.4).abs() < 1e-9);
    assert!((record.fantasy_points_per_game - 14.1).abs() < 1e-9);
    assert!((record.primary_stddev.unwrap() - 4.7969).abs() < 1e-3);
    assert!((record.deep_rate.unwrap() - 0.125).abs() < 1e-9);
    assert!((record.slot_rate.unwrap() - 46.0 / 234.0).abs() < 1e-9);
    assert!((record.recent_rate.unwrap() - 12.0).abs() < 1e-9);

    assert_eq!(record.scores.volume, 83);
    assert_eq!(record.scores.consistency, 52);
    assert_eq!(record.scores.high_value, 45);
    assert_eq!(record.scores.momentum, 60);
    assert_eq!(record.role_score, 68);
    assert_eq!(record.tier, Tier::Secondary);

    assert!(!record.flags.high_opportunity_low_conversion);
    assert!(!record.flags.emerging_role);
    assert!(!record.flags.single_game_spike);
}

#[test]
fn test_row_order_does_not_matter() {
    let rows = receiver_season();
    let mut reversed = rows.clone();
    reversed.reverse();

    assert_eq!(
        compute_season_role(Role::WR, &rows),
        compute_season_role(Role::WR, &reversed)
    );
}

#[test]
fn test_scoring_is_deterministic() {
    let rows = receiver_season();
    let first = compute_season_role(Role::WR, &rows).unwrap();
    for _ in 0..5 {
        assert_eq!(compute_season_role(Role::WR, &rows).unwrap(), first);
    }
}

#[test]
fn test_no_games_played_yields_no_record() {
    assert!(compute_season_role(Role::WR, &[]).is_none());

    let idle: Vec<WeeklyUsageRow> = (1..=4).map(|w| row(9, w)).collect();
    assert!(compute_season_role(Role::WR, &idle).is_none());
    assert!(aggregate_season(Role::RB, &idle).is_none());
}

#[test]
fn test_deep_rate_uses_only_covered_weeks() {
    let agg = aggregate_season(Role::WR, &receiver_season()).unwrap();

    assert_eq!(agg.deep.events, 10);
    assert_eq!(agg.deep.sample, 80);
    assert_eq!(agg.deep.weeks, 6);
    assert_eq!(agg.slot.sample, 234);
    assert_eq!(agg.slot.weeks, 10);
}

#[test]
fn test_thin_deep_sample_is_neutral() {
    // Only week 5 (3 of 20 targets) reports deep targets; below the minimum sample.
    let rows: Vec<WeeklyUsageRow> = receiver_season()
        .into_iter()
        .enumerate()
        .map(|(i, mut r)| {
            if i != 4 {
                r.deep_targets = None;
            }
            r
        })
        .collect();
    let record = compute_season_role(Role::WR, &rows).unwrap();

    // 0.67 * 50 + 0.33 * 35, not 0.67 * 65 + 0.33 * 35
    assert_eq!(record.scores.high_value, 45);
    assert!((record.deep_rate.unwrap() - 0.15).abs() < 1e-9);
}

#[test]
fn test_all_missing_share_falls_back_to_volume_rate() {
    let rows: Vec<WeeklyUsageRow> = receiver_season()
        .into_iter()
        .map(|mut r| {
            r.share = None;
            r
        })
        .collect();
    let record = compute_season_role(Role::WR, &rows).unwrap();

    assert_eq!(record.share_avg, None);
    // 0.5 * 90 + 0.3 * 90 + 0.2 * 70
    assert_eq!(record.scores.volume, 86);
    // Alpha and Secondary need a share signal; Slot needs a 0.55 slot rate.
    assert_eq!(record.tier, Tier::Rotational);
}

#[test]
fn test_workhorse_back() {
    let rows: Vec<WeeklyUsageRow> = (1..=6)
        .map(|w| {
            let mut r = row(2, w);
            r.carries = 18;
            r.targets = 4;
            r.share = Some(0.65);
            r.routes = Some(18);
            r.fantasy_points = 19.8;
            r
        })
        .collect();
    let record = compute_season_role(Role::RB, &rows).unwrap();

    assert_eq!(record.primary_total, 132);
    assert_eq!(record.scores.volume, 86);
    assert_eq!(record.scores.consistency, 100);
    assert_eq!(record.scores.high_value, 72);
    assert_eq!(record.scores.momentum, 60);
    assert_eq!(record.role_score, 84);
    assert_eq!(record.tier, Tier::Workhorse);
    assert!(!record.flags.emerging_role);
}

#[test]
fn test_emerging_tight_end() {
    let targets = [3, 3, 4, 4, 7, 8, 9];
    let rows: Vec<WeeklyUsageRow> = targets
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let mut r = row(3, i as u16 + 1);
            r.targets = t;
            r.routes = Some(24);
            r.fantasy_points = t as f64 * 1.5;
            r
        })
        .collect();
    let record = compute_season_role(Role::TE, &rows).unwrap();

    assert_eq!(record.scores.volume, 60);
    assert_eq!(record.scores.consistency, 70);
    assert_eq!(record.scores.high_value, 60);
    assert_eq!(record.scores.momentum, 100);
    assert_eq!(record.role_score, 66);
    assert_eq!(record.tier, Tier::Streamer);

    assert!(record.flags.emerging_role);
    assert!(!record.flags.high_opportunity_low_conversion);
    assert!(!record.flags.single_game_spike);
}

#[test]
fn test_route_heavy_low_target_receiver_is_flagged() {
    let rows: Vec<WeeklyUsageRow> = (1..=5)
        .map(|w| {
            let mut r = row(4, w);
            r.targets = 4;
            r.routes = Some(30);
            r.fantasy_points = 6.0;
            r
        })
        .collect();
    let record = compute_season_role(Role::WR, &rows).unwrap();

    assert!(record.flags.high_opportunity_low_conversion);
}

#[test]
fn test_single_game_spike() {
    let mut rows: Vec<WeeklyUsageRow> = (1..=4)
        .map(|w| {
            let mut r = row(5, w);
            r.targets = 6;
            r.fantasy_points = 8.0;
            r
        })
        .collect();
    let mut last = row(5, 5);
    last.targets = 6;
    last.fantasy_points = 31.0;
    rows.push(last);

    let record = compute_season_role(Role::WR, &rows).unwrap();
    assert!(record.flags.single_game_spike);
}

#[test]
fn test_explain_mentions_scores() {
    let record = compute_season_role(Role::WR, &receiver_season()).unwrap();
    let text = record.explain();

    assert!(text.contains("score 68 (SECONDARY)"));
    assert!(text.contains("volume  83"));
}
