//! Integration tests for storage functionality

use usage_roles::{
    engine::compute_season_role,
    storage::{schema::DB_PATH_ENV_VAR, *},
    PlayerId, Role, Season, Tier, Week, WeeklyUsageRow,
};

fn player(id: u64, role: Role, name: &str) -> Player {
    Player {
        player_id: PlayerId::new(id),
        name: name.to_string(),
        role,
        team: Some("DET".to_string()),
    }
}

fn weekly(id: u64, week: u16, targets: u32, points: f64) -> WeeklyUsageRow {
    let mut row = WeeklyUsageRow::new(PlayerId::new(id), Season::new(2024), Week::new(week));
    row.targets = targets;
    row.routes = Some(targets * 3);
    row.fantasy_points = points;
    row
}

#[test]
fn test_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("usage.db");

    {
        let mut db = UsageDatabase::open(path.clone()).unwrap();
        db.upsert_player(&player(10, Role::WR, "Persisted Receiver"))
            .unwrap();
        db.upsert_weekly_rows(&[weekly(10, 1, 7, 11.0), weekly(10, 2, 9, 15.5)])
            .unwrap();
    }

    let db = UsageDatabase::open(path).unwrap();
    let stored = db.get_player(PlayerId::new(10)).unwrap().unwrap();
    assert_eq!(stored.name, "Persisted Receiver");

    let rows = db
        .get_player_season_rows(PlayerId::new(10), Season::new(2024))
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].routes, Some(27));
}

#[test]
fn test_database_path_env_override() {
    std::env::set_var(DB_PATH_ENV_VAR, "/tmp/usage-roles-test/custom.db");
    let path = UsageDatabase::database_path().unwrap();
    std::env::remove_var(DB_PATH_ENV_VAR);

    assert_eq!(path.to_str().unwrap(), "/tmp/usage-roles-test/custom.db");
}

#[test]
fn test_updating_player_keeps_weekly_rows() {
    let mut db = UsageDatabase::new_in_memory().unwrap();
    db.upsert_player(&player(11, Role::TE, "Old Name")).unwrap();
    db.upsert_weekly_row(&weekly(11, 1, 4, 6.0)).unwrap();

    let mut renamed = player(11, Role::TE, "New Name");
    renamed.team = None;
    db.upsert_player(&renamed).unwrap();

    let stored = db.get_player(PlayerId::new(11)).unwrap().unwrap();
    assert_eq!(stored, renamed);
    assert_eq!(db.count_weekly_rows(Season::new(2024)).unwrap(), 1);
}

#[test]
fn test_computed_record_survives_storage() {
    let mut db = UsageDatabase::new_in_memory().unwrap();
    db.upsert_player(&player(12, Role::WR, "Stored Receiver"))
        .unwrap();

    let rows: Vec<WeeklyUsageRow> = (1..=6)
        .map(|w| {
            let mut row = weekly(12, w, 6 + w as u32, 10.0 + w as f64);
            row.share = if w == 3 { None } else { Some(0.25) };
            row.slot_routes = Some(5);
            row
        })
        .collect();
    db.upsert_weekly_rows(&rows).unwrap();

    let loaded = db
        .get_player_season_rows(PlayerId::new(12), Season::new(2024))
        .unwrap();
    assert_eq!(loaded, rows);

    let record = compute_season_role(Role::WR, &loaded).unwrap();
    db.upsert_role_record(&record).unwrap();

    let stored = db
        .get_role_record(PlayerId::new(12), Season::new(2024))
        .unwrap()
        .unwrap();
    assert_eq!(stored, record);
}

#[test]
fn test_ranked_records_serialize_flat() {
    let mut db = UsageDatabase::new_in_memory().unwrap();
    db.upsert_player(&player(13, Role::WR, "Json Receiver"))
        .unwrap();
    let rows: Vec<WeeklyUsageRow> = (1..=4).map(|w| weekly(13, w, 8, 12.0)).collect();
    db.upsert_weekly_rows(&rows).unwrap();
    let record = compute_season_role(Role::WR, &rows).unwrap();
    db.upsert_role_record(&record).unwrap();

    let ranked = db
        .get_role_records(Season::new(2024), Role::WR, None, None)
        .unwrap();
    let json = serde_json::to_value(&ranked).unwrap();

    assert_eq!(json[0]["name"], "Json Receiver");
    assert_eq!(json[0]["player_id"], 13);
    assert_eq!(json[0]["role"], "WR");
    assert_eq!(json[0]["tier"], record.tier.as_str());
    assert_eq!(json[0]["scores"]["volume"], record.scores.volume);
}

#[test]
fn test_tier_filter_with_no_matches() {
    let db = UsageDatabase::new_in_memory().unwrap();
    let records = db
        .get_role_records(Season::new(2024), Role::RB, Some(Tier::Workhorse), Some(5))
        .unwrap();
    assert!(records.is_empty());
}
