//! Import weekly usage rows from a JSON file into the database.
//!
//! File shape:
//! ```json
//! {
//!   "players": [{"player_id": 1, "name": "A. Receiver", "role": "WR", "team": "KC"}],
//!   "rows": [{"player_id": 1, "season": 2024, "week": 1, "targets": 9, "fantasy_points": 14.2}]
//! }
//! ```

use crate::{
    engine::WeeklyUsageRow,
    error::{Result, RoleError},
    storage::{Player, UsageDatabase},
    Season,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};
use tracing::{info, warn};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ImportFile {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub rows: Vec<WeeklyUsageRow>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub players: usize,
    pub rows: usize,
    /// Rows dropped by the season filter or for referencing an unknown player.
    pub skipped_rows: usize,
    /// Weekly rows stored for the filtered season after the import.
    pub season_rows: Option<u32>,
}

/// Parameters for the import command
#[derive(Debug)]
pub struct ImportParams {
    pub file: std::path::PathBuf,
    pub season: Option<Season>,
    pub replace: bool,
    pub as_json: bool,
}

/// Load an import file into the database.
///
/// With `season`, rows for other seasons are ignored; with `replace`, that
/// season's existing rows and records are cleared first.
pub fn import_file(
    db: &mut UsageDatabase,
    path: &Path,
    season: Option<Season>,
    replace: bool,
) -> Result<ImportSummary> {
    let contents = std::fs::read_to_string(path)?;
    let file: ImportFile = serde_json::from_str(&contents)?;
    import_rows(db, file, season, replace)
}

pub fn import_rows(
    db: &mut UsageDatabase,
    file: ImportFile,
    season: Option<Season>,
    replace: bool,
) -> Result<ImportSummary> {
    if replace {
        let season = season.ok_or_else(|| {
            RoleError::InvalidArguments("--replace requires --season".to_string())
        })?;
        info!(%season, "clearing season before import");
        db.clear_season(season)?;
    }

    for player in &file.players {
        db.upsert_player(player)?;
    }

    let mut known: HashSet<u64> = file.players.iter().map(|p| p.player_id.as_u64()).collect();
    let mut rows = Vec::with_capacity(file.rows.len());
    let mut skipped_rows = 0;
    for row in file.rows {
        if season.is_some_and(|s| s != row.season) {
            skipped_rows += 1;
            continue;
        }
        let id = row.player_id.as_u64();
        if !known.contains(&id) {
            if db.get_player(row.player_id)?.is_some() {
                known.insert(id);
            } else {
                warn!(player_id = id, week = %row.week, "skipping row for unknown player");
                skipped_rows += 1;
                continue;
            }
        }
        rows.push(row);
    }

    let written = db.upsert_weekly_rows(&rows)?;
    info!(players = file.players.len(), rows = written, skipped_rows, "import complete");

    let season_rows = match season {
        Some(season) => Some(db.count_weekly_rows(season)?),
        None => None,
    };

    Ok(ImportSummary {
        players: file.players.len(),
        rows: written,
        skipped_rows,
        season_rows,
    })
}

/// Handle the import command
pub fn handle_import(params: ImportParams, db: &mut UsageDatabase) -> Result<()> {
    let summary = import_file(db, &params.file, params.season, params.replace)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Imported {} players and {} weekly rows from {}",
            summary.players,
            summary.rows,
            params.file.display()
        );
        if summary.skipped_rows > 0 {
            println!("Skipped {} rows", summary.skipped_rows);
        }
        if let (Some(season), Some(total)) = (params.season, summary.season_rows) {
            println!("Season {} now holds {} weekly rows", season, total);
        }
    }
    Ok(())
}
