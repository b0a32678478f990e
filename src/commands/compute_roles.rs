//! Batch computation of season role records.
//!
//! Rows are loaded sequentially from the single SQLite connection, scored in
//! parallel (each player-season is independent), then persisted
//! sequentially. A failing player is reported and skipped; it never aborts
//! the rest of the batch.

use crate::{
    engine::{compute_season_role, SeasonRoleRecord, WeeklyUsageRow},
    error::{Result, RoleError},
    storage::{Player, UsageDatabase},
    PlayerId, Role, Season,
};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Default minimum games played for a player to be scored.
pub const DEFAULT_MIN_GAMES: u32 = 4;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub role: Role,
    pub season: Season,
    pub min_games: u32,
    pub dry_run: bool,
    /// Score only this player, regardless of `min_games`.
    pub player: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerFailure {
    pub player_id: PlayerId,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub computed: Vec<SeasonRoleRecord>,
    /// Eligible players whose rows produced no games played.
    pub skipped: Vec<PlayerId>,
    pub failed: Vec<PlayerFailure>,
    pub persisted: usize,
    /// Stored records dropped because their player is no longer eligible.
    pub pruned: usize,
}

/// Reject rows the engine is entitled to assume away: wrong player, wrong
/// season, or the same week twice.
pub fn validate_rows(player_id: PlayerId, season: Season, rows: &[WeeklyUsageRow]) -> Result<()> {
    let invalid = |reason: String| RoleError::InvalidRows {
        player_id: player_id.as_u64(),
        reason,
    };

    let mut weeks = HashSet::new();
    for row in rows {
        if row.player_id != player_id {
            return Err(invalid(format!("row belongs to player {}", row.player_id)));
        }
        if row.season != season {
            return Err(invalid(format!("row belongs to season {}", row.season)));
        }
        if !weeks.insert(row.week) {
            return Err(invalid(format!("duplicate week {}", row.week)));
        }
    }
    Ok(())
}

/// Validate then score one player-season.
pub fn score_player(
    role: Role,
    player_id: PlayerId,
    season: Season,
    rows: &[WeeklyUsageRow],
) -> Result<Option<SeasonRoleRecord>> {
    validate_rows(player_id, season, rows)?;
    Ok(compute_season_role(role, rows))
}

fn select_players(db: &UsageDatabase, options: &BatchOptions) -> Result<Vec<Player>> {
    match options.player {
        Some(player_id) => {
            let player = db
                .get_player(player_id)?
                .ok_or(RoleError::PlayerNotFound {
                    player_id: player_id.as_u64(),
                })?;
            if player.role != options.role {
                return Err(RoleError::InvalidArguments(format!(
                    "player {} is {}, not {}",
                    player_id, player.role, options.role
                )));
            }
            Ok(vec![player])
        }
        None => Ok(db.eligible_players(options.role, options.season, options.min_games)?),
    }
}

/// Run one batch pass for a role and season.
pub fn compute_roles(db: &mut UsageDatabase, options: &BatchOptions) -> Result<BatchReport> {
    let players = select_players(db, options)?;
    info!(
        role = %options.role,
        season = %options.season,
        players = players.len(),
        dry_run = options.dry_run,
        "computing season roles"
    );

    let mut report = BatchReport::default();

    let mut loaded = Vec::with_capacity(players.len());
    for player in &players {
        match db.get_player_season_rows(player.player_id, options.season) {
            Ok(rows) => loaded.push((player.player_id, rows)),
            Err(e) => {
                warn!(player_id = %player.player_id, error = %e, "failed to load weekly rows");
                report.failed.push(PlayerFailure {
                    player_id: player.player_id,
                    error: e.to_string(),
                });
            }
        }
    }

    let results: Vec<(PlayerId, Result<Option<SeasonRoleRecord>>)> = loaded
        .par_iter()
        .map(|(player_id, rows)| {
            (
                *player_id,
                score_player(options.role, *player_id, options.season, rows),
            )
        })
        .collect();

    for (player_id, result) in results {
        match result {
            Ok(Some(record)) => {
                debug!(%player_id, score = record.role_score, tier = %record.tier, "scored");
                if !options.dry_run {
                    if let Err(e) = db.upsert_role_record(&record) {
                        warn!(%player_id, error = %e, "failed to store role record");
                        report.failed.push(PlayerFailure {
                            player_id,
                            error: e.to_string(),
                        });
                        continue;
                    }
                    report.persisted += 1;
                }
                report.computed.push(record);
            }
            Ok(None) => {
                debug!(%player_id, "no games played, no record");
                if !options.dry_run {
                    if let Err(e) = db.delete_role_record(player_id, options.season) {
                        warn!(%player_id, error = %e, "failed to remove stale role record");
                    }
                }
                report.skipped.push(player_id);
            }
            Err(e) => {
                warn!(%player_id, error = %e, "failed to score player");
                report.failed.push(PlayerFailure {
                    player_id,
                    error: e.to_string(),
                });
            }
        }
    }

    if !options.dry_run && options.player.is_none() {
        let eligible: Vec<PlayerId> = players.iter().map(|p| p.player_id).collect();
        match db.delete_role_records_except(options.season, options.role, &eligible) {
            Ok(pruned) => {
                if pruned > 0 {
                    debug!(pruned, "removed records for players no longer eligible");
                }
                report.pruned = pruned;
            }
            Err(e) => warn!(error = %e, "failed to prune stale role records"),
        }
    }

    report
        .computed
        .sort_by(|a, b| b.role_score.cmp(&a.role_score).then(a.player_id.cmp(&b.player_id)));

    info!(
        computed = report.computed.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        persisted = report.persisted,
        pruned = report.pruned,
        "batch complete"
    );
    Ok(report)
}

/// Parameters for the compute command
#[derive(Debug)]
pub struct ComputeParams {
    pub options: BatchOptions,
    pub as_json: bool,
    pub verbose: bool,
}

/// Handle the compute command
pub fn handle_compute_roles(params: ComputeParams, db: &mut UsageDatabase) -> Result<()> {
    let report = compute_roles(db, &params.options)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let options = &params.options;
    println!(
        "{} roles for season {}{}",
        options.role,
        options.season,
        if options.dry_run { " (dry run)" } else { "" }
    );

    for record in &report.computed {
        if params.verbose {
            println!("{}\n", record.explain());
        } else {
            println!(
                "{:>10}  {:>3}  {:<15} vol {:>3}  con {:>3}  hv {:>3}  mom {:>3}",
                record.player_id.as_u64(),
                record.role_score,
                record.tier.as_str(),
                record.scores.volume,
                record.scores.consistency,
                record.scores.high_value,
                record.scores.momentum
            );
        }
    }

    for failure in &report.failed {
        println!("✗ {}: {}", failure.player_id, failure.error);
    }

    println!(
        "\n✓ {} computed, {} skipped, {} failed, {} stored, {} pruned",
        report.computed.len(),
        report.skipped.len(),
        report.failed.len(),
        report.persisted,
        report.pruned
    );
    Ok(())
}
