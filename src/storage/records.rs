//! Season role record persistence

use super::{models::RankedRoleRecord, queries::now_secs, queries::parse_text, schema::UsageDatabase};
use crate::engine::{RoleFlags, SeasonRoleRecord, SubScores, Tier};
use crate::{PlayerId, Role, Season};
use anyhow::Result;
use rusqlite::{params, Row};

const RECORD_COLUMNS: &str = "r.player_id, r.season, r.role, r.games_played, r.primary_total,
    r.primary_per_game, r.share_avg, r.routes_per_game, r.fantasy_points_per_game,
    r.primary_stddev, r.fantasy_points_stddev, r.deep_rate, r.slot_rate, r.recent_rate,
    r.volume_score, r.consistency_score, r.high_value_score, r.momentum_score,
    r.role_score, r.tier, r.flag_high_opportunity_low_conversion, r.flag_emerging_role,
    r.flag_single_game_spike";

impl UsageDatabase {
    /// Store a record, fully replacing any earlier one for the player-season
    pub fn upsert_role_record(&mut self, record: &SeasonRoleRecord) -> Result<()> {
        let now = now_secs()?;
        self.conn.execute(
            "INSERT OR REPLACE INTO season_roles
             (player_id, season, role, games_played, primary_total, primary_per_game,
              share_avg, routes_per_game, fantasy_points_per_game, primary_stddev,
              fantasy_points_stddev, deep_rate, slot_rate, recent_rate,
              volume_score, consistency_score, high_value_score, momentum_score,
              role_score, tier, flag_high_opportunity_low_conversion, flag_emerging_role,
              flag_single_game_spike, computed_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                record.player_id.as_u64(),
                record.season.as_u16(),
                record.role.as_str(),
                record.games_played,
                record.primary_total,
                record.primary_per_game,
                record.share_avg,
                record.routes_per_game,
                record.fantasy_points_per_game,
                record.primary_stddev,
                record.fantasy_points_stddev,
                record.deep_rate,
                record.slot_rate,
                record.recent_rate,
                record.scores.volume,
                record.scores.consistency,
                record.scores.high_value,
                record.scores.momentum,
                record.role_score,
                record.tier.as_str(),
                record.flags.high_opportunity_low_conversion,
                record.flags.emerging_role,
                record.flags.single_game_spike,
                now
            ],
        )?;
        Ok(())
    }

    /// Drop a stale record. Returns true if one existed.
    pub fn delete_role_record(&mut self, player_id: PlayerId, season: Season) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM season_roles WHERE player_id = ? AND season = ?",
            params![player_id.as_u64(), season.as_u16()],
        )?;
        Ok(rows_affected > 0)
    }

    /// Drop every record of a role and season whose player is not in `keep`.
    /// Returns the number of records removed.
    pub fn delete_role_records_except(
        &mut self,
        season: Season,
        role: Role,
        keep: &[PlayerId],
    ) -> Result<usize> {
        let mut query = "DELETE FROM season_roles WHERE season = ? AND role = ?".to_string();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(season.as_u16()), Box::new(role.as_str())];

        if !keep.is_empty() {
            let placeholders = vec!["?"; keep.len()].join(", ");
            query.push_str(&format!(" AND player_id NOT IN ({placeholders})"));
            for id in keep {
                params.push(Box::new(id.as_u64()));
            }
        }

        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let removed = self.conn.execute(&query, &param_refs[..])?;
        Ok(removed)
    }

    pub fn get_role_record(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> Result<Option<SeasonRoleRecord>> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} FROM season_roles r WHERE r.player_id = ? AND r.season = ?"
        );
        let mut stmt = self.conn.prepare(&query)?;
        match stmt.query_row(params![player_id.as_u64(), season.as_u16()], |row| {
            Self::row_to_record(row)
        }) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Stored records for a role and season, best role score first
    pub fn get_role_records(
        &self,
        season: Season,
        role: Role,
        tier: Option<Tier>,
        limit: Option<u32>,
    ) -> Result<Vec<RankedRoleRecord>> {
        let mut query = format!(
            "SELECT {RECORD_COLUMNS}, p.name, p.team
             FROM season_roles r
             JOIN players p ON p.player_id = r.player_id
             WHERE r.season = ? AND r.role = ?"
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(season.as_u16()), Box::new(role.as_str())];

        if let Some(t) = tier {
            query.push_str(" AND r.tier = ?");
            params.push(Box::new(t.as_str()));
        }

        query.push_str(" ORDER BY r.role_score DESC, r.player_id");

        if let Some(l) = limit {
            query.push_str(" LIMIT ?");
            params.push(Box::new(l));
        }

        let mut stmt = self.conn.prepare(&query)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt.query_map(&param_refs[..], |row| {
            Ok(RankedRoleRecord {
                record: Self::row_to_record(row)?,
                name: row.get(23)?,
                team: row.get(24)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn row_to_record(row: &Row) -> rusqlite::Result<SeasonRoleRecord> {
        Ok(SeasonRoleRecord {
            player_id: PlayerId::new(row.get(0)?),
            season: Season::new(row.get(1)?),
            role: parse_text(row, 2)?,
            games_played: row.get(3)?,
            primary_total: row.get(4)?,
            primary_per_game: row.get(5)?,
            share_avg: row.get(6)?,
            routes_per_game: row.get(7)?,
            fantasy_points_per_game: row.get(8)?,
            primary_stddev: row.get(9)?,
            fantasy_points_stddev: row.get(10)?,
            deep_rate: row.get(11)?,
            slot_rate: row.get(12)?,
            recent_rate: row.get(13)?,
            scores: SubScores {
                volume: row.get(14)?,
                consistency: row.get(15)?,
                high_value: row.get(16)?,
                momentum: row.get(17)?,
            },
            role_score: row.get(18)?,
            tier: parse_text(row, 19)?,
            flags: RoleFlags {
                high_opportunity_low_conversion: row.get(20)?,
                emerging_role: row.get(21)?,
                single_game_spike: row.get(22)?,
            },
        })
    }
}
