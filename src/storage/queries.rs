//! Player and weekly usage queries

use super::{models::*, schema::UsageDatabase};
use crate::engine::WeeklyUsageRow;
use crate::{PlayerId, Role, Season, Week};
use anyhow::Result;
use rusqlite::{params, types::Type, Row};
use std::time::{SystemTime, UNIX_EPOCH};

/// Parse a TEXT column through `FromStr`, surfacing failures as conversion errors.
pub(crate) fn parse_text<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr<Err = crate::error::RoleError>,
{
    let text: String = row.get(idx)?;
    text.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(crate) fn now_secs() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

/// SQL expression for a role's primary weekly volume over `weekly_usage w`.
fn primary_volume_sql(role: Role) -> &'static str {
    match role {
        Role::WR | Role::TE => "w.targets",
        Role::RB => "w.carries + w.targets",
    }
}

impl UsageDatabase {
    /// Insert or update a player's basic information
    pub fn upsert_player(&mut self, player: &Player) -> Result<()> {
        self.conn.execute(
            "INSERT INTO players (player_id, name, role, team)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(player_id) DO UPDATE SET
                name = excluded.name, role = excluded.role, team = excluded.team",
            params![
                player.player_id.as_u64(),
                player.name,
                player.role.as_str(),
                player.team
            ],
        )?;
        Ok(())
    }

    pub fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let mut stmt = self
            .conn
            .prepare("SELECT player_id, name, role, team FROM players WHERE player_id = ?")?;
        let result = stmt.query_row(params![player_id.as_u64()], Self::row_to_player);
        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert or replace one week of usage for a player
    pub fn upsert_weekly_row(&mut self, row: &WeeklyUsageRow) -> Result<()> {
        let now = now_secs()?;
        self.conn.execute(
            "INSERT OR REPLACE INTO weekly_usage
             (player_id, season, week, team, targets, carries, share, routes,
              fantasy_points, deep_targets, slot_routes, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                row.player_id.as_u64(),
                row.season.as_u16(),
                row.week.as_u16(),
                row.team,
                row.targets,
                row.carries,
                row.share,
                row.routes,
                row.fantasy_points,
                row.deep_targets,
                row.slot_routes,
                now
            ],
        )?;
        Ok(())
    }

    /// Insert many weekly rows in one transaction. Returns the number written.
    pub fn upsert_weekly_rows(&mut self, rows: &[WeeklyUsageRow]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let now = now_secs()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO weekly_usage
                 (player_id, season, week, team, targets, carries, share, routes,
                  fantasy_points, deep_targets, slot_routes, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.player_id.as_u64(),
                    row.season.as_u16(),
                    row.week.as_u16(),
                    row.team,
                    row.targets,
                    row.carries,
                    row.share,
                    row.routes,
                    row.fantasy_points,
                    row.deep_targets,
                    row.slot_routes,
                    now
                ])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    /// All weekly rows for one player-season, ordered by week
    pub fn get_player_season_rows(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> Result<Vec<WeeklyUsageRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, season, week, team, targets, carries, share, routes,
                    fantasy_points, deep_targets, slot_routes
             FROM weekly_usage
             WHERE player_id = ? AND season = ?
             ORDER BY week",
        )?;

        let rows = stmt.query_map(params![player_id.as_u64(), season.as_u16()], |row| {
            Ok(WeeklyUsageRow {
                player_id: PlayerId::new(row.get(0)?),
                season: Season::new(row.get(1)?),
                week: Week::new(row.get(2)?),
                team: row.get(3)?,
                targets: row.get(4)?,
                carries: row.get(5)?,
                share: row.get(6)?,
                routes: row.get(7)?,
                fantasy_points: row.get(8)?,
                deep_targets: row.get(9)?,
                slot_routes: row.get(10)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Players of a role with at least `min_games` games played in the season
    pub fn eligible_players(
        &self,
        role: Role,
        season: Season,
        min_games: u32,
    ) -> Result<Vec<Player>> {
        let query = format!(
            "SELECT p.player_id, p.name, p.role, p.team
             FROM players p
             JOIN weekly_usage w ON p.player_id = w.player_id
             WHERE p.role = ? AND w.season = ?
             GROUP BY p.player_id, p.name, p.role, p.team
             HAVING SUM(CASE WHEN ({primary}) > 0 OR w.fantasy_points > 0 THEN 1 ELSE 0 END) >= ?
             ORDER BY p.player_id",
            primary = primary_volume_sql(role)
        );

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            params![role.as_str(), season.as_u16(), min_games],
            Self::row_to_player,
        )?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Count of weekly rows stored for a season
    pub fn count_weekly_rows(&self, season: Season) -> Result<u32> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM weekly_usage WHERE season = ?",
            params![season.as_u16()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Remove all weekly usage and role records for a season
    pub fn clear_season(&mut self, season: Season) -> Result<()> {
        self.conn.execute(
            "DELETE FROM season_roles WHERE season = ?",
            params![season.as_u16()],
        )?;
        self.conn.execute(
            "DELETE FROM weekly_usage WHERE season = ?",
            params![season.as_u16()],
        )?;
        Ok(())
    }

    pub(crate) fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            player_id: PlayerId::new(row.get(0)?),
            name: row.get(1)?,
            role: parse_text(row, 2)?,
            team: row.get(3)?,
        })
    }
}
