//! List stored season role records.

use crate::{
    engine::Tier,
    error::Result,
    storage::{RankedRoleRecord, UsageDatabase},
    Role, Season,
};

/// Parameters for the show command
#[derive(Debug)]
pub struct ShowParams {
    pub role: Role,
    pub season: Season,
    pub tier: Option<Tier>,
    pub limit: Option<u32>,
    pub as_json: bool,
}

/// Stored records for the requested role and season, best first.
pub fn load_role_records(db: &UsageDatabase, params: &ShowParams) -> Result<Vec<RankedRoleRecord>> {
    Ok(db.get_role_records(params.season, params.role, params.tier, params.limit)?)
}

fn format_line(rank: usize, ranked: &RankedRoleRecord) -> String {
    let record = &ranked.record;
    let mut flags = Vec::new();
    if record.flags.high_opportunity_low_conversion {
        flags.push("low-conversion");
    }
    if record.flags.emerging_role {
        flags.push("emerging");
    }
    if record.flags.single_game_spike {
        flags.push("spike");
    }

    format!(
        "{:>3}. {:<24} {:<4} {:>3}  {:<15} {}",
        rank,
        ranked.name,
        ranked.team.as_deref().unwrap_or("-"),
        record.role_score,
        record.tier.as_str(),
        flags.join(",")
    )
    .trim_end()
    .to_string()
}

/// Handle the show command
pub fn handle_show_roles(params: ShowParams, db: &UsageDatabase) -> Result<()> {
    let records = load_role_records(db, &params)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!(
            "No {} role records stored for season {}. Run `usage-roles compute` first.",
            params.role, params.season
        );
        return Ok(());
    }

    println!("{} roles, season {}", params.role, params.season);
    for (i, ranked) in records.iter().enumerate() {
        println!("{}", format_line(i + 1, ranked));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{RoleFlags, SeasonRoleRecord, SubScores},
        PlayerId,
    };

    fn ranked(flags: RoleFlags) -> RankedRoleRecord {
        RankedRoleRecord {
            name: "A. Receiver".to_string(),
            team: None,
            record: SeasonRoleRecord {
                player_id: PlayerId::new(1),
                season: Season::new(2024),
                role: Role::WR,
                games_played: 10,
                primary_total: 117,
                primary_per_game: 11.7,
                share_avg: Some(0.324),
                routes_per_game: Some(23.4),
                fantasy_points_per_game: 14.1,
                primary_stddev: Some(4.8),
                fantasy_points_stddev: Some(5.9),
                deep_rate: Some(0.125),
                slot_rate: Some(0.197),
                recent_rate: Some(12.0),
                scores: SubScores {
                    volume: 83,
                    consistency: 52,
                    high_value: 45,
                    momentum: 60,
                },
                role_score: 68,
                tier: Tier::Secondary,
                flags,
            },
        }
    }

    #[test]
    fn test_format_line_without_flags() {
        let line = format_line(1, &ranked(RoleFlags::default()));
        assert!(line.starts_with("  1. A. Receiver"));
        assert!(line.contains(" -  "));
        assert!(line.ends_with("SECONDARY"));
    }

    #[test]
    fn test_format_line_lists_flags() {
        let flags = RoleFlags {
            high_opportunity_low_conversion: true,
            emerging_role: false,
            single_game_spike: true,
        };
        let line = format_line(2, &ranked(flags));
        assert!(line.ends_with("low-conversion,spike"));
    }

    #[test]
    fn test_load_role_records_empty_database() {
        let db = UsageDatabase::new_in_memory().unwrap();
        let params = ShowParams {
            role: Role::WR,
            season: Season::new(2024),
            tier: None,
            limit: None,
            as_json: false,
        };
        assert!(load_role_records(&db, &params).unwrap().is_empty());
    }
}
