//! Season stat tables.

use super::{opt_fixed, opt_i32, opt_u32, TextTable};
use crate::cli::types::{PlayerId, StatView};
use crate::storage::derive::format_toi;
use crate::storage::PlayerStat;

/// Marker appended to skater rows missing any of the core counting stats.
pub const INCOMPLETE_MARKER: &str = "Some stats unavailable";

/// Seasons newest first, in the column set chosen by `view` and by
/// whether the player is a goalie.
pub fn render_stat_table(stats: &[PlayerStat], is_goalie: bool, view: StatView) -> String {
    let mut sorted: Vec<&PlayerStat> = stats.iter().collect();
    sorted.sort_by(|a, b| b.season.start_year().cmp(&a.season.start_year()));

    let table = match (is_goalie, view) {
        (false, StatView::Standard) => skater_standard(&sorted),
        (false, StatView::Advanced) => skater_advanced(&sorted),
        (true, StatView::Standard) => goalie_standard(&sorted),
        (true, StatView::Advanced) => goalie_advanced(&sorted),
    };
    table.render()
}

/// Shown instead of a table when a player has no season rows.
pub fn render_no_stats(id: PlayerId) -> String {
    format!(
        "No stats available\n  Run `debug-stats {}` to inspect the raw stats row.\n",
        id
    )
}

fn skater_standard(stats: &[&PlayerStat]) -> TextTable {
    let mut table = TextTable::new([
        "Season", "Team", "GP", "G", "A", "P", "+/-", "PIM", "TOI/GP", "GV", "TK", "",
    ]);
    for stat in stats {
        let flag = if stat.has_missing_skater_stats() {
            INCOMPLETE_MARKER.to_string()
        } else {
            String::new()
        };
        table.push_row(vec![
            stat.season.to_string(),
            stat.team.clone(),
            stat.games_played.to_string(),
            opt_u32(stat.goals),
            opt_u32(stat.assists),
            opt_u32(stat.points_or_derived()),
            opt_i32(stat.plus_minus),
            opt_u32(stat.penalty_minutes),
            format_toi(stat.time_on_ice),
            opt_u32(stat.giveaways),
            opt_u32(stat.takeaways),
            flag,
        ]);
    }
    table
}

fn skater_advanced(stats: &[&PlayerStat]) -> TextTable {
    let mut table = TextTable::new([
        "Season", "Team", "CF%", "iCF", "xG", "ixG", "xG+/-", "GAR", "WAR", "TOI/GP",
    ]);
    for stat in stats {
        table.push_row(vec![
            stat.season.to_string(),
            stat.team.clone(),
            opt_fixed(stat.corsi_for_percentage, 1),
            opt_u32(stat.individual_corsi_for),
            opt_fixed(stat.expected_goals, 1),
            opt_fixed(stat.individual_expected_goals, 1),
            opt_fixed(stat.expected_goals_differential, 1),
            opt_fixed(stat.goals_above_replacement, 1),
            opt_fixed(stat.wins_above_replacement, 1),
            format_toi(stat.time_on_ice),
        ]);
    }
    table
}

fn goalie_standard(stats: &[&PlayerStat]) -> TextTable {
    let mut table = TextTable::new([
        "Season", "Team", "GP", "W", "L", "OTL", "GAA", "SV%", "SO",
    ]);
    for stat in stats {
        table.push_row(vec![
            stat.season.to_string(),
            stat.team.clone(),
            stat.games_played.to_string(),
            opt_u32(stat.wins),
            opt_u32(stat.losses),
            opt_u32(stat.ot_losses),
            opt_fixed(stat.goals_against_average, 2),
            opt_fixed(stat.save_percentage, 3),
            opt_u32(stat.shutouts),
        ]);
    }
    table
}

fn goalie_advanced(stats: &[&PlayerStat]) -> TextTable {
    let mut table = TextTable::new([
        "Season", "Team", "GSAA", "HDSV%", "MDSV%", "LDSV%", "QS%", "GAR", "WAR",
    ]);
    for stat in stats {
        table.push_row(vec![
            stat.season.to_string(),
            stat.team.clone(),
            opt_fixed(stat.goals_saved_above_average, 2),
            opt_fixed(stat.high_danger_save_percentage, 3),
            opt_fixed(stat.medium_danger_save_percentage, 3),
            opt_fixed(stat.low_danger_save_percentage, 3),
            opt_fixed(stat.quality_start_percentage, 3),
            opt_fixed(stat.goals_above_replacement, 1),
            opt_fixed(stat.wins_above_replacement, 1),
        ]);
    }
    table
}
