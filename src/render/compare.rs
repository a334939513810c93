//! Side-by-side comparison of several players.

use super::{format_aav, opt_fixed, opt_u32, TextTable, MISSING};
use crate::cli::types::Season;
use crate::storage::{GarData, Player};

/// One column per player, one row per field, then one row per season of
/// GAR taken from `gar`.
pub fn render_comparison(players: &[Player], gar: &[GarData]) -> String {
    if players.is_empty() {
        return "No matching players to compare.\n".to_string();
    }

    let mut headers = vec![String::new()];
    headers.extend(players.iter().map(|p| p.name.clone()));
    let mut table = TextTable::new(headers);

    push_field(&mut table, players, "Position", |p| {
        p.position.map_or_else(|| MISSING.to_string(), |x| x.to_string())
    });
    push_field(&mut table, players, "Team", |p| p.team.clone());
    push_field(&mut table, players, "Age", |p| opt_u32(p.age));
    push_field(&mut table, players, "Contract", |p| {
        p.contract_type
            .map_or_else(|| MISSING.to_string(), |c| c.to_string())
    });
    push_field(&mut table, players, "AAV", |p| format_aav(p.projected_aav));
    push_field(&mut table, players, "Term", |p| format!("{} yr", p.projected_term));
    push_field(&mut table, players, "Tier", |p| p.value_tier.to_string());
    push_field(&mut table, players, "Recent GAR", |p| opt_fixed(p.recent_gar, 1));
    push_field(&mut table, players, "Points/GP", |p| opt_fixed(p.points_per_game, 2));
    push_field(&mut table, players, "SV%", |p| opt_fixed(p.save_percentage, 3));

    for season in Season::ALL {
        let label = format!("GAR {}", season);
        push_field(&mut table, players, &label, |p| {
            let value = gar
                .iter()
                .find(|point| point.player_id == p.id && point.season == season)
                .map(|point| point.gar);
            opt_fixed(value, 1)
        });
    }

    table.render()
}

fn push_field(table: &mut TextTable, players: &[Player], label: &str, value: impl Fn(&Player) -> String) {
    let mut row = vec![label.to_string()];
    row.extend(players.iter().map(value));
    table.push_row(row);
}
