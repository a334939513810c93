//! Player table: filtering, sorting and the per-player summary.

use super::{format_aav, opt_fixed, opt_u32, TextTable, MISSING};
use crate::cli::types::{ContractType, Position, SortKey, SortOrder, ValueTier};
use crate::storage::Player;
use std::cmp::Ordering;

/// Criteria a player must meet to appear in the table. Unset criteria
/// match everything.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    position: Option<Position>,
    contract_type: Option<ContractType>,
    value_tier: Option<ValueTier>,
    name: Option<String>,
    team: Option<String>,
}

impl PlayerFilter {
    pub fn position_opt(mut self, position: Option<Position>) -> Self {
        self.position = position;
        self
    }

    pub fn contract_type_opt(mut self, contract_type: Option<ContractType>) -> Self {
        self.contract_type = contract_type;
        self
    }

    pub fn value_tier_opt(mut self, tier: Option<ValueTier>) -> Self {
        self.value_tier = tier;
        self
    }

    /// Case-insensitive substring of the player name.
    pub fn name_opt(mut self, name: Option<String>) -> Self {
        self.name = name.map(|n| n.trim().to_lowercase()).filter(|n| !n.is_empty());
        self
    }

    /// Team abbreviation, case-insensitive.
    pub fn team_opt(mut self, team: Option<String>) -> Self {
        self.team = team.map(|t| t.trim().to_uppercase()).filter(|t| !t.is_empty());
        self
    }

    pub fn matches(&self, player: &Player) -> bool {
        if let Some(position) = self.position {
            if player.position != Some(position) {
                return false;
            }
        }
        if let Some(contract_type) = self.contract_type {
            if player.contract_type != Some(contract_type) {
                return false;
            }
        }
        if let Some(tier) = self.value_tier {
            if player.value_tier != tier {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !player.name.to_lowercase().contains(name.as_str()) {
                return false;
            }
        }
        if let Some(team) = &self.team {
            if !player.team.eq_ignore_ascii_case(team) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, players: Vec<Player>) -> Vec<Player> {
        players.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Stable sort; players missing the sort value go last in either order.
pub fn sort_players(players: &mut [Player], key: SortKey, order: SortOrder) {
    players.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Aav => Some(a.projected_aav.total_cmp(&b.projected_aav)),
            SortKey::Term => Some(a.projected_term.cmp(&b.projected_term)),
            SortKey::Name => Some(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
            SortKey::Age => compare_present(a.age, b.age, |x, y| x.cmp(&y)),
            SortKey::RecentGar => compare_present(a.recent_gar, b.recent_gar, |x, y| x.total_cmp(&y)),
            SortKey::PointsPerGame => {
                compare_present(a.points_per_game, b.points_per_game, |x, y| x.total_cmp(&y))
            }
        };
        match ordering {
            Some(o) if order == SortOrder::Desc => o.reverse(),
            Some(o) => o,
            None => missing_last(key, a, b),
        }
    });
}

fn compare_present<T: Copy>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Option<Ordering> {
    match (a, b) {
        (Some(x), Some(y)) => Some(cmp(x, y)),
        _ => None,
    }
}

fn missing_last(key: SortKey, a: &Player, b: &Player) -> Ordering {
    let present = |p: &Player| match key {
        SortKey::Age => p.age.is_some(),
        SortKey::RecentGar => p.recent_gar.is_some(),
        SortKey::PointsPerGame => p.points_per_game.is_some(),
        SortKey::Aav | SortKey::Term | SortKey::Name => true,
    };
    // `true` sorts after `false`, so invert to put present values first
    present(b).cmp(&present(a))
}

pub fn render_player_table(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players match the current filters.\n".to_string();
    }

    let mut table = TextTable::new([
        "ID", "Name", "Pos", "Team", "Age", "Type", "AAV", "Term", "Tier", "GAR", "P/GP",
    ]);
    for player in players {
        table.push_row(vec![
            player.id.to_string(),
            player.name.clone(),
            position_cell(player),
            text_or_missing(&player.team),
            opt_u32(player.age),
            player
                .contract_type
                .map_or_else(|| MISSING.to_string(), |c| c.to_string()),
            format_aav(player.projected_aav),
            format!("{} yr", player.projected_term),
            player.value_tier.to_string(),
            opt_fixed(player.recent_gar, 1),
            opt_fixed(player.points_per_game, 2),
        ]);
    }

    let mut out = table.render();
    out.push('\n');
    for player in players {
        out.push_str(&format!("{:>5}  {}\n", player.id.as_u32(), player.value_assessment));
    }
    out
}

/// Contract and recent-performance summary for one player.
pub fn render_player_detail(player: &Player) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({}, {})\n",
        player.name,
        position_cell(player),
        text_or_missing(&player.team)
    ));
    out.push_str(&format!("  Age:            {}\n", opt_u32(player.age)));
    out.push_str(&format!(
        "  Contract type:  {}\n",
        player
            .contract_type
            .map_or_else(|| MISSING.to_string(), |c| c.to_string())
    ));
    out.push_str(&format!(
        "  Projection:     {} x {} years\n",
        format_aav(player.projected_aav),
        player.projected_term
    ));
    out.push_str(&format!("  Value tier:     {}\n", player.value_tier));
    out.push_str(&format!("  Assessment:     {}\n", player.value_assessment));
    if let Some(gar) = player.projected_gar_25_26 {
        out.push_str(&format!("  GAR 2025-26:    {:.1} (projected)\n", gar));
    }
    out.push_str(&format!("  Recent GAR:     {}\n", opt_fixed(player.recent_gar, 1)));

    if player.is_goalie() {
        out.push_str(&format!(
            "  Save %:         {}\n",
            opt_fixed(player.save_percentage, 3)
        ));
        out.push_str(&format!(
            "  GAA:            {}\n",
            opt_fixed(player.goals_against_average, 2)
        ));
    } else {
        out.push_str(&format!(
            "  Points:         {}\n",
            opt_u32(player.recent_production)
        ));
        out.push_str(&format!(
            "  Points/GP:      {}\n",
            opt_fixed(player.points_per_game, 2)
        ));
    }
    out
}

fn position_cell(player: &Player) -> String {
    player
        .position
        .map_or_else(|| MISSING.to_string(), |p| p.to_string())
}

fn text_or_missing(value: &str) -> String {
    if value.is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}
