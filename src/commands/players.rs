//! `players`: the filterable, sortable player table.

use crate::{
    cli::types::{ContractType, Position, SortKey, SortOrder, ValueTier},
    render::{render_player_table, sort_players, PlayerFilter},
    source::{ContractService, ContractStore},
    storage::Player,
    Result,
};

use super::common::CommandContext;

/// Parameters for the players command
#[derive(Debug, Clone, Default)]
pub struct PlayersParams {
    pub position: Option<Position>,
    pub contract_type: Option<ContractType>,
    pub value_tier: Option<ValueTier>,
    pub name: Option<String>,
    pub team: Option<String>,
    pub sort: SortKey,
    pub order: SortOrder,
    pub limit: Option<usize>,
    pub as_json: bool,
}

impl PlayersParams {
    fn filter(&self) -> PlayerFilter {
        PlayerFilter::default()
            .position_opt(self.position)
            .contract_type_opt(self.contract_type)
            .value_tier_opt(self.value_tier)
            .name_opt(self.name.clone())
            .team_opt(self.team.clone())
    }
}

/// Filtered and sorted players
pub async fn select_players<S: ContractStore>(
    service: &ContractService<S>,
    params: &PlayersParams,
) -> Result<Vec<Player>> {
    let players = service.list_players().await?;
    let mut players = params.filter().apply(players);
    sort_players(&mut players, params.sort, params.order);
    if let Some(limit) = params.limit {
        players.truncate(limit);
    }
    Ok(players)
}

/// Handle the players command
pub async fn handle_players(ctx: &CommandContext, params: PlayersParams) -> Result<()> {
    let players = select_players(&ctx.service, &params).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if ctx.verbose {
        println!(
            "{} players, sorted by {} ({:?})",
            players.len(),
            params.sort,
            params.order
        );
    }
    ctx.emit(&render_player_table(&players));
    Ok(())
}
