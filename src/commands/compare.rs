//! `compare <id>...`: selected players side by side.

use serde::Serialize;

use crate::{
    cli::types::PlayerId,
    render::render_comparison,
    source::{ContractService, ContractStore},
    storage::{GarData, Player},
    Result,
};

use super::common::CommandContext;

#[derive(Debug, Serialize)]
pub struct Comparison {
    pub players: Vec<Player>,
    pub gar: Vec<GarData>,
}

/// Players keep the order they were requested in; unknown ids are dropped.
pub async fn load_comparison<S: ContractStore>(
    service: &ContractService<S>,
    ids: &[PlayerId],
) -> Result<Comparison> {
    let (players, gar) = tokio::join!(
        service.get_players(ids),
        service.get_gar_series_batch(ids),
    );
    let mut players = players?;
    players.sort_by_key(|p| ids.iter().position(|id| *id == p.id));

    Ok(Comparison { players, gar: gar? })
}

/// Handle the compare command
pub async fn handle_compare(ctx: &CommandContext, ids: Vec<PlayerId>, as_json: bool) -> Result<()> {
    let comparison = load_comparison(&ctx.service, &ids).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    let missing: Vec<String> = ids
        .iter()
        .filter(|id| !comparison.players.iter().any(|p| p.id == **id))
        .map(|id| id.to_string())
        .collect();
    if !missing.is_empty() {
        println!("Not found: {}", missing.join(", "));
    }

    ctx.emit(&render_comparison(&comparison.players, &comparison.gar));
    Ok(())
}
