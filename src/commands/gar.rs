//! `gar <id>...`: GAR trend for one or more players.

use crate::{cli::types::PlayerId, render::gar::render_gar_trends, Result};

use super::common::CommandContext;

/// Handle the gar command
pub async fn handle_gar(ctx: &CommandContext, ids: Vec<PlayerId>, as_json: bool) -> Result<()> {
    let (players, series) = tokio::join!(
        ctx.service.get_players(&ids),
        ctx.service.get_gar_series_batch(&ids),
    );
    let series = series?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    let players = players?;
    if players.is_empty() {
        println!("No matching players");
        return Ok(());
    }
    ctx.emit(&render_gar_trends(&players, &series));
    Ok(())
}
