//! `player <id>`: contract summary, season stats and GAR trend.

use serde::Serialize;

use crate::{
    cli::types::{PlayerId, StatView},
    render::{render_gar_trend, render_no_stats, render_player_detail, render_stat_table},
    source::{ContractService, ContractStore},
    storage::{GarData, Player, PlayerStat},
    Result,
};

use super::common::CommandContext;

/// Everything shown for one player
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerReport {
    pub player: Player,
    pub season_stats: Vec<PlayerStat>,
    pub gar: Vec<GarData>,
}

/// Fetch the player, their season stats and GAR series concurrently.
/// `None` when the player does not exist.
pub async fn load_player_report<S: ContractStore>(
    service: &ContractService<S>,
    id: PlayerId,
) -> Result<Option<PlayerReport>> {
    let (player, season_stats, gar) = tokio::join!(
        service.get_player(id),
        service.get_season_stats(id),
        service.get_gar_series(id),
    );

    let Some(player) = player? else {
        return Ok(None);
    };
    Ok(Some(PlayerReport {
        player,
        season_stats: season_stats?,
        gar: gar?,
    }))
}

pub fn render_player_report(report: &PlayerReport, view: StatView) -> String {
    let mut out = render_player_detail(&report.player);
    out.push('\n');

    out.push_str(&format!("Season stats ({})\n", view));
    if report.season_stats.is_empty() {
        out.push_str(&render_no_stats(report.player.id));
    } else {
        out.push_str(&render_stat_table(
            &report.season_stats,
            report.player.is_goalie(),
            view,
        ));
    }
    out.push('\n');

    out.push_str("GAR trend\n");
    out.push_str(&render_gar_trend(&report.gar));
    out
}

/// Output for an id with no player: `null` for JSON consumers, a short
/// notice otherwise.
pub fn render_missing_player(id: PlayerId, as_json: bool) -> String {
    if as_json {
        serde_json::Value::Null.to_string()
    } else {
        format!("No player with id {}", id)
    }
}

/// Handle the player command
pub async fn handle_player(
    ctx: &CommandContext,
    id: PlayerId,
    view: StatView,
    as_json: bool,
) -> Result<()> {
    let Some(report) = load_player_report(&ctx.service, id).await? else {
        println!("{}", render_missing_player(id, as_json));
        return Ok(());
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ctx.emit(&render_player_report(&report, view));
    }
    Ok(())
}
