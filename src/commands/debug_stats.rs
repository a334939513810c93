//! `debug-stats <id>`: raw view of a player's stats row for
//! troubleshooting missing stats.

use crate::{cli::types::PlayerId, storage::StatsDebugReport, Result};

use super::common::CommandContext;

pub fn render_debug_report(report: &StatsDebugReport) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("Player ID: {}\n", report.player_id));
    out.push_str(&format!(
        "Player exists in database: {}\n",
        if report.player_exists { "Yes" } else { "No" }
    ));
    out.push_str(&format!("Stats returned: {}\n", report.stats.len()));
    if let Some(sample) = report.player_data.first() {
        out.push_str("Raw data sample:\n");
        out.push_str(&serde_json::to_string_pretty(sample)?);
        out.push('\n');
    }
    Ok(out)
}

/// Handle the debug-stats command
pub async fn handle_debug_stats(ctx: &CommandContext, id: PlayerId, as_json: bool) -> Result<()> {
    let report = ctx.service.debug_player_stats(id).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ctx.emit(&render_debug_report(&report)?);
    }
    Ok(())
}
