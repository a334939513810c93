//! GAR trend chart rendered as signed horizontal bars.

use crate::storage::{GarData, Player};

/// Characters on each side of the zero axis for the largest value.
pub const BAR_WIDTH: usize = 20;

/// One row per season. Bars extend left of the axis for negative GAR and
/// right for positive GAR, scaled to the largest magnitude in `series`.
pub fn render_gar_trend(series: &[GarData]) -> String {
    if series.is_empty() {
        return "No GAR data available\n".to_string();
    }

    let max = series
        .iter()
        .map(|point| point.gar.abs())
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for point in series {
        let len = bar_len(point.gar, max);
        let (left, right) = if point.gar < 0.0 {
            ("#".repeat(len), String::new())
        } else {
            (String::new(), "#".repeat(len))
        };
        out.push_str(&format!(
            "{}  {:>6.1}  {:>width$}|{}\n",
            point.season,
            point.gar,
            left,
            right,
            width = BAR_WIDTH
        ));
    }
    out
}

fn bar_len(gar: f64, max: f64) -> usize {
    if max <= 0.0 {
        return 0;
    }
    ((gar.abs() / max) * BAR_WIDTH as f64).round() as usize
}

/// Trend charts for several players from one batched series.
pub fn render_gar_trends(players: &[Player], series: &[GarData]) -> String {
    let mut out = String::new();
    for player in players {
        let points: Vec<GarData> = series
            .iter()
            .filter(|point| point.player_id == player.id)
            .cloned()
            .collect();
        out.push_str(&format!("{} (#{})\n", player.name, player.id));
        out.push_str(&render_gar_trend(&points));
        out.push('\n');
    }
    out
}
