//! Text rendering of contract records
//!
//! Every function here is a pure function of the records it is given; the
//! renderers never know whether those records came from the live store or
//! from fixtures.

pub mod compare;
pub mod gar;
pub mod players;
pub mod stats;

#[cfg(test)]
mod tests;

pub use compare::render_comparison;
pub use gar::{render_gar_trend, render_gar_trends};
pub use players::{render_player_detail, render_player_table, sort_players, PlayerFilter};
pub use stats::{render_no_stats, render_stat_table};

/// Placeholder for a missing value.
pub const MISSING: &str = "-";

/// Left-aligned text table with columns sized to their widest cell.
#[derive(Debug, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; columns];
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

pub(crate) fn opt_u32(value: Option<u32>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

pub(crate) fn opt_i32(value: Option<i32>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

pub(crate) fn opt_fixed(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{:.*}", decimals, v))
}

/// Millions as `$X.XM`.
pub fn format_aav(aav: f64) -> String {
    format!("${:.1}M", aav)
}
