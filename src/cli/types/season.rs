//! Season labels supported by the `stats` table.

use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three seasons carried as suffixed columns in `stats`.
///
/// Serialized as its `"YYYY-YY"` label, e.g. `"2023-24"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "2022-23")]
    S2022_23,
    #[serde(rename = "2023-24")]
    S2023_24,
    #[serde(rename = "2024-25")]
    S2024_25,
}

impl Season {
    /// All supported seasons, oldest first.
    pub const ALL: [Season; 3] = [Season::S2022_23, Season::S2023_24, Season::S2024_25];

    /// The season whose stats feed the "recent" player fields.
    pub const LATEST: Season = Season::S2024_25;

    pub fn label(&self) -> &'static str {
        match self {
            Season::S2022_23 => "2022-23",
            Season::S2023_24 => "2023-24",
            Season::S2024_25 => "2024-25",
        }
    }

    /// Column name suffix used by the `stats` table (`goals_23_24`, ...).
    pub fn column_suffix(&self) -> &'static str {
        match self {
            Season::S2022_23 => "22_23",
            Season::S2023_24 => "23_24",
            Season::S2024_25 => "24_25",
        }
    }

    pub fn start_year(&self) -> u16 {
        match self {
            Season::S2022_23 => 2022,
            Season::S2023_24 => 2023,
            Season::S2024_25 => 2024,
        }
    }

    /// Build a season-suffixed column name.
    pub fn column(&self, stat: &str) -> String {
        format!("{}_{}", stat, self.column_suffix())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Season {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Season::ALL
            .into_iter()
            .find(|season| season.label() == trimmed || season.column_suffix() == trimmed)
            .ok_or_else(|| TrackerError::InvalidSeason {
                season: s.to_string(),
            })
    }
}
