//! ID types for players in the contract tracker.

use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player IDs.
///
/// Player IDs key both the `projected_contracts` and `stats` tables, so the
/// same value identifies a player's contract projection and their season
/// statistics.
///
/// # Examples
///
/// ```rust
/// use hockey_contracts::PlayerId;
///
/// let id: PlayerId = "42".parse().unwrap();
/// assert_eq!(id.as_u32(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| TrackerError::InvalidPlayerId {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_parse() {
        assert_eq!("7".parse::<PlayerId>().unwrap(), PlayerId::new(7));
        assert_eq!(" 12 ".parse::<PlayerId>().unwrap(), PlayerId::new(12));
    }

    #[test]
    fn test_player_id_parse_invalid() {
        match "seven".parse::<PlayerId>() {
            Err(TrackerError::InvalidPlayerId { value }) => assert_eq!(value, "seven"),
            other => panic!("Expected InvalidPlayerId, got {:?}", other),
        }
        assert!("-1".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_player_id_ordering() {
        let mut ids = vec![PlayerId::new(5), PlayerId::new(1), PlayerId::new(3)];
        ids.sort();
        assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(3), PlayerId::new(5)]);
    }
}
