//! Hockey position types.

use crate::error::TrackerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hockey player positions as stored in the `stats` table.
///
/// Goalies carry an entirely different stat family from skaters, so most
/// callers only care about [`Position::is_goalie`].
///
/// # Examples
///
/// ```rust
/// use hockey_contracts::Position;
///
/// let g: Position = "g".parse().unwrap();
/// assert!(g.is_goalie());
/// assert_eq!(Position::LW.to_string(), "LW");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Position {
    C,
    #[value(alias = "l")]
    LW,
    #[value(alias = "r")]
    RW,
    D,
    G,
}

impl Position {
    pub fn is_goalie(&self) -> bool {
        matches!(self, Position::G)
    }

    pub fn is_skater(&self) -> bool {
        !self.is_goalie()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::C => "C",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::D => "D",
            Position::G => "G",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(Position::C),
            "LW" | "L" => Ok(Position::LW),
            "RW" | "R" => Ok(Position::RW),
            "D" => Ok(Position::D),
            "G" => Ok(Position::G),
            _ => Err(TrackerError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::C.to_string(), "C");
        assert_eq!(Position::LW.to_string(), "LW");
        assert_eq!(Position::RW.to_string(), "RW");
        assert_eq!(Position::D.to_string(), "D");
        assert_eq!(Position::G.to_string(), "G");
    }

    #[test]
    fn test_position_parse_aliases() {
        assert_eq!("l".parse::<Position>().unwrap(), Position::LW);
        assert_eq!("R".parse::<Position>().unwrap(), Position::RW);
        assert_eq!(" d ".parse::<Position>().unwrap(), Position::D);
        assert!("F".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_goalie_detection() {
        assert!(Position::G.is_goalie());
        for pos in [Position::C, Position::LW, Position::RW, Position::D] {
            assert!(pos.is_skater());
        }
    }
}
