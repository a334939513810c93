//! Filter, sort and runtime-selection types for CLI commands.

use std::fmt;

/// Column the player table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    /// Projected average annual value
    #[default]
    Aav,
    /// Projected contract term in years
    Term,
    Age,
    Name,
    /// GAR in the most recent season
    RecentGar,
    /// Points per game in the most recent season (skaters only)
    PointsPerGame,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Aav => "AAV",
            SortKey::Term => "Term",
            SortKey::Age => "Age",
            SortKey::Name => "Name",
            SortKey::RecentGar => "Recent GAR",
            SortKey::PointsPerGame => "Points/GP",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Which data set answers requests, chosen once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SourceMode {
    /// Query the contracts database, falling back to fixtures on failure
    #[default]
    Live,
    /// Serve the built-in fixture data set without touching the database
    Fixture,
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceMode::Live => "live",
            SourceMode::Fixture => "fixture",
        };
        write!(f, "{}", s)
    }
}

/// How query failures are treated by the data service.
///
/// Connectivity failures always fall back to fixtures. The policy only
/// decides what happens when a statement reached the store and failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FallbackPolicy {
    /// Substitute fixtures for every failure (logged at error level)
    #[default]
    Always,
    /// Surface query failures to the caller
    ConnectivityOnly,
}

/// Column set shown in a season stat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatView {
    #[default]
    Standard,
    Advanced,
}

impl fmt::Display for StatView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatView::Standard => "Standard",
            StatView::Advanced => "Advanced",
        };
        write!(f, "{}", s)
    }
}
