//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{
    ContractType, FallbackPolicy, PlayerId, Position, SortKey, SortOrder, SourceMode, StatView,
    ValueTier,
};

use crate::storage::pool::DEFAULT_POOL_SIZE;

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Database URL (or set `DATABASE_URL`): `sqlite://path`, `file:path` or a plain path.
    #[clap(long, global = true)]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[clap(long, global = true, default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: usize,

    /// Where data comes from for this run.
    #[clap(long, global = true, value_enum, default_value_t = SourceMode::Live)]
    pub source: SourceMode,

    /// Whether failed queries are answered from fixtures or reported.
    #[clap(long, global = true, value_enum, default_value_t = FallbackPolicy::Always)]
    pub fallback: FallbackPolicy,

    /// Print progress details and enable info-level logging.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

/// Filtering and sorting for the player table
#[derive(Debug, Args)]
pub struct PlayerFilters {
    /// Filter by position: C, LW (L), RW (R), D or G.
    #[clap(long, short, value_enum, ignore_case = true)]
    pub position: Option<Position>,

    /// Filter by contract type.
    #[clap(long, value_enum)]
    pub contract_type: Option<ContractType>,

    /// Filter by value tier.
    #[clap(long, value_enum)]
    pub tier: Option<ValueTier>,

    /// Filter by player name (case-insensitive substring).
    #[clap(long, short = 'n')]
    pub name: Option<String>,

    /// Filter by team abbreviation, e.g. `TOR`.
    #[clap(long, short)]
    pub team: Option<String>,

    /// Sort column.
    #[clap(long, short, value_enum, default_value_t = SortKey::Aav)]
    pub sort: SortKey,

    /// Sort direction.
    #[clap(long, value_enum, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,

    /// Show at most this many players.
    #[clap(long, short)]
    pub limit: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List pending free agents with their projected contracts.
    Players {
        #[clap(flatten)]
        filters: PlayerFilters,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Show one player's contract projection, season stats and GAR trend.
    Player {
        id: PlayerId,

        /// Stat table column set.
        #[clap(long, value_enum, default_value_t = StatView::Standard)]
        view: StatView,

        /// Output results as JSON instead of tables.
        #[clap(long)]
        json: bool,
    },

    /// Compare several players side by side.
    Compare {
        #[clap(required = true, num_args = 1..)]
        ids: Vec<PlayerId>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Show the GAR trend for one or more players.
    Gar {
        #[clap(required = true, num_args = 1..)]
        ids: Vec<PlayerId>,

        /// Output the GAR series as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Inspect the raw stats row for a player (troubleshooting missing stats).
    DebugStats {
        id: PlayerId,

        /// Output the full report as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Check that the configured database opens and both tables are readable.
    DbTest {
        /// Output the check result as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Create an empty contracts database with the expected tables.
    InitDb {
        /// Database file to create (defaults to the configured database).
        #[clap(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "hockey-contracts",
    about = "Projected contracts and season stats for pending NHL free agents"
)]
pub struct Cli {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_players_with_filters() {
        let cli = Cli::try_parse_from([
            "hockey-contracts",
            "players",
            "--position",
            "RW",
            "--contract-type",
            "ufa",
            "--tier",
            "fair-deal",
            "--sort",
            "recent-gar",
            "--order",
            "asc",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Players { filters, json } => {
                assert_eq!(filters.position, Some(Position::RW));
                assert_eq!(filters.contract_type, Some(ContractType::UFA));
                assert_eq!(filters.tier, Some(ValueTier::FairDeal));
                assert_eq!(filters.sort, SortKey::RecentGar);
                assert_eq!(filters.order, SortOrder::Asc);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hockey-contracts",
            "compare",
            "1",
            "9",
            "--source",
            "fixture",
            "--fallback",
            "connectivity-only",
            "--pool-size",
            "3",
        ])
        .unwrap();

        assert_eq!(cli.global.source, SourceMode::Fixture);
        assert_eq!(cli.global.fallback, FallbackPolicy::ConnectivityOnly);
        assert_eq!(cli.global.pool_size, 3);
        match cli.command {
            Commands::Compare { ids, json } => {
                assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(9)]);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["hockey-contracts", "player", "7"]).unwrap();
        assert_eq!(cli.global.source, SourceMode::Live);
        assert_eq!(cli.global.fallback, FallbackPolicy::Always);
        assert_eq!(cli.global.pool_size, DEFAULT_POOL_SIZE);
        assert!(cli.global.database_url.is_none());
        match cli.command {
            Commands::Player { id, view, json } => {
                assert_eq!(id, PlayerId::new(7));
                assert_eq!(view, StatView::Standard);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_db_test() {
        let cli = Cli::try_parse_from([
            "hockey-contracts",
            "db-test",
            "--database-url",
            "sqlite:///tmp/contracts.db",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.global.database_url.as_deref(), Some("sqlite:///tmp/contracts.db"));
        assert!(matches!(cli.command, Commands::DbTest { json: true }));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_from(["hockey-contracts", "player", "abc"]).is_err());
        assert!(Cli::try_parse_from(["hockey-contracts", "compare"]).is_err());
        assert!(Cli::try_parse_from(["hockey-contracts", "players", "--position", "F"]).is_err());
    }
}
