//! Hockey Contract Tracker Library
//!
//! Projected contracts and season statistics for pending NHL free agents,
//! read from a relational store with a built-in fixture data set used when
//! the store cannot answer.
//!
//! ## Features
//!
//! - **Player table**: filter by position, contract type, value tier, name
//!   and team; sort by AAV, term, age, name, recent GAR or points per game
//! - **Season stats**: standard and advanced views with skater and goalie
//!   column sets
//! - **GAR trends and comparisons** across the 2022-23 to 2024-25 seasons
//! - **Fallback**: connectivity failures are answered from fixtures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hockey_contracts::{
//!     source::{ContractService, DataSource},
//!     storage::StoreConfig,
//!     FallbackPolicy, PlayerId, SourceMode,
//! };
//!
//! # async fn example() -> hockey_contracts::Result<()> {
//! let config = StoreConfig::new("sqlite:///var/lib/contracts.db");
//! let source = DataSource::connect(SourceMode::Live, &config).await;
//! let service = ContractService::new(source, FallbackPolicy::Always);
//!
//! if let Some(player) = service.get_player(PlayerId::new(1)).await? {
//!     println!("{}: {}", player.name, player.value_assessment);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database location once instead of passing `--database-url`:
//! ```bash
//! export DATABASE_URL=sqlite:///var/lib/contracts.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod fixtures;
pub mod render;
pub mod source;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ContractType, FallbackPolicy, PlayerId, Position, Season, SortKey, SortOrder, SourceMode,
    StatView, ValueTier,
};
pub use error::{Result, TrackerError};
pub use storage::{GarData, Player, PlayerStat, StatsDebugReport};

pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
