//! Data sources for contract records
//!
//! Both the SQL-backed [`LiveStore`] and the built-in [`FixtureStore`]
//! implement [`ContractStore`]. Which one serves a process is decided once
//! at start-up by [`DataSource::connect`]; [`ContractService`] then layers
//! the fallback policy on top.

pub mod service;

#[cfg(test)]
mod tests;

use crate::cli::types::{PlayerId, SourceMode};
use crate::error::Result;
use crate::fixtures::FixtureStore;
use crate::storage::{ConnectionPool, GarData, LiveStore, Player, PlayerStat, StatsDebugReport, StoreConfig};
use std::fmt;
use std::future::Future;
use tracing::{info, warn};

pub use service::ContractService;

/// Which data set produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Live,
    Fixture,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Provenance::Live => "live database",
            Provenance::Fixture => "built-in sample data",
        };
        write!(f, "{}", s)
    }
}

/// Read operations every contract data source provides.
pub trait ContractStore {
    fn provenance(&self) -> Provenance;

    /// All players, highest projected AAV first.
    fn list_players(&self) -> impl Future<Output = Result<Vec<Player>>> + Send;

    /// `None` means no such player, not a failure.
    fn get_player(&self, id: PlayerId) -> impl Future<Output = Result<Option<Player>>> + Send;

    /// Unknown ids are omitted from the result.
    fn get_players(&self, ids: &[PlayerId]) -> impl Future<Output = Result<Vec<Player>>> + Send;

    fn get_gar_series(&self, id: PlayerId) -> impl Future<Output = Result<Vec<GarData>>> + Send;

    /// Ordered by player id, then season.
    fn get_gar_series_batch(&self, ids: &[PlayerId]) -> impl Future<Output = Result<Vec<GarData>>> + Send;

    fn get_season_stats(&self, id: PlayerId) -> impl Future<Output = Result<Vec<PlayerStat>>> + Send;

    fn debug_player_stats(&self, id: PlayerId) -> impl Future<Output = Result<StatsDebugReport>> + Send;
}

impl ContractStore for LiveStore {
    fn provenance(&self) -> Provenance {
        Provenance::Live
    }

    async fn list_players(&self) -> Result<Vec<Player>> {
        LiveStore::list_players(self).await
    }

    async fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        LiveStore::get_player(self, id).await
    }

    async fn get_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>> {
        LiveStore::get_players(self, ids).await
    }

    async fn get_gar_series(&self, id: PlayerId) -> Result<Vec<GarData>> {
        LiveStore::get_gar_series(self, id).await
    }

    async fn get_gar_series_batch(&self, ids: &[PlayerId]) -> Result<Vec<GarData>> {
        LiveStore::get_gar_series_batch(self, ids).await
    }

    async fn get_season_stats(&self, id: PlayerId) -> Result<Vec<PlayerStat>> {
        LiveStore::get_season_stats(self, id).await
    }

    async fn debug_player_stats(&self, id: PlayerId) -> Result<StatsDebugReport> {
        LiveStore::debug_player_stats(self, id).await
    }
}

impl ContractStore for FixtureStore {
    fn provenance(&self) -> Provenance {
        Provenance::Fixture
    }

    async fn list_players(&self) -> Result<Vec<Player>> {
        Ok(FixtureStore::list_players(self))
    }

    async fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        Ok(FixtureStore::get_player(self, id))
    }

    async fn get_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>> {
        Ok(FixtureStore::get_players(self, ids))
    }

    async fn get_gar_series(&self, id: PlayerId) -> Result<Vec<GarData>> {
        Ok(FixtureStore::get_gar_series(self, id))
    }

    async fn get_gar_series_batch(&self, ids: &[PlayerId]) -> Result<Vec<GarData>> {
        Ok(FixtureStore::get_gar_series_batch(self, ids))
    }

    async fn get_season_stats(&self, id: PlayerId) -> Result<Vec<PlayerStat>> {
        Ok(FixtureStore::get_season_stats(self, id))
    }

    async fn debug_player_stats(&self, id: PlayerId) -> Result<StatsDebugReport> {
        FixtureStore::debug_player_stats(self, id)
    }
}

/// The store chosen for this process.
#[derive(Debug, Clone)]
pub enum DataSource {
    Live(LiveStore),
    Fixture(FixtureStore),
}

impl DataSource {
    /// Select the store for `mode`. A live store that cannot be opened
    /// degrades to fixtures for the rest of the process.
    pub async fn connect(mode: SourceMode, config: &StoreConfig) -> Self {
        match mode {
            SourceMode::Fixture => {
                info!("Using built-in fixture data");
                DataSource::Fixture(FixtureStore::new())
            }
            SourceMode::Live => match ConnectionPool::open(config).await {
                Ok(pool) => DataSource::Live(LiveStore::new(pool)),
                Err(e) => {
                    warn!(error = %e, "Contracts database unavailable, using built-in fixture data");
                    DataSource::Fixture(FixtureStore::new())
                }
            },
        }
    }

    /// Release pooled connections, if any.
    pub fn close(&self) {
        if let DataSource::Live(store) = self {
            store.close();
        }
    }
}

impl ContractStore for DataSource {
    fn provenance(&self) -> Provenance {
        match self {
            DataSource::Live(store) => store.provenance(),
            DataSource::Fixture(store) => store.provenance(),
        }
    }

    async fn list_players(&self) -> Result<Vec<Player>> {
        match self {
            DataSource::Live(store) => ContractStore::list_players(store).await,
            DataSource::Fixture(store) => ContractStore::list_players(store).await,
        }
    }

    async fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        match self {
            DataSource::Live(store) => ContractStore::get_player(store, id).await,
            DataSource::Fixture(store) => ContractStore::get_player(store, id).await,
        }
    }

    async fn get_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>> {
        match self {
            DataSource::Live(store) => ContractStore::get_players(store, ids).await,
            DataSource::Fixture(store) => ContractStore::get_players(store, ids).await,
        }
    }

    async fn get_gar_series(&self, id: PlayerId) -> Result<Vec<GarData>> {
        match self {
            DataSource::Live(store) => ContractStore::get_gar_series(store, id).await,
            DataSource::Fixture(store) => ContractStore::get_gar_series(store, id).await,
        }
    }

    async fn get_gar_series_batch(&self, ids: &[PlayerId]) -> Result<Vec<GarData>> {
        match self {
            DataSource::Live(store) => ContractStore::get_gar_series_batch(store, ids).await,
            DataSource::Fixture(store) => ContractStore::get_gar_series_batch(store, ids).await,
        }
    }

    async fn get_season_stats(&self, id: PlayerId) -> Result<Vec<PlayerStat>> {
        match self {
            DataSource::Live(store) => ContractStore::get_season_stats(store, id).await,
            DataSource::Fixture(store) => ContractStore::get_season_stats(store, id).await,
        }
    }

    async fn debug_player_stats(&self, id: PlayerId) -> Result<StatsDebugReport> {
        match self {
            DataSource::Live(store) => ContractStore::debug_player_stats(store, id).await,
            DataSource::Fixture(store) => ContractStore::debug_player_stats(store, id).await,
        }
    }
}
