//! Fallback-aware access to contract data
//!
//! [`ContractService`] is what commands talk to. Connectivity failures are
//! answered from the fixture data set, matched the same way the live
//! query would have matched. Query failures also fall back under
//! [`FallbackPolicy::Always`], but are logged at error level; under
//! [`FallbackPolicy::ConnectivityOnly`] they reach the caller.

use super::{ContractStore, Provenance};
use crate::cli::types::{FallbackPolicy, PlayerId};
use crate::error::Result;
use crate::fixtures::FixtureStore;
use crate::storage::{GarData, Player, PlayerStat, StatsDebugReport};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, warn};

pub struct ContractService<S> {
    store: S,
    fixtures: FixtureStore,
    policy: FallbackPolicy,
    served_fixture: AtomicBool,
}

impl<S: ContractStore> ContractService<S> {
    pub fn new(store: S, policy: FallbackPolicy) -> Self {
        let served_fixture = AtomicBool::new(store.provenance() == Provenance::Fixture);
        Self {
            store,
            fixtures: FixtureStore::new(),
            policy,
            served_fixture,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// `Fixture` once any answer in this process came from fixtures.
    pub fn provenance(&self) -> Provenance {
        if self.served_fixture.load(Ordering::Relaxed) {
            Provenance::Fixture
        } else {
            Provenance::Live
        }
    }

    async fn run<T, Fut, F>(&self, operation: &'static str, live: Fut, fallback: F) -> Result<T>
    where
        Fut: Future<Output = Result<T>>,
        F: FnOnce(&FixtureStore) -> Result<T>,
    {
        match live.await {
            Ok(value) => Ok(value),
            Err(err) if err.is_connectivity() => {
                warn!(operation, error = %err, "Contracts database unreachable, serving fixture data");
                self.served_fixture.store(true, Ordering::Relaxed);
                fallback(&self.fixtures)
            }
            Err(err) => match self.policy {
                FallbackPolicy::Always => {
                    error!(operation, error = %err, "Contracts query failed, serving fixture data");
                    self.served_fixture.store(true, Ordering::Relaxed);
                    fallback(&self.fixtures)
                }
                FallbackPolicy::ConnectivityOnly => {
                    error!(operation, error = %err, "Contracts query failed");
                    Err(err)
                }
            },
        }
    }

    pub async fn list_players(&self) -> Result<Vec<Player>> {
        self.run("list_players", self.store.list_players(), |f| {
            Ok(f.list_players())
        })
        .await
    }

    pub async fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        self.run("get_player", self.store.get_player(id), |f| {
            Ok(f.get_player(id))
        })
        .await
    }

    pub async fn get_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>> {
        self.run("get_players", self.store.get_players(ids), |f| {
            Ok(f.get_players(ids))
        })
        .await
    }

    pub async fn get_gar_series(&self, id: PlayerId) -> Result<Vec<GarData>> {
        self.run("get_gar_series", self.store.get_gar_series(id), |f| {
            Ok(f.get_gar_series(id))
        })
        .await
    }

    pub async fn get_gar_series_batch(&self, ids: &[PlayerId]) -> Result<Vec<GarData>> {
        self.run(
            "get_gar_series_batch",
            self.store.get_gar_series_batch(ids),
            |f| Ok(f.get_gar_series_batch(ids)),
        )
        .await
    }

    pub async fn get_season_stats(&self, id: PlayerId) -> Result<Vec<PlayerStat>> {
        self.run("get_season_stats", self.store.get_season_stats(id), |f| {
            Ok(f.get_season_stats(id))
        })
        .await
    }

    pub async fn debug_player_stats(&self, id: PlayerId) -> Result<StatsDebugReport> {
        self.run(
            "debug_player_stats",
            self.store.debug_player_stats(id),
            |f| f.debug_player_stats(id),
        )
        .await
    }
}
