use super::*;
use crate::cli::types::FallbackPolicy;
use crate::error::TrackerError;
use crate::storage::schema;

/// A store whose every call fails the same way.
#[derive(Clone, Copy)]
enum BrokenStore {
    Unreachable,
    BadQuery,
    Panicked,
}

impl BrokenStore {
    async fn error(self) -> TrackerError {
        match self {
            BrokenStore::Unreachable => TrackerError::Unavailable {
                message: "connection refused".to_string(),
            },
            BrokenStore::BadQuery => {
                TrackerError::Query(rusqlite::Error::InvalidColumnName("gar_99_00".to_string()))
            }
            BrokenStore::Panicked => {
                let join = tokio::task::spawn_blocking(|| panic!("row decoding panicked")).await;
                match join {
                    Err(err) => TrackerError::from(err),
                    Ok(()) => unreachable!(),
                }
            }
        }
    }
}

impl ContractStore for BrokenStore {
    fn provenance(&self) -> Provenance {
        Provenance::Live
    }

    async fn list_players(&self) -> Result<Vec<Player>> {
        Err(self.error().await)
    }

    async fn get_player(&self, _id: PlayerId) -> Result<Option<Player>> {
        Err(self.error().await)
    }

    async fn get_players(&self, _ids: &[PlayerId]) -> Result<Vec<Player>> {
        Err(self.error().await)
    }

    async fn get_gar_series(&self, _id: PlayerId) -> Result<Vec<GarData>> {
        Err(self.error().await)
    }

    async fn get_gar_series_batch(&self, _ids: &[PlayerId]) -> Result<Vec<GarData>> {
        Err(self.error().await)
    }

    async fn get_season_stats(&self, _id: PlayerId) -> Result<Vec<PlayerStat>> {
        Err(self.error().await)
    }

    async fn debug_player_stats(&self, _id: PlayerId) -> Result<StatsDebugReport> {
        Err(self.error().await)
    }
}

fn ids(raw: &[u32]) -> Vec<PlayerId> {
    raw.iter().copied().map(PlayerId::new).collect()
}

#[tokio::test]
async fn test_unreachable_store_serves_fixtures() {
    let service = ContractService::new(BrokenStore::Unreachable, FallbackPolicy::Always);
    assert_eq!(service.provenance(), Provenance::Live);

    let players = service.list_players().await.unwrap();
    assert_eq!(players, FixtureStore::new().list_players());
    assert_eq!(service.provenance(), Provenance::Fixture);
}

#[tokio::test]
async fn test_fallback_matches_fixture_lookup() {
    let service = ContractService::new(BrokenStore::Unreachable, FallbackPolicy::ConnectivityOnly);
    let fixtures = FixtureStore::new();

    let player = service.get_player(PlayerId::new(3)).await.unwrap();
    assert_eq!(player, fixtures.get_player(PlayerId::new(3)));
    assert!(player.is_some());

    let players = service.get_players(&ids(&[1, 5, 999])).await.unwrap();
    assert_eq!(players.len(), 2);

    assert!(service.get_player(PlayerId::new(999)).await.unwrap().is_none());

    let gar = service.get_gar_series(PlayerId::new(4)).await.unwrap();
    assert_eq!(gar, fixtures.get_gar_series(PlayerId::new(4)));

    let batch = service.get_gar_series_batch(&ids(&[2, 1])).await.unwrap();
    assert_eq!(batch, fixtures.get_gar_series_batch(&ids(&[2, 1])));

    let stats = service.get_season_stats(PlayerId::new(9)).await.unwrap();
    assert_eq!(stats, fixtures.get_season_stats(PlayerId::new(9)));

    let report = service.debug_player_stats(PlayerId::new(1)).await.unwrap();
    assert!(report.player_exists);
}

#[tokio::test]
async fn test_query_error_falls_back_under_always() {
    let service = ContractService::new(BrokenStore::BadQuery, FallbackPolicy::Always);

    let players = service.list_players().await.unwrap();
    assert!(!players.is_empty());
    assert_eq!(service.provenance(), Provenance::Fixture);
}

#[tokio::test]
async fn test_query_error_surfaces_under_connectivity_only() {
    let service = ContractService::new(BrokenStore::BadQuery, FallbackPolicy::ConnectivityOnly);

    let err = service.list_players().await.unwrap_err();
    assert!(matches!(err, TrackerError::Query(_)));
    assert_eq!(service.provenance(), Provenance::Live);
}

#[tokio::test]
async fn test_panicked_query_surfaces_under_connectivity_only() {
    let service = ContractService::new(BrokenStore::Panicked, FallbackPolicy::ConnectivityOnly);

    let err = service.get_player(PlayerId::new(42)).await.unwrap_err();
    assert!(matches!(err, TrackerError::Task(_)));
    assert_eq!(service.provenance(), Provenance::Live);
}

#[tokio::test]
async fn test_fixture_source_reports_fixture_provenance() {
    let service = ContractService::new(DataSource::Fixture(FixtureStore::new()), FallbackPolicy::Always);
    assert_eq!(service.provenance(), Provenance::Fixture);
    assert_eq!(service.list_players().await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_connect_fixture_mode() {
    let config = StoreConfig::new("sqlite:///does/not/matter.db");
    let source = DataSource::connect(SourceMode::Fixture, &config).await;
    assert!(matches!(source, DataSource::Fixture(_)));
}

#[tokio::test]
async fn test_connect_missing_database_degrades_to_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.db");
    let config = StoreConfig::new(path.display().to_string());

    let source = DataSource::connect(SourceMode::Live, &config).await;
    assert_eq!(source.provenance(), Provenance::Fixture);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_connect_live_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contracts.db");
    let conn = rusqlite::Connection::open(&path).unwrap();
    schema::initialize_schema(&conn).unwrap();
    conn.execute(
        "INSERT INTO projected_contracts (player_id, player_name, aav, contract_term, value_category)
         VALUES (77, 'Live Only', 3.5, 2, 'Bargain')",
        [],
    )
    .unwrap();

    let config = StoreConfig::new(format!("sqlite://{}", path.display()));
    let source = DataSource::connect(SourceMode::Live, &config).await;
    assert_eq!(source.provenance(), Provenance::Live);

    let service = ContractService::new(source, FallbackPolicy::Always);
    let players = service.list_players().await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Live Only");
    assert_eq!(service.provenance(), Provenance::Live);

    service.store().close();
    // Closed pool counts as unreachable
    let players = service.list_players().await.unwrap();
    assert_eq!(players.len(), 10);
    assert_eq!(service.provenance(), Provenance::Fixture);
}
