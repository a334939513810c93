//! Error types for the hockey contract tracker

use thiserror::Error;


pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Database unavailable: {message}")]
    Unavailable { message: String },

    #[error("Connection pool is closed")]
    PoolClosed,

    #[error("Query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database URL not provided and {env_var} environment variable not set")]
    MissingDatabaseUrl { env_var: String },

    #[error("Invalid player ID: {value}")]
    InvalidPlayerId { value: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid season: {season}")]
    InvalidSeason { season: String },
}

impl TrackerError {
    /// True when the store could not be reached at all, as opposed to a
    /// statement that reached the store and failed there.
    pub fn is_connectivity(&self) -> bool {
        match self {
            TrackerError::Unavailable { .. } | TrackerError::PoolClosed => true,
            TrackerError::Query(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::CannotOpen
                    | rusqlite::ErrorCode::DatabaseBusy
                    | rusqlite::ErrorCode::DatabaseLocked
                    | rusqlite::ErrorCode::NotADatabase
                    | rusqlite::ErrorCode::DatabaseCorrupt
                    | rusqlite::ErrorCode::SystemIoFailure
            ),
            TrackerError::Io(_) => true,
            _ => false,
        }
    }

    pub(crate) fn unavailable(message: impl Into<String>) -> Self {
        TrackerError::Unavailable {
            message: message.into(),
        }
    }
}
