//! Command implementations for the hockey contract tracker

pub mod common;
pub mod compare;
pub mod debug_stats;
pub mod gar;
pub mod init_db;
pub mod player;
pub mod players;


use crate::{error::TrackerError, Result, DATABASE_URL_ENV_VAR};
use std::path::PathBuf;

/// File name of the database used when no URL is configured.
pub const DEFAULT_DATABASE_FILE: &str = "contracts.db";

/// `~/.cache/hockey-contracts/contracts.db`, or `None` when neither a
/// cache nor a home directory can be determined.
pub fn default_database_path() -> Option<PathBuf> {
    let base = dirs::cache_dir().or_else(|| {
        let mut home = dirs::home_dir()?;
        home.push(".cache");
        Some(home)
    })?;
    Some(base.join("hockey-contracts").join(DEFAULT_DATABASE_FILE))
}

/// Explicit flag, then `DATABASE_URL`, then the default cache location.
fn resolve_database_url(database_url: Option<String>) -> Result<String> {
    database_url
        .filter(|url| !url.trim().is_empty())
        .or_else(|| {
            std::env::var(DATABASE_URL_ENV_VAR)
                .ok()
                .filter(|url| !url.trim().is_empty())
        })
        .or_else(|| default_database_path().map(|path| path.display().to_string()))
        .ok_or_else(|| TrackerError::MissingDatabaseUrl {
            env_var: DATABASE_URL_ENV_VAR.to_string(),
        })
}
