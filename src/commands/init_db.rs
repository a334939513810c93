//! `init-db`: create an empty contracts database with the expected schema.

use anyhow::Context;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::storage::{pool::database_path_from_url, schema::initialize_schema};

use super::resolve_database_url;

/// Create the database file (and parent directories) at `path` and
/// apply the schema. Safe to run on an existing database.
pub fn init_database(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let conn = Connection::open(path).with_context(|| format!("opening {}", path.display()))?;
    initialize_schema(&conn)?;
    info!(path = %path.display(), "Schema initialized");
    Ok(())
}

/// Handle the init-db command
pub fn handle_init_db(path: Option<PathBuf>, database_url: Option<String>) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => database_path_from_url(&resolve_database_url(database_url)?),
    };

    println!("Initializing database at {}...", path.display());
    init_database(&path)?;
    println!("✓ Database ready");
    Ok(())
}
