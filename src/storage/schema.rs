//! Database schema for the contracts store
//!
//! The tracker only reads from the store. The DDL lives here so a local
//! database can be bootstrapped with `init-db` and so tests can build one.

use crate::cli::types::Season;
use anyhow::Result;
use rusqlite::Connection;

/// Per-season numeric columns in `stats`, suffixed with the season
/// (`goals_24_25`, `sv_pct_23_24`, ...).
pub const SEASON_STAT_COLUMNS: &[(&str, &str)] = &[
    // Skater
    ("goals", "INTEGER"),
    ("a1", "INTEGER"),
    ("toi", "REAL"),
    ("giveaways", "INTEGER"),
    ("takeaways", "INTEGER"),
    ("icf", "INTEGER"),
    ("cf_pct", "REAL"),
    ("xg", "REAL"),
    ("ixg", "REAL"),
    ("xg_diff", "REAL"),
    // Shared
    ("gar", "REAL"),
    ("war", "REAL"),
    // Goalie
    ("wins", "INTEGER"),
    ("losses", "INTEGER"),
    ("otl", "INTEGER"),
    ("sv_pct", "REAL"),
    ("gaa", "REAL"),
    ("shutouts", "INTEGER"),
    ("gsaa", "REAL"),
    ("hdsv_pct", "REAL"),
    ("mdsv_pct", "REAL"),
    ("ldsv_pct", "REAL"),
    ("qs_pct", "REAL"),
];

/// Build the `CREATE TABLE` statement for `stats`.
fn stats_table_ddl() -> String {
    let mut ddl = String::from(
        "CREATE TABLE IF NOT EXISTS stats (
                player_id INTEGER PRIMARY KEY,
                position TEXT,
                prev_team TEXT,
                contract_type TEXT",
    );
    for season in Season::ALL {
        for (stat, sql_type) in SEASON_STAT_COLUMNS {
            ddl.push_str(&format!(",\n                {} {}", season.column(stat), sql_type));
        }
    }
    ddl.push_str("\n            )");
    ddl
}

/// Create the `projected_contracts` and `stats` tables if missing.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS projected_contracts (
                player_id INTEGER PRIMARY KEY,
                player_name TEXT NOT NULL,
                age INTEGER,
                aav REAL,
                contract_term INTEGER,
                value_category TEXT,
                value_per_gar REAL,
                projected_gar_25_26 REAL
            )",
        [],
    )?;

    conn.execute(&stats_table_ddl(), [])?;

    // The player list is always ordered by AAV
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_projected_contracts_aav
             ON projected_contracts(aav DESC)",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        initialize_schema(&conn).unwrap();
    }

    #[test]
    fn test_stats_table_has_every_season_column() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('stats')").unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        assert_eq!(columns.len(), 4 + SEASON_STAT_COLUMNS.len() * Season::ALL.len());
        assert!(columns.contains(&"goals_22_23".to_string()));
        assert!(columns.contains(&"qs_pct_24_25".to_string()));
        assert!(columns.contains(&"prev_team".to_string()));
    }
}
