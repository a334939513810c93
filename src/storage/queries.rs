//! Read-only queries against the contracts store

use super::models::*;
use super::pool::ConnectionPool;
use super::rows::{player_columns as col, player_from_row, row_to_json, season_stat_from_row, RowExt};
use crate::cli::types::{PlayerId, Season};
use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

/// Store client backed by the SQL database.
#[derive(Debug, Clone)]
pub struct LiveStore {
    pool: ConnectionPool,
}

/// `SELECT ... FROM projected_contracts LEFT JOIN stats`, with the latest
/// season's columns aliased to the names [`player_from_row`] expects.
fn player_select() -> String {
    let latest = Season::LATEST;
    format!(
        "SELECT pc.player_id AS {id},
                pc.player_name AS {name},
                pc.age AS {age},
                s.position AS {position},
                s.prev_team AS {team},
                s.contract_type AS {contract_type},
                pc.aav AS {aav},
                pc.contract_term AS {term},
                pc.value_category AS {value_category},
                pc.value_per_gar AS {value_per_gar},
                pc.projected_gar_25_26 AS {projected_gar},
                s.{goals} AS {recent_goals},
                s.{a1} AS {recent_assists},
                s.{gar} AS {recent_gar},
                s.{sv_pct} AS {recent_sv_pct},
                s.{gaa} AS {recent_gaa}
         FROM projected_contracts pc
         LEFT JOIN stats s ON pc.player_id = s.player_id",
        id = col::ID,
        name = col::NAME,
        age = col::AGE,
        position = col::POSITION,
        team = col::TEAM,
        contract_type = col::CONTRACT_TYPE,
        aav = col::AAV,
        term = col::TERM,
        value_category = col::VALUE_CATEGORY,
        value_per_gar = col::VALUE_PER_GAR,
        projected_gar = col::PROJECTED_GAR,
        goals = latest.column("goals"),
        recent_goals = col::RECENT_GOALS,
        a1 = latest.column("a1"),
        recent_assists = col::RECENT_ASSISTS,
        gar = latest.column("gar"),
        recent_gar = col::RECENT_GAR,
        sv_pct = latest.column("sv_pct"),
        recent_sv_pct = col::RECENT_SV_PCT,
        gaa = latest.column("gaa"),
        recent_gaa = col::RECENT_GAA,
    )
}

/// Highest AAV first; equal AAVs keep table order. Non-numeric AAVs sort
/// as zero, matching how they decode.
const PLAYER_ORDER: &str = " ORDER BY CASE WHEN typeof(pc.aav) IN ('integer', 'real') THEN pc.aav ELSE 0 END DESC, pc.rowid";

/// `?, ?, ?` for an `IN (...)` list.
fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

fn gar_columns() -> String {
    Season::ALL
        .iter()
        .map(|season| season.column("gar"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One GAR point per supported season; missing values count as zero.
fn gar_series_from_row(row: &rusqlite::Row, player_id: PlayerId) -> rusqlite::Result<Vec<GarData>> {
    Season::ALL
        .into_iter()
        .map(|season| {
            Ok(GarData {
                player_id,
                season,
                gar: row.opt_f64(&season.column("gar"))?.unwrap_or(0.0),
            })
        })
        .collect()
}

fn query_players(conn: &Connection, ids: Option<&[PlayerId]>) -> Result<Vec<Player>> {
    let mut query = player_select();
    let mut params: Vec<u32> = Vec::new();

    if let Some(ids) = ids {
        query.push_str(&format!(" WHERE pc.player_id IN ({})", placeholders(ids.len())));
        params.extend(ids.iter().map(PlayerId::as_u32));
    }
    query.push_str(PLAYER_ORDER);

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params), player_from_row)?;

    let mut players = Vec::new();
    for row in rows {
        players.push(row?);
    }
    // Text AAVs that parse as numbers only get their value after decoding
    players.sort_by(|a, b| b.projected_aav.total_cmp(&a.projected_aav));
    Ok(players)
}

fn query_season_stats(conn: &Connection, id: PlayerId) -> Result<Vec<PlayerStat>> {
    let mut stmt = conn.prepare("SELECT * FROM stats WHERE player_id = ?")?;
    let stats = stmt
        .query_row(params![id.as_u32()], |row| {
            let mut stats = Vec::with_capacity(Season::ALL.len());
            for season in Season::ALL {
                if let Some(stat) = season_stat_from_row(row, id, season)? {
                    stats.push(stat);
                }
            }
            Ok(stats)
        })
        .optional()?;
    Ok(stats.unwrap_or_default())
}

impl LiveStore {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn close(&self) {
        self.pool.close();
    }

    /// All players, highest projected AAV first.
    pub async fn list_players(&self) -> Result<Vec<Player>> {
        let players = self
            .pool
            .with_connection(|conn| query_players(conn, None))
            .await?;
        debug!(count = players.len(), "Fetched players");
        Ok(players)
    }

    pub async fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let mut players = self
            .pool
            .with_connection(move |conn| query_players(conn, Some(&[id])))
            .await?;
        Ok(players.pop())
    }

    /// Players matching `ids`; unknown ids are left out.
    pub async fn get_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = ids.to_vec();
        self.pool
            .with_connection(move |conn| query_players(conn, Some(&ids)))
            .await
    }

    pub async fn get_gar_series(&self, id: PlayerId) -> Result<Vec<GarData>> {
        self.pool
            .with_connection(move |conn| {
                let query = format!("SELECT {} FROM stats WHERE player_id = ?", gar_columns());
                let series = conn
                    .query_row(&query, params![id.as_u32()], |row| gar_series_from_row(row, id))
                    .optional()?;
                Ok(series.unwrap_or_default())
            })
            .await
    }

    /// GAR series for several players, ordered by player id then season.
    pub async fn get_gar_series_batch(&self, ids: &[PlayerId]) -> Result<Vec<GarData>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<u32> = ids.iter().map(PlayerId::as_u32).collect();
        self.pool
            .with_connection(move |conn| {
                let query = format!(
                    "SELECT player_id, {} FROM stats WHERE player_id IN ({}) ORDER BY player_id",
                    gar_columns(),
                    placeholders(ids.len())
                );
                let mut stmt = conn.prepare(&query)?;
                let rows = stmt.query_map(rusqlite::params_from_iter(ids), |row| {
                    let id = PlayerId::new(row.get("player_id")?);
                    gar_series_from_row(row, id)
                })?;

                let mut series = Vec::new();
                for row in rows {
                    series.extend(row?);
                }
                Ok(series)
            })
            .await
    }

    /// Up to one record per supported season, oldest first.
    pub async fn get_season_stats(&self, id: PlayerId) -> Result<Vec<PlayerStat>> {
        self.pool
            .with_connection(move |conn| query_season_stats(conn, id))
            .await
    }

    /// Does `stats` have a row for `id`, and what does it look like.
    pub async fn debug_player_stats(&self, id: PlayerId) -> Result<StatsDebugReport> {
        self.pool
            .with_connection(move |conn| {
                let count: i64 = conn.query_row(
                    "SELECT COUNT(*) FROM stats WHERE player_id = ?",
                    params![id.as_u32()],
                    |row| row.get(0),
                )?;

                let mut stmt = conn.prepare("SELECT * FROM stats WHERE player_id = ? LIMIT 1")?;
                let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
                let rows = stmt.query_map(params![id.as_u32()], |row| row_to_json(row, &columns))?;

                let mut player_data = Vec::new();
                for row in rows {
                    player_data.push(row?);
                }

                Ok(StatsDebugReport {
                    player_id: id,
                    player_exists: count > 0,
                    stats: query_season_stats(conn, id)?,
                    player_data,
                })
            })
            .await
    }
}
