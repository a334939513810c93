//! Null-tolerant row decoding
//!
//! Columns in the contracts store are loosely typed: counts may arrive as
//! INTEGER, REAL or numeric TEXT, and any of them may be NULL. These
//! helpers decode by column name and turn unusable values into `None`
//! instead of failing the whole row.

use super::derive;
use super::models::{Player, PlayerStat};
use crate::cli::types::{PlayerId, Position, Season, ValueTier};
use rusqlite::types::ValueRef;
use rusqlite::Row;
use serde_json::{Map, Number, Value};

pub(crate) trait RowExt {
    fn opt_f64(&self, column: &str) -> rusqlite::Result<Option<f64>>;
    fn opt_text(&self, column: &str) -> rusqlite::Result<Option<String>>;

    /// Non-negative whole number; fractional values are rounded.
    fn opt_u32(&self, column: &str) -> rusqlite::Result<Option<u32>> {
        Ok(self
            .opt_f64(column)?
            .filter(|v| *v >= 0.0 && *v <= f64::from(u32::MAX))
            .map(|v| v.round() as u32))
    }

    fn opt_position(&self, column: &str) -> rusqlite::Result<Option<Position>> {
        Ok(self.opt_text(column)?.and_then(|s| s.parse().ok()))
    }
}

impl RowExt for Row<'_> {
    fn opt_f64(&self, column: &str) -> rusqlite::Result<Option<f64>> {
        let value = match self.get_ref(column)? {
            ValueRef::Null | ValueRef::Blob(_) => None,
            ValueRef::Integer(i) => Some(i as f64),
            ValueRef::Real(f) => Some(f),
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .ok()
                .and_then(|s| s.trim().parse::<f64>().ok()),
        };
        Ok(value.filter(|v| v.is_finite()))
    }

    fn opt_text(&self, column: &str) -> rusqlite::Result<Option<String>> {
        let value = match self.get_ref(column)? {
            ValueRef::Null | ValueRef::Blob(_) => None,
            ValueRef::Integer(i) => Some(i.to_string()),
            ValueRef::Real(f) => Some(f.to_string()),
            ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).trim().to_string()),
        };
        Ok(value.filter(|s| !s.is_empty()))
    }
}

/// Column aliases produced by the player queries.
pub(crate) mod player_columns {
    pub const ID: &str = "player_id";
    pub const NAME: &str = "player_name";
    pub const AGE: &str = "age";
    pub const POSITION: &str = "position";
    pub const TEAM: &str = "team";
    pub const CONTRACT_TYPE: &str = "contract_type";
    pub const AAV: &str = "aav";
    pub const TERM: &str = "contract_term";
    pub const VALUE_CATEGORY: &str = "value_category";
    pub const VALUE_PER_GAR: &str = "value_per_gar";
    pub const PROJECTED_GAR: &str = "projected_gar_25_26";
    pub const RECENT_GOALS: &str = "recent_goals";
    pub const RECENT_ASSISTS: &str = "recent_assists";
    pub const RECENT_GAR: &str = "recent_gar";
    pub const RECENT_SV_PCT: &str = "recent_sv_pct";
    pub const RECENT_GAA: &str = "recent_gaa";
}

/// Shape a `projected_contracts ⟕ stats` row into a [`Player`].
pub(crate) fn player_from_row(row: &Row) -> rusqlite::Result<Player> {
    use player_columns as col;

    let position = row.opt_position(col::POSITION)?;
    let is_goalie = position.is_some_and(|p| p.is_goalie());
    let value_tier = ValueTier::from_label(row.opt_text(col::VALUE_CATEGORY)?.as_deref());
    let goals = row.opt_u32(col::RECENT_GOALS)?;
    let assists = row.opt_u32(col::RECENT_ASSISTS)?;

    let (save_percentage, goals_against_average) = if is_goalie {
        (
            Some(
                row.opt_f64(col::RECENT_SV_PCT)?
                    .unwrap_or(derive::PLACEHOLDER_SAVE_PERCENTAGE),
            ),
            Some(
                row.opt_f64(col::RECENT_GAA)?
                    .unwrap_or(derive::PLACEHOLDER_GOALS_AGAINST_AVERAGE),
            ),
        )
    } else {
        (None, None)
    };

    Ok(Player {
        id: PlayerId::new(row.get(col::ID)?),
        name: row.opt_text(col::NAME)?.unwrap_or_default(),
        age: row.opt_u32(col::AGE)?,
        position,
        team: row.opt_text(col::TEAM)?.unwrap_or_default(),
        contract_type: row
            .opt_text(col::CONTRACT_TYPE)?
            .and_then(|s| s.parse().ok()),
        projected_aav: row.opt_f64(col::AAV)?.unwrap_or(0.0),
        projected_term: row.opt_u32(col::TERM)?.unwrap_or(0),
        value_tier,
        value_assessment: derive::value_assessment(row.opt_f64(col::VALUE_PER_GAR)?, value_tier),
        projected_gar_25_26: row.opt_f64(col::PROJECTED_GAR)?,
        recent_production: if is_goalie {
            None
        } else {
            derive::points(goals, assists)
        },
        recent_gar: row.opt_f64(col::RECENT_GAR)?,
        points_per_game: derive::points_per_game(is_goalie, goals, assists),
        save_percentage,
        goals_against_average,
    })
}

/// Shape one season of a `stats` row. Returns `None` when the season has
/// no values at all.
pub(crate) fn season_stat_from_row(
    row: &Row,
    player_id: PlayerId,
    season: Season,
) -> rusqlite::Result<Option<PlayerStat>> {
    let position = row.opt_position("position")?;
    let team = row.opt_text("prev_team")?.unwrap_or_default();
    let col = |stat: &str| season.column(stat);

    let empty = PlayerStat::new(player_id, season, team, position);
    let mut stat = empty.clone();

    stat.goals_above_replacement = row.opt_f64(&col("gar"))?;
    stat.wins_above_replacement = row.opt_f64(&col("war"))?;

    if stat.is_goalie() {
        stat.wins = row.opt_u32(&col("wins"))?;
        stat.losses = row.opt_u32(&col("losses"))?;
        stat.ot_losses = row.opt_u32(&col("otl"))?;
        stat.save_percentage = row.opt_f64(&col("sv_pct"))?;
        stat.goals_against_average = row.opt_f64(&col("gaa"))?;
        stat.shutouts = row.opt_u32(&col("shutouts"))?;
        stat.goals_saved_above_average = row.opt_f64(&col("gsaa"))?;
        stat.high_danger_save_percentage = row.opt_f64(&col("hdsv_pct"))?;
        stat.medium_danger_save_percentage = row.opt_f64(&col("mdsv_pct"))?;
        stat.low_danger_save_percentage = row.opt_f64(&col("ldsv_pct"))?;
        stat.quality_start_percentage = row.opt_f64(&col("qs_pct"))?;
    } else {
        stat.goals = row.opt_u32(&col("goals"))?;
        stat.assists = row.opt_u32(&col("a1"))?;
        stat.points = derive::points(stat.goals, stat.assists);
        stat.time_on_ice = row.opt_f64(&col("toi"))?;
        stat.giveaways = row.opt_u32(&col("giveaways"))?;
        stat.takeaways = row.opt_u32(&col("takeaways"))?;
        stat.individual_corsi_for = row.opt_u32(&col("icf"))?;
        stat.corsi_for_percentage = row.opt_f64(&col("cf_pct"))?;
        stat.expected_goals = row.opt_f64(&col("xg"))?;
        stat.individual_expected_goals = row.opt_f64(&col("ixg"))?;
        stat.expected_goals_differential = row.opt_f64(&col("xg_diff"))?;
    }

    Ok((stat != empty).then_some(stat))
}

/// Raw row as a JSON object, for the diagnostic report.
pub(crate) fn row_to_json(row: &Row, columns: &[String]) -> rusqlite::Result<Map<String, Value>> {
    let mut map = Map::with_capacity(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        let value = match row.get_ref(idx)? {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::from(i),
            ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
            ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Value::String(format!("<{} bytes>", bytes.len())),
        };
        map.insert(name.clone(), value);
    }
    Ok(map)
}
