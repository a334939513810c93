//! Data models for the storage layer
//!
//! All three record kinds are read-only projections built fresh for each
//! request. Field names serialize in camelCase so `--json` output matches
//! the shape the dashboard front end consumes.

use crate::cli::types::{ContractType, PlayerId, Position, Season, ValueTier};
use serde::{Deserialize, Serialize};

/// A pending free agent with their projected contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub age: Option<u32>,
    /// Missing when the player has no `stats` row
    pub position: Option<Position>,
    pub team: String,
    pub contract_type: Option<ContractType>,
    /// Millions of dollars per season
    pub projected_aav: f64,
    /// Years
    pub projected_term: u32,
    pub value_tier: ValueTier,
    pub value_assessment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_gar_25_26: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_production: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_gar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_per_game: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_against_average: Option<f64>,
}

impl Player {
    pub fn is_goalie(&self) -> bool {
        self.position.is_some_and(|p| p.is_goalie())
    }
}

/// One point of a player's GAR trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarData {
    pub player_id: PlayerId,
    pub season: Season,
    pub gar: f64,
}

/// Season statistics for one player.
///
/// Carries both the skater and the goalie stat families; only the family
/// matching `position` is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub player_id: PlayerId,
    pub season: Season,
    pub team: String,
    pub position: Option<Position>,
    /// Always [`GAMES_PER_SEASON`](super::derive::GAMES_PER_SEASON); the
    /// store has no per-game counts.
    pub games_played: u32,

    // Skater stats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plus_minus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_play_goals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_handed_goals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_winning_goals: Option<u32>,
    /// Season total, minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_on_ice: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub giveaways: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeaways: Option<u32>,

    // Goalie stats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub losses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ot_losses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_against_average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutouts: Option<u32>,

    // Advanced skater stats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corsi_for_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_goals: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_goals_differential: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_corsi_for: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_expected_goals: Option<f64>,

    // Shared advanced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_above_replacement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins_above_replacement: Option<f64>,

    // Advanced goalie stats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_saved_above_average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_danger_save_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_danger_save_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_danger_save_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_start_percentage: Option<f64>,
}

impl PlayerStat {
    /// An empty record for `(player_id, season)` with every stat unset.
    pub fn new(
        player_id: PlayerId,
        season: Season,
        team: impl Into<String>,
        position: Option<Position>,
    ) -> Self {
        Self {
            player_id,
            season,
            team: team.into(),
            position,
            games_played: super::derive::GAMES_PER_SEASON,
            goals: None,
            assists: None,
            points: None,
            plus_minus: None,
            penalty_minutes: None,
            power_play_goals: None,
            short_handed_goals: None,
            game_winning_goals: None,
            time_on_ice: None,
            giveaways: None,
            takeaways: None,
            wins: None,
            losses: None,
            ot_losses: None,
            save_percentage: None,
            goals_against_average: None,
            shutouts: None,
            corsi_for_percentage: None,
            expected_goals: None,
            expected_goals_differential: None,
            individual_corsi_for: None,
            individual_expected_goals: None,
            goals_above_replacement: None,
            wins_above_replacement: None,
            goals_saved_above_average: None,
            high_danger_save_percentage: None,
            medium_danger_save_percentage: None,
            low_danger_save_percentage: None,
            quality_start_percentage: None,
        }
    }

    pub fn is_goalie(&self) -> bool {
        self.position.is_some_and(|p| p.is_goalie())
    }

    /// Any of the key skater columns is missing for this season.
    pub fn has_missing_skater_stats(&self) -> bool {
        self.goals.is_none()
            || self.assists.is_none()
            || self.time_on_ice.is_none()
            || self.giveaways.is_none()
            || self.takeaways.is_none()
    }

    /// Points as supplied, or goals + assists when both are known.
    pub fn points_or_derived(&self) -> Option<u32> {
        self.points
            .or_else(|| super::derive::points(self.goals, self.assists))
    }
}

/// Diagnostic answer for "why does this player have no stats".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDebugReport {
    pub player_id: PlayerId,
    pub player_exists: bool,
    pub stats: Vec<PlayerStat>,
    /// Raw `stats` rows for the player, column name to value.
    pub player_data: Vec<serde_json::Map<String, serde_json::Value>>,
}
