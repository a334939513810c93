//! Built-in fixture data set
//!
//! Ten representative 2025 free agents with three seasons of GAR and stats.
//! Served when the fixture source is selected at start-up and substituted
//! for live answers when the store cannot be used. Records are shaped with
//! the same [`derive`](crate::storage::derive) rules as the live store.

use crate::cli::types::{ContractType, PlayerId, Position, Season, ValueTier};
use crate::error::Result;
use crate::storage::derive;
use crate::storage::models::{GarData, Player, PlayerStat, StatsDebugReport};
use crate::storage::schema::SEASON_STAT_COLUMNS;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Goals per win used to turn GAR into WAR.
const GOALS_PER_WIN: f64 = 5.6;

struct ContractRow {
    id: u32,
    name: &'static str,
    age: u32,
    position: Position,
    team: &'static str,
    contract_type: ContractType,
    aav: f64,
    term: u32,
    tier: ValueTier,
    value_per_gar: Option<f64>,
    projected_gar: f64,
    /// 2022-23, 2023-24, 2024-25
    gar: [f64; 3],
}

/// Per-season skater totals; `toi` is season minutes.
#[derive(Clone, Copy)]
struct SkaterLine {
    goals: u32,
    assists: u32,
    plus_minus: i32,
    pim: u32,
    ppg: u32,
    toi: f64,
    giveaways: Option<u32>,
    takeaways: Option<u32>,
    icf: u32,
    cf_pct: f64,
    xg: f64,
    ixg: f64,
    xg_diff: f64,
}

#[derive(Clone, Copy)]
struct GoalieLine {
    wins: u32,
    losses: u32,
    otl: u32,
    sv_pct: f64,
    gaa: f64,
    shutouts: u32,
    gsaa: f64,
    hdsv_pct: f64,
    mdsv_pct: f64,
    ldsv_pct: f64,
    qs_pct: f64,
}

enum Lines {
    Skater([SkaterLine; 3]),
    Goalie([GoalieLine; 3]),
}

#[allow(clippy::too_many_arguments)]
fn sk(
    goals: u32,
    assists: u32,
    plus_minus: i32,
    pim: u32,
    ppg: u32,
    toi: f64,
    giveaways: Option<u32>,
    takeaways: Option<u32>,
    icf: u32,
    cf_pct: f64,
    xg: f64,
    ixg: f64,
    xg_diff: f64,
) -> SkaterLine {
    SkaterLine {
        goals,
        assists,
        plus_minus,
        pim,
        ppg,
        toi,
        giveaways,
        takeaways,
        icf,
        cf_pct,
        xg,
        ixg,
        xg_diff,
    }
}

#[allow(clippy::too_many_arguments)]
fn gl(
    wins: u32,
    losses: u32,
    otl: u32,
    sv_pct: f64,
    gaa: f64,
    shutouts: u32,
    gsaa: f64,
    hdsv_pct: f64,
    mdsv_pct: f64,
    ldsv_pct: f64,
    qs_pct: f64,
) -> GoalieLine {
    GoalieLine {
        wins,
        losses,
        otl,
        sv_pct,
        gaa,
        shutouts,
        gsaa,
        hdsv_pct,
        mdsv_pct,
        ldsv_pct,
        qs_pct,
    }
}

fn fixture_rows() -> Vec<(ContractRow, Lines)> {
    use ContractType::*;
    use Position::*;

    vec![
        (
            ContractRow { id: 1, name: "Mitch Marner", age: 28, position: RW, team: "TOR", contract_type: UFA, aav: 13.0, term: 8, tier: ValueTier::FairDeal, value_per_gar: Some(650.0), projected_gar: 20.0, gar: [17.8, 21.4, 23.0] },
            Lines::Skater([
                sk(30, 69, 18, 14, 8, 1712.4, Some(52), Some(71), 268, 55.1, 61.2, 27.4, 12.8),
                sk(26, 59, 22, 10, 7, 1574.0, Some(44), Some(64), 241, 56.3, 55.9, 24.1, 14.5),
                sk(27, 75, 23, 12, 9, 1745.6, Some(49), Some(77), 255, 54.7, 63.0, 25.9, 13.1),
            ]),
        ),
        (
            ContractRow { id: 2, name: "Mikko Rantanen", age: 28, position: RW, team: "DAL", contract_type: UFA, aav: 12.5, term: 8, tier: ValueTier::FairDeal, value_per_gar: Some(610.0), projected_gar: 20.5, gar: [19.6, 22.1, 18.4] },
            Lines::Skater([
                sk(55, 50, 12, 16, 22, 1669.0, Some(61), Some(48), 412, 53.2, 72.4, 41.6, 9.3),
                sk(42, 62, 18, 24, 14, 1701.5, Some(57), Some(52), 389, 54.8, 70.1, 38.2, 11.7),
                sk(32, 56, 5, 20, 11, 1688.2, Some(63), Some(45), 372, 52.6, 66.8, 35.0, 6.2),
            ]),
        ),
        (
            ContractRow { id: 3, name: "Nikolaj Ehlers", age: 29, position: LW, team: "WPG", contract_type: UFA, aav: 8.0, term: 6, tier: ValueTier::Bargain, value_per_gar: Some(420.0), projected_gar: 19.0, gar: [14.3, 15.8, 17.2] },
            Lines::Skater([
                sk(12, 26, 8, 10, 2, 750.3, Some(18), Some(24), 198, 58.4, 34.5, 14.9, 10.2),
                sk(25, 36, 26, 22, 5, 1196.8, Some(29), Some(39), 342, 59.7, 52.8, 26.0, 16.4),
                sk(24, 39, 28, 18, 6, 1162.5, Some(27), Some(41), 351, 60.1, 54.6, 27.3, 17.9),
            ]),
        ),
        (
            ContractRow { id: 4, name: "Brock Boeser", age: 28, position: RW, team: "VAN", contract_type: UFA, aav: 7.25, term: 6, tier: ValueTier::Overpay, value_per_gar: Some(905.0), projected_gar: 8.0, gar: [6.1, 13.9, 5.2] },
            Lines::Skater([
                sk(18, 37, -8, 8, 6, 1291.7, Some(31), Some(22), 260, 50.2, 47.1, 21.3, -1.8),
                sk(40, 33, 10, 12, 14, 1413.0, Some(28), Some(30), 331, 51.9, 55.4, 30.8, 3.6),
                sk(25, 25, -4, 10, 9, 1380.9, Some(35), Some(19), 287, 49.1, 50.2, 24.9, -2.7),
            ]),
        ),
        (
            ContractRow { id: 5, name: "Brad Marchand", age: 37, position: LW, team: "FLA", contract_type: UFA, aav: 5.25, term: 2, tier: ValueTier::Overpay, value_per_gar: Some(875.0), projected_gar: 6.0, gar: [16.9, 12.4, 7.8] },
            Lines::Skater([
                sk(21, 46, 22, 52, 5, 1489.2, Some(40), Some(58), 264, 56.9, 58.3, 23.7, 11.4),
                sk(29, 38, 14, 59, 8, 1537.6, Some(38), Some(61), 279, 54.2, 55.0, 25.2, 7.9),
                sk(21, 26, 3, 60, 6, 1391.0, Some(33), Some(47), 231, 52.0, 46.6, 18.8, 2.5),
            ]),
        ),
        (
            ContractRow { id: 6, name: "Aaron Ekblad", age: 29, position: D, team: "FLA", contract_type: UFA, aav: 6.5, term: 5, tier: ValueTier::FairDeal, value_per_gar: Some(590.0), projected_gar: 11.0, gar: [5.7, 10.2, 11.6] },
            Lines::Skater([
                sk(10, 28, -6, 54, 4, 1562.8, Some(44), Some(29), 332, 51.3, 61.8, 8.9, 1.2),
                sk(8, 19, 17, 38, 3, 1187.1, Some(30), Some(24), 244, 55.7, 49.7, 7.1, 6.8),
                sk(8, 25, 12, 46, 2, 1248.4, Some(35), Some(27), 268, 56.4, 52.3, 7.6, 8.1),
            ]),
        ),
        (
            ContractRow { id: 7, name: "Marco Rossi", age: 24, position: C, team: "MIN", contract_type: RFA, aav: 6.0, term: 5, tier: ValueTier::Bargain, value_per_gar: Some(380.0), projected_gar: 15.8, gar: [4.2, 9.8, 14.1] },
            Lines::Skater([
                sk(0, 0, -1, 0, 0, 118.5, Some(2), Some(1), 9, 44.0, 3.1, 0.6, -0.9),
                sk(21, 19, 2, 18, 7, 1378.2, Some(37), Some(43), 214, 50.6, 50.4, 18.5, 1.4),
                sk(24, 36, 11, 20, 8, 1452.7, Some(41), Some(50), 236, 52.8, 56.9, 21.2, 5.5),
            ]),
        ),
        (
            ContractRow { id: 8, name: "Luke Hughes", age: 21, position: D, team: "NJD", contract_type: RFA, aav: 7.0, term: 7, tier: ValueTier::Bargain, value_per_gar: Some(400.0), projected_gar: 17.5, gar: [1.1, 6.3, 9.7] },
            Lines::Skater([
                // Two-game debut; puck-battle counts were never recorded
                sk(0, 2, 1, 0, 0, 41.8, None, None, 7, 61.5, 2.0, 0.3, 0.8),
                sk(9, 38, -4, 12, 4, 1782.5, Some(58), Some(36), 251, 52.4, 66.1, 9.4, 2.3),
                sk(7, 37, 6, 16, 3, 1490.6, Some(51), Some(33), 232, 54.0, 60.7, 8.8, 5.9),
            ]),
        ),
        (
            ContractRow { id: 9, name: "Jake Allen", age: 35, position: G, team: "NJD", contract_type: UFA, aav: 2.5, term: 2, tier: ValueTier::FairDeal, value_per_gar: Some(560.0), projected_gar: 4.5, gar: [-3.2, 2.1, 4.9] },
            Lines::Goalie([
                gl(11, 15, 3, 0.891, 3.55, 0, -8.4, 0.798, 0.887, 0.958, 0.381),
                gl(13, 14, 3, 0.903, 2.94, 2, -1.7, 0.812, 0.901, 0.962, 0.467),
                gl(13, 14, 3, 0.910, 2.53, 2, 4.2, 0.823, 0.909, 0.966, 0.548),
            ]),
        ),
        (
            ContractRow { id: 10, name: "Ilya Samsonov", age: 28, position: G, team: "VGK", contract_type: UFA, aav: 3.0, term: 1, tier: ValueTier::Unknown, value_per_gar: None, projected_gar: 3.0, gar: [12.4, -5.8, 1.3] },
            Lines::Goalie([
                gl(27, 10, 5, 0.919, 2.33, 4, 11.9, 0.835, 0.918, 0.971, 0.611),
                gl(23, 7, 3, 0.890, 3.13, 1, -9.6, 0.791, 0.884, 0.955, 0.429),
                gl(16, 13, 2, 0.894, 2.86, 1, -2.8, 0.806, 0.895, 0.959, 0.500),
            ]),
        ),
    ]
}

fn war_from_gar(gar: f64) -> f64 {
    (gar / GOALS_PER_WIN * 10.0).round() / 10.0
}

fn build_stats(row: &ContractRow, lines: &Lines) -> Vec<PlayerStat> {
    let id = PlayerId::new(row.id);
    Season::ALL
        .into_iter()
        .enumerate()
        .map(|(i, season)| {
            let mut stat = PlayerStat::new(id, season, row.team, Some(row.position));
            stat.goals_above_replacement = Some(row.gar[i]);
            stat.wins_above_replacement = Some(war_from_gar(row.gar[i]));
            match lines {
                Lines::Skater(lines) => {
                    let line = lines[i];
                    stat.goals = Some(line.goals);
                    stat.assists = Some(line.assists);
                    stat.points = derive::points(stat.goals, stat.assists);
                    stat.plus_minus = Some(line.plus_minus);
                    stat.penalty_minutes = Some(line.pim);
                    stat.power_play_goals = Some(line.ppg);
                    stat.time_on_ice = Some(line.toi);
                    stat.giveaways = line.giveaways;
                    stat.takeaways = line.takeaways;
                    stat.individual_corsi_for = Some(line.icf);
                    stat.corsi_for_percentage = Some(line.cf_pct);
                    stat.expected_goals = Some(line.xg);
                    stat.individual_expected_goals = Some(line.ixg);
                    stat.expected_goals_differential = Some(line.xg_diff);
                }
                Lines::Goalie(lines) => {
                    let line = lines[i];
                    stat.wins = Some(line.wins);
                    stat.losses = Some(line.losses);
                    stat.ot_losses = Some(line.otl);
                    stat.save_percentage = Some(line.sv_pct);
                    stat.goals_against_average = Some(line.gaa);
                    stat.shutouts = Some(line.shutouts);
                    stat.goals_saved_above_average = Some(line.gsaa);
                    stat.high_danger_save_percentage = Some(line.hdsv_pct);
                    stat.medium_danger_save_percentage = Some(line.mdsv_pct);
                    stat.low_danger_save_percentage = Some(line.ldsv_pct);
                    stat.quality_start_percentage = Some(line.qs_pct);
                }
            }
            stat
        })
        .collect()
}

fn build_player(row: &ContractRow, latest: &PlayerStat) -> Player {
    let is_goalie = row.position.is_goalie();
    Player {
        id: PlayerId::new(row.id),
        name: row.name.to_string(),
        age: Some(row.age),
        position: Some(row.position),
        team: row.team.to_string(),
        contract_type: Some(row.contract_type),
        projected_aav: row.aav,
        projected_term: row.term,
        value_tier: row.tier,
        value_assessment: derive::value_assessment(row.value_per_gar, row.tier),
        projected_gar_25_26: Some(row.projected_gar),
        recent_production: if is_goalie {
            None
        } else {
            derive::points(latest.goals, latest.assists)
        },
        recent_gar: latest.goals_above_replacement,
        points_per_game: derive::points_per_game(is_goalie, latest.goals, latest.assists),
        save_percentage: is_goalie.then(|| {
            latest
                .save_percentage
                .unwrap_or(derive::PLACEHOLDER_SAVE_PERCENTAGE)
        }),
        goals_against_average: is_goalie.then(|| {
            latest
                .goals_against_average
                .unwrap_or(derive::PLACEHOLDER_GOALS_AGAINST_AVERAGE)
        }),
    }
}

/// The fixture records, already shaped.
#[derive(Debug, Clone)]
pub struct FixtureData {
    /// Sorted by projected AAV, highest first
    pub players: Vec<Player>,
    /// Ordered by player id then season
    pub gar: Vec<GarData>,
    /// Ordered by player id then season
    pub stats: Vec<PlayerStat>,
}

impl FixtureData {
    fn build() -> Self {
        let mut players = Vec::new();
        let mut gar = Vec::new();
        let mut stats = Vec::new();

        for (row, lines) in fixture_rows() {
            let player_stats = build_stats(&row, &lines);
            if let Some(latest) = player_stats.last() {
                players.push(build_player(&row, latest));
            }
            gar.extend(Season::ALL.into_iter().zip(row.gar).map(|(season, value)| GarData {
                player_id: PlayerId::new(row.id),
                season,
                gar: value,
            }));
            stats.extend(player_stats);
        }

        // Stable, so equal AAVs keep id order like the live query
        players.sort_by(|a, b| b.projected_aav.total_cmp(&a.projected_aav));
        gar.sort_by_key(|point| (point.player_id, point.season));
        stats.sort_by_key(|stat| (stat.player_id, stat.season));

        Self { players, gar, stats }
    }

    /// Shared instance built on first use.
    pub fn get() -> &'static FixtureData {
        static DATA: OnceLock<FixtureData> = OnceLock::new();
        DATA.get_or_init(FixtureData::build)
    }
}

/// Store client answering from [`FixtureData`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureStore;

impl FixtureStore {
    pub fn new() -> Self {
        Self
    }

    fn data(&self) -> &'static FixtureData {
        FixtureData::get()
    }

    pub fn list_players(&self) -> Vec<Player> {
        self.data().players.clone()
    }

    pub fn get_player(&self, id: PlayerId) -> Option<Player> {
        self.data().players.iter().find(|p| p.id == id).cloned()
    }

    /// Players whose id is in `ids`, in listing order.
    pub fn get_players(&self, ids: &[PlayerId]) -> Vec<Player> {
        self.data()
            .players
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect()
    }

    pub fn get_gar_series(&self, id: PlayerId) -> Vec<GarData> {
        self.get_gar_series_batch(&[id])
    }

    pub fn get_gar_series_batch(&self, ids: &[PlayerId]) -> Vec<GarData> {
        self.data()
            .gar
            .iter()
            .filter(|point| ids.contains(&point.player_id))
            .cloned()
            .collect()
    }

    pub fn get_season_stats(&self, id: PlayerId) -> Vec<PlayerStat> {
        self.data()
            .stats
            .iter()
            .filter(|stat| stat.player_id == id)
            .cloned()
            .collect()
    }

    pub fn debug_player_stats(&self, id: PlayerId) -> Result<StatsDebugReport> {
        let stats = self.get_season_stats(id);
        let player_data = match self.get_player(id) {
            Some(player) if !stats.is_empty() => vec![raw_stats_row(&player, &stats)],
            _ => Vec::new(),
        };

        Ok(StatsDebugReport {
            player_id: id,
            player_exists: !stats.is_empty(),
            stats,
            player_data,
        })
    }
}

/// The `stats` table row these records correspond to, keyed by column.
fn raw_stats_row(player: &Player, stats: &[PlayerStat]) -> Map<String, Value> {
    let mut row = Map::new();
    row.insert("player_id".to_string(), Value::from(player.id.as_u32()));
    row.insert("position".to_string(), text_or_null(player.position));
    row.insert("prev_team".to_string(), Value::from(player.team.clone()));
    row.insert("contract_type".to_string(), text_or_null(player.contract_type));

    for season in Season::ALL {
        let stat = stats.iter().find(|stat| stat.season == season);
        for (column, _) in SEASON_STAT_COLUMNS {
            let value = stat.map_or(Value::Null, |stat| stat_column_value(stat, column));
            row.insert(season.column(column), value);
        }
    }
    row
}

fn text_or_null<T: ToString>(value: Option<T>) -> Value {
    value.map_or(Value::Null, |v| Value::from(v.to_string()))
}

fn stat_column_value(stat: &PlayerStat, column: &str) -> Value {
    fn json<T: Into<Value>>(value: Option<T>) -> Value {
        value.map_or(Value::Null, Into::into)
    }

    match column {
        "goals" => json(stat.goals),
        "a1" => json(stat.assists),
        "toi" => json(stat.time_on_ice),
        "giveaways" => json(stat.giveaways),
        "takeaways" => json(stat.takeaways),
        "icf" => json(stat.individual_corsi_for),
        "cf_pct" => json(stat.corsi_for_percentage),
        "xg" => json(stat.expected_goals),
        "ixg" => json(stat.individual_expected_goals),
        "xg_diff" => json(stat.expected_goals_differential),
        "gar" => json(stat.goals_above_replacement),
        "war" => json(stat.wins_above_replacement),
        "wins" => json(stat.wins),
        "losses" => json(stat.losses),
        "otl" => json(stat.ot_losses),
        "sv_pct" => json(stat.save_percentage),
        "gaa" => json(stat.goals_against_average),
        "shutouts" => json(stat.shutouts),
        "gsaa" => json(stat.goals_saved_above_average),
        "hdsv_pct" => json(stat.high_danger_save_percentage),
        "mdsv_pct" => json(stat.medium_danger_save_percentage),
        "ldsv_pct" => json(stat.low_danger_save_percentage),
        "qs_pct" => json(stat.quality_start_percentage),
        _ => Value::Null,
    }
}
