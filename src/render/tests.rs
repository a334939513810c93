//! Unit tests for text rendering

use super::*;
use crate::cli::types::{ContractType, PlayerId, Position, Season, SortKey, SortOrder, StatView, ValueTier};
use crate::fixtures::FixtureStore;
use crate::storage::GarData;

fn ids(players: &[crate::storage::Player]) -> Vec<u32> {
    players.iter().map(|p| p.id.as_u32()).collect()
}

fn data_lines(rendered: &str) -> Vec<&str> {
    // Header and rule come first
    rendered.lines().skip(2).collect()
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    #[test]
    fn test_empty_filter_keeps_everyone() {
        let players = FixtureStore::new().list_players();
        let filtered = PlayerFilter::default().apply(players.clone());
        assert_eq!(filtered, players);
    }

    #[test]
    fn test_filter_by_position_and_team() {
        let players = FixtureStore::new().list_players();

        let defense = PlayerFilter::default()
            .position_opt(Some(Position::D))
            .apply(players.clone());
        assert_eq!(ids(&defense), vec![8, 6]);

        let devils = PlayerFilter::default()
            .team_opt(Some(" njd ".to_string()))
            .apply(players);
        assert_eq!(ids(&devils), vec![8, 9]);
    }

    #[test]
    fn test_filter_by_contract_and_tier() {
        let players = FixtureStore::new().list_players();

        let rfa = PlayerFilter::default()
            .contract_type_opt(Some(ContractType::RFA))
            .apply(players.clone());
        assert_eq!(ids(&rfa), vec![8, 7]);

        let bargains = PlayerFilter::default()
            .value_tier_opt(Some(ValueTier::Bargain))
            .apply(players.clone());
        assert_eq!(ids(&bargains), vec![3, 8, 7]);

        let rfa_bargain_forwards = PlayerFilter::default()
            .contract_type_opt(Some(ContractType::RFA))
            .value_tier_opt(Some(ValueTier::Bargain))
            .position_opt(Some(Position::C))
            .apply(players);
        assert_eq!(ids(&rfa_bargain_forwards), vec![7]);
    }

    #[test]
    fn test_filter_by_name_substring() {
        let players = FixtureStore::new().list_players();

        let hughes = PlayerFilter::default()
            .name_opt(Some("HUGHES".to_string()))
            .apply(players.clone());
        assert_eq!(ids(&hughes), vec![8]);

        // Blank search is ignored
        let all = PlayerFilter::default()
            .name_opt(Some("   ".to_string()))
            .apply(players.clone());
        assert_eq!(all.len(), players.len());
    }
}

#[cfg(test)]
mod sort_tests {
    use super::*;

    #[test]
    fn test_sort_by_age() {
        let mut players = FixtureStore::new().list_players();

        sort_players(&mut players, SortKey::Age, SortOrder::Asc);
        assert_eq!(&ids(&players)[..2], &[8, 7]);

        sort_players(&mut players, SortKey::Age, SortOrder::Desc);
        assert_eq!(ids(&players)[0], 5);
    }

    #[test]
    fn test_sort_by_name() {
        let mut players = FixtureStore::new().list_players();
        sort_players(&mut players, SortKey::Name, SortOrder::Asc);
        assert_eq!(players[0].name, "Aaron Ekblad");
        assert_eq!(players.last().unwrap().name, "Nikolaj Ehlers");
    }

    #[test]
    fn test_missing_values_sort_last_both_ways() {
        let mut players = FixtureStore::new().list_players();

        for order in [SortOrder::Asc, SortOrder::Desc] {
            sort_players(&mut players, SortKey::PointsPerGame, order);
            let tail: Vec<u32> = ids(&players)[8..].to_vec();
            assert!(tail.contains(&9) && tail.contains(&10), "{:?}", tail);
        }
    }

    #[test]
    fn test_sort_aav_matches_listing_order() {
        let listed = FixtureStore::new().list_players();
        let mut players = listed.clone();
        players.reverse();
        sort_players(&mut players, SortKey::Aav, SortOrder::Desc);
        assert_eq!(ids(&players), ids(&listed));
    }
}

#[cfg(test)]
mod table_tests {
    use super::*;

    #[test]
    fn test_text_table_alignment() {
        let mut table = TextTable::new(["A", "Long header"]);
        table.push_row(vec!["wide cell".to_string(), "x".to_string()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "A          Long header");
        assert_eq!(lines[1], "---------  -----------");
        assert_eq!(lines[2], "wide cell  x");
    }

    #[test]
    fn test_format_aav() {
        assert_eq!(format_aav(13.0), "$13.0M");
        assert_eq!(format_aav(7.0), "$7.0M");
        assert_eq!(format_aav(0.5), "$0.5M");
    }

    #[test]
    fn test_player_table_contents() {
        let players = FixtureStore::new().list_players();
        let rendered = render_player_table(&players);

        let first = data_lines(&rendered)[0];
        assert!(first.starts_with("1"));
        assert!(first.contains("Mitch Marner"));
        assert!(first.contains("$13.0M"));
        assert!(first.contains("8 yr"));
        assert!(first.contains("Fair Deal"));
        assert!(rendered.contains("Contract value aligns well with expected performance."));
    }

    #[test]
    fn test_empty_player_table() {
        assert_eq!(
            render_player_table(&[]),
            "No players match the current filters.\n"
        );
    }

    #[test]
    fn test_player_detail_goalie_vs_skater() {
        let store = FixtureStore::new();

        let goalie = store.get_player(PlayerId::new(9)).unwrap();
        let rendered = render_player_detail(&goalie);
        assert!(rendered.contains("Save %:         0.910"));
        assert!(rendered.contains("GAA:            2.53"));
        assert!(!rendered.contains("Points/GP"));

        let skater = store.get_player(PlayerId::new(1)).unwrap();
        let rendered = render_player_detail(&skater);
        assert!(rendered.starts_with("Mitch Marner (RW, TOR)"));
        assert!(rendered.contains("Points:         102"));
        assert!(!rendered.contains("Save %"));
    }
}

#[cfg(test)]
mod stat_table_tests {
    use super::*;

    #[test]
    fn test_seasons_newest_first() {
        let stats = FixtureStore::new().get_season_stats(PlayerId::new(1));
        let rendered = render_stat_table(&stats, false, StatView::Standard);
        let seasons: Vec<&str> = data_lines(&rendered)
            .iter()
            .map(|line| &line[..7])
            .collect();
        assert_eq!(seasons, vec!["2024-25", "2023-24", "2022-23"]);
    }

    #[test]
    fn test_incomplete_skater_rows_are_flagged() {
        let stats = FixtureStore::new().get_season_stats(PlayerId::new(8));
        let rendered = render_stat_table(&stats, false, StatView::Standard);
        let rows = data_lines(&rendered);

        let flagged: Vec<&&str> = rows
            .iter()
            .filter(|line| line.contains(stats::INCOMPLETE_MARKER))
            .collect();
        assert_eq!(flagged.len(), 1);
        assert!(flagged[0].starts_with("2022-23"));
        assert!(flagged[0].contains(" - "));
    }

    #[test]
    fn test_goalie_column_sets() {
        let stats = FixtureStore::new().get_season_stats(PlayerId::new(9));

        let standard = render_stat_table(&stats, true, StatView::Standard);
        let header = standard.lines().next().unwrap();
        assert!(header.contains("SV%") && header.contains("GAA") && header.contains("SO"));
        assert!(!header.contains("TOI"));
        assert!(standard.contains("0.910"));

        let advanced = render_stat_table(&stats, true, StatView::Advanced);
        let header = advanced.lines().next().unwrap();
        assert!(header.contains("GSAA") && header.contains("HDSV%") && header.contains("QS%"));
    }

    #[test]
    fn test_skater_advanced_columns() {
        let stats = FixtureStore::new().get_season_stats(PlayerId::new(3));
        let rendered = render_stat_table(&stats, false, StatView::Advanced);
        let header = rendered.lines().next().unwrap();
        for column in ["CF%", "iCF", "xG", "ixG", "GAR", "WAR", "TOI/GP"] {
            assert!(header.contains(column), "missing {}", column);
        }
        assert!(!rendered.contains(stats::INCOMPLETE_MARKER));
    }

    #[test]
    fn test_no_stats_hint() {
        let rendered = render_no_stats(PlayerId::new(42));
        assert!(rendered.starts_with("No stats available"));
        assert!(rendered.contains("debug-stats 42"));
    }
}

#[cfg(test)]
mod chart_tests {
    use super::*;

    fn point(season: Season, gar: f64) -> GarData {
        GarData {
            player_id: PlayerId::new(1),
            season,
            gar,
        }
    }

    #[test]
    fn test_gar_bars_are_signed_and_scaled() {
        let series = vec![
            point(Season::S2022_23, -5.0),
            point(Season::S2023_24, 0.0),
            point(Season::S2024_25, 10.0),
        ];
        let rendered = render_gar_trend(&series);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);

        let (left, right) = lines[0].split_once('|').unwrap();
        assert_eq!(left.matches('#').count(), 10);
        assert_eq!(right, "");

        let (left, right) = lines[1].split_once('|').unwrap();
        assert!(!left.contains('#'));
        assert_eq!(right, "");

        let (left, right) = lines[2].split_once('|').unwrap();
        assert!(!left.contains('#'));
        assert_eq!(right, "#".repeat(gar::BAR_WIDTH));
    }

    #[test]
    fn test_all_zero_series_has_no_bars() {
        let series = vec![point(Season::S2022_23, 0.0), point(Season::S2023_24, 0.0)];
        assert!(!render_gar_trend(&series).contains('#'));
        assert_eq!(render_gar_trend(&[]), "No GAR data available\n");
    }

    #[test]
    fn test_comparison_lists_each_player() {
        let store = FixtureStore::new();
        let ids = [PlayerId::new(9), PlayerId::new(1)];
        let players = store.get_players(&ids);
        let gar = store.get_gar_series_batch(&ids);

        let rendered = render_comparison(&players, &gar);
        let header = rendered.lines().next().unwrap();
        assert!(header.contains("Mitch Marner") && header.contains("Jake Allen"));

        let gar_row = rendered
            .lines()
            .find(|line| line.starts_with("GAR 2022-23"))
            .unwrap();
        assert!(gar_row.contains("17.8") && gar_row.contains("-3.2"));

        assert_eq!(render_comparison(&[], &[]), "No matching players to compare.\n");
    }
}
