//! Ordering properties across the rank engine

use board_loader::ProspectRecord;
use proptest::prelude::*;

use crate::{display_pick, score, sort_records, RankConfig, SortKey, SortState};

fn names(records: &[ProspectRecord]) -> Vec<String> {
    records.iter().map(|r| r.value_or_na("Name").to_string()).collect()
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_pick_sort_places_empty_after_undrafted() {
        let records = vec![
            ProspectRecord::from_pairs(&[("Name", "A"), ("Pick", "5")]),
            ProspectRecord::from_pairs(&[("Name", "B"), ("Pick", "")]),
            ProspectRecord::from_pairs(&[("Name", "C"), ("Pick", "60")]),
        ];
        let config = RankConfig::default();
        let sorted = sort_records(&records, &SortState::new(SortKey::Column("Pick".to_string())), &config);

        assert_eq!(names(&sorted), vec!["A", "C", "B"]);
        assert_eq!(display_pick(&sorted[1], "Pick", &config), "Undrafted");
        assert_eq!(display_pick(&sorted[0], "Pick", &config), "5");
    }

    #[test]
    fn test_undrafted_sorts_after_every_drafted_pick() {
        let records: Vec<ProspectRecord> = ["61", "3", "59", "58", "1"]
            .into_iter()
            .enumerate()
            .map(|(i, pick)| {
                let name = format!("P{i}");
                ProspectRecord::from_pairs(&[("Name", name.as_str()), ("Pick", pick)])
            })
            .collect();
        let config = RankConfig::default();
        let sorted = sort_records(&records, &SortState::new(SortKey::Column("Pick".to_string())), &config);

        let labels: Vec<String> = sorted.iter().map(|r| display_pick(r, "Pick", &config)).collect();
        assert_eq!(labels, vec!["1", "3", "58", "Undrafted", "Undrafted"]);
    }

    #[test]
    fn test_consensus_example_score() {
        assert!((score(100.0, 10.0, 0.64) - 72.8).abs() < 1e-9);
    }
}

fn arb_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (-50i32..50).prop_map(|v| v.to_string()),
        1 => prop::sample::select(vec!["", "N/A", "NA", "TBD"]).prop_map(|s| s.to_string()),
    ]
}

fn arb_board() -> impl Strategy<Value = Vec<ProspectRecord>> {
    prop::collection::vec(arb_cell(), 0..30).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| {
                let name = format!("P{i}");
                ProspectRecord::from_pairs(&[("Name", name.as_str()), ("Stat", cell.as_str())])
            })
            .collect()
    })
}

fn is_present(record: &ProspectRecord) -> bool {
    record.get("Stat").and_then(|v| v.parse::<f64>().ok()).is_some()
}

proptest! {
    #[test]
    fn prop_missing_values_sort_last_in_both_directions(records in arb_board(), descending in any::<bool>()) {
        let config = RankConfig::default();
        let key = SortKey::Column("Stat".to_string());
        let sort = if descending { SortState::descending(key) } else { SortState::new(key) };

        let sorted = sort_records(&records, &sort, &config);
        let first_missing = sorted.iter().position(|r| !is_present(r)).unwrap_or(sorted.len());
        prop_assert!(sorted[first_missing..].iter().all(|r| !is_present(r)));
    }

    #[test]
    fn prop_toggled_direction_reverses_present_values(records in arb_board()) {
        let config = RankConfig::default();
        let mut sort = SortState::new(SortKey::Column("Stat".to_string()));
        let ascending = sort_records(&records, &sort, &config);
        sort.toggle();
        let descending = sort_records(&records, &sort, &config);

        let present_stats = |sorted: &[ProspectRecord]| -> Vec<f64> {
            sorted
                .iter()
                .take_while(|r| is_present(r))
                .filter_map(|r| r.get("Stat").and_then(|v| v.parse::<f64>().ok()))
                .collect()
        };
        let mut reversed = present_stats(&descending);
        reversed.reverse();
        prop_assert_eq!(present_stats(&ascending), reversed);

        // Missing rows trail in input order whichever way a numeric column is sorted
        if records.iter().any(is_present) {
            let missing: Vec<String> = names(&records.iter().filter(|r| !is_present(r)).cloned().collect::<Vec<_>>());
            let tail = |sorted: &[ProspectRecord]| names(&sorted[sorted.len() - missing.len()..]);
            prop_assert_eq!(tail(&ascending), missing.clone());
            prop_assert_eq!(tail(&descending), missing);
        }
    }

    #[test]
    fn prop_descending_reverses_distinct_present_values(values in prop::collection::hash_set(-500i32..500, 0..30)) {
        let records: Vec<ProspectRecord> = values
            .iter()
            .map(|v| {
                let (name, stat) = (format!("P{v}"), v.to_string());
                ProspectRecord::from_pairs(&[("Name", name.as_str()), ("Stat", stat.as_str())])
            })
            .collect();
        let config = RankConfig::default();
        let key = SortKey::Column("Stat".to_string());

        let asc = sort_records(&records, &SortState::new(key.clone()), &config);
        let mut desc = sort_records(&records, &SortState::descending(key), &config);
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn prop_score_increases_with_inclusion(
        min_rank in 2.0f64..100.0,
        avg_fraction in 0.0f64..1.0,
        low in 0.0f64..1.0,
        bump in 0.001f64..1.0,
    ) {
        let avg_rank = 1.0 + avg_fraction * (min_rank - 1.0);
        let high = (low + bump).min(1.0);
        prop_assume!(high > low);
        prop_assert!(score(min_rank, avg_rank, high) > score(min_rank, avg_rank, low));
    }

    #[test]
    fn prop_score_increases_as_avg_rank_improves(
        min_rank in 2.0f64..100.0,
        worse_fraction in 0.01f64..1.0,
        improvement in 0.01f64..1.0,
        inclusion in 0.01f64..1.0,
    ) {
        let worse = 1.0 + worse_fraction * (min_rank - 1.0);
        let better = worse - improvement * (worse - 1.0);
        prop_assume!(better < worse);
        prop_assert!(score(min_rank, better, inclusion) > score(min_rank, worse, inclusion));
    }
}
