//! Draft pick display

use board_loader::{ProspectRecord, NOT_AVAILABLE};

use crate::config::RankConfig;
use crate::value::numeric_value;

/// Whether the pick column marks the prospect as undrafted
pub fn is_undrafted(record: &ProspectRecord, pick_column: &str, config: &RankConfig) -> bool {
    numeric_value(record, pick_column, config)
        .map(|pick| pick >= config.undrafted_threshold as f64)
        .unwrap_or(false)
}

/// Text shown for a prospect's draft pick
///
/// Picks at or above the undrafted threshold show the undrafted label; the
/// underlying number still drives sorting.
pub fn display_pick(record: &ProspectRecord, pick_column: &str, config: &RankConfig) -> String {
    if is_undrafted(record, pick_column, config) {
        return config.undrafted_label.clone();
    }

    match record.get(pick_column) {
        Some(raw) if !config.is_missing(raw) => raw.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undrafted_threshold() {
        let config = RankConfig::default();
        let drafted = ProspectRecord::from_pairs(&[("Pick", "58")]);
        let cutoff = ProspectRecord::from_pairs(&[("Pick", "59")]);
        let late = ProspectRecord::from_pairs(&[("Pick", "61")]);

        assert_eq!(display_pick(&drafted, "Pick", &config), "58");
        assert_eq!(display_pick(&cutoff, "Pick", &config), "Undrafted");
        assert_eq!(display_pick(&late, "Pick", &config), "Undrafted");
    }

    #[test]
    fn test_missing_pick_displays_na() {
        let config = RankConfig::default();
        assert_eq!(display_pick(&ProspectRecord::from_pairs(&[("Pick", "")]), "Pick", &config), "N/A");
        assert_eq!(display_pick(&ProspectRecord::from_pairs(&[]), "Pick", &config), "N/A");
    }

    #[test]
    fn test_companion_drives_undrafted_check() {
        let config = RankConfig::default();
        let record = ProspectRecord::from_pairs(&[("Pick", "UDFA"), ("Pick Number", "61")]);
        assert!(is_undrafted(&record, "Pick", &config));
        assert_eq!(display_pick(&record, "Pick", &config), "Undrafted");
    }
}
