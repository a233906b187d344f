//! Rank of a prospect within its own role group

use board_loader::{BoardSchema, ProspectRecord};
use prospect_registry::{filter, FilterState, Role};
use std::collections::HashMap;

use crate::config::RankConfig;
use crate::sort::{rank, SortState};

/// Position of a prospect among prospects sharing its role
///
/// The comparison set is always the full board re-filtered to the role,
/// whatever filter the view currently shows. Returns `None` when the
/// prospect is unknown or has no recognised role.
pub fn role_rank(
    all_records: &[ProspectRecord],
    name: &str,
    sort: Option<&SortState>,
    config: &RankConfig,
    schema: &BoardSchema,
) -> Option<usize> {
    let target = all_records.iter().find(|r| r.get(&schema.name) == Some(name))?;
    let role = target.get(&schema.role).and_then(Role::normalize)?;

    let same_role = filter(all_records, &FilterState::new().with_role(Some(role)), schema);
    rank(&same_role, sort, config)
        .into_iter()
        .find(|ranked| ranked.record.get(&schema.name) == Some(name))
        .map(|ranked| ranked.position)
}

/// Role-group positions for every prospect with a recognised role
pub fn role_ranks(
    all_records: &[ProspectRecord],
    sort: Option<&SortState>,
    config: &RankConfig,
    schema: &BoardSchema,
) -> HashMap<String, usize> {
    let mut positions = HashMap::new();

    for role in [Role::Guard, Role::Wing, Role::Big] {
        let same_role = filter(all_records, &FilterState::new().with_role(Some(role)), schema);
        for ranked in rank(&same_role, sort, config) {
            if let Some(name) = ranked.record.get(&schema.name) {
                positions.entry(name.to_string()).or_insert(ranked.position);
            }
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortKey;

    fn board() -> Vec<ProspectRecord> {
        vec![
            ProspectRecord::from_pairs(&[("Name", "Cooper Flagg"), ("Role", "SF"), ("Pick", "1")]),
            ProspectRecord::from_pairs(&[("Name", "Dylan Harper"), ("Role", "SG"), ("Pick", "2")]),
            ProspectRecord::from_pairs(&[("Name", "VJ Edgecombe"), ("Role", "SG"), ("Pick", "3")]),
            ProspectRecord::from_pairs(&[("Name", "Kon Knueppel"), ("Role", "Wing"), ("Pick", "4")]),
            ProspectRecord::from_pairs(&[("Name", "Mystery Man"), ("Pick", "30")]),
        ]
    }

    #[test]
    fn test_role_rank_ignores_view_filter() {
        let schema = BoardSchema::default();
        let config = RankConfig::default();
        let sort = SortState::new(SortKey::Column("Pick".to_string()));

        assert_eq!(role_rank(&board(), "VJ Edgecombe", Some(&sort), &config, &schema), Some(2));
        assert_eq!(role_rank(&board(), "Kon Knueppel", Some(&sort), &config, &schema), Some(2));
        assert_eq!(role_rank(&board(), "Cooper Flagg", Some(&sort), &config, &schema), Some(1));
    }

    #[test]
    fn test_role_rank_follows_sort_direction() {
        let schema = BoardSchema::default();
        let config = RankConfig::default();
        let sort = SortState::descending(SortKey::Column("Pick".to_string()));
        assert_eq!(role_rank(&board(), "VJ Edgecombe", Some(&sort), &config, &schema), Some(1));
    }

    #[test]
    fn test_unknown_or_roleless_prospect() {
        let schema = BoardSchema::default();
        let config = RankConfig::default();
        assert_eq!(role_rank(&board(), "Mystery Man", None, &config, &schema), None);
        assert_eq!(role_rank(&board(), "Nobody", None, &config, &schema), None);
    }

    #[test]
    fn test_role_ranks_for_whole_board() {
        let schema = BoardSchema::default();
        let positions = role_ranks(&board(), None, &RankConfig::default(), &schema);
        assert_eq!(positions.get("Dylan Harper"), Some(&1));
        assert_eq!(positions.get("VJ Edgecombe"), Some(&2));
        assert_eq!(positions.get("Kon Knueppel"), Some(&2));
        assert_eq!(positions.get("Mystery Man"), None);
    }
}
