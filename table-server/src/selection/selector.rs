//! Table Selector
//!
//! The selection policy itself. Resolution order for a request that
//! survives validation:
//!
//! 1. exact match on the table name,
//! 2. keyword-matched type (or the party type for large groups), tightest
//!    fit within that type,
//! 3. default cascade inside → window → outside, tightest fit,
//! 4. any candidate, lowest priority then lowest capacity.
//!
//! Ties always go to the table that appears earlier in the catalog.

use serde::Serialize;

use super::matcher::match_preferred_type;
use crate::catalog::{Table, TableCatalog, TableType};

/// Parties of this size or larger default to the party area when the
/// preference text names no other type.
pub const PARTY_TYPE_THRESHOLD: u32 = 6;

/// How the winning table was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    ExactMatch,
    SmartSelection,
}

/// Outcome of running the policy over the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    Chosen {
        table: &'a Table,
        method: SelectionMethod,
    },
    NoneSuitable,
}

/// Pick the best table for a party, or report that none fits.
///
/// Reads the catalog, allocates only the transient candidate list, and is
/// deterministic for a given catalog.
pub fn select_table<'a>(
    catalog: &'a TableCatalog,
    party_size: u32,
    preference: Option<&str>,
) -> Selection<'a> {
    // Candidates keep catalog order; all later tie-breaks rely on that.
    let candidates: Vec<&Table> = catalog
        .tables()
        .iter()
        .filter(|t| t.capacity >= party_size)
        .collect();

    if candidates.is_empty() {
        return Selection::NoneSuitable;
    }

    // 1. Exact name match
    if let Some(pref) = preference
        && let Some(table) = candidates.iter().copied().find(|t| t.name == pref)
    {
        return Selection::Chosen {
            table,
            method: SelectionMethod::ExactMatch,
        };
    }

    // 2. Keyword-matched type; large groups imply the party area when the
    //    preference text names nothing. A type with no candidates falls
    //    through to the cascade.
    let preferred_type = preference
        .and_then(match_preferred_type)
        .or_else(|| (party_size >= PARTY_TYPE_THRESHOLD).then_some(TableType::Party));
    if let Some(table_type) = preferred_type
        && let Some(table) = tightest_fit(&candidates, table_type)
    {
        return Selection::Chosen {
            table,
            method: SelectionMethod::SmartSelection,
        };
    }

    // 3. Default cascade
    for table_type in [TableType::Inside, TableType::Window, TableType::Outside] {
        if let Some(table) = tightest_fit(&candidates, table_type) {
            return Selection::Chosen {
                table,
                method: SelectionMethod::SmartSelection,
            };
        }
    }

    // 4. Final fallback over all candidates
    let table = candidates
        .iter()
        .enumerate()
        .min_by_key(|(idx, t)| (t.priority, t.capacity, *idx))
        .map(|(_, t)| *t)
        .expect("candidates checked non-empty above");
    Selection::Chosen {
        table,
        method: SelectionMethod::SmartSelection,
    }
}

/// Smallest-capacity candidate of the given type; catalog order breaks ties.
fn tightest_fit<'a>(candidates: &[&'a Table], table_type: TableType) -> Option<&'a Table> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, t)| t.table_type == table_type)
        .min_by_key(|(idx, t)| (t.capacity, *idx))
        .map(|(_, t)| *t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TableCatalog;

    fn make_table(name: &str, capacity: u32, table_type: TableType, priority: u32) -> Table {
        Table {
            name: name.to_string(),
            capacity,
            external_id: format!("{}@group.calendar.google.com", name.to_lowercase()),
            table_type,
            priority,
        }
    }

    fn make_catalog(tables: Vec<Table>) -> TableCatalog {
        TableCatalog::from_tables(tables).unwrap()
    }

    fn chosen_name<'a>(selection: &Selection<'a>) -> &'a str {
        match selection {
            Selection::Chosen { table, .. } => &table.name,
            Selection::NoneSuitable => panic!("expected a chosen table"),
        }
    }

    #[test]
    fn test_exact_name_match_wins() {
        let catalog = make_catalog(vec![
            make_table("Tafel 1", 4, TableType::Inside, 1),
            make_table("Tafel Raam", 10, TableType::Window, 2),
        ]);
        let selection = select_table(&catalog, 4, Some("Tafel Raam"));
        assert_eq!(chosen_name(&selection), "Tafel Raam");
        assert!(matches!(
            selection,
            Selection::Chosen {
                method: SelectionMethod::ExactMatch,
                ..
            }
        ));
    }

    #[test]
    fn test_exact_match_skipped_when_table_too_small() {
        // The named table seats 2; the 4-person request must not get it.
        let catalog = make_catalog(vec![
            make_table("Tafel 1", 2, TableType::Inside, 1),
            make_table("Tafel 2", 4, TableType::Inside, 1),
        ]);
        let selection = select_table(&catalog, 4, Some("Tafel 1"));
        assert_eq!(chosen_name(&selection), "Tafel 2");
    }

    #[test]
    fn test_keyword_picks_tightest_fit_of_type() {
        let catalog = make_catalog(vec![
            make_table("Terras Groot", 8, TableType::Outside, 1),
            make_table("Terras Klein", 4, TableType::Outside, 1),
        ]);
        let selection = select_table(&catalog, 2, Some("graag terras"));
        assert_eq!(chosen_name(&selection), "Terras Klein");
    }

    #[test]
    fn test_keyword_type_without_candidates_falls_through() {
        // Outside requested but nothing outside seats 6 - cascade takes over.
        let catalog = make_catalog(vec![
            make_table("Terras", 4, TableType::Outside, 1),
            make_table("Zaal", 8, TableType::Inside, 1),
        ]);
        let selection = select_table(&catalog, 6, Some("buiten"));
        assert_eq!(chosen_name(&selection), "Zaal");
    }

    #[test]
    fn test_default_cascade_prefers_inside() {
        let catalog = make_catalog(vec![
            make_table("Terras", 4, TableType::Outside, 1),
            make_table("Raam", 4, TableType::Window, 1),
            make_table("Binnen", 4, TableType::Inside, 1),
        ]);
        let selection = select_table(&catalog, 2, None);
        assert_eq!(chosen_name(&selection), "Binnen");
    }

    #[test]
    fn test_cascade_falls_back_to_window_then_outside() {
        let catalog = make_catalog(vec![
            make_table("Binnen", 2, TableType::Inside, 1),
            make_table("Raam", 6, TableType::Window, 1),
            make_table("Terras", 8, TableType::Outside, 1),
        ]);
        assert_eq!(chosen_name(&select_table(&catalog, 4, None)), "Raam");
        assert_eq!(chosen_name(&select_table(&catalog, 7, None)), "Terras");
    }

    #[test]
    fn test_large_party_defaults_to_party_type() {
        let catalog = make_catalog(vec![
            make_table("Raam", 10, TableType::Window, 1),
            make_table("Party Tafel", 8, TableType::Party, 4),
        ]);
        let selection = select_table(&catalog, PARTY_TYPE_THRESHOLD, None);
        assert_eq!(chosen_name(&selection), "Party Tafel");
    }

    #[test]
    fn test_explicit_keyword_beats_party_size_heuristic() {
        let catalog = make_catalog(vec![
            make_table("Terras", 10, TableType::Outside, 1),
            make_table("Party Tafel", 10, TableType::Party, 1),
        ]);
        let selection = select_table(&catalog, 8, Some("terras"));
        assert_eq!(chosen_name(&selection), "Terras");
    }

    #[test]
    fn test_final_fallback_orders_by_priority_then_capacity() {
        // Only party tables and a small group: cascade finds nothing,
        // the fallback picks by (priority, capacity).
        let catalog = make_catalog(vec![
            make_table("Zaal Groot", 12, TableType::Party, 2),
            make_table("Zaal Klein", 8, TableType::Party, 1),
        ]);
        let selection = select_table(&catalog, 2, None);
        assert_eq!(chosen_name(&selection), "Zaal Klein");
    }

    #[test]
    fn test_ties_go_to_catalog_order() {
        let catalog = make_catalog(vec![
            make_table("Eerste", 4, TableType::Inside, 1),
            make_table("Tweede", 4, TableType::Inside, 1),
        ]);
        assert_eq!(chosen_name(&select_table(&catalog, 4, None)), "Eerste");
    }

    #[test]
    fn test_no_candidate_at_all() {
        let catalog = make_catalog(vec![make_table("Tafel 1", 2, TableType::Inside, 1)]);
        assert_eq!(select_table(&catalog, 10, None), Selection::NoneSuitable);
    }

    #[test]
    fn test_selection_never_under_capacity() {
        let catalog = TableCatalog::builtin().unwrap();
        for party_size in 1..=12 {
            match select_table(&catalog, party_size, None) {
                Selection::Chosen { table, .. } => assert!(table.capacity >= party_size),
                Selection::NoneSuitable => assert!(party_size > 10),
            }
        }
    }

    #[test]
    fn test_selection_is_deterministic() {
        let catalog = TableCatalog::builtin().unwrap();
        let first = select_table(&catalog, 4, Some("raam"));
        let second = select_table(&catalog, 4, Some("raam"));
        assert_eq!(chosen_name(&first), chosen_name(&second));
    }
}
