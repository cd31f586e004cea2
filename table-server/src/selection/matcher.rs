//! Preference and Action Matchers
//!
//! Keyword matching for the free-text fields of a selection request.
//! Guests type Dutch or English; matching is case-insensitive substring
//! containment so "Graag een tafel op het terras" still lands outside.

use serde::Serialize;

use crate::catalog::TableType;

/// Actions that bypass table selection entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Cancel,
    Reschedule,
}

const CANCEL_KEYWORDS: &[&str] = &["annuleren", "cancel"];
const RESCHEDULE_KEYWORDS: &[&str] = &["verzetten", "verplaatsen", "reschedule"];

/// Recognize a cancel/reschedule action in the `actionType` field.
///
/// Unrecognized text means a normal selection request.
pub fn match_action(action: &str) -> Option<ActionKind> {
    let action = action.to_lowercase();
    if CANCEL_KEYWORDS.iter().any(|k| action.contains(k)) {
        Some(ActionKind::Cancel)
    } else if RESCHEDULE_KEYWORDS.iter().any(|k| action.contains(k)) {
        Some(ActionKind::Reschedule)
    } else {
        None
    }
}

/// Map a seating preference to a table type via the per-type keyword sets.
///
/// Checked outside → window → inside → party, first hit wins. Exact table
/// names are resolved before this runs, so "Tafel Raam" never gets here.
pub fn match_preferred_type(preference: &str) -> Option<TableType> {
    let preference = preference.to_lowercase();
    const ORDER: [TableType; 4] = [
        TableType::Outside,
        TableType::Window,
        TableType::Inside,
        TableType::Party,
    ];
    ORDER
        .into_iter()
        .find(|t| t.keywords().iter().any(|k| preference.contains(k)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_action_dutch_cancel() {
        assert_eq!(match_action("annuleren"), Some(ActionKind::Cancel));
        assert_eq!(match_action("Graag annuleren"), Some(ActionKind::Cancel));
    }

    #[test]
    fn test_match_action_reschedule() {
        assert_eq!(match_action("verzetten"), Some(ActionKind::Reschedule));
        assert_eq!(match_action("Reschedule please"), Some(ActionKind::Reschedule));
    }

    #[test]
    fn test_unknown_action_is_normal_selection() {
        assert_eq!(match_action("reserveren"), None);
        assert_eq!(match_action(""), None);
    }

    #[test]
    fn test_outside_keywords() {
        assert_eq!(match_preferred_type("terras"), Some(TableType::Outside));
        assert_eq!(match_preferred_type("lekker BUITEN zitten"), Some(TableType::Outside));
        assert_eq!(match_preferred_type("outside please"), Some(TableType::Outside));
    }

    #[test]
    fn test_window_and_inside_keywords() {
        assert_eq!(match_preferred_type("aan het raam"), Some(TableType::Window));
        assert_eq!(match_preferred_type("binnen"), Some(TableType::Inside));
    }

    #[test]
    fn test_party_keywords() {
        assert_eq!(match_preferred_type("feestje"), Some(TableType::Party));
        assert_eq!(match_preferred_type("party"), Some(TableType::Party));
    }

    #[test]
    fn test_no_keyword_matches() {
        assert_eq!(match_preferred_type("maakt niet uit"), None);
    }

    #[test]
    fn test_outside_wins_over_window_when_both_present() {
        // "terras" appears before "raam" in the matching order
        assert_eq!(match_preferred_type("terras of raam"), Some(TableType::Outside));
    }
}
