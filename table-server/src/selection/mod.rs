//! Table Selection Policy Module
//!
//! Pure decision logic: given a party size, an optional free-text seating
//! preference and an optional action, pick exactly one table from the
//! catalog or report that none qualifies. No I/O happens here.

pub mod matcher;
pub mod selector;

pub use matcher::{ActionKind, match_action, match_preferred_type};
pub use selector::{PARTY_TYPE_THRESHOLD, Selection, SelectionMethod, select_table};
