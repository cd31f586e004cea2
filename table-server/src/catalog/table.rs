//! Table Model

use serde::{Deserialize, Serialize};

/// Seating area of a table (桌台区域)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    Inside,
    Window,
    Outside,
    Party,
}

impl TableType {
    pub const ALL: [TableType; 4] = [
        TableType::Inside,
        TableType::Window,
        TableType::Outside,
        TableType::Party,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableType::Inside => "inside",
            TableType::Window => "window",
            TableType::Outside => "outside",
            TableType::Party => "party",
        }
    }

    /// Parse a query-parameter value ("inside", "window", ...)
    pub fn parse(value: &str) -> Option<TableType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }

    /// Guest phrases that indicate this seating area.
    ///
    /// Dutch first, English alongside - reservations arrive in both.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            TableType::Inside => &["binnen", "inside"],
            TableType::Window => &["raam", "window"],
            TableType::Outside => &["terras", "buiten", "outside"],
            TableType::Party => &["party", "feest"],
        }
    }
}

impl std::fmt::Display for TableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table entity (桌台)
///
/// `external_id` is the Google calendar the scheduling integration books
/// against; it is passed through verbatim and never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub name: String,
    pub capacity: u32,
    pub external_id: String,
    #[serde(rename = "type")]
    pub table_type: TableType,
    pub priority: u32,
}

/// Listing row for cancel/reschedule flows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRef {
    pub name: String,
    pub external_id: String,
    #[serde(rename = "type")]
    pub table_type: TableType,
}

impl From<&Table> for TableRef {
    fn from(table: &Table) -> Self {
        Self {
            name: table.name.clone(),
            external_id: table.external_id.clone(),
            table_type: table.table_type,
        }
    }
}

/// Diagnostic row for the no-suitable-table response
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    pub name: String,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub table_type: TableType,
}

impl From<&Table> for TableSnapshot {
    fn from(table: &Table) -> Self {
        Self {
            name: table.name.clone(),
            capacity: table.capacity,
            table_type: table.table_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(TableType::parse("outside"), Some(TableType::Outside));
        assert_eq!(TableType::parse("party"), Some(TableType::Party));
        assert_eq!(TableType::parse("patio"), None);
    }

    #[test]
    fn test_type_serializes_lowercase() {
        let json = serde_json::to_string(&TableType::Window).unwrap();
        assert_eq!(json, "\"window\"");
    }
}
