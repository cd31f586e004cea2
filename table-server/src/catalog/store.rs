//! Table Catalog
//!
//! Loading and read access for the static table list. The catalog is
//! validated once at startup and never mutated afterwards, so handlers can
//! share it behind an `Arc` without locking.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

use super::table::{Table, TableRef, TableSnapshot, TableType};
use crate::core::Config;

/// Default venue layout, compiled in. A deployment overrides it by
/// pointing `TABLES_FILE` at its own JSON file of the same shape.
const DEFAULT_TABLES: &str = include_str!("../../config/tables.default.json");

/// Read-only table catalog, in configuration order.
///
/// Catalog order is meaningful: every selection rule breaks ties in favor
/// of the table that appears earlier in the list.
#[derive(Debug, Clone)]
pub struct TableCatalog {
    tables: Vec<Table>,
}

impl TableCatalog {
    /// Load the catalog according to the server config.
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let catalog = match &config.tables_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::builtin()?,
        };
        tracing::info!(tables = catalog.len(), "Table catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog from a JSON file (array of table records).
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read table config {}", path.display()))?;
        let tables: Vec<Table> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid table config {}", path.display()))?;
        Self::from_tables(tables)
    }

    /// The compiled-in default layout.
    pub fn builtin() -> anyhow::Result<Self> {
        let tables: Vec<Table> =
            serde_json::from_str(DEFAULT_TABLES).context("Built-in table config is invalid")?;
        Self::from_tables(tables)
    }

    /// Build a catalog from records, checking the configuration invariants:
    /// at least one table, unique names and calendar ids, positive
    /// capacity and priority.
    pub fn from_tables(tables: Vec<Table>) -> anyhow::Result<Self> {
        ensure!(!tables.is_empty(), "Table config contains no tables");

        let mut names = HashSet::new();
        let mut external_ids = HashSet::new();
        for table in &tables {
            ensure!(names.insert(table.name.as_str()), "Duplicate table name: {}", table.name);
            ensure!(
                external_ids.insert(table.external_id.as_str()),
                "Duplicate calendar id on table: {}",
                table.name
            );
            ensure!(table.capacity >= 1, "Table {} has zero capacity", table.name);
            ensure!(table.priority >= 1, "Table {} has zero priority", table.name);
        }

        Ok(Self { tables })
    }

    /// All tables, in configuration order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Exact match on the opaque calendar id.
    pub fn find_by_external_id(&self, external_id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.external_id == external_id)
    }

    /// Tables matching all supplied filters, in configuration order.
    pub fn filter(&self, filter: &ListFilter) -> Vec<Table> {
        self.tables.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    /// Count of tables per seating area over the full catalog.
    pub fn summary(&self) -> TypeSummary {
        let mut summary = TypeSummary::default();
        for table in &self.tables {
            match table.table_type {
                TableType::Inside => summary.inside += 1,
                TableType::Window => summary.window += 1,
                TableType::Outside => summary.outside += 1,
                TableType::Party => summary.party += 1,
            }
        }
        summary
    }

    /// `{name, externalId, type}` projection of the full catalog.
    pub fn refs(&self) -> Vec<TableRef> {
        self.tables.iter().map(TableRef::from).collect()
    }

    /// `{name, capacity, type}` projection of the full catalog.
    pub fn snapshot(&self) -> Vec<TableSnapshot> {
        self.tables.iter().map(TableSnapshot::from).collect()
    }
}

/// Listing filters (AND semantics); `None` means no constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFilter {
    pub table_type: Option<TableType>,
    pub min_capacity: Option<u32>,
    pub max_capacity: Option<u32>,
}

impl ListFilter {
    pub fn matches(&self, table: &Table) -> bool {
        self.table_type.is_none_or(|t| table.table_type == t)
            && self.min_capacity.is_none_or(|min| table.capacity >= min)
            && self.max_capacity.is_none_or(|max| table.capacity <= max)
    }
}

/// Per-type table counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSummary {
    pub inside: usize,
    pub window: usize,
    pub outside: usize,
    pub party: usize,
}

impl TypeSummary {
    pub fn total(&self) -> usize {
        self.inside + self.window + self.outside + self.party
    }
}
