//! Comparison inputs and outputs.
//!
//! Collections keep input order for tables and sorted `Vec`s for columns so
//! that serialized output is deterministic.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeSet;

/// Knobs for a single comparison call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Display names, one per table. `None` means `df1`, `df2`, ...
    pub names: Option<Vec<String>>,
    /// Print the human-readable report to stdout after computing
    pub emit_report: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            names: None,
            emit_report: true,
        }
    }
}

impl CompareOptions {
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn without_report(mut self) -> Self {
        self.emit_report = false;
        self
    }
}

/// Columns found only in one named table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UniqueColumns {
    /// Display name of the table
    pub name: String,
    /// Sorted columns present in this table and in no other
    pub columns: Vec<String>,
}

/// The result of comparing column sets across tables.
///
/// Behaves like an insertion-ordered map from table name to its unique
/// columns, and serializes as a JSON object with keys in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnComparison {
    entries: Vec<UniqueColumns>,
    shared: Vec<String>,
}

impl ColumnComparison {
    pub(crate) fn new(entries: Vec<UniqueColumns>, shared: Vec<String>) -> Self {
        Self { entries, shared }
    }

    /// Unique columns for the named table
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.columns.as_slice())
    }

    /// Table names in input order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.columns.as_slice()))
    }

    pub fn entries(&self) -> &[UniqueColumns] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<UniqueColumns> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted columns that appear in two or more tables
    pub fn shared_columns(&self) -> &[String] {
        &self.shared
    }

    /// Total number of unique columns across all tables
    pub fn unique_total(&self) -> usize {
        self.entries.iter().map(|e| e.columns.len()).sum()
    }

    /// Sorted union of every column seen in any table
    pub fn all_columns(&self) -> Vec<String> {
        let all: BTreeSet<&String> = self
            .entries
            .iter()
            .flat_map(|e| e.columns.iter())
            .chain(self.shared.iter())
            .collect();
        all.into_iter().cloned().collect()
    }
}

impl Serialize for ColumnComparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.columns)?;
        }
        map.end()
    }
}
