use serde::{Deserialize, Serialize};

/// Anything that can hand the comparator an ordered list of column names
///
/// Only the header matters to the comparator: rows, dtypes and indices
/// belong to whoever owns the table.
pub trait ColumnSource {
    /// Column names in table order (duplicates allowed)
    fn column_names(&self) -> Vec<&str>;
}

/// Table - an in-memory header of a tabular dataset
///
/// Built by callers that only have the header row at hand, such as the CLI
/// reading the first record of a delimited file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names in header order
    pub columns: Vec<String>,

    /// Where the header came from (file path, query name), for diagnostics only
    pub source: Option<String>,
}

impl Table {
    /// Create a table from a list of column names
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            source: None,
        }
    }

    /// Attach the origin of this header
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl ColumnSource for Table {
    fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(String::as_str).collect()
    }
}

impl<T: ColumnSource + ?Sized> ColumnSource for &T {
    fn column_names(&self) -> Vec<&str> {
        (**self).column_names()
    }
}

impl ColumnSource for [String] {
    fn column_names(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl ColumnSource for Vec<String> {
    fn column_names(&self) -> Vec<&str> {
        self.as_slice().column_names()
    }
}

impl ColumnSource for [&str] {
    fn column_names(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl ColumnSource for Vec<&str> {
    fn column_names(&self) -> Vec<&str> {
        self.clone()
    }
}
