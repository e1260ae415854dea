//! Header extraction from delimited files
//!
//! Only the first record is read; rows are never touched.

use colcmp_core::errors::{ExError, ExErrorKind};
use colcmp_core::Table;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Read the header row of `path` as a [`Table`].
///
/// An empty file yields a table with no columns.
///
/// # Errors
///
/// - `Io`: the file cannot be opened or read
/// - `Parse`: the header row is not valid UTF-8 or not valid CSV
pub fn read_header(path: &Path, delimiter: u8) -> Result<Table, ExError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(e, path))?;

    let mut columns: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(e, path))?
        .iter()
        .map(str::to_string)
        .collect();

    if let Some(first) = columns.first_mut() {
        if let Some(stripped) = first.strip_prefix(UTF8_BOM) {
            *first = stripped.to_string();
        }
    }

    tracing::debug!(
        path = %path.display(),
        column_count = columns.len(),
        "read header"
    );

    Ok(Table::new(columns).with_source(path.display().to_string()))
}

fn csv_error(err: csv::Error, path: &Path) -> ExError {
    let kind = match err.kind() {
        csv::ErrorKind::Io(_) => ExErrorKind::Io,
        _ => ExErrorKind::Parse,
    };
    ExError::new(kind)
        .with_op("read_header")
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}
