//! Column set comparison engine.
//!
//! The core entry point is [`compare`], which validates its inputs, computes
//! a [`ColumnComparison`] and optionally prints the report.

use crate::compare::model::{ColumnComparison, CompareOptions, UniqueColumns};
use crate::compare::report::write_report;
use crate::errors::{ComparisonError, Result};
use crate::model::ColumnSource;
use crate::{log_op_end, log_op_error, log_op_start};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Name synthesized for the table at `index` (0-based) when none is given.
pub fn default_name(index: usize) -> String {
    format!("df{}", index + 1)
}

/// Check preconditions and produce the effective display names.
///
/// # Errors
///
/// - `TooFewDatasets`: `count < 2`
/// - `NameCountMismatch`: explicit names given but `names.len() != count`
/// - `DuplicateName`: the same explicit name appears twice
pub fn resolve_names(count: usize, names: Option<&[String]>) -> Result<Vec<String>> {
    if count < 2 {
        return Err(ComparisonError::TooFewDatasets { count });
    }

    let Some(names) = names else {
        return Ok((0..count).map(default_name).collect());
    };

    if names.len() != count {
        return Err(ComparisonError::NameCountMismatch {
            names: names.len(),
            datasets: count,
        });
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(ComparisonError::DuplicateName { name: name.clone() });
        }
    }

    Ok(names.to_vec())
}

/// Compute unique columns per table without any output side effect.
///
/// A column is unique to table `i` when it is in `i`'s column set and in the
/// union of every other table's set it is absent. That is the same as
/// appearing in exactly one table, which is how it is computed here: one
/// pass to count, per column, how many tables contain it.
///
/// # Errors
///
/// See [`resolve_names`].
pub fn compute<D: ColumnSource>(
    datasets: &[D],
    names: Option<&[String]>,
) -> Result<ColumnComparison> {
    let names = resolve_names(datasets.len(), names)?;

    let column_sets: Vec<BTreeSet<&str>> = datasets
        .iter()
        .map(|d| d.column_names().into_iter().collect())
        .collect();

    let mut table_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for set in &column_sets {
        for column in set {
            *table_counts.entry(*column).or_default() += 1;
        }
    }

    let entries: Vec<UniqueColumns> = names
        .into_iter()
        .zip(&column_sets)
        .map(|(name, set)| {
            // BTreeSet iteration is already ascending and duplicate-free.
            let columns: Vec<String> = set
                .iter()
                .filter(|c| table_counts.get(*c) == Some(&1))
                .map(|c| c.to_string())
                .collect();
            tracing::debug!(
                dataset = %name,
                column_count = set.len(),
                unique_count = columns.len(),
                "computed unique columns"
            );
            UniqueColumns { name, columns }
        })
        .collect();

    let shared: Vec<String> = table_counts
        .into_iter()
        .filter(|(_, n)| *n >= 2)
        .map(|(c, _)| c.to_string())
        .collect();

    Ok(ColumnComparison::new(entries, shared))
}

/// Compare column sets across tables.
///
/// Returns one entry per table, in input order, each holding the sorted
/// columns found in that table and in no other. When
/// `options.emit_report` is set the report is written to stdout; a failed
/// write is logged and otherwise ignored.
///
/// # Errors
///
/// - `TooFewDatasets`: fewer than two tables
/// - `NameCountMismatch`: `options.names` length differs from table count
/// - `DuplicateName`: `options.names` repeats a name
pub fn compare<D: ColumnSource>(
    datasets: &[D],
    options: &CompareOptions,
) -> Result<ColumnComparison> {
    log_op_start!("compare_columns", dataset_count = datasets.len());
    let start = std::time::Instant::now();

    let result = compute(datasets, options.names.as_deref()).map_err(|e| {
        log_op_error!(
            "compare_columns",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    if options.emit_report {
        let stdout = std::io::stdout();
        if let Err(e) = write_report(&result, &mut stdout.lock()) {
            tracing::warn!(error = %e, "failed to write comparison report");
        }
    }

    log_op_end!(
        "compare_columns",
        duration_ms = start.elapsed().as_millis() as u64,
        unique_total = result.unique_total()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_names_are_one_indexed() {
        assert_eq!(default_name(0), "df1");
        assert_eq!(default_name(9), "df10");
        assert_eq!(resolve_names(3, None).unwrap(), strings(&["df1", "df2", "df3"]));
    }

    #[test]
    fn test_too_few_checked_before_names() {
        let names = strings(&["only", "extra"]);
        assert_eq!(
            resolve_names(1, Some(names.as_slice())),
            Err(ComparisonError::TooFewDatasets { count: 1 })
        );
    }

    #[test]
    fn test_name_count_mismatch() {
        let names = strings(&["x"]);
        assert_eq!(
            resolve_names(2, Some(names.as_slice())),
            Err(ComparisonError::NameCountMismatch {
                names: 1,
                datasets: 2
            })
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let names = strings(&["a", "b", "a"]);
        assert_eq!(
            resolve_names(3, Some(names.as_slice())),
            Err(ComparisonError::DuplicateName {
                name: "a".to_string()
            })
        );
    }

    #[test]
    fn test_compute_sales_marketing_hr() {
        let tables = vec![
            vec!["A", "B", "C"],
            vec!["A", "D"],
            vec!["A", "B", "E"],
        ];
        let names = strings(&["Sales", "Marketing", "HR"]);
        let result = compute(&tables, Some(names.as_slice())).unwrap();

        let expected: Vec<(&str, Vec<String>)> = vec![
            ("Sales", strings(&["C"])),
            ("Marketing", strings(&["D"])),
            ("HR", strings(&["E"])),
        ];
        let actual: Vec<(&str, Vec<String>)> =
            result.iter().map(|(n, c)| (n, c.to_vec())).collect();
        assert_eq!(actual, expected);
        assert_eq!(result.shared_columns(), &strings(&["A", "B"])[..]);
    }

    #[test]
    fn test_duplicate_columns_collapse() {
        let tables = vec![vec!["Z", "Z", "A"], vec!["A"]];
        let result = compute(&tables, None).unwrap();
        assert_eq!(result.get("df1"), Some(&strings(&["Z"])[..]));
        assert_eq!(result.get("df2"), Some(&[] as &[String]));
    }
}
