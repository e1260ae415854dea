//! Column set comparison.
//!
//! Given two or more tables, finds for each table the columns that appear in
//! it and in no other table.
//!
//! ## Entry point
//!
//! ```
//! use colcmp_core::compare::{compare, CompareOptions};
//! use colcmp_core::Table;
//!
//! let tables = vec![Table::new(["A", "B", "C"]), Table::new(["A", "D"])];
//! let result = compare(&tables, &CompareOptions::default().without_report())?;
//! assert_eq!(result.get("df1"), Some(&["B".to_string(), "C".to_string()][..]));
//! # Ok::<(), colcmp_core::ComparisonError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Order**: one entry per input table, in input order.
//! - **Sorting**: each unique list is strictly ascending (byte-wise), with no
//!   duplicates even if a table repeats a column.
//! - **Fail fast**: every precondition is checked before any set is built.

pub mod engine;
pub mod model;
pub mod report;

pub use engine::{compare, compute, default_name, resolve_names};
pub use model::{ColumnComparison, CompareOptions, UniqueColumns};
pub use report::{format_column_list, render_report, write_report};
