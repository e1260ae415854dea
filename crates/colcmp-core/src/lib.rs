//! colcmp Core - column set comparison kernel
//!
//! This crate provides:
//! - The `ColumnSource` abstraction over anything with a header row
//! - The comparator that finds, per table, the columns no other table has
//! - The fixed-layout text report for a comparison
//! - The structured error and logging facilities shared by the workspace

pub mod compare;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use compare::{compare, compute, ColumnComparison, CompareOptions};
pub use errors::{ComparisonError, ExError, ExErrorKind, Result};
pub use model::{ColumnSource, Table};
