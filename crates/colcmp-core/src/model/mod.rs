pub mod table;

pub use table::{ColumnSource, Table};
