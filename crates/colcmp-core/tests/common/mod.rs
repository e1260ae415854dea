use colcmp_core::Table;

/// Build a table from literal column names
#[allow(dead_code)]
pub fn table(columns: &[&str]) -> Table {
    Table::new(columns.iter().copied())
}

/// Owned string list from literals, for comparing against results
#[allow(dead_code)]
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The three-department fixture: Sales {A,B,C}, Marketing {A,D}, HR {A,B,E}
#[allow(dead_code)]
pub fn departments() -> (Vec<Table>, Vec<String>) {
    (
        vec![
            table(&["A", "B", "C"]),
            table(&["A", "D"]),
            table(&["A", "B", "E"]),
        ],
        strings(&["Sales", "Marketing", "HR"]),
    )
}
