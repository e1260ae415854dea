//! Human-readable report renderer for column comparisons.

use crate::compare::model::ColumnComparison;
use std::io;

const BANNER_WIDTH: usize = 60;
const TITLE: &str = "DATAFRAME COLUMN COMPARISON RESULTS";

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Render a column list as a bracketed, quoted list: `['A', 'B']`.
///
/// Items are single-quoted unless they contain a `'` and no `"`, in which
/// case they are double-quoted. Backslashes and the chosen quote character
/// are escaped, `\n`, `\r` and `\t` are written as escapes, and other
/// non-printable characters become `\xNN`, `\uNNNN` or `\UNNNNNNNN`, so a
/// list always renders on one line.
pub fn format_column_list(columns: &[String]) -> String {
    let items: Vec<String> = columns.iter().map(|c| quote(c)).collect();
    format!("[{}]", items.join(", "))
}

fn quote(item: &str) -> String {
    let q = if item.contains('\'') && !item.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(item.len() + 2);
    out.push(q);
    for ch in item.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&hex_escape(c)),
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

// Controls, separators other than the plain space, and invisible format
// characters.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control()
        || c.is_whitespace()
        || matches!(c, '\u{ad}' | '\u{200b}'..='\u{200f}' | '\u{2060}'..='\u{2064}' | '\u{feff}'))
}

fn hex_escape(c: char) -> String {
    let code = c as u32;
    if code <= 0xff {
        format!("\\x{code:02x}")
    } else if code <= 0xffff {
        format!("\\u{code:04x}")
    } else {
        format!("\\U{code:08x}")
    }
}

/// Render the comparison report.
///
/// Layout: banner, title, banner, blank line, one line per table in input
/// order, closing banner. Every line ends with `\n`.
pub fn render_report(result: &ColumnComparison) -> String {
    let mut out = String::new();

    out.push_str(&banner());
    out.push('\n');
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&banner());
    out.push_str("\n\n");

    for (name, columns) in result.iter() {
        if columns.is_empty() {
            out.push_str(&format!("{name} has no unique columns\n"));
        } else {
            out.push_str(&format!(
                "{name} has {} which are not present in other dataframes\n",
                format_column_list(columns)
            ));
        }
    }

    out.push_str(&banner());
    out.push('\n');
    out
}

/// Write the rendered report to `writer`.
///
/// # Errors
///
/// Returns any I/O error raised by the writer.
pub fn write_report<W: io::Write>(result: &ColumnComparison, writer: &mut W) -> io::Result<()> {
    writer.write_all(render_report(result).as_bytes())?;
    writer.flush()
}
