//! Text form of the table, suitable for pasting as a nested array literal.

use super::TransitionTable;
use std::fmt;

const INDENT: &str = "    ";

/// Renders one row per line as two-digit lowercase hex bytes:
///
/// ```text
/// [
///     [0x00, 0x01, 0x02, 0x03],
///     ...
///     [0x17, 0x16, 0x15, 0x14]
/// ]
/// ```
impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        writeln!(f, "[")?;
        for (i, row) in rows.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|b| format!("{b:#04x}")).collect();
            let separator = if i + 1 < rows.len() { "," } else { "" };
            writeln!(f, "{INDENT}[{}]{separator}", cells.join(", "))?;
        }
        write!(f, "]")
    }
}
