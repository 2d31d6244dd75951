//! CSV parsing and row joining.
//!
//! The first record is treated as the header row and consumed. Every data row
//! is rendered as its field values joined with `", "` plus a trailing newline.

use crate::Result;

/// Separator placed between field values of one row.
pub const FIELD_SEPARATOR: &str = ", ";

/// Parse CSV bytes into data rows.
///
/// Rows may have differing lengths. Blank lines are skipped.
///
/// # Errors
///
/// Returns `DoctextError::Parsing` on malformed input, including invalid UTF-8.
pub fn read_rows(content: &[u8]) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(rows)
}

/// Join parsed rows into the text representation.
///
/// ```rust
/// use doctext::extraction::csv::join_rows;
///
/// let rows = vec![vec!["1".to_string(), "2".to_string()]];
/// assert_eq!(join_rows(&rows), "1, 2\n");
/// ```
pub fn join_rows(rows: &[Vec<String>]) -> String {
    let mut text = String::new();
    for row in rows {
        text.push_str(&row.join(FIELD_SEPARATOR));
        text.push('\n');
    }
    text
}
