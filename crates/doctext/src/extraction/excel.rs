//! Workbook to CSV conversion using `calamine`.
//!
//! The workbook format (XLSX, XLS, XLSB, ODS) is sniffed from the bytes, so a
//! mislabelled `.xls` that is really OOXML still opens.
//!
//! # Cell rendering
//!
//! - numbers use their shortest display form (`1`, `2.5`)
//! - booleans render as `TRUE` / `FALSE`
//! - dates render as `YYYY-MM-DD HH:MM:SS`
//! - error cells render as their Excel code (`#DIV/0!`)
//! - fields are quoted only when they contain a delimiter, quote or newline
//!
//! # Example
//!
//! ```rust,no_run
//! use doctext::extraction::excel::read_workbook_csv;
//!
//! # fn example() -> doctext::Result<()> {
//! let bytes = std::fs::read("budget.xlsx")?;
//! for sheet in read_workbook_csv(&bytes)? {
//!     println!("{}:\n{}", sheet.name, sheet.csv);
//! }
//! # Ok(())
//! # }
//! ```
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

use crate::error::{DoctextError, Result};
use crate::types::SheetCsv;

/// Convert every sheet of a workbook to CSV, in workbook order.
///
/// # Errors
///
/// Returns `DoctextError::Parsing` if the bytes are not a readable workbook or
/// any sheet fails to load.
pub fn read_workbook_csv(content: &[u8]) -> Result<Vec<SheetCsv>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(content))?;

    let sheet_names = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        let range = workbook.worksheet_range(&name)?;
        let csv = range_to_csv(&range)?;
        tracing::debug!(sheet = %name, bytes = csv.len(), "Converted sheet to CSV");
        sheets.push(SheetCsv { name, csv });
    }

    Ok(sheets)
}

/// Render a cell range as CSV, one `\n`-terminated line per row.
pub fn range_to_csv(range: &Range<Data>) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in range.rows() {
        writer.write_record(row.iter().map(format_cell))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DoctextError::parsing(format!("Failed to flush CSV output: {}", e.error())))?;

    String::from_utf8(bytes).map_err(|e| DoctextError::parsing_with_source("CSV output is not valid UTF-8", e))
}

fn format_cell(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::Error(e) => e.to_string(),
    }
}
