//! CSV row reader.

use crate::Result;
use crate::plugins::{CsvRowReader, Plugin};

/// CSV reader using the `csv` crate. The header row is consumed.
pub struct CsvExtractor;

impl Default for CsvExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for CsvExtractor {
    fn name(&self) -> &str {
        "csv-extractor"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl CsvRowReader for CsvExtractor {
    fn read_rows(&self, content: &[u8]) -> Result<Vec<Vec<String>>> {
        crate::extraction::csv::read_rows(content)
    }
}
