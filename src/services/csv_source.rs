//! CSV-backed table source
//!
//! A watchlist snapshot saved as CSV: the header row carries the feed's
//! column labels, every data cell is the raw feed text exactly as the
//! page rendered it (e.g. `(3,219.88 B)`, `-`, `2.00`). This is how the
//! CLI and the integration tests drive the parser without a live page.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::services::table_parser::{TableRow, TableSource};

/// A fully loaded CSV snapshot
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<CsvRow>,
}

/// One CSV data row; cells are raw feed text
///
/// CSV has no styled sub-elements, so the distinguished symbol/price
/// lookups fall back to the plain cell text via the trait defaults.
#[derive(Debug, Clone)]
pub struct CsvRow {
    cells: Vec<String>,
}

impl CsvTable {
    /// Load a snapshot from any reader
    ///
    /// Flexible mode: rows shorter or longer than the header are kept
    /// as-is, the parser handles the mismatch.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::None)
            .from_reader(reader);

        let headers = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            rows.push(CsvRow {
                cells: record.iter().map(|c| c.to_string()).collect(),
            });
        }

        Ok(Self { headers, rows })
    }

    /// Load a snapshot from a file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }
}

impl TableRow for CsvRow {
    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn cell_text(&self, index: usize) -> Option<String> {
        self.cells.get(index).cloned()
    }
}

impl TableSource for CsvTable {
    type Row = CsvRow;

    fn header_labels(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn rows(&self) -> Vec<CsvRow> {
        self.rows.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::table_parser;

    const SNAPSHOT: &str = "\
Symbol,Price,Net Foreign Buy / Sell,Net Foreign Buy Streak,Bandar Value
ADRO,\"2,210\",-,-,\"(3,219.88 B)\"
BBRI,\"3,810\",177.65 B,2.00,\"(22,156.30 B)\"
";

    #[test]
    fn test_load_and_parse_snapshot() {
        let table = CsvTable::from_reader(SNAPSHOT.as_bytes()).unwrap();
        let records = table_parser::parse_all(&table);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "ADRO");
        assert_eq!(records[0].net_foreign_flow, None);
        assert_eq!(records[0].flow_value, Some(-3_219_880_000_000.0));
        assert_eq!(records[1].symbol, "BBRI");
        assert_eq!(records[1].foreign_buy_streak, Some(2.0));
    }

    #[test]
    fn test_ragged_rows_tolerated() {
        let csv = "Symbol,Price,Bandar Value\nTLKM\nANTM,\"4,210\",\"(815.39 B)\",extra\n";
        let table = CsvTable::from_reader(csv.as_bytes()).unwrap();
        let records = table_parser::parse_all(&table);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "TLKM");
        assert_eq!(records[0].price, None);
        assert_eq!(records[1].flow_value, Some(-815.39e9));
    }
}
