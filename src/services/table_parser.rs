//! Watchlist table parsing
//!
//! Maps an arbitrary ordered set of column labels onto the fixed
//! [`StockRecord`] schema, one record per row. Columns are matched by
//! header label, never by position, so the table may reorder, add, or
//! drop columns between snapshots without breaking extraction.
//!
//! The table itself is abstract: the observation layer (DOM, CSV
//! snapshot, test fixture) implements [`TableSource`] and the parser
//! only ever asks for header labels and cell text. Parsing is a pure
//! read — no mutation, no caching, no I/O — and it never fails: a cell
//! that does not parse simply leaves its field `None`.

use tracing::debug;

use crate::constants::{self, PRICE_HEADER, SYMBOL_HEADER};
use crate::models::StockRecord;
use crate::services::normalizer::normalize;

/// One row of the watchlist table
///
/// `symbol_text` and `price_text` exist because the host rendering packs
/// several styled text runs into those cells; a DOM-backed source must
/// return the designated sub-element's text instead of the whole cell.
/// Sources without sub-elements (CSV, fixtures) keep the defaults.
pub trait TableRow {
    fn cell_count(&self) -> usize;

    /// Full text content of the cell at `index`, if the cell exists
    fn cell_text(&self, index: usize) -> Option<String>;

    /// Text of the identifier sub-element of the cell at `index`
    fn symbol_text(&self, index: usize) -> Option<String> {
        self.cell_text(index)
    }

    /// Text of the bold price sub-element of the cell at `index`
    fn price_text(&self, index: usize) -> Option<String> {
        self.cell_text(index)
    }
}

/// A table-like structure the parser can extract records from
pub trait TableSource {
    type Row: TableRow;

    /// Raw header labels in column order
    fn header_labels(&self) -> Vec<String>;

    /// Data rows in display order
    fn rows(&self) -> Vec<Self::Row>;
}

/// Extract headers: trimmed, lowercased, column order preserved
pub fn extract_headers<S: TableSource>(source: &S) -> Vec<String> {
    source
        .header_labels()
        .iter()
        .map(|label| label.trim().to_lowercase())
        .collect()
}

/// Parse one row against the given headers
///
/// Total: always returns a record. A missing identifier sub-element
/// leaves `symbol` empty (the caller decides whether to keep the row),
/// an unrecognized header drops the cell, and an unparsable value
/// leaves its field `None`.
pub fn parse_row<R: TableRow>(row: &R, headers: &[String]) -> StockRecord {
    let mut record = StockRecord::new();

    for (index, header) in headers.iter().enumerate() {
        if index >= row.cell_count() {
            break;
        }

        match header.as_str() {
            SYMBOL_HEADER => {
                record.symbol = row
                    .symbol_text(index)
                    .map(|text| text.trim().to_string())
                    .unwrap_or_default();
            }
            PRICE_HEADER => {
                record.price = row.price_text(index).as_deref().and_then(normalize);
            }
            _ => {
                if let Some(field) = constants::field_for_header(header) {
                    let value = row.cell_text(index).as_deref().and_then(normalize);
                    record.set(field, value);
                }
            }
        }
    }

    record
}

/// Parse every row, dropping rows without a symbol
pub fn parse_all<S: TableSource>(source: &S) -> Vec<StockRecord> {
    let headers = extract_headers(source);
    let rows = source.rows();

    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        let record = parse_row(row, &headers);
        if record.is_valid() {
            records.push(record);
        } else {
            debug!("skipping row without symbol");
        }
    }

    debug!(rows = rows.len(), records = records.len(), "parsed table");
    records
}
