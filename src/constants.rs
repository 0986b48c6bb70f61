//! Feed format constants
//!
//! The watchlist feed renders numbers the way the host page does:
//! `-` for missing data, parentheses for negative values, comma thousands
//! separators, and `B`/`M` suffixes for billions/millions. Column headers
//! are matched by label (lowercased, trimmed), never by position, so the
//! table may reorder, add, or drop columns between snapshots.

use crate::models::Field;

/// Placeholder the feed uses for "no data" (distinct from zero)
pub const NULL_PLACEHOLDER: &str = "-";

/// Multiplier for the `B` (billion) suffix
pub const BILLION: f64 = 1_000_000_000.0;

/// Multiplier for the `M` (million) suffix
pub const MILLION: f64 = 1_000_000.0;

/// Header label of the instrument identifier column.
///
/// The symbol lives in a styled sub-element of the first cell, so the
/// parser uses the row's distinguished symbol lookup for this column.
pub const SYMBOL_HEADER: &str = "symbol";

/// Header label of the price column (bold sub-element, same deal as symbol)
pub const PRICE_HEADER: &str = "price";

/// Known header labels mapped to record fields.
///
/// Labels are compared after trim + lowercase. The feed has rendered some
/// MA headers both with and without the inner space ("ma 10" / "ma10"),
/// so both spellings are listed. Unknown labels are ignored.
pub const HEADER_FIELDS: &[(&str, Field)] = &[
    ("net foreign buy / sell", Field::NetForeignFlow),
    ("net foreign buy / sell ma10", Field::NetForeignFlowMa10),
    ("net foreign buy / sell ma 10", Field::NetForeignFlowMa10),
    ("net foreign buy / sell ma20", Field::NetForeignFlowMa20),
    ("net foreign buy / sell ma 20", Field::NetForeignFlowMa20),
    ("1 week net foreign flow", Field::OneWeekForeignFlow),
    ("1 month net foreign flow", Field::OneMonthForeignFlow),
    ("net foreign buy streak", Field::ForeignBuyStreak),
    ("bandar accum/dist", Field::AccumDistIndex),
    ("bandar value", Field::FlowValue),
    ("bandar value ma10", Field::FlowValueMa10),
    ("bandar value ma 10", Field::FlowValueMa10),
    ("bandar value ma20", Field::FlowValueMa20),
    ("bandar value ma 20", Field::FlowValueMa20),
];

/// Look up the record field for a (lowercased, trimmed) header label
pub fn field_for_header(header: &str) -> Option<Field> {
    HEADER_FIELDS
        .iter()
        .find(|(label, _)| *label == header)
        .map(|(_, field)| *field)
}
