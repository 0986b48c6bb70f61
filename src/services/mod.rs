pub mod csv_source;
pub mod normalizer;
pub mod table_parser;

pub use csv_source::CsvTable;
pub use normalizer::normalize;
pub use table_parser::{TableRow, TableSource};
