use std::path::Path;

use crate::error::Result;
use crate::services::{table_parser, CsvTable};

pub fn run(input: &Path) {
    match parse(input) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn parse(input: &Path) -> Result<()> {
    let table = CsvTable::from_path(input)?;
    let records = table_parser::parse_all(&table);
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
