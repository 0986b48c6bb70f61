use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::ScreenReport;
use crate::ruleset::{self, RuleSetId};
use crate::services::{table_parser, CsvTable};

pub fn run(input: &Path, ruleset: &str, json: bool) {
    match screen(input, ruleset, json) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn screen(input: &Path, ruleset: &str, json: bool) -> Result<()> {
    let id = RuleSetId::resolve(ruleset);
    let table = CsvTable::from_path(input)?;
    let records = table_parser::parse_all(&table);
    info!(records = records.len(), ruleset = %id, "screening snapshot");

    let results = records
        .iter()
        .map(|record| ruleset::evaluate(record, id))
        .collect();
    let report = ScreenReport::new(id, results);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ScreenReport) {
    let descriptor = report.rule_set.descriptor();
    println!("🔎 Watchlist Screen — {} rule set\n", descriptor.name);

    for result in &report.results {
        if result.entry_ready {
            println!("✅ {:<8} score {}  ENTRY READY", result.symbol, result.score);
        } else {
            let failed = result.failed_codes().join(", ");
            println!(
                "❌ {:<8} score {}  failed: {}",
                result.symbol, result.score, failed
            );
        }
    }

    println!("\n═══════════════════════════════════════════");
    println!("✅ Entry ready: {}/{}", report.entry_ready, report.total);
}
