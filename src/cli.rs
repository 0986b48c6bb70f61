use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "watchscreen")]
#[command(about = "Watchlist entry screener", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Screen a watchlist snapshot against a rule set
    Screen {
        /// Path to the watchlist CSV snapshot
        #[arg(short, long)]
        input: PathBuf,

        /// Rule set to apply (standard, strict); unknown values fall
        /// back to standard
        #[arg(short, long, default_value = "standard")]
        ruleset: String,

        /// Emit the full report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Parse a snapshot and dump the extracted records as JSON
    Parse {
        /// Path to the watchlist CSV snapshot
        #[arg(short, long)]
        input: PathBuf,
    },
    /// List available rule sets and their conditions
    Rulesets,
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            input,
            ruleset,
            json,
        } => {
            commands::screen::run(&input, &ruleset, json);
        }
        Commands::Parse { input } => {
            commands::parse::run(&input);
        }
        Commands::Rulesets => {
            commands::rulesets::run();
        }
    }
}
