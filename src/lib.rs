//! Watchlist entry screener
//!
//! Core pipeline: [`services::normalizer`] turns raw feed text into
//! canonical numbers, [`services::table_parser`] maps a table's columns
//! onto [`models::StockRecord`]s by header label, and [`ruleset`]
//! evaluates each record against a versioned, declarative rule set.
//! All three stages are pure and total; file handling and reporting
//! live in [`commands`].

pub mod cli;
pub mod commands;
pub mod constants;
pub mod error;
pub mod models;
pub mod ruleset;
pub mod services;
