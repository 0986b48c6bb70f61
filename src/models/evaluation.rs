use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::StockRecord;
use crate::ruleset::RuleSetId;

/// One evaluated condition, pass or fail
///
/// Codes are stable short identifiers grouped by letter: A momentum,
/// B accumulation, C mid-term confirmation, D continuity, E hard reject,
/// F acceleration. Downstream layers render tooltips straight from the
/// description, so it must stand on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionOutcome {
    pub code: String,
    pub passed: bool,
    pub description: String,
}

/// Result of evaluating one record against one rule set
///
/// Pure function of `(record, rule_set_id)`: evaluating the same record
/// twice yields structurally equal results, so callers may fingerprint
/// and skip redundant work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub symbol: String,
    pub rule_set_id: RuleSetId,
    pub entry_ready: bool,
    pub score: u32,
    pub conditions: Vec<ConditionOutcome>,
    pub record: StockRecord,
}

impl EvaluationResult {
    /// Codes of the conditions that failed, in evaluation order
    pub fn failed_codes(&self) -> Vec<&str> {
        self.conditions
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.code.as_str())
            .collect()
    }
}

/// Envelope for a full screening pass over one snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenReport {
    pub generated_at: DateTime<Utc>,
    pub rule_set: RuleSetId,
    pub total: usize,
    pub entry_ready: usize,
    pub results: Vec<EvaluationResult>,
}

impl ScreenReport {
    pub fn new(rule_set: RuleSetId, results: Vec<EvaluationResult>) -> Self {
        let entry_ready = results.iter().filter(|r| r.entry_ready).count();
        Self {
            generated_at: Utc::now(),
            rule_set,
            total: results.len(),
            entry_ready,
            results,
        }
    }
}
