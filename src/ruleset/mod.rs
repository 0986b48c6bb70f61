//! Versioned entry-screening rule sets
//!
//! Rule sets are defined statically, never mutated, and selected by
//! identifier per evaluation call. An unrecognized identifier falls
//! back to [`RuleSetId::Standard`].

mod descriptor;
mod evaluator;

pub use descriptor::{
    ConditionRole, ConditionSpec, ConfirmationMode, Predicate, RuleSetDescriptor, ScoreRule,
};
pub use evaluator::evaluate;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identifier of a rule-set version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetId {
    /// Baseline screen (default)
    Standard,
    /// Tightened screen with acceleration requirement
    Strict,
}

impl Default for RuleSetId {
    fn default() -> Self {
        RuleSetId::Standard
    }
}

impl RuleSetId {
    /// Resolve a settings-store string; unknown values fall back to
    /// the default instead of erroring
    pub fn resolve(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "standard" => RuleSetId::Standard,
            "strict" => RuleSetId::Strict,
            other => {
                warn!(ruleset = other, "unknown rule set, using default");
                RuleSetId::default()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSetId::Standard => "standard",
            RuleSetId::Strict => "strict",
        }
    }

    /// All defined rule sets, in version order
    pub fn all() -> Vec<RuleSetId> {
        vec![RuleSetId::Standard, RuleSetId::Strict]
    }

    /// The static descriptor backing this identifier
    pub fn descriptor(&self) -> &'static RuleSetDescriptor {
        match self {
            RuleSetId::Standard => &descriptor::STANDARD,
            RuleSetId::Strict => &descriptor::STRICT,
        }
    }
}

impl fmt::Display for RuleSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
