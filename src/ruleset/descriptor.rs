//! Declarative rule-set descriptors
//!
//! Each rule-set version is pure data: an ordered list of condition
//! specs, a confirmation-group mode, and a score-weight table. The
//! evaluator walks whichever descriptor it is handed, so adding a
//! version means adding a table here, not new control flow.

use crate::models::{Field, StockRecord};
use crate::ruleset::RuleSetId;

/// Boolean test over record fields
///
/// A null operand never satisfies a predicate — missing data can
/// neither pass a requirement nor fire a reject trigger.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// field > 0
    Positive(Field),
    /// field < 0
    Negative(Field),
    /// field >= threshold
    AtLeast(Field, f64),
    /// field == value
    Equals(Field, f64),
    /// left > right
    Exceeds(Field, Field),
    /// every member holds
    AllOf(&'static [Predicate]),
}

impl Predicate {
    pub fn holds(&self, record: &StockRecord) -> bool {
        match *self {
            Predicate::Positive(field) => record.get(field).is_some_and(|v| v > 0.0),
            Predicate::Negative(field) => record.get(field).is_some_and(|v| v < 0.0),
            Predicate::AtLeast(field, threshold) => {
                record.get(field).is_some_and(|v| v >= threshold)
            }
            Predicate::Equals(field, value) => record.get(field).is_some_and(|v| v == value),
            Predicate::Exceeds(left, right) => match (record.get(left), record.get(right)) {
                (Some(l), Some(r)) => l > r,
                _ => false,
            },
            Predicate::AllOf(members) => members.iter().all(|p| p.holds(record)),
        }
    }

    /// The field the predicate primarily tests, used for the strict
    /// confirmation floor. Composite predicates have none.
    pub fn primary_field(&self) -> Option<Field> {
        match *self {
            Predicate::Positive(field)
            | Predicate::Negative(field)
            | Predicate::AtLeast(field, _)
            | Predicate::Equals(field, _)
            | Predicate::Exceeds(field, _) => Some(field),
            Predicate::AllOf(_) => None,
        }
    }
}

/// How a condition participates in the entry-ready decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionRole {
    /// Must hold (groups A, B, D, F); ANDed across all groups
    Required,
    /// Group C member; combined per [`ConfirmationMode`]
    Confirmation,
    /// Group E trigger; if it fires, entry-ready is off the table.
    /// The reported outcome passes when the trigger did NOT fire.
    HardReject,
}

/// One condition of a rule set
#[derive(Debug, Clone, Copy)]
pub struct ConditionSpec {
    pub code: &'static str,
    pub description: &'static str,
    pub role: ConditionRole,
    pub predicate: Predicate,
}

/// How the confirmation group (C) combines its members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationMode {
    /// At least one member predicate true
    AnyPositive,
    /// Every member field present and >= 0, AND at least one member
    /// predicate true — a conjunctive floor plus a disjunctive ceiling
    FloorAndAny,
}

/// One entry of the score table; weights are informational ranking,
/// independent of entry-ready
#[derive(Debug, Clone, Copy)]
pub struct ScoreRule {
    pub predicate: Predicate,
    pub weight: u32,
}

/// A named, versioned, immutable rule set
pub struct RuleSetDescriptor {
    pub id: RuleSetId,
    pub name: &'static str,
    pub description: &'static str,
    pub conditions: &'static [ConditionSpec],
    pub confirmation_mode: ConfirmationMode,
    pub score_rules: &'static [ScoreRule],
}

/// Baseline rule set: streak >= 2, disjunctive confirmation,
/// no acceleration requirement
pub static STANDARD: RuleSetDescriptor = RuleSetDescriptor {
    id: RuleSetId::Standard,
    name: "Standard",
    description: "Baseline foreign-flow entry screen",
    conditions: &[
        ConditionSpec {
            code: "A1",
            description: "Net foreign buy/sell > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::NetForeignFlow),
        },
        ConditionSpec {
            code: "A2",
            description: "Net foreign MA10 > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::NetForeignFlowMa10),
        },
        ConditionSpec {
            code: "A3",
            description: "1 week foreign flow > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::OneWeekForeignFlow),
        },
        ConditionSpec {
            code: "B1",
            description: "Bandar accum/dist > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::AccumDistIndex),
        },
        ConditionSpec {
            code: "B2",
            description: "Bandar value > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::FlowValue),
        },
        ConditionSpec {
            code: "C1",
            description: "Net foreign MA20 > 0",
            role: ConditionRole::Confirmation,
            predicate: Predicate::Positive(Field::NetForeignFlowMa20),
        },
        ConditionSpec {
            code: "C2",
            description: "Bandar value MA20 > 0",
            role: ConditionRole::Confirmation,
            predicate: Predicate::Positive(Field::FlowValueMa20),
        },
        ConditionSpec {
            code: "D1",
            description: "Net foreign buy streak >= 2",
            role: ConditionRole::Required,
            predicate: Predicate::AtLeast(Field::ForeignBuyStreak, 2.0),
        },
        ConditionSpec {
            code: "E1",
            description: "Reject: bandar distribution (accum/dist < 0)",
            role: ConditionRole::HardReject,
            predicate: Predicate::Negative(Field::AccumDistIndex),
        },
        ConditionSpec {
            code: "E2",
            description: "Reject: net foreign < 0 with streak 0",
            role: ConditionRole::HardReject,
            predicate: Predicate::AllOf(&[
                Predicate::Negative(Field::NetForeignFlow),
                Predicate::Equals(Field::ForeignBuyStreak, 0.0),
            ]),
        },
    ],
    confirmation_mode: ConfirmationMode::AnyPositive,
    score_rules: &[
        ScoreRule {
            predicate: Predicate::Positive(Field::FlowValueMa20),
            weight: 2,
        },
        ScoreRule {
            predicate: Predicate::Positive(Field::NetForeignFlowMa20),
            weight: 2,
        },
        ScoreRule {
            predicate: Predicate::AtLeast(Field::ForeignBuyStreak, 3.0),
            weight: 1,
        },
        ScoreRule {
            predicate: Predicate::Positive(Field::FlowValueMa10),
            weight: 1,
        },
    ],
};

/// Strict rule set: extra accumulation requirement, non-negative floor
/// on both confirmation metrics, streak >= 3, and a mandatory
/// acceleration check (today's flow above its own MA10)
pub static STRICT: RuleSetDescriptor = RuleSetDescriptor {
    id: RuleSetId::Strict,
    name: "Strict",
    description: "Tightened screen: accumulation floor, longer streak, acceleration required",
    conditions: &[
        ConditionSpec {
            code: "A1",
            description: "Net foreign buy/sell > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::NetForeignFlow),
        },
        ConditionSpec {
            code: "A2",
            description: "Net foreign MA10 > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::NetForeignFlowMa10),
        },
        ConditionSpec {
            code: "A3",
            description: "1 week foreign flow > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::OneWeekForeignFlow),
        },
        ConditionSpec {
            code: "B1",
            description: "Bandar accum/dist > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::AccumDistIndex),
        },
        ConditionSpec {
            code: "B2",
            description: "Bandar value > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::FlowValue),
        },
        ConditionSpec {
            code: "B3",
            description: "Bandar value MA10 > 0",
            role: ConditionRole::Required,
            predicate: Predicate::Positive(Field::FlowValueMa10),
        },
        ConditionSpec {
            code: "C1",
            description: "Net foreign MA20 > 0 (both MA20 must be >= 0)",
            role: ConditionRole::Confirmation,
            predicate: Predicate::Positive(Field::NetForeignFlowMa20),
        },
        ConditionSpec {
            code: "C2",
            description: "Bandar value MA20 > 0 (both MA20 must be >= 0)",
            role: ConditionRole::Confirmation,
            predicate: Predicate::Positive(Field::FlowValueMa20),
        },
        ConditionSpec {
            code: "D1",
            description: "Net foreign buy streak >= 3",
            role: ConditionRole::Required,
            predicate: Predicate::AtLeast(Field::ForeignBuyStreak, 3.0),
        },
        ConditionSpec {
            code: "E1",
            description: "Reject: bandar distribution (accum/dist < 0)",
            role: ConditionRole::HardReject,
            predicate: Predicate::Negative(Field::AccumDistIndex),
        },
        ConditionSpec {
            code: "E2",
            description: "Reject: net foreign < 0 with streak 0",
            role: ConditionRole::HardReject,
            predicate: Predicate::AllOf(&[
                Predicate::Negative(Field::NetForeignFlow),
                Predicate::Equals(Field::ForeignBuyStreak, 0.0),
            ]),
        },
        ConditionSpec {
            code: "F1",
            description: "Acceleration: net foreign > its MA10",
            role: ConditionRole::Required,
            predicate: Predicate::Exceeds(Field::NetForeignFlow, Field::NetForeignFlowMa10),
        },
    ],
    confirmation_mode: ConfirmationMode::FloorAndAny,
    score_rules: &[
        ScoreRule {
            predicate: Predicate::Positive(Field::FlowValueMa20),
            weight: 2,
        },
        ScoreRule {
            predicate: Predicate::Positive(Field::NetForeignFlowMa20),
            weight: 2,
        },
        ScoreRule {
            predicate: Predicate::Exceeds(Field::NetForeignFlow, Field::NetForeignFlowMa10),
            weight: 2,
        },
        ScoreRule {
            predicate: Predicate::AtLeast(Field::ForeignBuyStreak, 5.0),
            weight: 1,
        },
        ScoreRule {
            predicate: Predicate::Positive(Field::FlowValueMa10),
            weight: 1,
        },
        ScoreRule {
            predicate: Predicate::Exceeds(Field::OneWeekForeignFlow, Field::OneMonthForeignFlow),
            weight: 1,
        },
    ],
};
