//! Data-driven rule evaluation
//!
//! One evaluator for every rule-set version: it walks the descriptor's
//! condition table, records an outcome per condition, combines the
//! confirmation group per the descriptor's mode, and sums the score
//! table. Total over any well-typed record — nulls are valid input —
//! and pure: the record is only read, the result freshly built.

use crate::models::{ConditionOutcome, EvaluationResult, StockRecord};
use crate::ruleset::descriptor::{ConditionRole, ConfirmationMode};
use crate::ruleset::RuleSetId;

/// Evaluate one record against one rule set
///
/// `entry_ready` = all required conditions hold AND the confirmation
/// group passes AND no hard-reject trigger fired. Every condition is
/// always evaluated and reported — a reject does not short-circuit.
/// `score` is an independent weighted sum, not derived from the flag.
pub fn evaluate(record: &StockRecord, id: RuleSetId) -> EvaluationResult {
    let descriptor = id.descriptor();

    let mut conditions = Vec::with_capacity(descriptor.conditions.len());
    let mut required_ok = true;
    let mut any_confirmation = false;
    let mut rejected = false;

    for spec in descriptor.conditions {
        let holds = spec.predicate.holds(record);
        let passed = match spec.role {
            ConditionRole::Required => {
                required_ok &= holds;
                holds
            }
            ConditionRole::Confirmation => {
                any_confirmation |= holds;
                holds
            }
            // a hard-reject condition passes when the trigger stayed quiet
            ConditionRole::HardReject => {
                rejected |= holds;
                !holds
            }
        };
        conditions.push(ConditionOutcome {
            code: spec.code.to_string(),
            passed,
            description: spec.description.to_string(),
        });
    }

    let confirmation_ok = match descriptor.confirmation_mode {
        ConfirmationMode::AnyPositive => any_confirmation,
        ConfirmationMode::FloorAndAny => {
            let floor = descriptor
                .conditions
                .iter()
                .filter(|spec| spec.role == ConditionRole::Confirmation)
                .all(|spec| {
                    spec.predicate
                        .primary_field()
                        .and_then(|field| record.get(field))
                        .is_some_and(|v| v >= 0.0)
                });
            floor && any_confirmation
        }
    };

    let score = descriptor
        .score_rules
        .iter()
        .filter(|rule| rule.predicate.holds(record))
        .map(|rule| rule.weight)
        .sum();

    EvaluationResult {
        symbol: record.symbol.clone(),
        rule_set_id: descriptor.id,
        entry_ready: required_ok && confirmation_ok && !rejected,
        score,
        conditions,
        record: record.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Record that satisfies every Standard and Strict condition
    fn all_pass_record() -> StockRecord {
        StockRecord {
            symbol: "GOOD".to_string(),
            price: Some(1000.0),
            net_foreign_flow: Some(50.0e9),
            net_foreign_flow_ma10: Some(20.0e9),
            net_foreign_flow_ma20: Some(10.0e9),
            one_week_foreign_flow: Some(100.0e9),
            one_month_foreign_flow: Some(80.0e9),
            foreign_buy_streak: Some(5.0),
            accum_dist_index: Some(12.5),
            flow_value: Some(30.0e9),
            flow_value_ma10: Some(25.0e9),
            flow_value_ma20: Some(15.0e9),
        }
    }

    /// BBRI snapshot from the feed: positive today but MA10 negative
    fn bbri_record() -> StockRecord {
        StockRecord {
            symbol: "BBRI".to_string(),
            price: Some(3810.0),
            net_foreign_flow: Some(177.65e9),
            net_foreign_flow_ma10: Some(-33.04e9),
            net_foreign_flow_ma20: Some(26.15e9),
            one_week_foreign_flow: Some(-790.38e9),
            one_month_foreign_flow: Some(523.08e9),
            foreign_buy_streak: Some(2.0),
            accum_dist_index: Some(14.31),
            flow_value: Some(-22_156.30e9),
            flow_value_ma10: Some(-21_945.38e9),
            flow_value_ma20: Some(-22_168.84e9),
        }
    }

    #[test]
    fn test_all_pass_standard() {
        let result = evaluate(&all_pass_record(), RuleSetId::Standard);
        assert!(result.entry_ready);
        assert!(result.conditions.iter().all(|c| c.passed));
        // flowValueMA20>0 (+2), netForeignFlowMA20>0 (+2),
        // streak>=3 (+1), flowValueMA10>0 (+1)
        assert_eq!(result.score, 6);
    }

    #[test]
    fn test_all_pass_strict() {
        let result = evaluate(&all_pass_record(), RuleSetId::Strict);
        assert!(result.entry_ready);
        // +2 +2 +2 (accel) +1 (streak>=5) +1 +1 (1W > 1M)
        assert_eq!(result.score, 9);
    }

    #[test]
    fn test_bbri_fails_standard_on_ma10() {
        let result = evaluate(&bbri_record(), RuleSetId::Standard);
        assert!(!result.entry_ready);
        let a2 = result.conditions.iter().find(|c| c.code == "A2").unwrap();
        assert!(!a2.passed);
        // A1 still passes and is reported: no short-circuit
        let a1 = result.conditions.iter().find(|c| c.code == "A1").unwrap();
        assert!(a1.passed);
        // MA20 foreign positive (+2); everything else misses
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_hard_reject_dominates_both_rule_sets() {
        let mut record = all_pass_record();
        record.accum_dist_index = Some(-0.5);
        for id in [RuleSetId::Standard, RuleSetId::Strict] {
            let result = evaluate(&record, id);
            assert!(!result.entry_ready, "{id} must hard-reject");
            let e1 = result.conditions.iter().find(|c| c.code == "E1").unwrap();
            assert!(!e1.passed);
        }
    }

    #[test]
    fn test_reject_still_evaluates_every_group() {
        let mut record = all_pass_record();
        record.accum_dist_index = Some(-0.5);
        let result = evaluate(&record, RuleSetId::Standard);
        let codes: Vec<&str> = result.conditions.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["A1", "A2", "A3", "B1", "B2", "C1", "C2", "D1", "E1", "E2"]
        );
    }

    #[test]
    fn test_strict_confirmation_floor() {
        // one MA20 positive, the other negative: Standard's disjunction
        // passes, Strict's floor does not
        let mut record = all_pass_record();
        record.net_foreign_flow_ma20 = Some(-1.0e9);
        assert!(evaluate(&record, RuleSetId::Standard).entry_ready);
        assert!(!evaluate(&record, RuleSetId::Strict).entry_ready);

        // at exactly zero the floor holds and the other metric carries
        // the disjunction
        record.net_foreign_flow_ma20 = Some(0.0);
        assert!(evaluate(&record, RuleSetId::Strict).entry_ready);

        // a null confirmation metric fails the floor
        record.net_foreign_flow_ma20 = None;
        assert!(!evaluate(&record, RuleSetId::Strict).entry_ready);
    }

    #[test]
    fn test_strict_streak_and_acceleration() {
        let mut record = all_pass_record();
        record.foreign_buy_streak = Some(2.0);
        assert!(evaluate(&record, RuleSetId::Standard).entry_ready);
        assert!(!evaluate(&record, RuleSetId::Strict).entry_ready);

        record.foreign_buy_streak = Some(3.0);
        assert!(evaluate(&record, RuleSetId::Strict).entry_ready);

        // flow below its MA10 kills acceleration under Strict only
        record.net_foreign_flow = Some(10.0e9);
        record.net_foreign_flow_ma10 = Some(20.0e9);
        assert!(evaluate(&record, RuleSetId::Standard).entry_ready);
        assert!(!evaluate(&record, RuleSetId::Strict).entry_ready);
    }

    #[test]
    fn test_all_null_record_is_total() {
        let record = StockRecord {
            symbol: "NODATA".to_string(),
            ..Default::default()
        };
        for id in [RuleSetId::Standard, RuleSetId::Strict] {
            let result = evaluate(&record, id);
            assert!(!result.entry_ready);
            assert_eq!(result.score, 0);
            // null operands cannot fire reject triggers either
            let e1 = result.conditions.iter().find(|c| c.code == "E1").unwrap();
            assert!(e1.passed);
        }
    }

    #[test]
    fn test_evaluation_idempotent() {
        let record = bbri_record();
        assert_eq!(
            evaluate(&record, RuleSetId::Strict),
            evaluate(&record, RuleSetId::Strict)
        );
    }

    #[test]
    fn test_input_record_not_mutated() {
        let record = bbri_record();
        let before = record.clone();
        let _ = evaluate(&record, RuleSetId::Standard);
        assert_eq!(record, before);
    }

    #[test]
    fn test_score_independent_of_entry_ready() {
        // hard-rejected record still earns its score
        let mut record = all_pass_record();
        record.accum_dist_index = Some(-0.5);
        let result = evaluate(&record, RuleSetId::Standard);
        assert!(!result.entry_ready);
        assert_eq!(result.score, 6);
    }
}
