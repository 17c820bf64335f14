//! Permission evaluator
//!
//! Applies the rules in a fixed order, stopping at the first that decides:
//! 1. Universal family (`2U…`) - always required
//! 2. Conditional family (`2A…`) - required iff a qualifying condition is set
//! 3. Anything else - unknown category

use crate::rules::types::{CategoryFamily, Condition, ConditionSet, Outcome};
use tracing::{debug, trace};

/// Outcome of an evaluation together with what led to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub outcome: Outcome,
    /// Family the category resolved to, if any
    pub family: Option<CategoryFamily>,
    /// Qualifying conditions that were set. Only populated for the
    /// conditional family.
    pub triggered_by: Vec<Condition>,
}

/// Stateless planning permission evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionEvaluator;

impl PermissionEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Decide whether permission is required for `category` given `conditions`
    pub fn evaluate(&self, category: &str, conditions: &ConditionSet) -> Outcome {
        let outcome = match CategoryFamily::of(category) {
            Some(CategoryFamily::Universal) => Outcome::Required,
            Some(CategoryFamily::Conditional) if conditions.any_qualifying() => Outcome::Required,
            Some(CategoryFamily::Conditional) => Outcome::NotRequired,
            None => Outcome::UnknownCategory,
        };

        debug!(category, outcome = %outcome, "Evaluated planning permission");

        outcome
    }

    /// Like [`evaluate`](Self::evaluate), but also report the resolved family
    /// and the conditions responsible for the outcome.
    pub fn explain(&self, category: &str, conditions: &ConditionSet) -> Evaluation {
        let family = CategoryFamily::of(category);
        trace!(category, family = ?family, "Resolved category family");

        let evaluation = match family {
            Some(CategoryFamily::Universal) => Evaluation {
                outcome: Outcome::Required,
                family,
                triggered_by: Vec::new(),
            },
            Some(CategoryFamily::Conditional) => {
                let triggered_by: Vec<Condition> =
                    conditions.active().filter(|c| c.is_qualifying()).collect();
                let outcome = if triggered_by.is_empty() {
                    Outcome::NotRequired
                } else {
                    Outcome::Required
                };
                Evaluation {
                    outcome,
                    family,
                    triggered_by,
                }
            }
            None => Evaluation {
                outcome: Outcome::UnknownCategory,
                family: None,
                triggered_by: Vec::new(),
            },
        };

        debug!(
            category,
            outcome = %evaluation.outcome,
            triggers = evaluation.triggered_by.len(),
            "Explained planning permission"
        );

        evaluation
    }
}

/// Decide whether permission is required, using the default evaluator
pub fn evaluate(category: &str, conditions: &ConditionSet) -> Outcome {
    PermissionEvaluator.evaluate(category, conditions)
}

/// Evaluate and report the reasons, using the default evaluator
pub fn explain(category: &str, conditions: &ConditionSet) -> Evaluation {
    PermissionEvaluator.explain(category, conditions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_set() -> ConditionSet {
        Condition::ALL.into_iter().collect()
    }

    #[test]
    fn test_universal_always_required() {
        assert_eq!(evaluate("2U1", &ConditionSet::default()), Outcome::Required);
        assert_eq!(evaluate("2U9", &all_set()), Outcome::Required);
    }

    #[test]
    fn test_universal_reports_no_triggers() {
        let evaluation = explain("2U5", &all_set());
        assert_eq!(evaluation.family, Some(CategoryFamily::Universal));
        assert!(evaluation.triggered_by.is_empty());
    }

    #[test]
    fn test_conditional_without_conditions() {
        assert_eq!(evaluate("2A3", &ConditionSet::default()), Outcome::NotRequired);
        assert_eq!(evaluate("2A6", &ConditionSet::default()), Outcome::NotRequired);
    }

    #[test]
    fn test_conditional_single_condition() {
        let set = ConditionSet::new().with(Condition::HighwayAdjacent);
        assert_eq!(evaluate("2A1", &set), Outcome::Required);
    }

    #[test]
    fn test_conditional_triggers_in_canonical_order() {
        let set = ConditionSet::new()
            .with(Condition::PdRightsRemoved)
            .with(Condition::HeightUpTo1m)
            .with(Condition::Aonb);
        let evaluation = explain("2A5", &set);
        assert_eq!(evaluation.outcome, Outcome::Required);
        assert_eq!(
            evaluation.triggered_by,
            vec![Condition::Aonb, Condition::PdRightsRemoved]
        );
    }

    #[test]
    fn test_fine_height_bands_alone_not_required() {
        let set = ConditionSet::new()
            .with(Condition::HeightUpTo1m)
            .with(Condition::HeightAbove1mTo2m);
        assert_eq!(evaluate("2A5", &set), Outcome::NotRequired);
    }

    #[test]
    fn test_contradictory_heights_accepted() {
        let set = ConditionSet::new()
            .with(Condition::HeightUpTo1m)
            .with(Condition::HeightAbove2m);
        assert_eq!(evaluate("2A2", &set), Outcome::Required);
    }

    #[test]
    fn test_evaluate_agrees_with_explain() {
        let sets = [
            ConditionSet::default(),
            ConditionSet::new().with(Condition::HeightUpTo1m),
            ConditionSet::new().with(Condition::NewBuildRestriction),
            all_set(),
        ];
        for category in ["2U1", "2A1", "2B1", ""] {
            for set in &sets {
                assert_eq!(evaluate(category, set), explain(category, set).outcome);
            }
        }
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(evaluate("2B1", &ConditionSet::default()), Outcome::UnknownCategory);
        assert_eq!(evaluate("", &all_set()), Outcome::UnknownCategory);
        assert_eq!(evaluate("X2U1", &all_set()), Outcome::UnknownCategory);

        let evaluation = explain("1A2A", &all_set());
        assert_eq!(evaluation.family, None);
        assert!(evaluation.triggered_by.is_empty());
    }
}
