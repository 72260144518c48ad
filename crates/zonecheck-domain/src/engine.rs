use crate::rule::RuleSet;
use zonecheck_types::{EvaluationResult, PropertyFacts};

/// Evaluate the built-in rules against `facts`.
pub fn evaluate(facts: &PropertyFacts) -> EvaluationResult {
    evaluate_with(RuleSet::builtin_ref(), facts)
}

/// Evaluate `rules` in declaration order. Every matching rule contributes its name; ids are
/// positions. No match yields the single no-match entry.
pub fn evaluate_with(rules: &RuleSet, facts: &PropertyFacts) -> EvaluationResult {
    EvaluationResult::from_matches(
        rules
            .iter()
            .filter(|rule| rule.permits(facts))
            .map(|rule| rule.name()),
    )
}
