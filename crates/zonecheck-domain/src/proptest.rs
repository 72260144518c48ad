//! Property-based tests for the engine.
//!
//! These verify invariants around:
//! - determinism and independence from evaluation history
//! - id numbering and the no-match sentinel
//! - output order following declaration order
//! - concurrent evaluation over a shared rule set

use crate::condition::{FloodPolicy, RuleCondition, SizeBound};
use crate::engine::{evaluate, evaluate_with};
use crate::rule::{BuildingTypeRule, RuleSet};
use crate::rules::{apartment_complex, commercial_building, single_dwelling_house};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use zonecheck_types::{NO_MATCH_LABEL, PropertyFacts, Zone};

// ============================================================================
// Strategies
// ============================================================================

fn arb_zone() -> impl Strategy<Value = Zone> {
    prop_oneof![Just(Zone::Zone1), Just(Zone::Zone2), Just(Zone::Zone3)]
}

/// Sizes clustered around the rule thresholds, plus the general range.
fn arb_size() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(500.0),
        Just(1000.0),
        Just(1001.0),
        (499.0f64..501.0),
        (999.0f64..1001.0),
        (0.0f64..1e12),
    ]
}

fn arb_facts() -> impl Strategy<Value = PropertyFacts> {
    (arb_zone(), arb_size(), any::<bool>())
        .prop_map(|(zone, size, flood)| PropertyFacts::new(zone, size, flood))
}

fn arb_flood_policy() -> impl Strategy<Value = FloodPolicy> {
    prop_oneof![
        Just(FloodPolicy::Any),
        Just(FloodPolicy::Excluded),
        Just(FloodPolicy::Required),
    ]
}

fn arb_condition() -> impl Strategy<Value = RuleCondition> {
    (
        prop::collection::btree_set(arb_zone(), 0..=3),
        prop::option::of((0.0f64..2000.0, any::<bool>())),
        arb_flood_policy(),
    )
        .prop_map(|(zones, min, flood)| {
            let mut cond = RuleCondition {
                zones,
                flood,
                ..RuleCondition::default()
            };
            if let Some((v, inclusive)) = min {
                cond = cond.min_size(if inclusive {
                    SizeBound::Inclusive(v)
                } else {
                    SizeBound::Exclusive(v)
                });
            }
            cond
        })
}

fn arb_rule_set() -> impl Strategy<Value = RuleSet> {
    prop::collection::vec(arb_condition(), 0..8).prop_map(|conds| {
        conds
            .into_iter()
            .enumerate()
            .fold(RuleSet::new(), |set, (i, cond)| {
                set.with(BuildingTypeRule::from_condition(
                    format!("custom.rule_{i}"),
                    format!("Rule {i}"),
                    cond,
                ))
            })
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_deterministic(facts in arb_facts()) {
        let first = evaluate(&facts);
        let second = evaluate(&facts);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ids_are_gapless_positions(facts in arb_facts(), rules in arb_rule_set()) {
        let result = evaluate_with(&rules, &facts);
        for (pos, entry) in result.entries().iter().enumerate() {
            prop_assert_eq!(entry.id as usize, pos);
        }
    }

    #[test]
    fn result_is_never_empty(facts in arb_facts(), rules in arb_rule_set()) {
        let result = evaluate_with(&rules, &facts);
        prop_assert!(!result.is_empty());
    }

    #[test]
    fn sentinel_appears_only_alone(facts in arb_facts(), rules in arb_rule_set()) {
        let result = evaluate_with(&rules, &facts);
        let has_sentinel = result.labels().contains(&NO_MATCH_LABEL);
        if has_sentinel {
            prop_assert_eq!(result.len(), 1);
        }
        let any_match = rules.iter().any(|r| r.permits(&facts));
        prop_assert_eq!(has_sentinel, !any_match);
    }

    #[test]
    fn output_follows_declaration_order(facts in arb_facts(), rules in arb_rule_set()) {
        let result = evaluate_with(&rules, &facts);
        let expected: Vec<&str> = rules
            .iter()
            .filter(|r| r.permits(&facts))
            .map(|r| r.name())
            .collect();
        if !expected.is_empty() {
            prop_assert_eq!(result.labels(), expected);
        }
    }

    #[test]
    fn builtin_result_matches_predicates(facts in arb_facts()) {
        let result = evaluate(&facts);
        let mut expected = Vec::new();
        if single_dwelling_house::permits(&facts) {
            expected.push("Single Dwelling House");
        }
        if apartment_complex::permits(&facts) {
            expected.push("Apartment Complex");
        }
        if commercial_building::permits(&facts) {
            expected.push("Commercial Building");
        }
        if expected.is_empty() {
            expected.push(NO_MATCH_LABEL);
        }
        prop_assert_eq!(result.labels(), expected);
    }

    #[test]
    fn flood_zone_only_ever_permits_commercial(zone in arb_zone(), size in arb_size()) {
        let result = evaluate(&PropertyFacts::new(zone, size, true));
        for label in result.labels() {
            prop_assert!(label == "Commercial Building" || label == NO_MATCH_LABEL);
        }
    }

    #[test]
    fn history_does_not_affect_results(
        batch in prop::collection::vec(arb_facts(), 1..32),
        seed in any::<u64>(),
    ) {
        let baseline: Vec<_> = batch.iter().map(evaluate).collect();

        let mut order: Vec<usize> = (0..batch.len()).collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));
        for i in order {
            prop_assert_eq!(&evaluate(&batch[i]), &baseline[i]);
        }
    }
}

#[test]
fn concurrent_evaluation_agrees_with_sequential() {
    let rules = RuleSet::builtin();
    let grid: Vec<PropertyFacts> = Zone::ALL
        .iter()
        .flat_map(|&zone| {
            [0.0, 499.0, 500.0, 999.0, 1000.0, 1001.0, 1e9]
                .into_iter()
                .flat_map(move |size| {
                    [false, true]
                        .into_iter()
                        .map(move |flood| PropertyFacts::new(zone, size, flood))
                })
        })
        .collect();

    let sequential: Vec<_> = grid.iter().map(|f| evaluate_with(&rules, f)).collect();
    let parallel: Vec<_> = grid.par_iter().map(|f| evaluate_with(&rules, f)).collect();

    assert_eq!(sequential, parallel);
}
