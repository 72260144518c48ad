use crate::condition::RuleCondition;
use crate::policy::{CustomRule, EffectiveConfig, RulePolicy};
use std::collections::BTreeMap;
use zonecheck_types::{PropertyFacts, Zone, ids};

pub fn facts(zone: Zone, size: f64, flood: bool) -> PropertyFacts {
    PropertyFacts::new(zone, size, flood)
}

/// All built-ins enabled, except those listed.
pub fn config_with_disabled(disabled: &[&str]) -> EffectiveConfig {
    let rules: BTreeMap<String, RulePolicy> = ids::BUILTIN_RULE_IDS
        .iter()
        .map(|id| {
            let policy = if disabled.contains(id) {
                RulePolicy::disabled()
            } else {
                RulePolicy::enabled()
            };
            (id.to_string(), policy)
        })
        .collect();

    EffectiveConfig {
        profile: "test".to_string(),
        rules,
        custom_rules: Vec::new(),
    }
}

pub fn custom_rule(id: &str, name: &str, condition: RuleCondition) -> CustomRule {
    CustomRule {
        id: id.to_string(),
        name: name.to_string(),
        condition,
    }
}
