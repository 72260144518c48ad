use crate::condition::RuleCondition;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulePolicy {
    pub enabled: bool,
}

impl RulePolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

/// A building type defined by configuration rather than code.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomRule {
    pub id: String,
    pub name: String,
    pub condition: RuleCondition,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    /// Built-in rule id -> policy. Built-ins missing from the map are disabled.
    pub rules: BTreeMap<String, RulePolicy>,
    /// Appended after the built-ins, in this order.
    pub custom_rules: Vec<CustomRule>,
}

impl EffectiveConfig {
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        self.rules.get(rule_id).is_some_and(|p| p.enabled)
    }
}
