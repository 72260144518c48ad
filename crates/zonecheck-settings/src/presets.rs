use std::collections::BTreeMap;
use zonecheck_domain::policy::{EffectiveConfig, RulePolicy};
use zonecheck_types::ids;

pub const DEFAULT_PROFILE: &str = "standard";

pub fn known_profiles() -> &'static [&'static str] {
    &["standard", "residential"]
}

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> anyhow::Result<EffectiveConfig> {
    match profile {
        "standard" => Ok(standard_profile()),
        "residential" => Ok(residential_profile()),
        other => anyhow::bail!(
            "unknown profile: {other} (expected {})",
            known_profiles().join("|")
        ),
    }
}

fn standard_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "standard".to_string(),
        rules: builtin_rules(&[]),
        custom_rules: Vec::new(),
    }
}

fn residential_profile() -> EffectiveConfig {
    // Housing only: commercial development is switched off.
    EffectiveConfig {
        profile: "residential".to_string(),
        rules: builtin_rules(&[ids::RULE_COMMERCIAL_BUILDING]),
        custom_rules: Vec::new(),
    }
}

fn builtin_rules(disabled: &[&str]) -> BTreeMap<String, RulePolicy> {
    ids::BUILTIN_RULE_IDS
        .iter()
        .map(|id| {
            let policy = if disabled.contains(id) {
                RulePolicy::disabled()
            } else {
                RulePolicy::enabled()
            };
            (id.to_string(), policy)
        })
        .collect()
}
