use crate::model::{CustomRuleConfig, SCHEMA_CONFIG_V1, ZonecheckConfigV1};
use crate::presets::{self, DEFAULT_PROFILE};
use anyhow::Context;
use std::collections::BTreeSet;
use zonecheck_domain::RuleSet;
use zonecheck_domain::condition::{FloodPolicy, RuleCondition, SizeBound};
use zonecheck_domain::policy::{CustomRule, EffectiveConfig};
use zonecheck_types::{NO_MATCH_LABEL, Zone, ids};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    /// Rule ids (built-in or custom) to switch off for this run.
    pub disable: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

impl ResolvedConfig {
    /// The rule set the engine should evaluate.
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::from_config(&self.effective)
    }
}

pub fn resolve_config(
    cfg: ZonecheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile)?;

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        if !ids::is_builtin_rule(rule_id) {
            anyhow::bail!(
                "unknown rule in [rules]: {rule_id} (expected one of {})",
                ids::BUILTIN_RULE_IDS.join(", ")
            );
        }
        if let Some(enabled) = rc.enabled {
            let entry = effective
                .rules
                .get_mut(rule_id)
                .with_context(|| format!("profile {profile} has no entry for {rule_id}"))?;
            entry.enabled = enabled;
        }
    }

    // custom rules
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for (index, rule) in cfg.custom_rules.iter().enumerate() {
        let custom = resolve_custom_rule(rule)
            .with_context(|| format!("invalid custom rule #{} ({})", index + 1, rule.id))?;
        if ids::is_builtin_rule(&custom.id) {
            anyhow::bail!("custom rule id {} collides with a built-in rule", custom.id);
        }
        if !seen.insert(custom.id.clone()) {
            anyhow::bail!("duplicate custom rule id: {}", custom.id);
        }
        effective.custom_rules.push(custom);
    }

    // CLI disables apply last
    for rule_id in &overrides.disable {
        if let Some(policy) = effective.rules.get_mut(rule_id) {
            policy.enabled = false;
        } else if seen.contains(rule_id) {
            effective.custom_rules.retain(|r| &r.id != rule_id);
        } else {
            anyhow::bail!("cannot disable unknown rule: {rule_id}");
        }
    }

    Ok(ResolvedConfig { effective })
}

fn resolve_custom_rule(rule: &CustomRuleConfig) -> anyhow::Result<CustomRule> {
    let id = rule.id.trim();
    if id.is_empty() {
        anyhow::bail!("id must not be empty");
    }
    let name = rule.name.trim();
    if name.is_empty() {
        anyhow::bail!("name must not be empty");
    }
    if name.eq_ignore_ascii_case(NO_MATCH_LABEL) {
        anyhow::bail!("name is reserved for the no-match result: {name:?}");
    }

    if rule.zones.is_empty() {
        anyhow::bail!("zones must list at least one zone");
    }
    let zones = rule
        .zones
        .iter()
        .map(|&n| Zone::try_from(n).map_err(anyhow::Error::from))
        .collect::<anyhow::Result<BTreeSet<Zone>>>()?;

    let min_size = parse_bound("min_size", rule.min_size, rule.min_size_exclusive)?;
    let max_size = parse_bound("max_size", rule.max_size, rule.max_size_exclusive)?;
    if let (Some(min), Some(max)) = (min_size, max_size)
        && min.value() > max.value()
    {
        anyhow::bail!(
            "lower size bound {} exceeds upper size bound {}",
            min.value(),
            max.value()
        );
    }

    let flood = match rule.flood.as_deref() {
        None => FloodPolicy::Any,
        Some(v) => parse_flood(v)?,
    };

    Ok(CustomRule {
        id: id.to_string(),
        name: name.to_string(),
        condition: RuleCondition {
            zones,
            min_size,
            max_size,
            flood,
        },
    })
}

fn parse_bound(
    field: &str,
    inclusive: Option<f64>,
    exclusive: Option<f64>,
) -> anyhow::Result<Option<SizeBound>> {
    let bound = match (inclusive, exclusive) {
        (None, None) => return Ok(None),
        (Some(_), Some(_)) => {
            anyhow::bail!("set either {field} or {field}_exclusive, not both")
        }
        (Some(v), None) => SizeBound::Inclusive(v),
        (None, Some(v)) => SizeBound::Exclusive(v),
    };

    let v = bound.value();
    if !v.is_finite() || v < 0.0 {
        anyhow::bail!("{field} must be a finite, non-negative number (got {v})");
    }
    Ok(Some(bound))
}

fn parse_flood(v: &str) -> anyhow::Result<FloodPolicy> {
    match v {
        "any" => Ok(FloodPolicy::Any),
        "excluded" | "exclude" => Ok(FloodPolicy::Excluded),
        "required" | "require" => Ok(FloodPolicy::Required),
        other => anyhow::bail!("unknown flood policy: {other} (expected any|excluded|required)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use zonecheck_domain::evaluate_with;
    use zonecheck_types::PropertyFacts;

    fn resolve(toml: &str) -> anyhow::Result<ResolvedConfig> {
        resolve_config(parse_config_toml(toml)?, Overrides::default())
    }

    #[test]
    fn empty_config_uses_standard_profile() {
        let resolved = resolve("").unwrap();
        assert_eq!(resolved.effective.profile, "standard");
        assert_eq!(
            resolved.rule_set().ids(),
            ids::BUILTIN_RULE_IDS.to_vec()
        );
    }

    #[test]
    fn rule_can_be_disabled_in_config() {
        let resolved = resolve(
            r#"
[rules."building.apartment_complex"]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(
            resolved.rule_set().ids(),
            vec![ids::RULE_SINGLE_DWELLING_HOUSE, ids::RULE_COMMERCIAL_BUILDING]
        );
    }

    #[test]
    fn config_can_reenable_rule_disabled_by_profile() {
        let resolved = resolve(
            r#"
profile = "residential"

[rules."building.commercial_building"]
enabled = true
"#,
        )
        .unwrap();
        assert_eq!(resolved.effective.profile, "residential");
        assert!(resolved.effective.is_enabled(ids::RULE_COMMERCIAL_BUILDING));
    }

    #[test]
    fn custom_rule_is_appended_and_evaluated() {
        let resolved = resolve(
            r#"
[[custom_rules]]
id = "building.manor_house"
name = "Manor House"
zones = [1, 2]
min_size = 2000
flood = "excluded"
"#,
        )
        .unwrap();

        let rules = resolved.rule_set();
        assert_eq!(rules.ids().last().copied(), Some("building.manor_house"));

        let result = evaluate_with(&rules, &PropertyFacts::new(Zone::Zone2, 2000.0, false));
        assert_eq!(
            result.labels(),
            ["Single Dwelling House", "Apartment Complex", "Manor House"]
        );
    }

    #[test]
    fn exclusive_bounds_are_respected() {
        let resolved = resolve(
            r#"
[[custom_rules]]
id = "building.warehouse"
name = "Warehouse"
zones = [3]
min_size_exclusive = 5000
max_size_exclusive = 20000
"#,
        )
        .unwrap();
        let rules = resolved.rule_set();
        let warehouse = rules.get("building.warehouse").unwrap();
        assert!(!warehouse.permits(&PropertyFacts::new(Zone::Zone3, 5000.0, true)));
        assert!(warehouse.permits(&PropertyFacts::new(Zone::Zone3, 5000.5, true)));
        assert!(!warehouse.permits(&PropertyFacts::new(Zone::Zone3, 20000.0, true)));
    }

    #[test]
    fn overrides_profile_wins_over_config() {
        let cfg = parse_config_toml(r#"profile = "standard""#).unwrap();
        let resolved = resolve_config(
            cfg,
            Overrides {
                profile: Some("residential".to_string()),
                ..Overrides::default()
            },
        )
        .unwrap();
        assert_eq!(resolved.effective.profile, "residential");
    }

    #[test]
    fn override_disable_removes_builtin_and_custom_rules() {
        let cfg = parse_config_toml(
            r#"
[[custom_rules]]
id = "building.kiosk"
name = "Kiosk"
zones = [3]
"#,
        )
        .unwrap();
        let resolved = resolve_config(
            cfg,
            Overrides {
                profile: None,
                disable: vec![
                    ids::RULE_SINGLE_DWELLING_HOUSE.to_string(),
                    "building.kiosk".to_string(),
                ],
            },
        )
        .unwrap();
        assert_eq!(
            resolved.rule_set().ids(),
            vec![ids::RULE_APARTMENT_COMPLEX, ids::RULE_COMMERCIAL_BUILDING]
        );
    }

    #[test]
    fn rejects_unknown_builtin_rule() {
        let err = resolve(
            r#"
[rules."building.castle"]
enabled = false
"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("unknown rule in [rules]: building.castle"));
    }

    #[test]
    fn rejects_unknown_disable_override() {
        let err = resolve_config(
            ZonecheckConfigV1::default(),
            Overrides {
                profile: None,
                disable: vec!["building.castle".to_string()],
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("cannot disable unknown rule"));
    }

    #[test]
    fn rejects_unsupported_schema() {
        let err = resolve(r#"schema = "zonecheck.config.v9""#).unwrap_err();
        assert!(err.to_string().contains("unsupported config schema"));
    }

    #[test]
    fn rejects_invalid_custom_rules() {
        let cases = [
            ("id = \"\"\nname = \"X\"", "id must not be empty"),
            ("id = \"x\"\nname = \" \"", "name must not be empty"),
            (
                "id = \"x\"\nname = \"No suitable building types based on current property facts\"\nzones = [3]\nflood = \"required\"",
                "name is reserved for the no-match result",
            ),
            ("id = \"x\"\nname = \"X\"", "zones must list at least one zone"),
            ("id = \"x\"\nname = \"X\"\nzones = [4]", "unknown zone number: 4"),
            (
                "id = \"x\"\nname = \"X\"\nzones = [1]\nmin_size = -1",
                "min_size must be a finite, non-negative number",
            ),
            (
                "id = \"x\"\nname = \"X\"\nzones = [1]\nmin_size = 1\nmin_size_exclusive = 2",
                "not both",
            ),
            (
                "id = \"x\"\nname = \"X\"\nzones = [1]\nmin_size = 10\nmax_size = 5",
                "exceeds upper size bound",
            ),
            (
                "id = \"x\"\nname = \"X\"\nzones = [1]\nflood = \"sometimes\"",
                "unknown flood policy",
            ),
        ];

        for (body, expected) in cases {
            let err = resolve(&format!("[[custom_rules]]\n{body}\n")).unwrap_err();
            assert!(
                format!("{err:#}").contains(expected),
                "expected {expected:?} in {err:#}"
            );
        }
    }

    #[test]
    fn rejects_duplicate_and_colliding_ids() {
        let err = resolve(
            r#"
[[custom_rules]]
id = "building.kiosk"
name = "Kiosk"
zones = [3]

[[custom_rules]]
id = "building.kiosk"
name = "Kiosk Again"
zones = [2]
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate custom rule id"));

        let err = resolve(
            r#"
[[custom_rules]]
id = "building.apartment_complex"
name = "Flats"
zones = [2]
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("collides with a built-in rule"));
    }
}
