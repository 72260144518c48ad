//! The `rules` use case: list the active rule set in evaluation order.

use crate::evaluate::resolve_settings;
use zonecheck_settings::Overrides;
use zonecheck_types::ids;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSummary {
    pub id: String,
    pub name: String,
    pub builtin: bool,
}

pub fn run_list_rules(config_text: &str, overrides: Overrides) -> anyhow::Result<Vec<RuleSummary>> {
    let resolved = resolve_settings(config_text, overrides)?;
    Ok(resolved
        .rule_set()
        .iter()
        .map(|rule| RuleSummary {
            id: rule.id().to_string(),
            name: rule.name().to_string(),
            builtin: ids::is_builtin_rule(rule.id()),
        })
        .collect())
}

/// One line per rule: position, id, name, and a marker for config-defined rules.
pub fn format_rules(rules: &[RuleSummary]) -> String {
    if rules.is_empty() {
        return "No rules are enabled.\n".to_string();
    }

    let width = rules.iter().map(|r| r.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (pos, rule) in rules.iter().enumerate() {
        let origin = if rule.builtin { "" } else { " (custom)" };
        out.push_str(&format!(
            "{}. {:<width$}  {}{}\n",
            pos + 1,
            rule.id,
            rule.name,
            origin
        ));
    }
    out
}
