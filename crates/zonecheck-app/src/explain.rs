//! The `explain` use case: describe a built-in or config-defined rule.

use zonecheck_domain::policy::CustomRule;
use zonecheck_types::explain::{self, Explanation};

/// A config-defined rule, described from its condition.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomExplanation {
    pub rule_id: String,
    pub name: String,
    pub conditions: Vec<String>,
}

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for a built-in rule.
    Found(Explanation),
    /// Matched a rule defined in config.
    Custom(CustomExplanation),
    /// Unknown identifier; includes every rule id that can be explained.
    NotFound {
        identifier: String,
        available_rule_ids: Vec<String>,
    },
}

/// Look up a rule id or building name among the built-ins, then the configured custom rules.
pub fn run_explain(identifier: &str, custom_rules: &[CustomRule]) -> ExplainOutput {
    if let Some(exp) = explain::lookup_explanation(identifier) {
        return ExplainOutput::Found(exp);
    }

    let wanted = identifier.trim();
    if let Some(rule) = custom_rules
        .iter()
        .find(|r| r.id == wanted || r.name.eq_ignore_ascii_case(wanted))
    {
        return ExplainOutput::Custom(CustomExplanation {
            rule_id: rule.id.clone(),
            name: rule.name.clone(),
            conditions: rule.condition.describe(),
        });
    }

    ExplainOutput::NotFound {
        identifier: identifier.to_string(),
        available_rule_ids: explain::all_rule_ids()
            .iter()
            .map(|id| id.to_string())
            .chain(custom_rules.iter().map(|r| r.id.clone()))
            .collect(),
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(&format!("Rule id: {}\n\n", exp.rule_id));
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Conditions (all must hold)\n");
    out.push_str("--------------------------\n");
    for condition in exp.conditions {
        out.push_str(&format!("  - {}\n", condition));
    }
    out.push('\n');
    out.push_str("Examples\n");
    out.push_str("--------\n");
    for example in exp.examples {
        out.push_str(&format!("  {}\n", example));
    }

    out
}

/// Format a config-defined rule for terminal display.
pub fn format_custom_explanation(exp: &CustomExplanation) -> String {
    let mut out = String::new();

    out.push_str(&exp.name);
    out.push('\n');
    out.push_str(&"=".repeat(exp.name.len()));
    out.push_str("\n\n");
    out.push_str(&format!("Rule id: {} (custom)\n\n", exp.rule_id));
    out.push_str("Defined in the configuration file. Evaluated after the built-in rules.\n\n");
    out.push_str("Conditions (all must hold)\n");
    out.push_str("--------------------------\n");
    for condition in &exp.conditions {
        out.push_str(&format!("  - {}\n", condition));
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, rule_ids: &[String]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule id or building type: {}\n\n", identifier));
    out.push_str("Available rule ids:\n");
    for id in rule_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}
