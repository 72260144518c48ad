//! The `evaluate` use case: resolve the rule set, evaluate facts, produce a report.

use anyhow::Context;
use time::OffsetDateTime;
use tracing::{debug, info};
use zonecheck_settings::{Overrides, ResolvedConfig};
use zonecheck_types::{
    EvaluationData, EvaluationReport, PropertyFacts, SCHEMA_REPORT_V1, ToolMeta,
};

/// Input for the evaluate use case.
#[derive(Clone, Debug)]
pub struct EvaluateInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Facts that already passed `validate_input`.
    pub facts: PropertyFacts,
}

/// Output from the evaluate use case.
#[derive(Clone, Debug)]
pub struct EvaluateOutput {
    pub report: EvaluationReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve config text. Empty text means defaults.
pub fn resolve_settings(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        zonecheck_settings::ZonecheckConfigV1::default()
    } else {
        zonecheck_settings::parse_config_toml(config_text).context("parse config")?
    };

    let resolved = zonecheck_settings::resolve_config(cfg, overrides).context("resolve config")?;
    info!(
        profile = %resolved.effective.profile,
        custom_rules = resolved.effective.custom_rules.len(),
        "resolved configuration"
    );
    Ok(resolved)
}

pub fn run_evaluate(input: EvaluateInput<'_>) -> anyhow::Result<EvaluateOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve_settings(input.config_text, input.overrides)?;
    let rules = resolved.rule_set();
    debug!(rules = ?rules.ids(), "evaluating rule set");

    let results = zonecheck_domain::evaluate_with(&rules, &input.facts);
    debug!(
        zone = input.facts.zone.number(),
        size = input.facts.size_square_meters,
        flood = input.facts.is_flood_zone,
        matched = results.matched_count(),
        "evaluated property facts"
    );

    let data = EvaluationData {
        profile: resolved.effective.profile.clone(),
        rules_evaluated: rules.len() as u32,
        rules_matched: results.matched_count() as u32,
        no_match: results.is_no_match(),
    };

    let report = EvaluationReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "zonecheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        facts: input.facts,
        results,
        data,
    };

    Ok(EvaluateOutput {
        report,
        resolved_config: resolved,
    })
}
