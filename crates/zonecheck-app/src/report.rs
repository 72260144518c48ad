use anyhow::Context;
use zonecheck_render::{RenderableEntry, RenderableFacts, RenderableReport};
use zonecheck_types::{EvaluationReport, SCHEMA_REPORT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<EvaluationReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse zonecheck report")
}

pub fn serialize_report(report: &EvaluationReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &EvaluationReport) -> RenderableReport {
    RenderableReport {
        profile: report.data.profile.clone(),
        facts: RenderableFacts {
            zone: report.facts.zone.number(),
            size_square_meters: report.facts.size_square_meters,
            is_flood_zone: report.facts.is_flood_zone,
        },
        entries: report
            .results
            .entries()
            .iter()
            .map(|e| RenderableEntry {
                id: e.id,
                label: e.label.clone(),
            })
            .collect(),
        no_match: report.data.no_match,
    }
}
