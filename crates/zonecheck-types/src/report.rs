use crate::{EvaluationResult, PropertyFacts};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for zonecheck reports.
pub const SCHEMA_REPORT_V1: &str = "zonecheck.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Summary payload describing how the result was produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct EvaluationData {
    pub profile: String,
    pub rules_evaluated: u32,
    pub rules_matched: u32,
    pub no_match: bool,
}

/// One evaluation, wrapped with enough context to be rendered or archived later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub facts: PropertyFacts,
    pub results: EvaluationResult,
    pub data: EvaluationData,
}
