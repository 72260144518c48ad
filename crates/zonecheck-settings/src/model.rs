use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "zonecheck.config.v1";

/// `zonecheck.toml` schema v1.
///
/// This is a *user-facing* config model: values stay loosely typed here and are validated
/// during resolution, where errors can name the offending rule.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZonecheckConfigV1 {
    /// Optional schema string for tooling (`zonecheck.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile: `standard` (default) or `residential`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Map of built-in rule_id -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,

    /// Additional building types, evaluated after the built-ins in file order.
    #[serde(default)]
    pub custom_rules: Vec<CustomRuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CustomRuleConfig {
    /// Stable dotted identifier, e.g. `building.manor_house`.
    pub id: String,

    /// Display name used in results.
    pub name: String,

    /// Zone numbers (1-3) the building type is allowed in.
    #[serde(default)]
    pub zones: Vec<u8>,

    /// Inclusive lower size bound in square metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<f64>,

    /// Exclusive lower size bound in square metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size_exclusive: Option<f64>,

    /// Inclusive upper size bound in square metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<f64>,

    /// Exclusive upper size bound in square metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size_exclusive: Option<f64>,

    /// `any` (default), `excluded` or `required`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flood: Option<String>,
}
