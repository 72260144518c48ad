//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CustomRuleConfig, RuleConfig, SCHEMA_CONFIG_V1, ZonecheckConfigV1};
pub use presets::{DEFAULT_PROFILE, known_profiles};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `zonecheck.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ZonecheckConfigV1> {
    let cfg: ZonecheckConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile + per-rule config + custom rules).
pub fn resolve_config(
    cfg: ZonecheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
