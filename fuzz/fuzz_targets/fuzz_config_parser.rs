//! Fuzz target for zonecheck.toml parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use zonecheck_settings::{Overrides, parse_config_toml, resolve_config};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = parse_config_toml(text)
        && let Ok(resolved) = resolve_config(cfg, Overrides::default())
    {
        let rules = resolved.rule_set();
        assert!(rules.len() <= 3 + resolved.effective.custom_rules.len());
    }
});
