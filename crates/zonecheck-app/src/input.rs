//! Validation of raw user input into `PropertyFacts`.
//!
//! The engine trusts its input; everything it trusts is established here.

use zonecheck_types::{PropertyFacts, Zone};

/// Raw, unvalidated form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactsInput {
    /// Zone selection as typed (`"2"`, `"zone2"`); `None`, empty, or `"0"` means unselected.
    pub zone: Option<String>,
    /// Size as typed, in square metres.
    pub size: Option<String>,
    pub flood: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please select zone")]
    ZoneNotSelected,
    #[error("Please input positive numbers")]
    SizeNotPositive,
}

/// Check the zone first, then the size. The first failure wins.
pub fn validate_input(input: &FactsInput) -> Result<PropertyFacts, InputError> {
    let zone = input
        .zone
        .as_deref()
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .and_then(|z| z.parse::<Zone>().ok())
        .ok_or(InputError::ZoneNotSelected)?;

    let size = input
        .size
        .as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|s| s.is_finite() && *s > 0.0)
        .ok_or(InputError::SizeNotPositive)?;

    Ok(PropertyFacts::new(zone, size, input.flood))
}
