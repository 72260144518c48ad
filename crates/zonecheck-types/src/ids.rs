//! Stable identifiers for the built-in building-type rules.
//!
//! `rule_id` is a dotted namespace; the display name is what lands in results.

// Rules
pub const RULE_SINGLE_DWELLING_HOUSE: &str = "building.single_dwelling_house";
pub const RULE_APARTMENT_COMPLEX: &str = "building.apartment_complex";
pub const RULE_COMMERCIAL_BUILDING: &str = "building.commercial_building";

// Display names
pub const NAME_SINGLE_DWELLING_HOUSE: &str = "Single Dwelling House";
pub const NAME_APARTMENT_COMPLEX: &str = "Apartment Complex";
pub const NAME_COMMERCIAL_BUILDING: &str = "Commercial Building";

/// Built-in rule IDs in evaluation order.
pub const BUILTIN_RULE_IDS: [&str; 3] = [
    RULE_SINGLE_DWELLING_HOUSE,
    RULE_APARTMENT_COMPLEX,
    RULE_COMMERCIAL_BUILDING,
];

pub fn is_builtin_rule(rule_id: &str) -> bool {
    BUILTIN_RULE_IDS.contains(&rule_id)
}
