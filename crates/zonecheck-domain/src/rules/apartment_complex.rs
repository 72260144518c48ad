use crate::rule::BuildingTypeRule;
use zonecheck_types::{PropertyFacts, Zone, ids};

/// Inclusive lower bound.
pub const MIN_SIZE_SQUARE_METERS: f64 = 500.0;

pub fn permits(facts: &PropertyFacts) -> bool {
    matches!(facts.zone, Zone::Zone2 | Zone::Zone3)
        && facts.size_square_meters >= MIN_SIZE_SQUARE_METERS
        && !facts.is_flood_zone
}

pub fn rule() -> BuildingTypeRule {
    BuildingTypeRule::new(
        ids::RULE_APARTMENT_COMPLEX,
        ids::NAME_APARTMENT_COMPLEX,
        permits,
    )
}
