use crate::rule::BuildingTypeRule;
use zonecheck_types::{PropertyFacts, Zone, ids};

/// Exclusive lower bound: exactly 1000 m2 does not qualify.
pub const SIZE_THRESHOLD_SQUARE_METERS: f64 = 1000.0;

/// Zone 3 and strictly larger than the threshold. Flood status is irrelevant.
pub fn permits(facts: &PropertyFacts) -> bool {
    facts.zone == Zone::Zone3 && facts.size_square_meters > SIZE_THRESHOLD_SQUARE_METERS
}

pub fn rule() -> BuildingTypeRule {
    BuildingTypeRule::new(
        ids::RULE_COMMERCIAL_BUILDING,
        ids::NAME_COMMERCIAL_BUILDING,
        permits,
    )
}
