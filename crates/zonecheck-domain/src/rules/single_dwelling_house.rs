use crate::rule::BuildingTypeRule;
use zonecheck_types::{PropertyFacts, Zone, ids};

/// Zone 1 or 2, outside flood areas. No size bound: arbitrarily large parcels still qualify.
pub fn permits(facts: &PropertyFacts) -> bool {
    matches!(facts.zone, Zone::Zone1 | Zone::Zone2) && !facts.is_flood_zone
}

pub fn rule() -> BuildingTypeRule {
    BuildingTypeRule::new(
        ids::RULE_SINGLE_DWELLING_HOUSE,
        ids::NAME_SINGLE_DWELLING_HOUSE,
        permits,
    )
}
