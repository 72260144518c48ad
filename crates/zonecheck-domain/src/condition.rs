//! Declarative predicates for rules defined outside the code (e.g. in config).

use std::collections::BTreeSet;
use zonecheck_types::{PropertyFacts, Zone};

/// One side of a size range. `Inclusive(500.0)` as a lower bound means `size >= 500`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeBound {
    Inclusive(f64),
    Exclusive(f64),
}

impl SizeBound {
    pub fn value(self) -> f64 {
        match self {
            SizeBound::Inclusive(v) | SizeBound::Exclusive(v) => v,
        }
    }

    fn admits_as_min(self, size: f64) -> bool {
        match self {
            SizeBound::Inclusive(min) => size >= min,
            SizeBound::Exclusive(min) => size > min,
        }
    }

    fn admits_as_max(self, size: f64) -> bool {
        match self {
            SizeBound::Inclusive(max) => size <= max,
            SizeBound::Exclusive(max) => size < max,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloodPolicy {
    /// Flood status is not considered.
    #[default]
    Any,
    /// Parcel must not be in a flood zone.
    Excluded,
    /// Parcel must be in a flood zone.
    Required,
}

impl FloodPolicy {
    fn admits(self, is_flood_zone: bool) -> bool {
        match self {
            FloodPolicy::Any => true,
            FloodPolicy::Excluded => !is_flood_zone,
            FloodPolicy::Required => is_flood_zone,
        }
    }
}

/// All parts must hold for the condition to match. An empty zone set matches nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleCondition {
    pub zones: BTreeSet<Zone>,
    pub min_size: Option<SizeBound>,
    pub max_size: Option<SizeBound>,
    pub flood: FloodPolicy,
}

impl RuleCondition {
    pub fn in_zones(zones: impl IntoIterator<Item = Zone>) -> Self {
        Self {
            zones: zones.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn min_size(mut self, bound: SizeBound) -> Self {
        self.min_size = Some(bound);
        self
    }

    pub fn max_size(mut self, bound: SizeBound) -> Self {
        self.max_size = Some(bound);
        self
    }

    pub fn flood(mut self, policy: FloodPolicy) -> Self {
        self.flood = policy;
        self
    }

    pub fn matches(&self, facts: &PropertyFacts) -> bool {
        let size = facts.size_square_meters;
        self.zones.contains(&facts.zone)
            && self.min_size.is_none_or(|b| b.admits_as_min(size))
            && self.max_size.is_none_or(|b| b.admits_as_max(size))
            && self.flood.admits(facts.is_flood_zone)
    }

    /// Plain-language conditions, worded like the built-in rule explanations.
    pub fn describe(&self) -> Vec<String> {
        let mut out = Vec::new();

        let zones: Vec<String> = self.zones.iter().map(Zone::to_string).collect();
        out.push(match zones.as_slice() {
            [] => "no zone qualifies".to_string(),
            [only] => format!("zone is {only}"),
            [init @ .., last] => format!("zone is {} or {last}", init.join(", ")),
        });

        match self.min_size {
            Some(SizeBound::Inclusive(v)) => out.push(format!("size is at least {v} m2")),
            Some(SizeBound::Exclusive(v)) => out.push(format!("size is greater than {v} m2")),
            None => {}
        }
        match self.max_size {
            Some(SizeBound::Inclusive(v)) => out.push(format!("size is at most {v} m2")),
            Some(SizeBound::Exclusive(v)) => out.push(format!("size is less than {v} m2")),
            None => {}
        }
        match self.flood {
            FloodPolicy::Any => {}
            FloodPolicy::Excluded => out.push("parcel is not in a flood zone".to_string()),
            FloodPolicy::Required => out.push("parcel is in a flood zone".to_string()),
        }

        out
    }
}
