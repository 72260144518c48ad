use crate::Zone;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The three facts a parcel is judged on.
///
/// `size_square_meters` must be finite and non-negative. The engine trusts this;
/// validating raw input is the caller's job.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PropertyFacts {
    pub zone: Zone,
    pub size_square_meters: f64,
    pub is_flood_zone: bool,
}

impl PropertyFacts {
    pub fn new(zone: Zone, size_square_meters: f64, is_flood_zone: bool) -> Self {
        Self {
            zone,
            size_square_meters,
            is_flood_zone,
        }
    }
}
