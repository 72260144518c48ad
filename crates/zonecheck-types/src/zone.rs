use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Zoning classification of a land parcel.
///
/// There is deliberately no "unset" member: an unresolved selection is an input
/// error and never reaches the engine. On the wire a zone is its number (`1..=3`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Zone {
    Zone1,
    Zone2,
    Zone3,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Zone1, Zone::Zone2, Zone::Zone3];

    pub fn number(self) -> u8 {
        match self {
            Zone::Zone1 => 1,
            Zone::Zone2 => 2,
            Zone::Zone3 => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Zone> {
        match n {
            1 => Some(Zone::Zone1),
            2 => Some(Zone::Zone2),
            3 => Some(Zone::Zone3),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ZoneParseError {
    #[error("unknown zone number: {0} (expected 1, 2 or 3)")]
    OutOfRange(u8),
    #[error("unrecognized zone: {0:?} (expected 1, 2 or 3)")]
    Unrecognized(String),
}

impl TryFrom<u8> for Zone {
    type Error = ZoneParseError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Zone::from_number(n).ok_or(ZoneParseError::OutOfRange(n))
    }
}

impl From<Zone> for u8 {
    fn from(zone: Zone) -> u8 {
        zone.number()
    }
}

impl FromStr for Zone {
    type Err = ZoneParseError;

    /// Accepts `1`, `zone1`, `zone 1` and `Zone1` (case-insensitive, surrounding whitespace
    /// ignored). The number is a single digit; `01` or `+2` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let digit = match lowered.strip_prefix("zone") {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => lowered.as_str(),
        };

        match digit {
            "1" => Ok(Zone::Zone1),
            "2" => Ok(Zone::Zone2),
            "3" => Ok(Zone::Zone3),
            _ => Err(ZoneParseError::Unrecognized(s.to_string())),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone {}", self.number())
    }
}

impl JsonSchema for Zone {
    fn schema_name() -> Cow<'static, str> {
        "Zone".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Zoning classification of a land parcel.",
            "type": "integer",
            "enum": [1, 2, 3]
        })
    }
}
