//! Fuzz target for raw form input validation.
//!
//! Accepted input must yield well-formed facts: a finite, positive size.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_input_validation
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use zonecheck_app::{FactsInput, validate_input};

#[derive(Arbitrary, Debug)]
struct RawInput {
    zone: Option<String>,
    size: Option<String>,
    flood: bool,
}

fuzz_target!(|raw: RawInput| {
    let input = FactsInput {
        zone: raw.zone,
        size: raw.size,
        flood: raw.flood,
    };
    if let Ok(facts) = validate_input(&input) {
        assert!(facts.size_square_meters.is_finite());
        assert!(facts.size_square_meters > 0.0);
        assert_eq!(facts.is_flood_zone, input.flood);
    }
});
