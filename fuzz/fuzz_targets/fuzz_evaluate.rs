//! Fuzz target for the built-in evaluator.
//!
//! For any well-formed facts the result is non-empty, ids run 0..n and the
//! no-match entry only ever appears alone.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluate
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use zonecheck_types::{NO_MATCH_LABEL, PropertyFacts, Zone};

fuzz_target!(|input: (u8, f64, bool)| {
    let (zone, size, flood) = input;
    if !size.is_finite() || size < 0.0 {
        return;
    }
    let zone = Zone::ALL[usize::from(zone) % Zone::ALL.len()];
    let facts = PropertyFacts::new(zone, size, flood);

    let result = zonecheck_domain::evaluate(&facts);
    assert!(!result.is_empty());
    for (expected, entry) in result.entries().iter().enumerate() {
        assert_eq!(entry.id as usize, expected);
    }
    if result.labels().contains(&NO_MATCH_LABEL) {
        assert_eq!(result.len(), 1);
    }
    assert_eq!(result, zonecheck_domain::evaluate(&facts));
});
