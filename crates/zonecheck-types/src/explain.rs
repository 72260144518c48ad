//! Explain registry for the built-in rules.
//!
//! Maps rule IDs (and display names) to the plain-language conditions of each rule.

use crate::ids;

/// Explanation entry for a built-in rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub rule_id: &'static str,
    /// Display name, as it appears in results.
    pub title: &'static str,
    /// What the rule permits and when.
    pub description: &'static str,
    /// One line per condition; all must hold.
    pub conditions: &'static [&'static str],
    /// Sample parcels and whether the rule grants them.
    pub examples: &'static [&'static str],
}

/// Look up an explanation by rule ID or display name (case-insensitive for names).
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    let identifier = identifier.trim();
    let by_id = match identifier {
        ids::RULE_SINGLE_DWELLING_HOUSE => Some(explain_single_dwelling_house()),
        ids::RULE_APARTMENT_COMPLEX => Some(explain_apartment_complex()),
        ids::RULE_COMMERCIAL_BUILDING => Some(explain_commercial_building()),
        _ => None,
    };

    by_id.or_else(|| {
        all_explanations()
            .into_iter()
            .find(|e| e.title.eq_ignore_ascii_case(identifier))
    })
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &ids::BUILTIN_RULE_IDS
}

fn all_explanations() -> Vec<Explanation> {
    vec![
        explain_single_dwelling_house(),
        explain_apartment_complex(),
        explain_commercial_building(),
    ]
}

fn explain_single_dwelling_house() -> Explanation {
    Explanation {
        rule_id: ids::RULE_SINGLE_DWELLING_HOUSE,
        title: ids::NAME_SINGLE_DWELLING_HOUSE,
        description: "\
Permits a single dwelling house on residential and mixed parcels outside flood areas.

There is no size requirement in either direction: a parcel of any area qualifies, \
however large.",
        conditions: &["zone is Zone 1 or Zone 2", "parcel is not in a flood zone"],
        examples: &[
            "Zone 1, 10 m2, no flood       -> permitted",
            "Zone 2, 100000000000 m2       -> permitted",
            "Zone 1, 5 m2, flood zone      -> not permitted",
            "Zone 3, 800 m2, no flood      -> not permitted",
        ],
    }
}

fn explain_apartment_complex() -> Explanation {
    Explanation {
        rule_id: ids::RULE_APARTMENT_COMPLEX,
        title: ids::NAME_APARTMENT_COMPLEX,
        description: "\
Permits an apartment complex on mixed and commercial parcels of at least 500 m2 outside \
flood areas.

The 500 m2 threshold is inclusive: a parcel of exactly 500 m2 qualifies.",
        conditions: &[
            "zone is Zone 2 or Zone 3",
            "size is at least 500 m2",
            "parcel is not in a flood zone",
        ],
        examples: &[
            "Zone 2, 500 m2, no flood      -> permitted",
            "Zone 3, 1000 m2, no flood     -> permitted",
            "Zone 2, 499.9 m2, no flood    -> not permitted",
            "Zone 3, 5000 m2, flood zone   -> not permitted",
        ],
    }
}

fn explain_commercial_building() -> Explanation {
    Explanation {
        rule_id: ids::RULE_COMMERCIAL_BUILDING,
        title: ids::NAME_COMMERCIAL_BUILDING,
        description: "\
Permits a commercial building on Zone 3 parcels larger than 1000 m2.

The 1000 m2 threshold is exclusive: a parcel of exactly 1000 m2 does not qualify. \
Flood status is not considered.",
        conditions: &["zone is Zone 3", "size is greater than 1000 m2"],
        examples: &[
            "Zone 3, 1001 m2, flood zone   -> permitted",
            "Zone 3, 1000 m2, no flood     -> not permitted",
            "Zone 2, 5000 m2, no flood     -> not permitted",
        ],
    }
}
