//! Pure rule evaluation (no IO).
//!
//! Input: property facts validated elsewhere, and optionally a configured rule set.
//! Output: the ordered list of permitted building types.

#![forbid(unsafe_code)]

pub mod condition;
pub mod policy;
pub mod rule;
pub mod rules;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, evaluate_with};
pub use rule::{BuildingTypeRule, RuleSet};
