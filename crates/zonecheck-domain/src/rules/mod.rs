//! Built-in building-type rules, one module per building type.
//!
//! To add a building type: write its module with `permits` and `rule`, then append it to
//! `builtin`. The evaluator does not change.

use crate::rule::BuildingTypeRule;

pub mod apartment_complex;
pub mod commercial_building;
pub mod single_dwelling_house;


/// Built-in rules in declaration order.
pub fn builtin() -> Vec<BuildingTypeRule> {
    vec![
        single_dwelling_house::rule(),
        apartment_complex::rule(),
        commercial_building::rule(),
    ]
}
