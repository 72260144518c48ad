//! Use case orchestration for zonecheck.
//!
//! This crate provides the application layer: the input validation the engine relies on, and
//! use cases that coordinate the settings, domain, and render layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod evaluate;
mod explain;
mod input;
mod render;
mod report;
mod rules;

pub use evaluate::{EvaluateInput, EvaluateOutput, resolve_settings, run_evaluate};
pub use explain::{
    CustomExplanation, ExplainOutput, format_custom_explanation, format_explanation,
    format_not_found, run_explain,
};
pub use input::{FactsInput, InputError, validate_input};
pub use render::{render_markdown, render_text};
pub use report::{parse_report_json, serialize_report, to_renderable};
pub use rules::{RuleSummary, format_rules, run_list_rules};
