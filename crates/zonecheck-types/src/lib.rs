//! Stable value types and IDs used across the zonecheck workspace.
//!
//! This crate is intentionally boring:
//! - property facts handed to the engine
//! - the evaluation result and its no-match sentinel
//! - stable string IDs for the built-in building-type rules
//! - the emitted report envelope
//! - explain registry for rule documentation

#![forbid(unsafe_code)]

pub mod explain;
pub mod facts;
pub mod ids;
pub mod report;
pub mod result;
pub mod zone;

pub use explain::{Explanation, lookup_explanation};
pub use facts::PropertyFacts;
pub use report::{EvaluationData, EvaluationReport, SCHEMA_REPORT_V1, ToolMeta};
pub use result::{EvaluationResult, NO_MATCH_LABEL, ResultEntry, ResultShapeError};
pub use zone::{Zone, ZoneParseError};
