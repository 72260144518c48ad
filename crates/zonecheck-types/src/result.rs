use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Label of the synthetic entry emitted when no rule matches.
pub const NO_MATCH_LABEL: &str = "No suitable building types based on current property facts";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResultEntry {
    pub id: u32,
    pub label: String,
}

/// A result list that breaks the shape every evaluation produces.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResultShapeError {
    #[error("result list is empty (expected at least one entry)")]
    Empty,
    #[error("result entry #{position} has id {id} (ids must run 0..n in order)")]
    IdOutOfSequence { position: usize, id: u32 },
}

/// Ordered outcome of one evaluation.
///
/// Never empty: when nothing matches it holds exactly the no-match entry with id 0.
/// On the wire it is the plain entry list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ResultEntry>", into = "Vec<ResultEntry>")]
pub struct EvaluationResult {
    entries: Vec<ResultEntry>,
    no_match: bool,
}

impl EvaluationResult {
    /// Build a result from matched building names, in order.
    ///
    /// Ids are assigned by position; an empty iterator yields the no-match entry.
    pub fn from_matches<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<ResultEntry> = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| ResultEntry {
                id: i as u32,
                label: label.into(),
            })
            .collect();

        if entries.is_empty() {
            return Self {
                entries: vec![ResultEntry {
                    id: 0,
                    label: NO_MATCH_LABEL.to_string(),
                }],
                no_match: true,
            };
        }

        Self {
            entries,
            no_match: false,
        }
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no rule matched and the list holds only the synthetic entry.
    pub fn is_no_match(&self) -> bool {
        self.no_match
    }

    /// Number of building types actually permitted (0 for the no-match result).
    pub fn matched_count(&self) -> usize {
        if self.no_match { 0 } else { self.entries.len() }
    }
}

impl TryFrom<Vec<ResultEntry>> for EvaluationResult {
    type Error = ResultShapeError;

    /// A lone sentinel entry read back from a report is taken as the no-match outcome.
    fn try_from(entries: Vec<ResultEntry>) -> Result<Self, Self::Error> {
        if entries.is_empty() {
            return Err(ResultShapeError::Empty);
        }
        for (position, entry) in entries.iter().enumerate() {
            if u64::from(entry.id) != position as u64 {
                return Err(ResultShapeError::IdOutOfSequence {
                    position,
                    id: entry.id,
                });
            }
        }

        let no_match = matches!(entries.as_slice(), [only] if only.label == NO_MATCH_LABEL);
        Ok(Self { entries, no_match })
    }
}

impl From<EvaluationResult> for Vec<ResultEntry> {
    fn from(result: EvaluationResult) -> Self {
        result.entries
    }
}

impl JsonSchema for EvaluationResult {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "EvaluationResult".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let entry = generator.subschema_for::<ResultEntry>();
        json_schema!({
            "description": "Permitted building types in rule order, or the single no-match entry.",
            "type": "array",
            "items": entry,
            "minItems": 1
        })
    }
}

impl<'a> IntoIterator for &'a EvaluationResult {
    type Item = &'a ResultEntry;
    type IntoIter = std::slice::Iter<'a, ResultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
