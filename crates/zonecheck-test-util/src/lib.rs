//! Shared test utilities for the zonecheck workspace.
//!
//! Lives in its own crate because both the CLI integration tests and the BDD harness need it.

use serde_json::Value;
use std::path::PathBuf;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// - **Root-only**: `tool.version` becomes `"__VERSION__"` when the root object is a report
///   envelope (`schema`, `tool`, `facts`, `results`, `data` all present).
/// - **Recursive**: `started_at` and `finished_at` become `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "facts", "results", "data"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

/// `tests/fixtures` at the workspace root, resolved from a crate under `crates/`.
pub fn fixtures_dir(manifest_dir: &str) -> PathBuf {
    workspace_root(manifest_dir).join("tests").join("fixtures")
}

/// `tests/features` at the workspace root, resolved from a crate under `crates/`.
pub fn features_dir(manifest_dir: &str) -> PathBuf {
    workspace_root(manifest_dir).join("tests").join("features")
}

fn workspace_root(manifest_dir: &str) -> PathBuf {
    PathBuf::from(manifest_dir)
        .parent()
        .and_then(|crates| crates.parent())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
