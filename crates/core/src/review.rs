//! Read-only review summary.
//!
//! Flattens the sectioned "get all data" response into labeled records for
//! display. Booleans read "Yes"/"No" and missing values read as a dash.

use serde::Serialize;
use serde_json::Value;

use crate::wizard::steps::JOBSEEKER_STUDENT_STEPS;

/// Shown in place of a missing or empty value.
pub const MISSING_PLACEHOLDER: &str = "-";

/// Section used when the backend returns a single bare record.
pub const DEFAULT_SECTION: &str = "personal_information";

/// Bookkeeping columns never shown to the applicant.
const HIDDEN_KEYS: &[&str] = &["id", "user_id", "created_at", "updated_at"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSection {
    pub key: String,
    pub title: String,
    pub records: Vec<ReviewRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRecord {
    pub entries: Vec<ReviewEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewEntry {
    pub label: String,
    pub value: String,
}

impl ReviewRecord {
    /// Display value of the entry labeled `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }
}

/// Flatten a review response into display sections.
///
/// Sections follow the wizard's step order; unknown sections come last in
/// key order. Empty sections are dropped.
pub fn flatten_summary(data: &Value) -> Vec<ReviewSection> {
    let Value::Object(map) = data else {
        return Vec::new();
    };

    if !is_sectioned(map) {
        return section(DEFAULT_SECTION, data).into_iter().collect();
    }

    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort_by(|a, b| section_rank(a).cmp(&section_rank(b)).then_with(|| a.cmp(b)));

    keys.into_iter()
        .filter_map(|key| section(key, &map[key]))
        .collect()
}

/// A response is sectioned when it names a wizard section, or when every
/// value is a record or a list of records. Anything else is one record
/// whose lists and nested objects are ordinary fields.
fn is_sectioned(map: &serde_json::Map<String, Value>) -> bool {
    if map.keys().any(|key| section_rank(key) != usize::MAX) {
        return true;
    }
    !map.is_empty()
        && map.values().all(|value| match value {
            Value::Object(_) => true,
            Value::Array(items) => items.iter().all(Value::is_object),
            _ => false,
        })
}

fn section_rank(key: &str) -> usize {
    JOBSEEKER_STUDENT_STEPS
        .iter()
        .position(|s| s.kind.section_key() == Some(key))
        .unwrap_or(usize::MAX)
}

fn section_title(key: &str) -> String {
    JOBSEEKER_STUDENT_STEPS
        .iter()
        .find(|s| s.kind.section_key() == Some(key))
        .map(|s| s.label.to_string())
        .unwrap_or_else(|| humanize(key))
}

fn section(key: &str, value: &Value) -> Option<ReviewSection> {
    let records: Vec<ReviewRecord> = match value {
        Value::Array(items) => items.iter().filter_map(record).collect(),
        Value::Object(_) => record(value).into_iter().collect(),
        _ => Vec::new(),
    };
    if records.is_empty() {
        return None;
    }
    Some(ReviewSection {
        key: key.to_string(),
        title: section_title(key),
        records,
    })
}

fn record(value: &Value) -> Option<ReviewRecord> {
    let Value::Object(map) = value else {
        return None;
    };
    let mut entries = Vec::new();
    for (key, value) in map {
        push_entries(&mut entries, &humanize(key), key, value);
    }
    if entries.is_empty() {
        None
    } else {
        Some(ReviewRecord { entries })
    }
}

fn push_entries(entries: &mut Vec<ReviewEntry>, label: &str, key: &str, value: &Value) {
    if HIDDEN_KEYS.contains(&key) {
        return;
    }
    match value {
        Value::Object(nested) => {
            for (child_key, child) in nested {
                let child_label = format!("{label} {}", humanize(child_key).to_lowercase());
                push_entries(entries, &child_label, child_key, child);
            }
        }
        _ => entries.push(ReviewEntry {
            label: label.to_string(),
            value: display(value),
        }),
    }
}

/// Display text of a single value.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => MISSING_PLACEHOLDER.to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.trim().is_empty() => MISSING_PLACEHOLDER.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => MISSING_PLACEHOLDER.to_string(),
        Value::Array(items) => items.iter().map(display).collect::<Vec<_>>().join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", humanize(k), display(v)))
            .collect::<Vec<_>>()
            .join("; "),
    }
}

/// `date_of_birth` -> `Date of birth`.
fn humanize(key: &str) -> String {
    let words = key.replace(['_', '-'], " ");
    let mut chars = words.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
