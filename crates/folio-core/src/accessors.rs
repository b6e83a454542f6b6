//! Coercing readers over loosely-typed answer values.
//!
//! Every section of the transform reads answers through these helpers, so a
//! missing key, a `null`, or a value of the wrong JSON type all collapse to
//! "absent" in one place.

use crate::answers::WizardAnswers;
use serde_json::Value;

/// A present text value: a JSON string with at least one character.
pub fn text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Like [`text`], but whitespace-only strings count as absent. The original
/// (untrimmed) string is returned.
pub fn non_blank(value: Option<&Value>) -> Option<&str> {
    text(value).filter(|s| !s.trim().is_empty())
}

/// The answer under `key` if present, otherwise `default`.
pub fn text_or(answers: &WizardAnswers, key: &str, default: &str) -> String {
    text(answers.get(key)).unwrap_or(default).to_string()
}

/// A field of a list record, e.g. `company` of an experience entry.
pub fn field<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    text(record.get(key))
}

/// True only for the JSON boolean `false`. `0`, `"false"`, `null` and absence
/// all read as "not opted out".
pub fn is_explicit_false(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(false)))
}

/// The elements of an array answer; anything else yields an empty slice.
pub fn records(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

/// Sequence-or-wrap coercion for list-of-text fields.
///
/// - array: keep string elements that are not blank, in order
/// - string: split on line breaks, dropping blank lines (a single-line string
///   becomes a one-element list)
/// - anything else: empty
pub fn text_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| non_blank(Some(item)))
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
