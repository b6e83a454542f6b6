use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// WizardAnswers
// ---------------------------------------------------------------------------

/// Flat answer store accumulated across wizard steps.
///
/// Keys are the form field names (`name`, `githubUsername`, `socialLinks`, ...)
/// and are not namespaced by step. Merging is last-write-wins per key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WizardAnswers {
    fields: Map<String, Value>,
}

impl WizardAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON value. Only objects are accepted.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(FolioError::InvalidAnswers(format!(
                "expected a JSON object, found {}",
                value_kind(&other)
            ))),
        }
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(data)?;
        Self::from_value(value)
    }

    /// Fold another step's answers into this store.
    pub fn merge(&mut self, other: WizardAnswers) {
        for (key, value) in other.fields {
            tracing::debug!(key = %key, "merging answer");
            self.fields.insert(key, value);
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Owned snapshot of the whole store.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
