//! The demo record saved through the operation runner.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// A keyed bag of JSON fields with an identity and creation time.
///
/// The runner treats records as opaque; this type is what the CLI and
/// the sink-backed save path operate on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identity.
    pub id: RecordId,
    /// Free-form record kind, e.g. `"user"` or `"order"`.
    pub kind: String,
    /// Field values keyed by name.
    pub fields: BTreeMap<String, serde_json::Value>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Creates an empty record of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            kind: kind.into(),
            fields: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Inserts a raw JSON value.
    pub fn with_field(mut self, key: &str, value: serde_json::Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Inserts a string value.
    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.with_field(key, serde_json::json!(value))
    }

    /// Inserts an integer value.
    pub fn with_int(self, key: &str, value: i64) -> Self {
        self.with_field(key, serde_json::json!(value))
    }

    /// Inserts a boolean value.
    pub fn with_bool(self, key: &str, value: bool) -> Self {
        self.with_field(key, serde_json::json!(value))
    }

    /// Sets a field in place, replacing any previous value.
    pub fn set_field(&mut self, key: &str, value: serde_json::Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// Gets a string field.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }

    /// Gets an i64 field.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.fields.get(key).and_then(|v| v.as_i64())
    }

    /// Gets a bool field.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(|v| v.as_bool())
    }

    /// Parses a `key=value` pair into a field, guessing the JSON type.
    ///
    /// `true`/`false` become booleans, integers become numbers, anything
    /// else is stored as a string.
    pub fn parse_assignment(assignment: &str) -> Option<(String, serde_json::Value)> {
        let (key, raw) = assignment.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        let value = match raw {
            "true" => serde_json::Value::Bool(true),
            "false" => serde_json::Value::Bool(false),
            _ => match raw.parse::<i64>() {
                Ok(n) => serde_json::json!(n),
                Err(_) => serde_json::json!(raw),
            },
        };
        Some((key.to_string(), value))
    }
}
