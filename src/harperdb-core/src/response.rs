//! Projection of raw HarperDB responses onto typed results.
//!
//! Every projection is total: a field that is absent or carries an
//! unexpected JSON type becomes `None` rather than an error. The HTTP
//! status is always kept so callers can detect application-level failures.

use crate::models::HashValue;
use crate::operations::Operation;
use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Decode a response body.
///
/// An empty body is `Null`; a body that is not JSON is kept as a string.
pub fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)?.as_str().map(str::to_string)
}

fn hash_list(body: &Value, key: &str) -> Option<Vec<HashValue>> {
    body.get(key)?
        .as_array()?
        .iter()
        .map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Result of a schema, table or attribute operation
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatusResult {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResult {
    pub fn from_response(status: u16, body: &Value) -> Self {
        Self {
            status,
            message: string_field(body, "message"),
            error: string_field(body, "error"),
        }
    }

    pub fn is_success(&self) -> bool {
        is_success(self.status) && self.error.is_none()
    }
}

/// Result of an insert, update, upsert or delete
///
/// Serializes with `hashes` under the operation's own key
/// (`inserted_hashes`, `update_hashes`, `upserted_hashes` or `deleted_hashes`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    pub operation: Operation,
    pub status: u16,
    pub message: Option<String>,
    pub error: Option<String>,
    /// Hashes the server reports as written or deleted
    pub hashes: Option<Vec<HashValue>>,
    pub skipped_hashes: Option<Vec<HashValue>>,
}

impl MutationResult {
    pub fn from_response(operation: Operation, status: u16, body: &Value) -> Self {
        Self {
            operation,
            status,
            message: string_field(body, "message"),
            error: string_field(body, "error"),
            hashes: operation
                .hashes_field()
                .and_then(|field| hash_list(body, field)),
            skipped_hashes: hash_list(body, "skipped_hashes"),
        }
    }

    pub fn is_success(&self) -> bool {
        is_success(self.status) && self.error.is_none()
    }
}

impl Serialize for MutationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("status", &self.status)?;
        if let Some(message) = &self.message {
            map.serialize_entry("message", message)?;
        }
        if let Some(error) = &self.error {
            map.serialize_entry("error", error)?;
        }
        if let (Some(field), Some(hashes)) = (self.operation.hashes_field(), &self.hashes) {
            map.serialize_entry(field, hashes)?;
        }
        if let Some(skipped) = &self.skipped_hashes {
            map.serialize_entry("skipped_hashes", skipped)?;
        }
        map.end()
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchResult {
    pub status: u16,
    pub records: Vec<Value>,
    /// Set when the server answered with an object instead of a record list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResult {
    pub fn from_response(status: u16, body: Value) -> Self {
        match body {
            Value::Array(records) => Self {
                status,
                records,
                message: None,
                error: None,
            },
            Value::Object(_) => Self {
                status,
                records: Vec::new(),
                message: string_field(&body, "message"),
                error: string_field(&body, "error"),
            },
            _ => Self {
                status,
                records: Vec::new(),
                message: None,
                error: None,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        is_success(self.status) && self.error.is_none()
    }

    /// Deserialize the records into caller types
    pub fn records_as<T: DeserializeOwned>(&self) -> serde_json::Result<Vec<T>> {
        self.records
            .iter()
            .map(|record| serde_json::from_value(record.clone()))
            .collect()
    }
}
