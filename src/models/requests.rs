//! Request DTOs for the key-value service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Request body for the PUT operation (PUT /kv/:key)
///
/// The `value` field may hold any JSON value, explicit `null` included.
/// Only a body without the field at all is invalid, so deserialization has
/// to tell "field absent" apart from "field set to null".
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The value to store, or None when the field was absent
    #[serde(default, deserialize_with = "value_present")]
    pub value: Option<Value>,
}

/// Wraps a present `value` field in Some, so that serde's default (None)
/// is reached only when the field is missing entirely.
fn value_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PutRequest {
    /// Extracts the value to store, rejecting bodies without a `value` field.
    pub fn require_value(self) -> Result<Value> {
        self.value.ok_or(ApiError::ValueRequired)
    }
}
