//! Key-Value Store
//!
//! A plain HashMap of string keys to arbitrary JSON values. Lifetime equals
//! process lifetime; nothing is persisted.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{ApiError, Result};

// == Kv Store ==
/// In-memory key-value storage.
///
/// Keys are opaque strings taken verbatim from the URL path; values are
/// arbitrary JSON, stored and returned without interpretation.
#[derive(Debug, Default)]
pub struct KvStore {
    entries: HashMap<String, Value>,
}

impl KvStore {
    // == Constructor ==
    /// Creates an empty KvStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Get ==
    /// Retrieves the value stored under `key`.
    ///
    /// Exact-match only; no prefix or pattern lookups.
    pub fn get(&self, key: &str) -> Result<Value> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| ApiError::KeyNotFound(key.to_string()))
    }

    // == Put ==
    /// Stores `value` under `key`, silently overwriting any prior value.
    ///
    /// Returns the stored value. Explicit JSON `null` is a storable value;
    /// field-absence is rejected before this is ever called.
    pub fn put(&mut self, key: String, value: Value) -> Value {
        self.entries.insert(key, value.clone());
        value
    }

    // == Delete ==
    /// Removes the entry for `key` if present.
    ///
    /// Idempotent: deleting a missing key is not an error. Returns whether
    /// the key existed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
