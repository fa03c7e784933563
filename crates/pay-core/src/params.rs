//! # Signing Parameters
//!
//! Ordered key/value list sent to a redirect gateway.
//!
//! The gateway checksum is computed over the form-encoded parameters in
//! insertion order, so the order is part of the data rather than an accident
//! of a map type. The same list is used for signing and for the final URL.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Ordered gateway parameters.
///
/// Values are JSON values so that absent fields (`Value::Null`) can be
/// carried and skipped at encoding time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SigningParameters {
    entries: Vec<(String, Value)>,
}

impl SigningParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value. An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder: set a value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// String value for a key, if present and a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries whose value is not null, in insertion order
    pub fn present(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.iter().filter(|(_, v)| !v.is_null())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SigningParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

// Serialized as a JSON object in insertion order.
impl Serialize for SigningParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
