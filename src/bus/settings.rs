//! Keyword settings handed to [`BusClient::init`](super::BusClient::init).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::BusError;

/// Key holding the process identity the bus signs and routes by.
pub const NAME: &str = "name";
/// Key selecting the consumer/relay role.
pub const ACTIVE: &str = "active";
/// Key holding the certificate prefix used for message signing.
pub const CERT_PREFIX: &str = "cert_prefix";

/// Initialization settings for a bus client.
///
/// A string-keyed JSON map, so whatever the bus's own config loader returns
/// passes through to `init` untouched. Well-known keys get typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusSettings {
    entries: Map<String, Value>,
}

impl BusSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from TOML text. Nested tables become nested objects.
    pub fn from_toml_str(text: &str) -> Result<Self, BusError> {
        let entries: Map<String, Value> =
            toml::from_str(text).map_err(|e| BusError::Config(e.to_string()))?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Overlay `other` on top of these settings; its keys win.
    pub fn merge(&mut self, other: BusSettings) {
        self.entries.extend(other.entries);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(NAME).and_then(Value::as_str)
    }

    pub fn active(&self) -> Option<bool> {
        self.get(ACTIVE).and_then(Value::as_bool)
    }

    pub fn cert_prefix(&self) -> Option<&str> {
        self.get(CERT_PREFIX).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }
}

impl From<Map<String, Value>> for BusSettings {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}
