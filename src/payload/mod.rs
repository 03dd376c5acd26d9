//! Payload Normalizer - turns raw payloads into bus-safe JSON mappings.
//!
//! A raw [`Payload`] mixes plain JSON values with borrowed domain entities.
//! [`normalize`] resolves each entity through [`ToMessagePayload`] (one level
//! deep) so nothing that reaches the outbox refers to a live entity.

mod entity;
mod error;

use serde::Serialize;
use serde_json::{Map, Value};

pub use entity::{entity_payload, ToMessagePayload};
pub use error::NormalizeError;

/// One field of a raw payload.
pub enum Field<'a> {
    /// Already JSON-representable
    Value(Value),
    /// A domain entity, expanded during normalization
    Entity(&'a dyn ToMessagePayload),
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Field::Entity(_) => f.write_str("Entity(..)"),
        }
    }
}

/// A message payload before normalization. Field order is kept.
#[derive(Debug, Default)]
pub struct Payload<'a> {
    fields: Vec<(String, Field<'a>)>,
}

impl<'a> Payload<'a> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a plain value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((key.into(), Field::Value(value.into())));
        self
    }

    /// Add a domain entity; it is expanded when the payload is normalized.
    pub fn with_entity(mut self, key: impl Into<String>, entity: &'a dyn ToMessagePayload) -> Self {
        self.fields.push((key.into(), Field::Entity(entity)));
        self
    }

    /// Add any serializable value.
    pub fn try_with<T: Serialize + ?Sized>(
        self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, NormalizeError> {
        let value = serde_json::to_value(value).map_err(|e| NormalizeError::Serialize(e.to_string()))?;
        Ok(self.with(key, value))
    }

    /// Build a payload from a JSON object.
    pub fn from_json(value: Value) -> Result<Self, NormalizeError> {
        match value {
            Value::Object(map) => Ok(map.into()),
            _ => Err(NormalizeError::PayloadNotObject),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for Payload<'_> {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map
                .into_iter()
                .map(|(key, value)| (key, Field::Value(value)))
                .collect(),
        }
    }
}

/// Convert a raw payload into its bus-safe form.
///
/// Entities are replaced by their flat description and plain values pass
/// through. A repeated key keeps its last value.
pub fn normalize(payload: Payload<'_>) -> Result<Map<String, Value>, NormalizeError> {
    let mut normalized = Map::new();
    for (key, field) in payload.fields {
        let value = match field {
            Field::Value(value) => value,
            Field::Entity(entity) => Value::Object(entity.to_message_payload()?),
        };
        normalized.insert(key, value);
    }
    Ok(normalized)
}
