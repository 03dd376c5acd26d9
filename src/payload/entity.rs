use serde::Serialize;
use serde_json::{Map, Value};

use super::NormalizeError;

/// Capability of a domain entity to describe itself as a flat message payload.
///
/// Entities that derive `Serialize` can implement this with [`entity_payload`]:
///
/// ```ignore
/// impl ToMessagePayload for Package {
///     fn to_message_payload(&self) -> Result<Map<String, Value>, NormalizeError> {
///         entity_payload(self)
///     }
/// }
/// ```
pub trait ToMessagePayload {
    fn to_message_payload(&self) -> Result<Map<String, Value>, NormalizeError>;
}

impl<T: ToMessagePayload + ?Sized> ToMessagePayload for &T {
    fn to_message_payload(&self) -> Result<Map<String, Value>, NormalizeError> {
        (**self).to_message_payload()
    }
}

/// Describe an entity by its serde representation.
///
/// Every serialized field is present; `None` fields come out as `null`.
/// Anything that does not serialize to a JSON object is an error.
pub fn entity_payload<T: Serialize + ?Sized>(entity: &T) -> Result<Map<String, Value>, NormalizeError> {
    match serde_json::to_value(entity).map_err(|e| NormalizeError::Serialize(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(NormalizeError::Serialize(format!(
            "expected an object, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
