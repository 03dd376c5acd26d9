use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A message as it travels on the bus: `{"topic": ..., "msg": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusMessage {
    pub topic: String,
    pub msg: Map<String, Value>,
}

impl BusMessage {
    pub fn new(topic: impl Into<String>, msg: Map<String, Value>) -> Self {
        Self {
            topic: topic.into(),
            msg,
        }
    }

    /// Encode the wire form as a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
