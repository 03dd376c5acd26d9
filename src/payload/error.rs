use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("payload is not a mapping")]
    PayloadNotObject,
    #[error("payload serialization failed: {0}")]
    Serialize(String),
}
