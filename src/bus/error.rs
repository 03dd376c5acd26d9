use thiserror::Error;

/// Error type for bus client operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    /// `publish` was called before `init`
    #[error("bus client is not initialized")]
    NotInitialized,
    /// Connection to the bus failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    /// The bus rejected the message
    #[error("message rejected: {0}")]
    Rejected(String),
    /// The bus configuration could not be loaded or was invalid
    #[error("invalid bus configuration: {0}")]
    Config(String),
    /// The message could not be encoded for transport
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// A shared lock inside the client was poisoned
    #[error("bus client lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
