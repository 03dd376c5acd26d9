use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record would break the store's uniqueness constraint
    #[error("integrity violation: duplicate key {key}")]
    IntegrityViolation { key: String },
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
