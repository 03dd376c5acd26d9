use thiserror::Error;

use crate::bus::BusError;
use crate::payload::NormalizeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error("bus error: {0}")]
    Bus(#[from] BusError),
    /// The relay role signs nothing, so it takes no certificate prefix
    #[error("`active` cannot be combined with `cert_prefix`")]
    ConflictingInitOptions,
}
