use thiserror::Error;

use crate::store::StoreError;

/// Error returned by an after-commit hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The store refused the commit; nothing was written
    #[error("commit failed: {0}")]
    Store(#[from] StoreError),
    /// The commit is durable but an after-commit hook failed
    #[error("after-commit hook failed: {0}")]
    AfterCommit(#[source] HookError),
}
