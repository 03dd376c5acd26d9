//! Unit of work - staged writes, a scratch space, and after-commit hooks.
//!
//! ## Lifecycle
//!
//! ```text
//!   Open ──commit()──► Committing ──ok──► Committed ──► after-commit hooks
//!    ▲                     │
//!    │                     └──error──► Failed (staged + scratch dropped)
//!    └──────────── reset() / rollback() / add() ◄──────────┘
//! ```
//!
//! Each session owns its [`SessionInfo`]; nothing in it is visible to other
//! sessions, so sessions can live on separate threads.

mod error;
mod factory;
mod info;
mod session;

use std::sync::Arc;

pub use error::{HookError, SessionError};
pub use factory::SessionFactory;
pub use info::{PendingOutbox, SessionInfo};
pub use session::{Session, SessionState};

/// Callback run with the session's scratch space after a durable commit.
pub type AfterCommitHook = Arc<dyn Fn(&mut SessionInfo) -> Result<(), HookError> + Send + Sync>;

/// Access to a unit of work's scratch space.
pub trait UnitOfWork {
    fn info(&self) -> &SessionInfo;
    fn info_mut(&mut self) -> &mut SessionInfo;
}

/// Something after-commit hooks can be registered on.
pub trait HookRegistry {
    fn on_after_commit(&mut self, hook: AfterCommitHook);
}
