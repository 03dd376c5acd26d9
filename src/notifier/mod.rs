//! Notifier - transactional outbox, commit hook, and lazy bus initialization.
//!
//! ## Flow
//!
//! ```text
//! enqueue(uow, topic, payload)
//!     │  normalize ─► bus disabled? ─► Disabled
//!     │  ensure_ready (init once)
//!     ▼
//! uow.info.pending[topic].push(msg)
//!     │
//! uow.commit() ── store refuses ─► buffer discarded, nothing published
//!     │ durable
//!     ▼
//! after-commit hook ─► drain ─► BusClient::publish(topic, msg) in order
//!
//! force_publish(topic, payload) ─► ensure_ready ─► BusClient::publish
//! ```

mod error;
mod init;
mod notifier;

pub use error::NotifyError;
pub use init::InitOptions;
pub use notifier::{Delivery, Notifier};
