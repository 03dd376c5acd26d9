pub mod bus;
pub mod config;
pub mod notifier;
pub mod payload;
pub mod session;
pub mod store;

pub use bus::{BusClient, BusError, BusMessage, BusSettings, InMemoryBus, LogBus};
#[cfg(feature = "emitter")]
pub use bus::EmitterBus;
pub use config::{ConfigError, NotifyConfig};
pub use notifier::{Delivery, InitOptions, Notifier, NotifyError};
pub use payload::{entity_payload, normalize, Field, NormalizeError, Payload, ToMessagePayload};
pub use session::{
    AfterCommitHook, HookError, HookRegistry, PendingOutbox, Session, SessionError,
    SessionFactory, SessionInfo, SessionState, UnitOfWork,
};
pub use store::{InMemoryStore, Keyed, Store, StoreError};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
