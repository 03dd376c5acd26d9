//! Bus Client - the messaging bus behind a minimal capability interface
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Notifier                              │
//! │  enqueue() / force_publish() / drain()                      │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    BusClient Trait                           │
//! │  load_config() / init(settings) / is_initialized()          │
//! │  publish(topic, msg)                                        │
//! └─────────────────────────────────────────────────────────────┘
//!          │                  │                     │
//!          ▼                  ▼                     ▼
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────────────┐
//! │ InMemoryBus │    │   LogBus    │    │ EmitterBus          │
//! │ (included)  │    │ (included)  │    │ (feature "emitter") │
//! └─────────────┘    └─────────────┘    └─────────────────────┘
//! ```

mod client;
#[cfg(feature = "emitter")]
mod emitter;
mod error;
mod in_memory;
mod log;
mod message;
pub mod settings;

pub use client::BusClient;
#[cfg(feature = "emitter")]
pub use emitter::EmitterBus;
pub use error::BusError;
pub use in_memory::InMemoryBus;
pub use log::LogBus;
pub use message::BusMessage;
pub use settings::BusSettings;
