//! The capability interface the notifier needs from a messaging bus.

use serde_json::{Map, Value};

use super::{BusError, BusSettings};

/// Minimal bus client: load its own config, initialize once, publish.
///
/// Implementations might include:
/// - [`InMemoryBus`](super::InMemoryBus) - For testing and single-process scenarios
/// - [`LogBus`](super::LogBus) - Writes every message to the log
/// - `EmitterBus` - In-process listeners (requires the `emitter` feature)
/// - Broker clients (ZeroMQ, NATS, AMQP) living outside this crate
///
/// Initialization state is process-wide and owned by the client. `init` may
/// be called more than once; callers guard it with [`is_initialized`](Self::is_initialized).
pub trait BusClient: Send + Sync {
    /// Load the bus's base configuration (endpoints, signing material, ...).
    fn load_config(&self) -> Result<BusSettings, BusError>;

    /// Initialize the connection with the given settings.
    fn init(&self, settings: BusSettings) -> Result<(), BusError>;

    /// Whether [`init`](Self::init) has completed.
    fn is_initialized(&self) -> bool;

    /// Publish one message synchronously.
    fn publish(&self, topic: &str, msg: &Map<String, Value>) -> Result<(), BusError>;
}

impl<T: BusClient + ?Sized> BusClient for std::sync::Arc<T> {
    fn load_config(&self) -> Result<BusSettings, BusError> {
        (**self).load_config()
    }

    fn init(&self, settings: BusSettings) -> Result<(), BusError> {
        (**self).init(settings)
    }

    fn is_initialized(&self) -> bool {
        (**self).is_initialized()
    }

    fn publish(&self, topic: &str, msg: &Map<String, Value>) -> Result<(), BusError> {
        (**self).publish(topic, msg)
    }
}
