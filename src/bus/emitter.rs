use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use event_emitter_rs::EventEmitter;
use serde_json::{Map, Value};

use super::{BusClient, BusError, BusSettings};

/// A bus client that hands messages to in-process listeners.
///
/// Listeners subscribe per topic and receive the message body as a JSON
/// string. `publish` waits for every listener to finish.
pub struct EmitterBus {
    emitter: Mutex<EventEmitter>,
    initialized: AtomicBool,
}

impl Default for EmitterBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EmitterBus {
    pub fn new() -> Self {
        Self::from_emitter(EventEmitter::new())
    }

    pub fn from_emitter(emitter: EventEmitter) -> Self {
        EmitterBus {
            emitter: Mutex::new(emitter),
            initialized: AtomicBool::new(false),
        }
    }

    /// Register a listener for `topic`. Returns the listener id.
    pub fn on<F>(&self, topic: &str, listener: F) -> Result<String, BusError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| BusError::LockPoisoned("listener registration"))?;
        Ok(emitter.on(topic, listener))
    }
}

impl BusClient for EmitterBus {
    fn load_config(&self) -> Result<BusSettings, BusError> {
        Ok(BusSettings::new())
    }

    fn init(&self, _settings: BusSettings) -> Result<(), BusError> {
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    fn publish(&self, topic: &str, msg: &Map<String, Value>) -> Result<(), BusError> {
        let body =
            serde_json::to_string(msg).map_err(|e| BusError::Serialization(e.to_string()))?;
        let handles = self
            .emitter
            .lock()
            .map_err(|_| BusError::LockPoisoned("publish"))?
            .emit(topic, body);
        for handle in handles {
            handle
                .join()
                .map_err(|_| BusError::Rejected(format!("listener for {} panicked", topic)))?;
        }
        Ok(())
    }
}
