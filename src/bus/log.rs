use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use super::{BusClient, BusError, BusMessage, BusSettings};

/// A bus client that writes each message to the log, and optionally a buffer.
///
/// Useful in development where no broker is running.
pub struct LogBus {
    base_config: BusSettings,
    initialized: AtomicBool,
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl Default for LogBus {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBus {
    pub fn new() -> Self {
        LogBus {
            base_config: BusSettings::new(),
            initialized: AtomicBool::new(false),
            buffer: None,
        }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogBus {
            buffer: Some(buffer),
            ..Self::new()
        }
    }

    pub fn with_base_config(mut self, settings: BusSettings) -> Self {
        self.base_config = settings;
        self
    }
}

impl BusClient for LogBus {
    fn load_config(&self) -> Result<BusSettings, BusError> {
        Ok(self.base_config.clone())
    }

    fn init(&self, settings: BusSettings) -> Result<(), BusError> {
        tracing::debug!(identity = settings.name().unwrap_or_default(), "log bus ready");
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    fn publish(&self, topic: &str, msg: &Map<String, Value>) -> Result<(), BusError> {
        let line = BusMessage::new(topic, msg.clone())
            .to_json()
            .map_err(|e| BusError::Serialization(e.to_string()))?;
        tracing::info!(topic, wire = %line, "bus message");
        if let Some(buffer) = &self.buffer {
            buffer
                .lock()
                .map_err(|_| BusError::LockPoisoned("log buffer"))?
                .push(line);
        }
        Ok(())
    }
}
