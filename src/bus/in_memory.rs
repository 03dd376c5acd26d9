//! In-memory bus client for testing and single-process scenarios.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use super::{BusClient, BusError, BusMessage, BusSettings};

/// In-memory bus client.
///
/// Features:
/// - Thread-safe (clones share the same state)
/// - Records the settings of every `init` call
/// - Records every published message in order
/// - Can be told to fail publishes, to exercise error paths
///
/// ## Example
///
/// ```
/// use serde_json::{json, Map};
/// use sourced_notify::bus::{BusClient, BusSettings, InMemoryBus};
///
/// let bus = InMemoryBus::new();
/// bus.init(BusSettings::new()).unwrap();
///
/// let mut msg = Map::new();
/// msg.insert("new".into(), json!("package"));
/// bus.publish("demo.topic", &msg).unwrap();
///
/// assert_eq!(bus.published().len(), 1);
/// assert_eq!(bus.topics(), vec!["demo.topic".to_string()]);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryBus {
    base_config: BusSettings,
    initialized: Arc<AtomicBool>,
    inits: Arc<Mutex<Vec<BusSettings>>>,
    published: Arc<Mutex<Vec<BusMessage>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl InMemoryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `settings` as the result of [`BusClient::load_config`].
    pub fn with_base_config(mut self, settings: BusSettings) -> Self {
        self.base_config = settings;
        self
    }

    /// Make every subsequent publish fail with `ConnectionFailed(reason)`.
    pub fn fail_publishes(&self, reason: impl Into<String>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(reason.into());
        }
    }

    /// Stop failing publishes.
    pub fn recover(&self) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = None;
        }
    }

    /// Settings passed to each `init` call, oldest first.
    pub fn init_calls(&self) -> Vec<BusSettings> {
        self.inits.lock().map(|inits| inits.clone()).unwrap_or_default()
    }

    /// Every message published so far, oldest first.
    pub fn published(&self) -> Vec<BusMessage> {
        self.published
            .lock()
            .map(|published| published.clone())
            .unwrap_or_default()
    }

    /// Topics of every published message, in publish order.
    pub fn topics(&self) -> Vec<String> {
        self.published()
            .into_iter()
            .map(|message| message.topic)
            .collect()
    }

    /// Messages published on one topic, in publish order.
    pub fn published_on(&self, topic: &str) -> Vec<Map<String, Value>> {
        self.published()
            .into_iter()
            .filter(|message| message.topic == topic)
            .map(|message| message.msg)
            .collect()
    }

    pub fn publish_count(&self) -> usize {
        self.published.lock().map(|p| p.len()).unwrap_or(0)
    }
}

impl BusClient for InMemoryBus {
    fn load_config(&self) -> Result<BusSettings, BusError> {
        Ok(self.base_config.clone())
    }

    fn init(&self, settings: BusSettings) -> Result<(), BusError> {
        self.inits
            .lock()
            .map_err(|_| BusError::LockPoisoned("init"))?
            .push(settings);
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    fn publish(&self, topic: &str, msg: &Map<String, Value>) -> Result<(), BusError> {
        if !self.is_initialized() {
            return Err(BusError::NotInitialized);
        }
        if let Some(reason) = self
            .failure
            .lock()
            .map_err(|_| BusError::LockPoisoned("publish"))?
            .clone()
        {
            return Err(BusError::ConnectionFailed(reason));
        }
        self.published
            .lock()
            .map_err(|_| BusError::LockPoisoned("publish"))?
            .push(BusMessage::new(topic, msg.clone()));
        Ok(())
    }
}
