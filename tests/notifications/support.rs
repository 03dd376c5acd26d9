//! Test domain: a package entity, a notifier over an in-memory bus, and log capture.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::{Map, Value};
use sourced_notify::{
    entity_payload, BusSettings, InMemoryBus, InMemoryStore, Keyed, NormalizeError,
    Notifier, NotifyConfig, SessionFactory, ToMessagePayload,
};

/// A package row, unique by name.
#[derive(Clone, Debug, Serialize)]
pub struct Package {
    pub name: String,
    #[serde(rename = "type")]
    pub package_type: String,
    pub requirements: Option<String>,
    pub stack: Option<String>,
    pub stack_id: Option<u64>,
}

impl Package {
    pub fn new(name: &str) -> Self {
        Package {
            name: name.to_string(),
            package_type: "base".to_string(),
            requirements: None,
            stack: None,
            stack_id: None,
        }
    }
}

impl Keyed for Package {
    fn key(&self) -> String {
        self.name.clone()
    }
}

impl ToMessagePayload for Package {
    fn to_message_payload(&self) -> Result<Map<String, Value>, NormalizeError> {
        entity_payload(self)
    }
}

pub type TestNotifier = Arc<Notifier<InMemoryBus>>;
pub type TestFactory = SessionFactory<InMemoryStore<Package>>;

pub fn config(enabled: bool) -> NotifyConfig {
    NotifyConfig {
        enabled,
        ..NotifyConfig::default()
    }
    .with_name_prefix("bodhi")
    .with_hostname("coolhostname.very.cool.tld")
}

pub fn notifier_with(config: NotifyConfig, base: BusSettings) -> TestNotifier {
    Arc::new(Notifier::new(config, InMemoryBus::new().with_base_config(base)))
}

pub fn notifier(enabled: bool) -> TestNotifier {
    notifier_with(config(enabled), BusSettings::new())
}

/// A session factory whose sessions publish through `notifier` after commit.
pub fn factory(notifier: &TestNotifier) -> TestFactory {
    let mut factory = SessionFactory::new(InMemoryStore::new());
    notifier.install(&mut factory);
    factory
}

pub fn msg(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

/// Shared buffer the fmt subscriber writes into.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Lines at `level` (e.g. "WARN") that contain `needle`.
    pub fn count(&self, level: &str, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(level) && line.contains(needle))
            .count()
    }
}

/// Run `f` with a subscriber that records every event at DEBUG and above.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, LogBuffer) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer)
}
