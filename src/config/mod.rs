//! Notifier configuration.
//!
//! ```toml
//! enabled = true
//! name_prefix = "bodhi"
//! relay_name = "relay_inbound"
//! # hostname = "box01"   # defaults to the local host name
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_NAME_PREFIX: &str = "sourced";
pub const DEFAULT_RELAY_NAME: &str = "relay_inbound";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid notifier config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Master switch. When off, nothing is buffered, initialized, or published.
    pub enabled: bool,
    /// Producer identity is `{name_prefix}.{short hostname}`.
    pub name_prefix: String,
    /// Identity used when initializing in the relay/consumer role.
    pub relay_name: String,
    /// Host name override; the local host name is used when unset.
    pub hostname: Option<String>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        NotifyConfig {
            enabled: false,
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            relay_name: DEFAULT_RELAY_NAME.to_string(),
            hostname: None,
        }
    }
}

impl NotifyConfig {
    pub fn enabled() -> Self {
        NotifyConfig {
            enabled: true,
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The configured host name, or the local one, cut at the first `.`.
    pub fn short_hostname(&self) -> String {
        let full = match &self.hostname {
            Some(hostname) => hostname.clone(),
            None => hostname::get()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|_| "localhost".to_string()),
        };
        full.split('.').next().unwrap_or_default().to_string()
    }

    /// Process identity for the producer role.
    pub fn producer_name(&self) -> String {
        format!("{}.{}", self.name_prefix, self.short_hostname())
    }
}
