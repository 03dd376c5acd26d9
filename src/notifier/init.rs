use crate::bus::settings::{ACTIVE, CERT_PREFIX, NAME};
use crate::bus::BusSettings;
use crate::config::NotifyConfig;

use super::NotifyError;

/// Caller overrides for bus initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// Some(_) selects the relay/consumer identity.
    pub active: Option<bool>,
    /// Signing certificate prefix.
    pub cert_prefix: Option<String>,
}

impl InitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn cert_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cert_prefix = Some(prefix.into());
        self
    }

    /// Layer the settings handed to `BusClient::init`: host-derived identity,
    /// then the bus's own config, then the relay role, then the cert prefix.
    pub(crate) fn settings(
        &self,
        config: &NotifyConfig,
        base: BusSettings,
    ) -> Result<BusSettings, NotifyError> {
        if self.active == Some(true) && self.cert_prefix.is_some() {
            return Err(NotifyError::ConflictingInitOptions);
        }

        let mut settings = BusSettings::new().with(NAME, config.producer_name());
        settings.merge(base);

        if let Some(active) = self.active {
            settings.set(ACTIVE, active);
            settings.set(NAME, config.relay_name.clone());
            settings.remove(CERT_PREFIX);
        }
        if let Some(prefix) = &self.cert_prefix {
            settings.set(CERT_PREFIX, prefix.clone());
        }
        Ok(settings)
    }
}
