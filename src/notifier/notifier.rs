use std::sync::Arc;

use crate::bus::BusClient;
use crate::config::NotifyConfig;
use crate::payload::{normalize, Payload};
use crate::session::{AfterCommitHook, HookError, HookRegistry, SessionInfo, UnitOfWork};

use super::{InitOptions, NotifyError};

/// What happened to a message handed to the notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Buffered in the unit of work; sent when it commits
    Queued,
    /// Published on the bus
    Sent,
    /// The bus is disabled; the message went nowhere
    Disabled,
}

/// Transactional notifications over a [`BusClient`].
///
/// Messages passed to [`enqueue`](Self::enqueue) wait in the unit of work's
/// scratch space and are published by [`drain`](Self::drain) once the unit
/// of work commits. [`install`](Self::install) wires `drain` in as an
/// after-commit hook. [`force_publish`](Self::force_publish) skips the
/// buffer and sends right away.
///
/// ```ignore
/// let notifier = Arc::new(Notifier::new(config, bus));
/// let mut factory = SessionFactory::new(store);
/// notifier.install(&mut factory);
///
/// let mut session = factory.session();
/// session.add(package);
/// notifier.enqueue(&mut session, "package.new", Payload::new().with_entity("package", &package))?;
/// session.commit()?; // published here, or never
/// ```
pub struct Notifier<B> {
    config: NotifyConfig,
    bus: B,
}

impl<B: BusClient> Notifier<B> {
    pub fn new(config: NotifyConfig, bus: B) -> Self {
        Notifier { config, bus }
    }

    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Initialize the bus client with the given overrides.
    ///
    /// Does nothing but log a warning when the bus is disabled. Calling this
    /// twice initializes the client twice; use [`ensure_ready`](Self::ensure_ready)
    /// for the guarded form.
    pub fn init(&self, options: InitOptions) -> Result<(), NotifyError> {
        if !self.config.enabled {
            tracing::warn!("bus disabled, not initializing");
            return Ok(());
        }

        let settings = options.settings(&self.config, self.bus.load_config()?)?;
        self.bus.init(settings)?;
        tracing::info!("bus initialized");
        Ok(())
    }

    /// Initialize the bus with default options unless it already is.
    ///
    /// Check-then-init is not atomic: two threads arriving here before the
    /// first `init` finishes will both initialize. Initialize at startup if
    /// that matters.
    pub fn ensure_ready(&self) -> Result<(), NotifyError> {
        if !self.config.enabled {
            tracing::warn!("bus disabled, not initializing");
            return Ok(());
        }
        if !self.bus.is_initialized() {
            self.init(InitOptions::default())?;
        }
        Ok(())
    }

    /// Buffer a message on `uow`, to be published when it commits.
    pub fn enqueue<U>(
        &self,
        uow: &mut U,
        topic: &str,
        payload: Payload<'_>,
    ) -> Result<Delivery, NotifyError>
    where
        U: UnitOfWork + ?Sized,
    {
        let msg = normalize(payload)?;
        if !self.config.enabled {
            return Ok(Delivery::Disabled);
        }
        self.ensure_ready()?;

        uow.info_mut().pending_outbox_mut().push(topic, msg);
        tracing::debug!(topic, "message queued for commit");
        Ok(Delivery::Queued)
    }

    /// Publish a message now, regardless of any open unit of work.
    pub fn force_publish(&self, topic: &str, payload: Payload<'_>) -> Result<Delivery, NotifyError> {
        let msg = normalize(payload)?;
        if !self.config.enabled {
            tracing::debug!(topic, "bus disabled, forced message not sent");
            return Ok(Delivery::Disabled);
        }
        self.ensure_ready()?;

        self.bus.publish(topic, &msg)?;
        Ok(Delivery::Sent)
    }

    /// Publish everything buffered in `info`, in enqueue order per topic.
    ///
    /// The buffer is taken out of the scratch space before the first publish,
    /// so it is empty afterwards even if a publish fails. Messages after a
    /// failed one are dropped.
    pub fn drain(&self, info: &mut SessionInfo) -> Result<usize, NotifyError> {
        let Some(pending) = info.take_pending() else {
            return Ok(0);
        };

        let mut sent = 0;
        for (topic, msg) in pending.into_messages() {
            self.bus.publish(&topic, &msg)?;
            sent += 1;
        }
        if sent > 0 {
            tracing::debug!(count = sent, "published buffered messages");
        }
        Ok(sent)
    }
}

impl<B: BusClient + 'static> Notifier<B> {
    /// An after-commit hook that drains the session's buffer.
    pub fn after_commit_hook(self: &Arc<Self>) -> AfterCommitHook {
        let notifier = Arc::clone(self);
        Arc::new(move |info: &mut SessionInfo| -> Result<(), HookError> {
            notifier.drain(info)?;
            Ok(())
        })
    }

    /// Register [`after_commit_hook`](Self::after_commit_hook) on a session or factory.
    pub fn install<R: HookRegistry + ?Sized>(self: &Arc<Self>, registry: &mut R) {
        registry.on_after_commit(self.after_commit_hook());
    }
}
