//! Bus initialization: identity, overrides, and the disabled switch.

use serde_json::json;
use sourced_notify::bus::settings::{ACTIVE, CERT_PREFIX, NAME};
use sourced_notify::{BusClient, BusSettings, InitOptions, NotifyError};

use crate::support::{capture_logs, config, notifier, notifier_with};

#[test]
fn base_config_is_passed_to_init() {
    let notifier = notifier_with(config(true), BusSettings::new().with("a", "config"));

    let (result, logs) = capture_logs(|| notifier.init(InitOptions::default()));
    result.unwrap();

    assert_eq!(
        notifier.bus().init_calls(),
        vec![BusSettings::new()
            .with("a", "config")
            .with(NAME, "bodhi.coolhostname")]
    );
    assert_eq!(logs.count("INFO", "bus initialized"), 1);
}

#[test]
fn disabled_bus_warns_and_skips_init() {
    let notifier = notifier(false);

    let (result, logs) = capture_logs(|| notifier.init(InitOptions::default()));
    result.unwrap();

    assert!(notifier.bus().init_calls().is_empty());
    assert!(!notifier.bus().is_initialized());
    assert_eq!(logs.count("WARN", "bus disabled, not initializing"), 1);
    assert_eq!(logs.count("INFO", "bus initialized"), 0);
}

#[test]
fn ensure_ready_when_disabled_only_warns() {
    let notifier = notifier(false);

    let (result, logs) = capture_logs(|| notifier.ensure_ready());
    result.unwrap();

    assert!(notifier.bus().init_calls().is_empty());
    assert!(!notifier.bus().is_initialized());
    assert_eq!(logs.count("WARN", "bus disabled, not initializing"), 1);
    assert_eq!(logs.count("INFO", "bus initialized"), 0);
}

#[test]
fn active_uses_relay_identity() {
    let base = BusSettings::new().with(CERT_PREFIX, "bodhi");
    let notifier = notifier_with(config(true), base);

    let (result, logs) = capture_logs(|| notifier.init(InitOptions::new().active(true)));
    result.unwrap();

    let inits = notifier.bus().init_calls();
    assert_eq!(inits.len(), 1);
    assert_eq!(inits[0].get(ACTIVE), Some(&json!(true)));
    assert_eq!(inits[0].name(), Some("relay_inbound"));
    assert!(!inits[0].contains(CERT_PREFIX));
    assert_eq!(logs.count("INFO", "bus initialized"), 1);
}

#[test]
fn cert_prefix_is_passed_through() {
    let notifier = notifier(true);

    let (result, logs) = capture_logs(|| {
        notifier.init(InitOptions::new().cert_prefix("This is a real cert trust me."))
    });
    result.unwrap();

    let inits = notifier.bus().init_calls();
    assert_eq!(inits.len(), 1);
    assert_eq!(inits[0].cert_prefix(), Some("This is a real cert trust me."));
    assert_eq!(logs.count("INFO", "bus initialized"), 1);
}

#[test]
fn active_and_cert_prefix_conflict() {
    let notifier = notifier(true);

    let err = notifier
        .init(InitOptions::new().active(true).cert_prefix("shell"))
        .unwrap_err();

    assert_eq!(err, NotifyError::ConflictingInitOptions);
    assert!(notifier.bus().init_calls().is_empty());
}

#[test]
fn ensure_ready_only_initializes_an_uninitialized_bus() {
    let notifier = notifier(true);

    notifier.ensure_ready().unwrap();
    notifier.ensure_ready().unwrap();
    assert_eq!(notifier.bus().init_calls().len(), 1);

    let explicit = crate::support::notifier(true);
    explicit.init(InitOptions::new().active(true)).unwrap();
    explicit.ensure_ready().unwrap();
    let inits = explicit.bus().init_calls();
    assert_eq!(inits.len(), 1);
    assert_eq!(inits[0].name(), Some("relay_inbound"));
}
