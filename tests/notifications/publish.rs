//! enqueue and force_publish before any commit.

use serde_json::json;
use sourced_notify::{Delivery, Payload, UnitOfWork};

use crate::support::{factory, msg, notifier, Package};

#[test]
fn publish_off_leaves_scratch_space_empty() {
    let notifier = notifier(false);
    let factory = factory(&notifier);
    let mut session = factory.session();

    let delivery = notifier
        .enqueue(&mut session, "demo.topic", Payload::new().with("such", "important"))
        .unwrap();

    assert_eq!(delivery, Delivery::Disabled);
    assert!(session.info().is_empty());
    assert!(notifier.bus().init_calls().is_empty());
    assert_eq!(notifier.bus().publish_count(), 0);
}

#[test]
fn publish_buffers_in_scratch_space() {
    let notifier = notifier(true);
    let factory = factory(&notifier);
    let mut session = factory.session();

    let delivery = notifier
        .enqueue(&mut session, "demo.topic", Payload::new().with("such", "important"))
        .unwrap();

    assert_eq!(delivery, Delivery::Queued);
    let pending = session.info().pending_outbox().expect("outbox not created");
    assert_eq!(
        pending.get("demo.topic").unwrap(),
        &[msg(json!({"such": "important"}))]
    );
    assert_eq!(notifier.bus().publish_count(), 0);
}

#[test]
fn publish_expands_entities() {
    let notifier = notifier(true);
    let factory = factory(&notifier);
    let mut session = factory.session();
    let package = Package::new("so good");

    notifier
        .enqueue(
            &mut session,
            "demo.topic",
            Payload::new().with_entity("some_package", &package),
        )
        .unwrap();

    let expected = msg(json!({
        "some_package": {
            "name": "so good",
            "type": "base",
            "requirements": null,
            "stack": null,
            "stack_id": null,
        }
    }));
    let pending = session.info().pending_outbox().unwrap();
    assert_eq!(pending.get("demo.topic").unwrap(), &[expected]);
    assert_eq!(notifier.bus().init_calls().len(), 1);
}

#[test]
fn publish_force_sends_immediately() {
    let notifier = notifier(true);
    let factory = factory(&notifier);
    let session = factory.session();

    let delivery = notifier
        .force_publish("demo.topic", Payload::new().with("such", "important"))
        .unwrap();

    assert_eq!(delivery, Delivery::Sent);
    assert!(session.info().is_empty());
    assert_eq!(
        notifier.bus().published_on("demo.topic"),
        vec![msg(json!({"such": "important"}))]
    );
    assert_eq!(notifier.bus().init_calls().len(), 1);
}

#[test]
fn force_publish_ignores_open_buffer() {
    let notifier = notifier(true);
    let factory = factory(&notifier);
    let mut session = factory.session();

    notifier
        .enqueue(&mut session, "demo.topic", Payload::new().with("queued", true))
        .unwrap();
    notifier
        .force_publish("demo.topic", Payload::new().with("forced", true))
        .unwrap();

    assert_eq!(
        notifier.bus().published_on("demo.topic"),
        vec![msg(json!({"forced": true}))]
    );
    assert_eq!(session.info().pending_outbox().unwrap().len(), 1);
}

#[test]
fn force_publish_failure_propagates() {
    let notifier = notifier(true);
    notifier.ensure_ready().unwrap();
    notifier.bus().fail_publishes("relay down");

    let err = notifier
        .force_publish("demo.topic", Payload::new().with("k", "v"))
        .unwrap_err();

    assert_eq!(err.to_string(), "bus error: connection failed: relay down");
}
