//! Per-unit-of-work scratch space.

use serde_json::{Map, Value};

/// Messages waiting for a commit, grouped by topic.
///
/// Topics keep the order of their first enqueue; messages within a topic keep
/// enqueue order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingOutbox {
    topics: Vec<TopicQueue>,
}

#[derive(Debug, Clone, PartialEq)]
struct TopicQueue {
    topic: String,
    messages: Vec<Map<String, Value>>,
}

impl PendingOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to `topic`.
    pub fn push(&mut self, topic: &str, msg: Map<String, Value>) {
        match self.topics.iter_mut().find(|queue| queue.topic == topic) {
            Some(queue) => queue.messages.push(msg),
            None => self.topics.push(TopicQueue {
                topic: topic.to_string(),
                messages: vec![msg],
            }),
        }
    }

    /// Messages queued for `topic`, oldest first.
    pub fn get(&self, topic: &str) -> Option<&[Map<String, Value>]> {
        self.topics
            .iter()
            .find(|queue| queue.topic == topic)
            .map(|queue| queue.messages.as_slice())
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|queue| queue.topic.as_str())
    }

    /// Total number of queued messages across all topics.
    pub fn len(&self) -> usize {
        self.topics.iter().map(|queue| queue.messages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the outbox, yielding `(topic, message)` in publish order.
    pub fn into_messages(self) -> impl Iterator<Item = (String, Map<String, Value>)> {
        self.topics.into_iter().flat_map(|queue| {
            let topic = queue.topic;
            queue
                .messages
                .into_iter()
                .map(move |msg| (topic.clone(), msg))
        })
    }
}

/// Scratch space owned by one unit of work.
///
/// Cleared whenever the unit of work is reset, rolled back, or fails to
/// commit. The pending outbox is only materialized by the first enqueue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionInfo {
    pending: Option<PendingOutbox>,
}

impl SessionInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_outbox(&self) -> Option<&PendingOutbox> {
        self.pending.as_ref()
    }

    /// The pending outbox, created empty if absent.
    pub fn pending_outbox_mut(&mut self) -> &mut PendingOutbox {
        self.pending.get_or_insert_with(PendingOutbox::new)
    }

    /// Remove the pending outbox, leaving the scratch space without one.
    pub fn take_pending(&mut self) -> Option<PendingOutbox> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}
