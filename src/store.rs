use crate::types::WebhookEvent;
use std::sync::{PoisonError, RwLock};

/// Append-only, in-memory record of received events.
///
/// Appends are serialized by the lock, so a snapshot never sees a partial
/// write and order is the order in which appends completed.
#[derive(Debug, Default)]
pub struct EventStore {
    events: RwLock<Vec<WebhookEvent>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, event: WebhookEvent) {
        // A panicking writer cannot leave a half-pushed Vec behind
        let mut events = self.events.write().unwrap_or_else(PoisonError::into_inner);
        events.push(event);
    }

    /// Copy of all events in insertion order.
    pub fn snapshot(&self) -> Vec<WebhookEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
