//! Subscriber that logs each received message.

use crate::domain::{Subscriber, SubscriberId};
use crate::error::SubscriberError;

/// Emits one INFO event per received message. Never fails.
#[derive(Debug, Clone)]
pub struct LogSubscriber {
    id: SubscriberId,
    label: String,
}

impl LogSubscriber {
    /// Creates a log subscriber with a fresh id and the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: SubscriberId::new(),
            label: label.into(),
        }
    }

    /// Returns this subscriber's id.
    #[must_use]
    pub const fn id(&self) -> SubscriberId {
        self.id
    }
}

impl Subscriber for LogSubscriber {
    fn receive(&self, message: &str) -> Result<(), SubscriberError> {
        tracing::info!(subscriber = %self.label, id = %self.id, text = message, "message received");
        Ok(())
    }

    fn name(&self) -> &str {
        &self.label
    }
}
