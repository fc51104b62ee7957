//! The broadcasting side: registration and in-order delivery.
//!
//! [`BroadcastPublisher`] keeps a `Vec` of borrowed subscribers. The
//! publisher never owns a subscriber; the borrow checker guarantees every
//! registered subscriber outlives it.
//!
//! ```text
//! publish("x")
//!     │
//!     ├──► subscribers[0].receive("x") ── Ok
//!     ├──► subscribers[1].receive("x") ── Ok
//!     └──► subscribers[2].receive("x") ── Err ──► PublishError { index: 2 }
//!          (anything after index 2 is skipped)
//! ```

use std::fmt;

use super::Subscriber;
use crate::error::PublishError;

/// Registers subscribers and broadcasts messages to them.
pub trait Publisher<'a> {
    /// Appends `subscriber` to the end of the delivery list.
    ///
    /// No de-duplication: adding the same subscriber twice makes it receive
    /// every message twice.
    fn add(&mut self, subscriber: &'a dyn Subscriber);

    /// Delivers `message` to every registered subscriber in registration
    /// order, synchronously, on the caller's thread.
    ///
    /// Returns the number of deliveries made. With no subscribers this is a
    /// no-op returning `Ok(0)`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Delivery`] as soon as a subscriber fails.
    /// Subscribers after the failing one are not invoked.
    fn publish(&self, message: &str) -> Result<usize, PublishError>;
}

/// Publisher backed by an ordered list of borrowed subscribers.
///
/// Created empty, grows only through [`Publisher::add`], never shrinks.
#[derive(Default)]
pub struct BroadcastPublisher<'a> {
    subscribers: Vec<&'a dyn Subscriber>,
}

impl BroadcastPublisher<'_> {
    /// Creates a publisher with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Returns the number of registrations, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<'a> Publisher<'a> for BroadcastPublisher<'a> {
    fn add(&mut self, subscriber: &'a dyn Subscriber) {
        self.subscribers.push(subscriber);
        tracing::trace!(
            subscriber = subscriber.name(),
            count = self.subscribers.len(),
            "subscriber added"
        );
    }

    fn publish(&self, message: &str) -> Result<usize, PublishError> {
        tracing::debug!(
            subscribers = self.subscribers.len(),
            bytes = message.len(),
            "publishing message"
        );

        for (index, subscriber) in self.subscribers.iter().enumerate() {
            if let Err(source) = subscriber.receive(message) {
                tracing::warn!(
                    index,
                    subscriber = subscriber.name(),
                    error = %source,
                    "delivery failed, aborting broadcast"
                );
                return Err(PublishError::Delivery {
                    index,
                    delivered: index,
                    source,
                });
            }
        }

        Ok(self.subscribers.len())
    }
}

impl fmt::Debug for BroadcastPublisher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BroadcastPublisher")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
