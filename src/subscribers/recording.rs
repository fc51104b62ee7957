//! Subscriber that remembers everything it receives.

use std::cell::RefCell;

use crate::domain::{Delivery, Subscriber, SubscriberId};
use crate::error::SubscriberError;

/// Records a [`Delivery`] per received message. Never fails.
///
/// Uses a `RefCell` so it can be registered through a shared borrow, even
/// several times on the same publisher. Not `Sync`; broadcasts are
/// single-threaded.
#[derive(Debug, Default)]
pub struct RecordingSubscriber {
    id: SubscriberId,
    deliveries: RefCell<Vec<Delivery>>,
}

impl RecordingSubscriber {
    /// Creates an empty recorder with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this subscriber's id.
    #[must_use]
    pub const fn id(&self) -> SubscriberId {
        self.id
    }

    /// Returns a copy of every delivery so far, oldest first.
    #[must_use]
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.borrow().clone()
    }

    /// Returns only the message texts, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.deliveries
            .borrow()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }

    /// Returns how many messages have been received.
    #[must_use]
    pub fn count(&self) -> usize {
        self.deliveries.borrow().len()
    }

    /// Forgets all recorded deliveries. Sequence numbers restart at 1.
    pub fn clear(&self) {
        self.deliveries.borrow_mut().clear();
    }
}

impl Subscriber for RecordingSubscriber {
    fn receive(&self, message: &str) -> Result<(), SubscriberError> {
        let mut deliveries = self.deliveries.borrow_mut();
        let sequence = deliveries.len() as u64 + 1;
        deliveries.push(Delivery::now(self.id, sequence, message));
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BroadcastPublisher, Publisher};

    #[test]
    fn starts_empty() {
        let rec = RecordingSubscriber::new();
        assert_eq!(rec.count(), 0);
        assert!(rec.deliveries().is_empty());
    }

    #[test]
    fn records_messages_in_order() {
        let rec = RecordingSubscriber::new();
        let _ = rec.receive("one");
        let _ = rec.receive("two");
        assert_eq!(rec.messages(), vec!["one", "two"]);
    }

    #[test]
    fn sequence_numbers_start_at_one() {
        let rec = RecordingSubscriber::new();
        let _ = rec.receive("a");
        let _ = rec.receive("b");
        let sequences: Vec<u64> = rec.deliveries().iter().map(|d| d.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
        assert!(rec.deliveries().iter().all(|d| d.subscriber_id == rec.id()));
    }

    #[test]
    fn clear_resets_history() {
        let rec = RecordingSubscriber::new();
        let _ = rec.receive("a");
        rec.clear();
        assert_eq!(rec.count(), 0);
        let _ = rec.receive("b");
        assert_eq!(rec.deliveries().first().map(|d| d.sequence), Some(1));
    }

    #[test]
    fn registered_twice_records_twice() {
        let rec = RecordingSubscriber::new();
        let mut publisher = BroadcastPublisher::new();
        publisher.add(&rec);
        publisher.add(&rec);

        assert_eq!(publisher.publish("dup"), Ok(2));
        assert_eq!(rec.messages(), vec!["dup", "dup"]);
    }
}
