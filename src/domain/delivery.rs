//! Record of a message received by a recording subscriber.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::SubscriberId;

/// One message as seen by one subscriber.
///
/// Produced by [`crate::subscribers::RecordingSubscriber`]. Serializes to a
/// flat JSON object so the demo binary can print a transcript line per
/// delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    /// Subscriber that received the message.
    pub subscriber_id: SubscriberId,
    /// Position of this message in the subscriber's history, starting at 1.
    pub sequence: u64,
    /// Message text, exactly as published.
    pub message: String,
    /// When the subscriber received the message.
    pub received_at: DateTime<Utc>,
}

impl Delivery {
    /// Creates a delivery stamped with the current time.
    #[must_use]
    pub fn now(subscriber_id: SubscriberId, sequence: u64, message: &str) -> Self {
        Self {
            subscriber_id,
            sequence,
            message: message.to_string(),
            received_at: Utc::now(),
        }
    }
}
