//! Error types for subscribers, publication, and configuration.
//!
//! [`SubscriberError`] is what a [`crate::domain::Subscriber`] may report
//! from `receive`. [`PublishError`] wraps it with the position at which a
//! broadcast was aborted. [`ConfigError`] covers environment parsing in the
//! demo binary.

/// Failure reported by a subscriber while receiving a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscriberError {
    /// The subscriber refused the message.
    #[error("message rejected: {0}")]
    Rejected(String),

    /// The subscriber could not process the message right now.
    #[error("subscriber unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a broadcast.
///
/// Publication stops at the first failing subscriber. Subscribers
/// registered after it do not see the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    /// A subscriber failed and the broadcast was aborted.
    #[error("delivery aborted at subscriber #{index} after {delivered} deliveries: {source}")]
    Delivery {
        /// Zero-based registration position of the failing subscriber.
        index: usize,
        /// Number of subscribers that received the message before the failure.
        delivered: usize,
        /// The error returned by the failing subscriber.
        #[source]
        source: SubscriberError,
    },
}

impl PublishError {
    /// Returns the registration position of the subscriber that failed.
    #[must_use]
    pub const fn failed_index(&self) -> usize {
        match self {
            Self::Delivery { index, .. } => *index,
        }
    }

    /// Returns the number of deliveries that succeeded before the failure.
    #[must_use]
    pub const fn delivered(&self) -> usize {
        match self {
            Self::Delivery { delivered, .. } => *delivered,
        }
    }
}

/// Configuration loading failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be interpreted.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Environment variable name.
        key: &'static str,
        /// Offending raw value.
        value: String,
    },
}
