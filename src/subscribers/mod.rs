//! Ready-made [`Subscriber`](crate::domain::Subscriber) implementations.
//!
//! - [`LogSubscriber`] writes every message to `tracing`.
//! - [`RecordingSubscriber`] keeps every message for later inspection and is
//!   the stand-in to reach for in tests that assert on what was delivered.

pub mod log;
pub mod recording;

pub use log::LogSubscriber;
pub use recording::RecordingSubscriber;
