//! # pubsub-primer
//!
//! A synchronous publish/subscribe broadcast, small enough to read in one
//! sitting, used to show how collaborator interfaces are tested in Rust.
//!
//! The library half is two traits and one implementation. The interesting
//! half lives in `tests/`: mock-driven tests that walk through expectation
//! sequencing, invocation counts, argument matchers, and test lifecycle.
//!
//! ## Architecture
//!
//! ```text
//! caller
//!     │  add(&subscriber)            publish("msg")
//!     ▼                                  │
//! BroadcastPublisher<'a> (domain/) ──────┤  in registration order,
//!     │  Vec<&'a dyn Subscriber>         │  stop at first Err
//!     ▼                                  ▼
//! Subscriber impls (subscribers/)   LogSubscriber, RecordingSubscriber,
//!                                   or a mock in tests
//! ```
//!
//! ## Example
//!
//! ```
//! use pubsub_primer::domain::{BroadcastPublisher, Publisher};
//! use pubsub_primer::subscribers::RecordingSubscriber;
//!
//! let a = RecordingSubscriber::new();
//! let b = RecordingSubscriber::new();
//!
//! let mut publisher = BroadcastPublisher::new();
//! publisher.add(&a);
//! publisher.add(&b);
//!
//! assert_eq!(publisher.publish("hello"), Ok(2));
//! assert_eq!(a.messages(), vec!["hello"]);
//! assert_eq!(b.messages(), vec!["hello"]);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod subscribers;
