//! Domain layer: the publish/subscribe contracts and their supporting types.
//!
//! [`Subscriber`] and [`Publisher`] are the two interfaces.
//! [`BroadcastPublisher`] is the one implementation: an ordered list of
//! borrowed subscribers notified in registration order.

pub mod delivery;
pub mod publisher;
pub mod subscriber;
pub mod subscriber_id;

pub use delivery::Delivery;
pub use publisher::{BroadcastPublisher, Publisher};
pub use subscriber::Subscriber;
pub use subscriber_id::SubscriberId;
