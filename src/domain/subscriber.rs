//! The receiving side of a broadcast.

use crate::error::SubscriberError;

/// Something that can receive a broadcast message.
///
/// What "receiving" means is entirely up to the implementation; the
/// publisher only looks at the returned `Result` to decide whether to keep
/// going. `receive` takes `&self` because the publisher holds shared
/// borrows, possibly several to the same subscriber. Implementations that
/// keep state use interior mutability.
///
/// ```
/// use std::cell::Cell;
///
/// use pubsub_primer::domain::Subscriber;
/// use pubsub_primer::error::SubscriberError;
///
/// #[derive(Debug, Default)]
/// struct Counter(Cell<usize>);
///
/// impl Subscriber for Counter {
///     fn receive(&self, _message: &str) -> Result<(), SubscriberError> {
///         self.0.set(self.0.get() + 1);
///         Ok(())
///     }
/// }
/// ```
pub trait Subscriber {
    /// Handles one published message.
    ///
    /// # Errors
    ///
    /// Returns a [`SubscriberError`] if the message could not be handled.
    /// The publisher aborts the current broadcast when this happens.
    fn receive(&self, message: &str) -> Result<(), SubscriberError>;

    /// Returns a short name used in log lines.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
