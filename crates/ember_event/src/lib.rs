//! # ember_event - Synchronous Observer Signals
//!
//! Typed change-notification channels with:
//! - Synchronous, in-order delivery on the caller's thread
//! - Subscribe/unsubscribe with stable subscriber handles
//! - Stateful handlers (`FnMut`)
//!
//! A [`Signal`] completes delivery before `emit` returns; there is no queue
//! and no background dispatch. Single-threaded by contract: handlers carry no
//! `Send`/`Sync` bounds, and a handler that mutates the emitting object again
//! is the caller's responsibility.

use core::fmt;

/// Stable handle identifying a subscription on a [`Signal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Boxed handler invoked for each emitted event.
pub type Handler<E> = Box<dyn FnMut(&E)>;

/// A typed signal: observers register handlers, emitters deliver events to
/// all of them synchronously, in registration order.
pub struct Signal<E> {
    handlers: Vec<(SubscriberId, Handler<E>)>,
    next_id: u64,
}

impl<E> Signal<E> {
    /// Create a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a handler. Returns the id needed to unsubscribe it later.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a previously registered handler. Returns whether it was found.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub_id, _)| *sub_id != id);
        self.handlers.len() != before
    }

    /// Deliver an event to every handler, in registration order.
    ///
    /// Delivery completes before this call returns.
    pub fn emit(&mut self, event: &E) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Drop all handlers.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Prelude
pub mod prelude {
    pub use crate::{Signal, SubscriberId};
}
