//! Typed publish/subscribe channel for engine events.

use std::fmt;

use wordhex_core::{Event, EventKind};

/// Handle returned by a subscription, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

struct Subscriber {
    id: SubscriptionId,
    kind: Option<EventKind>,
    handler: Box<dyn FnMut(&Event)>,
}

/// Synchronous event bus.
///
/// Handlers run in subscription order, once per published event, before
/// `publish` returns. Nothing is buffered between publications.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl EventBus {
    /// Creates a bus without subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for a single event kind.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&Event) + 'static,
    {
        self.register(Some(kind), Box::new(handler))
    }

    /// Registers a handler for every event kind.
    pub fn subscribe_all<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Event) + 'static,
    {
        self.register(None, Box::new(handler))
    }

    /// Removes a handler. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Delivers one event to every matching handler.
    pub fn publish(&mut self, event: &Event) {
        let kind = event.kind();
        for subscriber in &mut self.subscribers {
            if subscriber.kind.map_or(true, |wanted| wanted == kind) {
                (subscriber.handler)(event);
            }
        }
    }

    /// Delivers events in order.
    pub fn publish_all(&mut self, events: &[Event]) {
        for event in events {
            self.publish(event);
        }
    }

    fn register(&mut self, kind: Option<EventKind>, handler: Box<dyn FnMut(&Event)>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber { id, kind, handler });
        id
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
