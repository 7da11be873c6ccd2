//! Synchronous publish/subscribe bus
//!
//! Handlers run on the publishing thread, in registration order, before
//! `publish` returns. The handler list is snapshotted before dispatch so a
//! handler may publish, subscribe or unsubscribe without deadlocking.
//!
//! Events raised away from the logic thread go through [`EventBus::enqueue`]
//! and are delivered when the owner calls [`EventBus::drain_queued`].

use std::collections::{HashMap, VecDeque};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::types::{EventKind, GameEvent};

/// Callback invoked for each published event of the subscribed kind
pub type Handler = Arc<dyn Fn(&GameEvent) + Send + Sync>;

/// Token returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    handler: Handler,
}

#[derive(Default)]
struct Inner {
    handlers: Mutex<HashMap<EventKind, Vec<Subscription>>>,
    queue: Mutex<VecDeque<GameEvent>>,
    next_id: AtomicU64,
}

/// Shared event bus handle; clones refer to the same bus
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Inner>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of `kind`
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: Fn(&GameEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .handlers
            .lock()
            .entry(kind)
            .or_default()
            .push(Subscription {
                id,
                handler: Arc::new(handler),
            });
        log::trace!("Subscribed {:?} to {:?}", id, kind);
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.inner.handlers.lock();
        for subs in handlers.values_mut() {
            if let Some(pos) = subs.iter().position(|s| s.id == id) {
                subs.remove(pos);
                log::trace!("Unsubscribed {:?}", id);
                return true;
            }
        }
        false
    }

    /// Deliver `event` to every current subscriber of its kind
    pub fn publish(&self, event: GameEvent) {
        let kind = event.kind();
        let snapshot: Vec<Handler> = match self.inner.handlers.lock().get(&kind) {
            Some(subs) => subs.iter().map(|s| Arc::clone(&s.handler)).collect(),
            None => return,
        };

        for handler in snapshot {
            let result = panic::catch_unwind(AssertUnwindSafe(|| handler(&event)));
            if result.is_err() {
                log::error!("Event handler for {:?} panicked; continuing dispatch", kind);
            }
        }
    }

    /// Defer `event` until the next [`drain_queued`](Self::drain_queued)
    pub fn enqueue(&self, event: GameEvent) {
        self.inner.queue.lock().push_back(event);
    }

    /// Publish every queued event in arrival order. Returns how many were delivered.
    ///
    /// Events enqueued by handlers during the drain are delivered in the same call.
    pub fn drain_queued(&self) -> usize {
        let mut delivered = 0;
        loop {
            let next = self.inner.queue.lock().pop_front();
            match next {
                Some(event) => {
                    self.publish(event);
                    delivered += 1;
                }
                None => return delivered,
            }
        }
    }

    /// Number of events waiting in the queue
    pub fn pending(&self) -> usize {
        self.inner.queue.lock().len()
    }

    /// Number of live subscriptions for `kind`
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.inner
            .handlers
            .lock()
            .get(&kind)
            .map_or(0, |subs| subs.len())
    }
}
