//! Page-wide signals.
//!
//! A call-to-action far from a modal (a footer link, a hero button) asks for
//! it to open by broadcasting a [`PageSignal`] on a [`SignalBus`]. The modal
//! subscribes while mounted and holds a [`Subscription`]; cancelling or
//! dropping it removes the listener so a signal sent after unmount is never
//! acted on.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use deal_observability::UI_TARGET;
use serde::{Deserialize, Serialize};

/// Named signals that can be broadcast across the page. No payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageSignal {
    /// Ask the deal alerts modal to open.
    #[serde(rename = "open-deal-alerts")]
    OpenDealAlerts,
}

impl PageSignal {
    /// Wire name of the signal.
    pub fn name(&self) -> &'static str {
        match self {
            PageSignal::OpenDealAlerts => "open-deal-alerts",
        }
    }

    /// Look a signal up by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "open-deal-alerts" => Some(PageSignal::OpenDealAlerts),
            _ => None,
        }
    }
}

impl fmt::Display for PageSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Listener = Arc<dyn Fn(PageSignal) + Send + Sync>;

struct Registration {
    id: u64,
    signal: PageSignal,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Registration>,
}

impl Registry {
    fn remove(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|r| r.id != id);
        self.listeners.len() != before
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    // A panicking listener never runs under the lock, so the data is intact.
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Observer registry for [`PageSignal`]s.
///
/// Cloning gives another handle to the same registry.
#[derive(Clone, Default)]
pub struct SignalBus {
    registry: Arc<Mutex<Registry>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `signal` until the returned handle is
    /// cancelled or dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, signal: PageSignal, listener: F) -> Subscription
    where
        F: Fn(PageSignal) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Registration {
            id,
            signal,
            listener: Arc::new(listener),
        });
        tracing::debug!(target: UI_TARGET, signal = signal.name(), id, "signal subscribed");

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Notify every listener of `signal`. Returns how many were notified.
    ///
    /// Listeners run after the registry lock is released, so they may
    /// subscribe, cancel or broadcast themselves.
    pub fn broadcast(&self, signal: PageSignal) -> usize {
        let listeners: Vec<Listener> = lock(&self.registry)
            .listeners
            .iter()
            .filter(|r| r.signal == signal)
            .map(|r| Arc::clone(&r.listener))
            .collect();

        tracing::debug!(
            target: UI_TARGET,
            signal = signal.name(),
            listeners = listeners.len(),
            "signal broadcast"
        );
        for listener in &listeners {
            listener(signal);
        }
        listeners.len()
    }

    /// Number of live listeners for `signal`.
    pub fn listener_count(&self, signal: PageSignal) -> usize {
        lock(&self.registry)
            .listeners
            .iter()
            .filter(|r| r.signal == signal)
            .count()
    }
}

impl fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalBus")
            .field("listeners", &lock(&self.registry).listeners.len())
            .finish()
    }
}

/// Handle keeping a listener registered. Unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Remove the listener now.
    pub fn cancel(self) {
        drop(self);
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| lock(&registry).listeners.iter().any(|r| r.id == self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if lock(&registry).remove(self.id) {
                tracing::debug!(target: UI_TARGET, id = self.id, "signal unsubscribed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn(PageSignal) + Send + Sync + 'static) {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        (hits, move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_broadcast_reaches_subscribers() {
        let bus = SignalBus::new();
        let (hits, listener) = counter();
        let _sub = bus.subscribe(PageSignal::OpenDealAlerts, listener);

        assert_eq!(bus.broadcast(PageSignal::OpenDealAlerts), 1);
        assert_eq!(bus.broadcast(PageSignal::OpenDealAlerts), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_broadcast_without_subscribers() {
        let bus = SignalBus::new();
        assert_eq!(bus.broadcast(PageSignal::OpenDealAlerts), 0);
    }

    #[test]
    fn test_cancelled_subscription_never_fires() {
        let bus = SignalBus::new();
        let (hits, listener) = counter();
        let sub = bus.subscribe(PageSignal::OpenDealAlerts, listener);
        assert!(sub.is_active());

        sub.cancel();
        assert_eq!(bus.listener_count(PageSignal::OpenDealAlerts), 0);
        assert_eq!(bus.broadcast(PageSignal::OpenDealAlerts), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = SignalBus::new();
        {
            let (_hits, listener) = counter();
            let _sub = bus.subscribe(PageSignal::OpenDealAlerts, listener);
            assert_eq!(bus.listener_count(PageSignal::OpenDealAlerts), 1);
        }
        assert_eq!(bus.listener_count(PageSignal::OpenDealAlerts), 0);
    }

    #[test]
    fn test_clones_share_registry() {
        let bus = SignalBus::new();
        let other = bus.clone();
        let (hits, listener) = counter();
        let _sub = bus.subscribe(PageSignal::OpenDealAlerts, listener);

        assert_eq!(other.broadcast(PageSignal::OpenDealAlerts), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_outliving_bus() {
        let bus = SignalBus::new();
        let (_hits, listener) = counter();
        let sub = bus.subscribe(PageSignal::OpenDealAlerts, listener);
        drop(bus);
        assert!(!sub.is_active());
        sub.cancel();
    }

    #[test]
    fn test_listener_may_unsubscribe_during_broadcast() {
        let bus = SignalBus::new();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let slot_clone = Arc::clone(&slot);
        let sub = bus.subscribe(PageSignal::OpenDealAlerts, move |_| {
            slot_clone.lock().unwrap().take();
        });
        *slot.lock().unwrap() = Some(sub);

        assert_eq!(bus.broadcast(PageSignal::OpenDealAlerts), 1);
        assert_eq!(bus.listener_count(PageSignal::OpenDealAlerts), 0);
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(PageSignal::OpenDealAlerts.name(), "open-deal-alerts");
        assert_eq!(
            PageSignal::from_name("open-deal-alerts"),
            Some(PageSignal::OpenDealAlerts)
        );
        assert_eq!(PageSignal::from_name("openDealAlerts"), None);
    }
}
