//! The store: dispatch, atomic publish, subscriptions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::{Mutex, RwLock};
use thiserror::Error;

use crate::features::cake::CakeReducer;
use crate::features::ice_cream::IceCreamReducer;
use crate::features::users::UsersReducer;

use super::action::Action;
use super::reactions::reacting_slices;
use super::reducer::SliceReducer;
use super::state::AppState;

/// Errors surfaced by the dispatch path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A subscriber attempted to dispatch from inside its own notification.
    #[error("re-entrant dispatch: subscribers must not dispatch during notification")]
    ReentrantDispatch,
}

/// Identifies one registered subscriber, for `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&AppState) + Send>;

/// Thread-safe state container with atomic publish.
///
/// Cloning produces another handle to the same store; handles are cheap
/// and can cross threads. Dispatches are serialized: all slice reducers
/// for one action run against the same previous tree, and the resulting
/// tree becomes visible to readers in a single step. Subscribers are
/// notified once per dispatch, after publish, with the published
/// snapshot.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    listeners: Arc<Mutex<Vec<(SubscriptionId, Listener)>>>,
    /// Serializes dispatches from different threads, in arrival order.
    dispatch_gate: Arc<Mutex<()>>,
    /// Thread currently inside `dispatch`, for re-entrancy detection.
    dispatching_on: Arc<Mutex<Option<ThreadId>>>,
    next_subscription: Arc<AtomicU64>,
}

impl Store {
    /// Create a store with the initial stock levels and an empty user list.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store from a specific tree.
    pub fn with_state(initial: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            dispatch_gate: Arc::new(Mutex::new(())),
            dispatching_on: Arc::new(Mutex::new(None)),
            next_subscription: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the current published tree.
    ///
    /// Two calls without an intervening dispatch return equal values.
    /// The snapshot is the caller's own copy; mutating it has no effect
    /// on the store.
    pub fn state(&self) -> AppState {
        self.state.read().clone()
    }

    /// Register a listener invoked once per dispatch, after publish.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AppState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().retain(|(lid, _)| *lid != id);
    }

    /// Run every slice reducer against `action` and publish the result.
    ///
    /// Reducers run in declaration order (cake, ice cream, users) against
    /// the same previous tree, so one dispatch updates every affected
    /// slice together: readers never observe a partially updated tree.
    /// Dispatches from other threads block on the gate until this one
    /// finishes, preserving submission order. A dispatch issued from a
    /// subscriber on the dispatching thread fails fast instead of
    /// deadlocking.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        if *self.dispatching_on.lock() == Some(thread::current().id()) {
            return Err(StoreError::ReentrantDispatch);
        }

        let _gate = self.dispatch_gate.lock();
        *self.dispatching_on.lock() = Some(thread::current().id());
        let marker = Arc::clone(&self.dispatching_on);
        let _reset = scopeguard::guard((), move |_| {
            *marker.lock() = None;
        });

        let prev = self.state.read().clone();
        let next = AppState {
            cake: CakeReducer::reduce(prev.cake, &action),
            ice_cream: IceCreamReducer::reduce(prev.ice_cream, &action),
            users: UsersReducer::reduce(prev.users, &action),
        };
        *self.state.write() = next.clone();

        let kind = action.kind();
        let cross = reacting_slices(kind);
        if cross.is_empty() {
            tracing::debug!(action = kind, "action dispatched");
        } else {
            tracing::debug!(
                action = kind,
                reacting = ?cross,
                "action dispatched with cross-slice reaction"
            );
        }

        for (_, listener) in self.listeners.lock().iter() {
            listener(&next);
        }
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cake::CakeAction;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn dispatch_from_subscriber_fails_fast() {
        let store = Store::new();
        let inner = store.clone();
        let result: Arc<Mutex<Option<Result<(), StoreError>>>> = Arc::new(Mutex::new(None));
        let seen = Arc::clone(&result);
        store.subscribe(move |_| {
            *seen.lock() = Some(inner.dispatch(Action::Cake(CakeAction::Restocked { amount: 1 })));
        });

        store
            .dispatch(Action::Cake(CakeAction::Ordered { amount: 1 }))
            .unwrap();

        assert_eq!(
            result.lock().take(),
            Some(Err(StoreError::ReentrantDispatch))
        );
        // The inner dispatch was rejected, so only the outer one applied.
        assert_eq!(store.state().cake.count, 9);
    }

    #[test]
    fn dispatch_from_another_thread_is_serialized() {
        let store = Store::new();
        let remote = store.clone();
        let handle = thread::spawn(move || {
            remote
                .dispatch(Action::Cake(CakeAction::Restocked { amount: 5 }))
                .unwrap();
        });
        handle.join().unwrap();
        assert_eq!(store.state().cake.count, 15);
    }

    #[test]
    fn listeners_run_after_publish() {
        let store = Store::new();
        let observer = store.clone();
        let matches = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&matches);
        store.subscribe(move |published| {
            // The notified tree and the readable tree must agree.
            if observer.state() == *published {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        store
            .dispatch(Action::Cake(CakeAction::Ordered { amount: 2 }))
            .unwrap();
        assert_eq!(matches.load(Ordering::SeqCst), 1);
    }
}
