//! Single-slice state container.
//!
//! A [`Store`] owns one slice value and a fixed table of mutators. Callers
//! send [`Action`]s through [`Store::dispatch`]; the matching mutator
//! computes the next value, the store swaps it in, then every subscriber
//! is called synchronously in registration order.
//!
//! ```text
//! Action ──→ dispatch ──→ Mutator ──→ replace slice ──→ notify subscribers
//!                                                          │
//!                                   view re-reads state() ←┘
//! ```
//!
//! The store is single-threaded (`Rc`/`RefCell`). Dispatches issued while
//! another dispatch is running are queued and applied, in order, once the
//! running one has finished notifying.

mod action;
mod error;
mod slice;

pub use action::Action;
pub use error::{MutatorError, StoreError};
pub use slice::{Mutator, Slice, SliceBuilder};

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use tracing::{debug, warn};

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What happened to a dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// The mutator ran and subscribers were notified.
    Applied,
    /// No mutator is registered for the action type; nothing changed.
    Ignored,
    /// Another dispatch was running; the action runs after it completes.
    Queued,
}

struct Subscriber {
    id: SubscriptionId,
    callback: Rc<dyn Fn()>,
}

pub struct Store<S> {
    name: String,
    mutators: BTreeMap<String, Mutator<S>>,
    state: RefCell<Rc<S>>,
    subscribers: RefCell<Vec<Subscriber>>,
    next_id: Cell<u64>,
    dispatching: Cell<bool>,
    pending: RefCell<VecDeque<Action>>,
}

impl<S: 'static> Store<S> {
    pub fn new(slice: Slice<S>) -> Self {
        let (name, initial, mutators) = slice.into_parts();
        debug!(slice = %name, actions = mutators.len(), "store created");
        Self {
            name,
            mutators,
            state: RefCell::new(Rc::new(initial)),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            dispatching: Cell::new(false),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current slice value.
    pub fn state(&self) -> Rc<S> {
        Rc::clone(&self.state.borrow())
    }

    pub fn has_mutator(&self, kind: &str) -> bool {
        self.mutators.contains_key(kind)
    }

    /// Registered action types in sorted order.
    pub fn action_types(&self) -> Vec<&str> {
        self.mutators.keys().map(String::as_str).collect()
    }

    /// Route `action` to its mutator and notify subscribers.
    ///
    /// Unknown action types are a no-op. A failing mutator leaves the slice
    /// untouched and nobody is notified.
    pub fn dispatch(&self, action: &Action) -> Result<Dispatched, StoreError> {
        if self.dispatching.get() {
            debug!(slice = %self.name, action = action.kind(), "dispatch queued");
            self.pending.borrow_mut().push_back(action.clone());
            return Ok(Dispatched::Queued);
        }

        self.dispatching.set(true);
        // Nothing queued by an unwinding dispatch may leak into the next one.
        let _running = scopeguard::guard((), |_| {
            self.dispatching.set(false);
            self.pending.borrow_mut().clear();
        });

        let outcome = self.apply_discarding_queued_on_error(action);

        loop {
            let Some(next) = self.pending.borrow_mut().pop_front() else {
                break;
            };
            if let Err(err) = self.apply_discarding_queued_on_error(&next) {
                warn!(slice = %self.name, action = next.kind(), error = %err, "queued action failed");
            }
        }

        outcome
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Rc::new(callback),
        });
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Actions queued by a mutator that then fails are dropped with it.
    fn apply_discarding_queued_on_error(
        &self,
        action: &Action,
    ) -> Result<Dispatched, StoreError> {
        let mark = self.pending.borrow().len();
        let outcome = self.apply(action);
        if outcome.is_err() {
            let mut pending = self.pending.borrow_mut();
            let dropped = pending.len().saturating_sub(mark);
            if dropped > 0 {
                debug!(
                    slice = %self.name,
                    action = action.kind(),
                    dropped,
                    "discarding actions queued by failed mutator"
                );
            }
            pending.truncate(mark);
        }
        outcome
    }

    fn apply(&self, action: &Action) -> Result<Dispatched, StoreError> {
        let Some(mutator) = self.mutators.get(action.kind()) else {
            debug!(slice = %self.name, action = action.kind(), "no mutator registered, ignoring");
            return Ok(Dispatched::Ignored);
        };

        let current = self.state();
        let next = mutator(&*current, action).map_err(|source| StoreError::Mutator {
            slice: self.name.clone(),
            action: action.kind().to_string(),
            source,
        })?;
        *self.state.borrow_mut() = Rc::new(next);
        debug!(slice = %self.name, action = action.kind(), "action applied");

        self.notify();
        Ok(Dispatched::Applied)
    }

    fn notify(&self) {
        // Callbacks may subscribe or unsubscribe, so iterate over a snapshot.
        let snapshot: Vec<(SubscriptionId, Rc<dyn Fn()>)> = self
            .subscribers
            .borrow()
            .iter()
            .map(|s| (s.id, Rc::clone(&s.callback)))
            .collect();

        for (id, callback) in snapshot {
            if self.is_subscribed(id) {
                callback();
            }
        }
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.borrow().iter().any(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::rc::Weak;

    #[derive(Debug, Clone, PartialEq)]
    struct Total {
        value: i64,
    }

    fn total_store(initial: i64) -> Rc<Store<Total>> {
        let slice = Slice::builder("total", Total { value: initial })
            .mutator("add_one", |s: &Total, _| Total { value: s.value + 1 })
            .try_mutator("set", |_, action| {
                Ok(Total {
                    value: action.payload_as::<i64>()?,
                })
            })
            .try_mutator("fail", |_, _| Err(MutatorError::Rejected("nope".into())))
            .build();
        Rc::new(Store::new(slice))
    }

    #[test]
    fn dispatch_replaces_state() {
        let store = total_store(0);
        let outcome = store.dispatch(&Action::new("add_one")).unwrap();
        assert_eq!(outcome, Dispatched::Applied);
        assert_eq!(store.state().value, 1);
    }

    #[test]
    fn unknown_action_is_ignored_without_notification() {
        let store = total_store(3);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move || counter.set(counter.get() + 1));

        let before = store.state();
        let outcome = store.dispatch(&Action::new("does_not_exist")).unwrap();

        assert_eq!(outcome, Dispatched::Ignored);
        assert!(Rc::ptr_eq(&before, &store.state()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn payload_reaches_mutator() {
        let store = total_store(0);
        store
            .dispatch(&Action::with_payload("set", json!(42)))
            .unwrap();
        assert_eq!(store.state().value, 42);
    }

    #[test]
    fn failing_mutator_keeps_previous_state() {
        let store = total_store(9);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move || counter.set(counter.get() + 1));

        let err = store.dispatch(&Action::new("fail")).unwrap_err();
        let StoreError::Mutator { slice, action, .. } = err;
        assert_eq!(slice, "total");
        assert_eq!(action, "fail");
        assert_eq!(store.state().value, 9);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn missing_payload_is_reported() {
        let store = total_store(0);
        let err = store.dispatch(&Action::new("set")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Mutator {
                source: MutatorError::MissingPayload,
                ..
            }
        ));
        assert_eq!(store.state().value, 0);
    }

    #[test]
    fn subscribers_run_in_registration_order_after_replacement() {
        let store = total_store(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            let weak = Rc::downgrade(&store);
            store.subscribe(move || {
                let value = weak.upgrade().map(|s| s.state().value);
                seen.borrow_mut().push((tag, value));
            });
        }

        store.dispatch(&Action::new("add_one")).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![("first", Some(1)), ("second", Some(1))]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = total_store(0);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move || counter.set(counter.get() + 1));

        store.dispatch(&Action::new("add_one")).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(&Action::new("add_one")).unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn dispatch_from_subscriber_is_queued_until_fan_out_completes() {
        let store = total_store(0);
        let log = Rc::new(RefCell::new(Vec::new()));

        {
            let weak = Rc::downgrade(&store);
            let log = Rc::clone(&log);
            store.subscribe(move || {
                let Some(store) = weak.upgrade() else { return };
                let value = store.state().value;
                log.borrow_mut().push(format!("a:{value}"));
                if value == 1 {
                    let outcome = store.dispatch(&Action::new("add_one")).unwrap();
                    assert_eq!(outcome, Dispatched::Queued);
                }
            });
        }
        {
            let weak = Rc::downgrade(&store);
            let log = Rc::clone(&log);
            store.subscribe(move || {
                let value = weak.upgrade().map(|s| s.state().value).unwrap_or(-1);
                log.borrow_mut().push(format!("b:{value}"));
            });
        }

        store.dispatch(&Action::new("add_one")).unwrap();

        assert_eq!(*log.borrow(), vec!["a:1", "b:1", "a:2", "b:2"]);
        assert_eq!(store.state().value, 2);
    }

    #[test]
    fn subscriber_removed_during_fan_out_is_skipped() {
        let store = total_store(0);
        let late_calls = Rc::new(Cell::new(0));
        let victim: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        {
            let weak = Rc::downgrade(&store);
            let victim = Rc::clone(&victim);
            store.subscribe(move || {
                if let (Some(store), Some(id)) = (weak.upgrade(), victim.get()) {
                    store.unsubscribe(id);
                }
            });
        }
        let counter = Rc::clone(&late_calls);
        let id = store.subscribe(move || counter.set(counter.get() + 1));
        victim.set(Some(id));

        store.dispatch(&Action::new("add_one")).unwrap();
        assert_eq!(late_calls.get(), 0);
    }

    #[test]
    fn subscriber_added_during_fan_out_waits_for_next_dispatch() {
        let store = total_store(0);
        let added_calls = Rc::new(Cell::new(0));

        {
            let weak = Rc::downgrade(&store);
            let added_calls = Rc::clone(&added_calls);
            let added = Cell::new(false);
            store.subscribe(move || {
                if added.replace(true) {
                    return;
                }
                if let Some(store) = weak.upgrade() {
                    let counter = Rc::clone(&added_calls);
                    store.subscribe(move || counter.set(counter.get() + 1));
                }
            });
        }

        store.dispatch(&Action::new("add_one")).unwrap();
        assert_eq!(added_calls.get(), 0);
        store.dispatch(&Action::new("add_one")).unwrap();
        assert_eq!(added_calls.get(), 1);
    }

    /// A store whose `queue_then_fail` mutator queues `add_one` and then fails.
    fn self_dispatching_store() -> Rc<Store<Total>> {
        let handle: Rc<RefCell<Weak<Store<Total>>>> = Rc::new(RefCell::new(Weak::new()));
        let queue_from = Rc::clone(&handle);
        let slice = Slice::builder("total", Total { value: 0 })
            .mutator("add_one", |s: &Total, _| Total { value: s.value + 1 })
            .try_mutator("queue_then_fail", move |_, _| {
                if let Some(store) = queue_from.borrow().upgrade() {
                    assert_eq!(
                        store.dispatch(&Action::new("add_one")).unwrap(),
                        Dispatched::Queued
                    );
                }
                Err(MutatorError::Rejected("after queuing".into()))
            })
            .build();
        let store = Rc::new(Store::new(slice));
        *handle.borrow_mut() = Rc::downgrade(&store);
        store
    }

    #[test]
    fn actions_queued_by_failing_mutator_are_dropped() {
        let store = self_dispatching_store();

        assert!(store.dispatch(&Action::new("queue_then_fail")).is_err());
        assert_eq!(store.state().value, 0);

        store.dispatch(&Action::new("add_one")).unwrap();
        assert_eq!(store.state().value, 1);
    }

    #[test]
    fn panicking_subscriber_does_not_leave_queued_actions_behind() {
        let store = total_store(0);
        let armed = Rc::new(Cell::new(true));
        {
            let weak = Rc::downgrade(&store);
            let armed = Rc::clone(&armed);
            store.subscribe(move || {
                if !armed.replace(false) {
                    return;
                }
                if let Some(store) = weak.upgrade() {
                    store.dispatch(&Action::new("add_one")).unwrap();
                }
                panic!("subscriber failed");
            });
        }

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            store.dispatch(&Action::new("add_one"))
        }));
        assert!(result.is_err());
        assert_eq!(store.state().value, 1);

        store.dispatch(&Action::new("add_one")).unwrap();
        assert_eq!(store.state().value, 2);
    }

    #[test]
    fn action_types_are_sorted() {
        let store = total_store(0);
        assert_eq!(store.action_types(), vec!["add_one", "fail", "set"]);
        assert!(store.has_mutator("set"));
        assert!(!store.has_mutator("reset"));
    }
}
