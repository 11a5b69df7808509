//! Observable holder that owns the current session.

use crate::builder::SessionMachineBuilder;
use crate::core::{next, Event, Session, State};
use crate::machine::observer::{Observers, SubscriptionId};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};
use tracing::{debug, trace};

/// Owns the current [`Session`] and applies events to it.
///
/// Every `submit` replaces the session and then notifies each observer once,
/// in registration order, with the new snapshot. A no-op transition still
/// notifies.
///
/// Submissions from several threads are serialized, and observers run on the
/// submitting thread. From inside an observer it is fine to read
/// `current_state`, `subscribe`, or `unsubscribe` (including the observer's
/// own id). An observer added during a notification round first hears the
/// next event. Calling `submit` from inside an observer panics.
///
/// An observer that panics is never called again.
///
/// # Example
///
/// ```rust
/// use breathwork::core::{Event, Session};
/// use breathwork::machine::SessionMachine;
/// use std::sync::{Arc, Mutex};
///
/// let machine = SessionMachine::new(Session::breathing(2, 1).unwrap());
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// let id = machine.subscribe(move |s: &Session| sink.lock().unwrap().push(*s));
///
/// machine.submit(Event::RepetitionElapsed);
/// machine.submit(Event::RepetitionElapsed);
/// assert!(machine.unsubscribe(id));
/// machine.submit(Event::ToggleRun);
///
/// assert_eq!(
///     *seen.lock().unwrap(),
///     vec![Session::breathing(2, 2).unwrap(), Session::finished(2, 2).unwrap()]
/// );
/// assert_eq!(machine.current_state(), Session::breathing(2, 1).unwrap());
/// ```
pub struct SessionMachine {
    session: Mutex<Session>,
    observers: Mutex<Observers>,
    /// Held for a whole read-modify-notify sequence.
    dispatch: Mutex<()>,
    /// Thread currently running observers, if any.
    dispatcher: Mutex<Option<ThreadId>>,
}

impl SessionMachine {
    /// Create a machine holding `initial`.
    ///
    /// `Session` values are validated on construction, so any session is a
    /// valid starting point.
    pub fn new(initial: Session) -> Self {
        Self {
            session: Mutex::new(initial),
            observers: Mutex::new(Observers::default()),
            dispatch: Mutex::new(()),
            dispatcher: Mutex::new(None),
        }
    }

    /// Start a fluent builder for the initial session.
    pub fn builder() -> SessionMachineBuilder {
        SessionMachineBuilder::new()
    }

    /// Latest session snapshot (pure read).
    pub fn current_state(&self) -> Session {
        *lock(&self.session)
    }

    /// Check if the session has finished.
    pub fn is_final(&self) -> bool {
        self.current_state().is_final()
    }

    /// Register `observer` to receive every subsequent session.
    ///
    /// The current session is not replayed; read `current_state` for the
    /// first render.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Session) + Send + 'static,
    {
        let mut observers = lock(&self.observers);
        let id = observers.insert(Box::new(observer));
        debug!(subscription = %id, observers = observers.len(), "observer subscribed");
        id
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    ///
    /// Waits for any in-flight notification on another thread, so the
    /// observer is never called after this returns.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        if self.is_dispatching() {
            return self.remove_observer(id);
        }
        let _dispatch = lock(&self.dispatch);
        self.remove_observer(id)
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.observers).len()
    }

    /// Apply `event`, store the resulting session and notify observers.
    ///
    /// Never fails: every phase accepts both events.
    ///
    /// # Panics
    ///
    /// If called from inside one of this machine's observers.
    pub fn submit(&self, event: Event) {
        if self.is_dispatching() {
            panic!(
                "SessionMachine::submit({}) called from inside an observer; \
                 submit after the notification returns",
                event.name()
            );
        }
        let _dispatch = lock(&self.dispatch);
        let _dispatching = Dispatching::enter(&self.dispatcher);

        let (from, to) = {
            let mut session = lock(&self.session);
            let from = *session;
            let to = next(from, event);
            *session = to;
            (from, to)
        };

        if from == to {
            trace!(event = event.name(), session = %to, "event ignored");
        } else {
            debug!(event = event.name(), from = %from, to = %to, "session transition");
        }

        self.notify(&to);
    }

    fn notify(&self, session: &Session) {
        let ids = lock(&self.observers).ids();
        for id in ids {
            // Skips observers removed earlier in this round.
            let Some(mut observer) = lock(&self.observers).checkout(id) else {
                continue;
            };
            observer(session);
            lock(&self.observers).checkin(id, observer);
        }
    }

    fn remove_observer(&self, id: SubscriptionId) -> bool {
        let mut observers = lock(&self.observers);
        let removed = observers.remove(id);
        if removed {
            debug!(subscription = %id, observers = observers.len(), "observer unsubscribed");
        } else {
            trace!(subscription = %id, "unsubscribe for unknown observer");
        }
        removed
    }

    fn is_dispatching(&self) -> bool {
        *lock(&self.dispatcher) == Some(thread::current().id())
    }
}

/// Marks the current thread as the dispatcher until dropped, unwinding
/// included.
struct Dispatching<'a> {
    dispatcher: &'a Mutex<Option<ThreadId>>,
}

impl<'a> Dispatching<'a> {
    fn enter(dispatcher: &'a Mutex<Option<ThreadId>>) -> Self {
        *lock(dispatcher) = Some(thread::current().id());
        Self { dispatcher }
    }
}

impl Drop for Dispatching<'_> {
    fn drop(&mut self) {
        *lock(self.dispatcher) = None;
    }
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new(Session::default())
    }
}

impl fmt::Debug for SessionMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionMachine")
            .field("session", &self.current_state())
            .finish_non_exhaustive()
    }
}

// The guarded values are replaced wholesale and are valid at every point, so a
// panic in an observer leaves nothing half-written.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
