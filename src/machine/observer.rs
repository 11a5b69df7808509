//! Observer registration for session snapshots.

use crate::core::Session;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Callback invoked with every new session snapshot.
pub(crate) type Observer = Box<dyn FnMut(&Session) + Send>;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

struct Entry {
    id: SubscriptionId,
    /// `None` while the observer is checked out and running.
    observer: Option<Observer>,
}

/// Observers in registration order.
///
/// No deduplication: registering the same logic twice yields two entries and
/// two notifications per change.
///
/// Observers are checked out for the duration of a call so the registry lock
/// is never held while user code runs; an entry removed meanwhile drops its
/// observer on check-in.
#[derive(Default)]
pub(crate) struct Observers {
    entries: Vec<Entry>,
}

impl Observers {
    pub(crate) fn insert(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.entries.push(Entry {
            id,
            observer: Some(observer),
        });
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Registered ids, in notification order.
    pub(crate) fn ids(&self) -> Vec<SubscriptionId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub(crate) fn checkout(&mut self, id: SubscriptionId) -> Option<Observer> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .and_then(|entry| entry.observer.take())
    }

    /// Put an observer back. Returns `false` (dropping it) if it was removed
    /// while checked out.
    pub(crate) fn checkin(&mut self, id: SubscriptionId, observer: Observer) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.observer = Some(observer);
                true
            }
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder(log: &Arc<Mutex<Vec<u8>>>, tag: u8) -> Observer {
        let log = Arc::clone(log);
        Box::new(move |_: &Session| log.lock().unwrap().push(tag))
    }

    fn notify_all(observers: &mut Observers, session: &Session) {
        for id in observers.ids() {
            if let Some(mut observer) = observers.checkout(id) {
                observer(session);
                observers.checkin(id, observer);
            }
        }
    }

    #[test]
    fn ids_follow_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::default();
        observers.insert(recorder(&log, 1));
        observers.insert(recorder(&log, 2));
        observers.insert(recorder(&log, 3));

        notify_all(&mut observers, &Session::default());

        assert_eq!(*log.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn remove_drops_only_that_entry() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::default();
        let first = observers.insert(recorder(&log, 1));
        observers.insert(recorder(&log, 2));

        assert!(observers.remove(first));
        assert!(!observers.remove(first));
        assert_eq!(observers.len(), 1);

        notify_all(&mut observers, &Session::default());
        assert_eq!(*log.lock().unwrap(), vec![2]);
    }

    #[test]
    fn checked_out_observer_is_not_handed_out_twice() {
        let mut observers = Observers::default();
        let id = observers.insert(Box::new(|_: &Session| {}));

        let observer = observers.checkout(id);
        assert!(observer.is_some());
        assert!(observers.checkout(id).is_none());
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn removal_while_checked_out_drops_on_checkin() {
        let mut observers = Observers::default();
        let id = observers.insert(Box::new(|_: &Session| {}));

        let observer = observers.checkout(id).unwrap();
        assert!(observers.remove(id));
        assert!(!observers.checkin(id, observer));
        assert_eq!(observers.len(), 0);
        assert!(observers.checkout(id).is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut observers = Observers::default();
        let a = observers.insert(Box::new(|_: &Session| {}));
        let b = observers.insert(Box::new(|_: &Session| {}));
        assert_ne!(a, b);
    }
}
