//! The session transition function.
//!
//! `next` is total: every phase/event pair has an entry, including explicit
//! no-ops, so it never fails and never needs to be guarded by the caller.

use super::event::Event;
use super::session::Session;

/// Compute the session that follows `session` when `event` is accepted.
///
/// | Phase     | ToggleRun              | RepetitionElapsed                                |
/// |-----------|------------------------|--------------------------------------------------|
/// | Breathing | Paused, same counters  | `current + 1`, or Finished once `current >= total` |
/// | Paused    | Breathing, same counters | no-op                                          |
/// | Finished  | Breathing, `current = 1` | no-op                                          |
///
/// A `RepetitionElapsed` arriving while paused or finished comes from an
/// animation that has not caught up with the phase yet and is ignored.
///
/// # Example
///
/// ```rust
/// use breathwork::core::{next, Event, Session};
///
/// let s = Session::breathing(2, 1).unwrap();
/// let s = next(s, Event::RepetitionElapsed);
/// assert_eq!(s, Session::breathing(2, 2).unwrap());
/// let s = next(s, Event::RepetitionElapsed);
/// assert_eq!(s, Session::finished(2, 2).unwrap());
/// let s = next(s, Event::ToggleRun);
/// assert_eq!(s, Session::breathing(2, 1).unwrap());
/// ```
pub fn next(session: Session, event: Event) -> Session {
    match (session, event) {
        (Session::Breathing(reps), Event::ToggleRun) => Session::Paused(reps),
        (Session::Paused(reps), Event::ToggleRun) => Session::Breathing(reps),
        (Session::Finished(reps), Event::ToggleRun) => Session::Breathing(reps.restarted()),
        (Session::Breathing(reps), Event::RepetitionElapsed) if reps.is_last() => {
            Session::Finished(reps)
        }
        (Session::Breathing(reps), Event::RepetitionElapsed) => Session::Breathing(reps.advanced()),
        (Session::Paused(_) | Session::Finished(_), Event::RepetitionElapsed) => session,
    }
}
