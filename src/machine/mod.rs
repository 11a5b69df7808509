//! Imperative shell around the pure session core.
//!
//! [`SessionMachine`] holds the current session behind a mutex, applies
//! events through the pure transition function and pushes every new snapshot
//! to registered observers.

mod observer;
mod session_machine;

pub use observer::SubscriptionId;
pub use session_machine::SessionMachine;
