//! Core session types and logic.
//!
//! This module contains the pure core of the breathing session:
//! - State definitions via the `State` trait
//! - The `Session` value and its validated counters
//! - The total transition function `next`
//!
//! Nothing here touches locks, observers or logging; the `machine` module is
//! the imperative shell around it.

mod event;
mod phase;
mod session;
mod state;
mod transition;

pub use event::Event;
pub use phase::Phase;
pub use session::{
    InvalidSession, Repetitions, Session, SessionError, DEFAULT_TOTAL, FIRST_REPETITION,
};
pub use state::State;
pub use transition::next;
