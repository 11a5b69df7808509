//! Breathwork: a guided breathing session state machine
//!
//! Breathwork follows a "pure core, imperative shell" layout. The session
//! logic is a pure, total transition function over immutable values, while a
//! thin thread-safe holder owns the current session and pushes snapshots to
//! observers.
//!
//! # Core Concepts
//!
//! - **Session**: a phase (Breathing, Paused, Finished) carrying `total` and
//!   `current` repetition counters
//! - **Event**: `ToggleRun` from the action button, `RepetitionElapsed` from
//!   the animation driver
//! - **SessionMachine**: synchronous getter plus subscribe/unsubscribe
//! - **Presentation**: what a renderer shows for a session
//!
//! Pacing is not the machine's concern: the external animation decides when a
//! repetition has elapsed (see [`driver::CycleSignal`]).
//!
//! # Example
//!
//! ```rust
//! use breathwork::core::{Event, Phase, Session};
//! use breathwork::machine::SessionMachine;
//! use breathwork::presentation::{ActionButton, Presentation};
//!
//! let machine = SessionMachine::default();
//! assert_eq!(machine.current_state().phase(), Phase::Finished);
//!
//! machine.submit(Event::ToggleRun);
//! assert_eq!(machine.current_state(), Session::breathing(5, 1).unwrap());
//!
//! let view = Presentation::from(&machine.current_state());
//! assert_eq!(view.action, ActionButton::Pause);
//! ```

pub mod builder;
pub mod core;
pub mod driver;
pub mod machine;
pub mod presentation;

// Re-export commonly used types
pub use builder::{BuildError, SessionMachineBuilder};
pub use self::core::{Event, Phase, Session, State};
pub use machine::{SessionMachine, SubscriptionId};
