//! Builder for constructing session machines.

use crate::builder::error::BuildError;
use crate::core::{Phase, Session, DEFAULT_TOTAL, FIRST_REPETITION};
use crate::machine::SessionMachine;

/// Builder for the initial session of a [`SessionMachine`].
///
/// Defaults to a finished session of [`DEFAULT_TOTAL`] repetitions. When
/// `current` is not set it follows the phase: `total` for a finished session,
/// [`FIRST_REPETITION`] otherwise.
///
/// # Example
///
/// ```rust
/// use breathwork::builder::SessionMachineBuilder;
/// use breathwork::core::{Phase, Session};
///
/// let machine = SessionMachineBuilder::new()
///     .phase(Phase::Breathing)
///     .total(8)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), Session::breathing(8, 1).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct SessionMachineBuilder {
    phase: Phase,
    total: u32,
    current: Option<u32>,
}

impl SessionMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            phase: Phase::Finished,
            total: DEFAULT_TOTAL,
            current: None,
        }
    }

    /// Set the starting phase.
    pub fn phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Set the repetition target.
    pub fn total(mut self, total: u32) -> Self {
        self.total = total;
        self
    }

    /// Set the starting repetition explicitly.
    pub fn current(mut self, current: u32) -> Self {
        self.current = Some(current);
        self
    }

    /// Validate the configured counters without building a machine.
    pub fn session(&self) -> Result<Session, BuildError> {
        let current = self.current.unwrap_or(match self.phase {
            Phase::Finished => self.total,
            Phase::Breathing | Phase::Paused => FIRST_REPETITION,
        });
        Ok(Session::new(self.phase, self.total, current)?)
    }

    /// Build the session machine.
    /// Returns an error if the configured counters are not a valid session.
    pub fn build(self) -> Result<SessionMachine, BuildError> {
        let initial = self.session()?;
        Ok(SessionMachine::new(initial))
    }
}

impl Default for SessionMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
