//! The session value owned by the state machine.
//!
//! A [`Session`] is a phase tag carrying a shared pair of repetition counters.
//! Sessions are immutable: every accepted event produces a new value and the
//! old one is dropped.

use super::phase::Phase;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Repetition target used when no initial session is supplied.
pub const DEFAULT_TOTAL: u32 = 5;

/// Smallest valid repetition number; a restart resets the counter to it.
pub const FIRST_REPETITION: u32 = 1;

/// A single reason a set of counters is not a valid session.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("total repetitions must be at least 1 (got {total})")]
    InvalidTotal { total: u32 },

    #[error("current repetition ({current}) exceeds total ({total})")]
    CurrentExceedsTotal { current: u32, total: u32 },
}

/// Rejected session construction, carrying every violation found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid session: {}", render_violations(.violations))]
pub struct InvalidSession {
    violations: Vec<SessionError>,
}

impl InvalidSession {
    pub fn violations(&self) -> &[SessionError] {
        &self.violations
    }
}

fn render_violations(violations: &[SessionError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Target and progress counters shared by every phase.
///
/// Fields are private so a value can only exist once validated:
/// `total >= 1` and `current <= total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Repetitions {
    total: u32,
    current: u32,
}

impl Repetitions {
    /// Validate and build a counter pair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use breathwork::core::Repetitions;
    ///
    /// let reps = Repetitions::new(4, 2).unwrap();
    /// assert_eq!(reps.total(), 4);
    /// assert_eq!(reps.current(), 2);
    ///
    /// let err = Repetitions::new(0, 3).unwrap_err();
    /// assert_eq!(err.violations().len(), 2);
    /// ```
    pub fn new(total: u32, current: u32) -> Result<Self, InvalidSession> {
        match Self::validate(total, current) {
            Validation::Success(reps) => Ok(reps),
            Validation::Failure(errors) => Err(InvalidSession {
                violations: errors.iter().copied().collect(),
            }),
        }
    }

    /// Check every counter rule, accumulating all violations.
    pub fn validate(total: u32, current: u32) -> Validation<Self, NonEmptyVec<SessionError>> {
        let total_check = if total < FIRST_REPETITION {
            Validation::fail(SessionError::InvalidTotal { total })
        } else {
            Validation::success(())
        };

        let current_check = if current > total {
            Validation::fail(SessionError::CurrentExceedsTotal { current, total })
        } else {
            Validation::success(())
        };

        Validation::all_vec(vec![total_check, current_check]).map(|_| Self { total, current })
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// True once the counter has reached the target.
    pub fn is_last(&self) -> bool {
        self.current >= self.total
    }

    /// Count one more repetition. Callers check `is_last` first.
    pub(crate) fn advanced(self) -> Self {
        debug_assert!(!self.is_last());
        Self {
            current: self.current + 1,
            ..self
        }
    }

    pub(crate) fn restarted(self) -> Self {
        Self {
            current: FIRST_REPETITION,
            ..self
        }
    }
}

/// Current breathing-exercise state: a phase plus its counters.
///
/// Serialized as a flat record `{"phase": .., "total": .., "current": ..}`;
/// deserialization applies the same validation as the constructors.
///
/// # Example
///
/// ```rust
/// use breathwork::core::{Phase, Session, State};
///
/// let session = Session::breathing(5, 2).unwrap();
/// assert_eq!(session.phase(), Phase::Breathing);
/// assert_eq!(session.current(), 2);
/// assert!(!session.is_final());
///
/// assert_eq!(Session::default(), Session::finished(5, 5).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord", into = "SessionRecord")]
pub enum Session {
    Breathing(Repetitions),
    Paused(Repetitions),
    Finished(Repetitions),
}

impl Session {
    pub fn new(phase: Phase, total: u32, current: u32) -> Result<Self, InvalidSession> {
        Repetitions::new(total, current).map(|reps| Self::from_parts(phase, reps))
    }

    pub fn breathing(total: u32, current: u32) -> Result<Self, InvalidSession> {
        Self::new(Phase::Breathing, total, current)
    }

    pub fn paused(total: u32, current: u32) -> Result<Self, InvalidSession> {
        Self::new(Phase::Paused, total, current)
    }

    pub fn finished(total: u32, current: u32) -> Result<Self, InvalidSession> {
        Self::new(Phase::Finished, total, current)
    }

    pub fn from_parts(phase: Phase, reps: Repetitions) -> Self {
        match phase {
            Phase::Breathing => Self::Breathing(reps),
            Phase::Paused => Self::Paused(reps),
            Phase::Finished => Self::Finished(reps),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Self::Breathing(_) => Phase::Breathing,
            Self::Paused(_) => Phase::Paused,
            Self::Finished(_) => Phase::Finished,
        }
    }

    pub fn repetitions(&self) -> Repetitions {
        match self {
            Self::Breathing(reps) | Self::Paused(reps) | Self::Finished(reps) => *reps,
        }
    }

    pub fn total(&self) -> u32 {
        self.repetitions().total()
    }

    pub fn current(&self) -> u32 {
        self.repetitions().current()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::Finished(Repetitions {
            total: DEFAULT_TOTAL,
            current: DEFAULT_TOTAL,
        })
    }
}

impl State for Session {
    fn name(&self) -> &str {
        match self {
            Self::Breathing(_) => "Breathing",
            Self::Paused(_) => "Paused",
            Self::Finished(_) => "Finished",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.name(), self.current(), self.total())
    }
}

#[derive(Serialize, Deserialize)]
struct SessionRecord {
    phase: Phase,
    total: u32,
    current: u32,
}

impl TryFrom<SessionRecord> for Session {
    type Error = InvalidSession;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        Self::new(record.phase, record.total, record.current)
    }
}

impl From<Session> for SessionRecord {
    fn from(session: Session) -> Self {
        Self {
            phase: session.phase(),
            total: session.total(),
            current: session.current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_counters_build_every_phase() {
        for phase in [Phase::Breathing, Phase::Paused, Phase::Finished] {
            let session = Session::new(phase, 3, 2).unwrap();
            assert_eq!(session.phase(), phase);
            assert_eq!(session.total(), 3);
            assert_eq!(session.current(), 2);
        }
    }

    #[test]
    fn zero_total_is_rejected() {
        let err = Session::breathing(0, 0).unwrap_err();
        assert_eq!(err.violations(), &[SessionError::InvalidTotal { total: 0 }]);
    }

    #[test]
    fn current_above_total_is_rejected() {
        let err = Session::paused(2, 3).unwrap_err();
        assert_eq!(
            err.violations(),
            &[SessionError::CurrentExceedsTotal {
                current: 3,
                total: 2
            }]
        );
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let result = Repetitions::validate(0, 4);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, SessionError::InvalidTotal { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, SessionError::CurrentExceedsTotal { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn invalid_session_message_lists_every_violation() {
        let err = Session::finished(0, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid session: total repetitions must be at least 1 (got 0); \
             current repetition (1) exceeds total (0)"
        );
    }

    #[test]
    fn zero_current_is_allowed() {
        let session = Session::breathing(3, 0).unwrap();
        assert_eq!(session.current(), 0);
    }

    #[test]
    fn default_is_finished_with_five_repetitions() {
        let session = Session::default();
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.total(), DEFAULT_TOTAL);
        assert_eq!(session.current(), DEFAULT_TOTAL);
    }

    #[test]
    fn restart_and_advance_keep_total() {
        let reps = Repetitions::new(4, 2).unwrap();
        assert_eq!(reps.advanced(), Repetitions::new(4, 3).unwrap());
        assert_eq!(reps.restarted(), Repetitions::new(4, 1).unwrap());
    }

    #[test]
    fn is_last_tracks_target() {
        assert!(!Repetitions::new(3, 2).unwrap().is_last());
        assert!(Repetitions::new(3, 3).unwrap().is_last());
    }

    #[test]
    fn session_serializes_as_flat_record() {
        let session = Session::paused(5, 3).unwrap();
        let json = serde_json::to_value(session).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "phase": "Paused", "total": 5, "current": 3 })
        );

        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn deserialization_rejects_invalid_record() {
        let result: Result<Session, _> =
            serde_json::from_str(r#"{"phase":"Breathing","total":2,"current":7}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("exceeds total"));
    }

    #[test]
    fn display_shows_phase_and_counters() {
        let session = Session::breathing(5, 2).unwrap();
        assert_eq!(session.to_string(), "Breathing 2/5");
    }
}
