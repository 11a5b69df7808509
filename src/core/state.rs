//! Core State trait for session states.
//!
//! Both the bare [`Phase`](super::Phase) and the full
//! [`Session`](super::Session) implement this trait, which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are immutable values that
/// get replaced on every transition.
///
/// # Required Traits
///
/// - `Clone`: snapshots are handed to observers
/// - `PartialEq`: states must be comparable for transition logic
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states cross the host boundary as plain records
///
/// # Example
///
/// ```rust
/// use breathwork::core::{Phase, State};
///
/// assert_eq!(Phase::Paused.name(), "Paused");
/// assert!(Phase::Finished.is_final());
/// assert!(!Phase::Breathing.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// A final session only leaves its state through a restart.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
