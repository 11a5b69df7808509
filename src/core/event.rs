//! Events accepted by the session state machine.

use serde::{Deserialize, Serialize};

/// Input to the transition function.
///
/// Every phase accepts both kinds; some combinations are explicit no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// The single action button was pressed: pause, resume or restart
    /// depending on the current phase.
    ToggleRun,
    /// The animation driver finished one visual inhale/exhale cycle.
    RepetitionElapsed,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleRun => "ToggleRun",
            Self::RepetitionElapsed => "RepetitionElapsed",
        }
    }
}
