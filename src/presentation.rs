//! What a renderer shows for a given session.
//!
//! The action button is overloaded: whether it pauses, resumes or restarts
//! depends on the phase. Deriving the label, icon and animation cue here keeps
//! renderers from branching on the phase themselves.

use crate::core::Session;
use serde::Serialize;
use std::fmt;

/// Progress at which a cycle turns from inhaling to exhaling.
pub const EXHALE_FROM: f32 = 0.5;

/// Headline text above the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RepetitionText {
    Count(u32),
    Complete,
}

impl fmt::Display for RepetitionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Complete => f.write_str("Session complete"),
        }
    }
}

/// How the animation driver should treat its cycle for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AnimationCue {
    /// Run one cycle from progress 0; each new breathing session restarts it.
    PlayFromStart,
    /// Rewind to the first frame and wait.
    HoldAtStart,
    /// Rewind to the first frame; the session is over.
    ResetToStart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Icon {
    Pause,
    Play,
    Restart,
}

/// The single action button, named by what pressing it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ActionButton {
    Pause,
    Resume,
    Restart,
}

impl ActionButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::Resume => "Resume",
            Self::Restart => "Restart",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Self::Pause => Icon::Pause,
            Self::Resume => Icon::Play,
            Self::Restart => Icon::Restart,
        }
    }
}

/// Everything a screen needs to render one session snapshot.
///
/// # Example
///
/// ```rust
/// use breathwork::core::Session;
/// use breathwork::presentation::{ActionButton, AnimationCue, Presentation};
///
/// let view = Presentation::from(&Session::paused(5, 3).unwrap());
/// assert_eq!(view.repetition.to_string(), "3");
/// assert_eq!(view.animation, AnimationCue::HoldAtStart);
/// assert_eq!(view.action, ActionButton::Resume);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub repetition: RepetitionText,
    pub animation: AnimationCue,
    pub action: ActionButton,
}

impl From<&Session> for Presentation {
    fn from(session: &Session) -> Self {
        match session {
            Session::Breathing(reps) => Self {
                repetition: RepetitionText::Count(reps.current()),
                animation: AnimationCue::PlayFromStart,
                action: ActionButton::Pause,
            },
            Session::Paused(reps) => Self {
                repetition: RepetitionText::Count(reps.current()),
                animation: AnimationCue::HoldAtStart,
                action: ActionButton::Resume,
            },
            Session::Finished(_) => Self {
                repetition: RepetitionText::Complete,
                animation: AnimationCue::ResetToStart,
                action: ActionButton::Restart,
            },
        }
    }
}

/// Prompt shown inside the animation during a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BreathCue {
    Inhale,
    Exhale,
}

impl BreathCue {
    /// Cue for a cycle at `progress` (clamped to `[0, 1]`, NaN reads as 0).
    pub fn at(progress: f32) -> Self {
        if clamp_progress(progress) < EXHALE_FROM {
            Self::Inhale
        } else {
            Self::Exhale
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inhale => "Inhale",
            Self::Exhale => "Exhale",
        }
    }

    /// Text scale: grows while inhaling, shrinks back while exhaling.
    pub fn scale(progress: f32) -> f32 {
        let p = clamp_progress(progress);
        match Self::at(p) {
            Self::Inhale => 1.0 + p,
            Self::Exhale => 1.0 + (1.0 - p),
        }
    }
}

pub(crate) fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}
