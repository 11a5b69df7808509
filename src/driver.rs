//! Turns animation progress into repetition events.
//!
//! The animation runs outside the machine and reports progress samples in
//! `[0, 1]`. A cycle is complete when progress reaches 1.0; the signal fires
//! once per cycle and re-arms when the animation starts over.

use crate::core::Event;
use crate::presentation::clamp_progress;
use tracing::trace;

/// Edge detector for cycle completion.
///
/// # Example
///
/// ```rust
/// use breathwork::core::Event;
/// use breathwork::driver::CycleSignal;
///
/// let mut signal = CycleSignal::new();
/// assert_eq!(signal.observe(0.6), None);
/// assert_eq!(signal.observe(1.0), Some(Event::RepetitionElapsed));
/// assert_eq!(signal.observe(1.0), None);
/// assert_eq!(signal.observe(0.0), None);
/// assert_eq!(signal.observe(1.0), Some(Event::RepetitionElapsed));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleSignal {
    fired: bool,
}

impl CycleSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one progress sample.
    pub fn observe(&mut self, progress: f32) -> Option<Event> {
        let progress = clamp_progress(progress);
        if progress < 1.0 {
            self.fired = false;
            return None;
        }
        if self.fired {
            return None;
        }
        self.fired = true;
        trace!("animation cycle complete");
        Some(Event::RepetitionElapsed)
    }

    /// Re-arm without waiting for a sample below 1.0.
    pub fn reset(&mut self) {
        self.fired = false;
    }

    pub fn is_armed(&self) -> bool {
        !self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_cycle() {
        let mut signal = CycleSignal::new();
        let events: Vec<_> = [0.0, 0.5, 1.0, 1.0, 1.0]
            .into_iter()
            .filter_map(|p| signal.observe(p))
            .collect();

        assert_eq!(events, vec![Event::RepetitionElapsed]);
        assert!(!signal.is_armed());
    }

    #[test]
    fn rearms_when_animation_restarts() {
        let mut signal = CycleSignal::new();
        let events: Vec<_> = [0.2, 1.0, 0.0, 0.7, 1.0]
            .into_iter()
            .filter_map(|p| signal.observe(p))
            .collect();

        assert_eq!(events.len(), 2);
    }

    #[test]
    fn overshoot_counts_as_complete() {
        let mut signal = CycleSignal::new();
        assert_eq!(signal.observe(1.3), Some(Event::RepetitionElapsed));
    }

    #[test]
    fn nan_rearms() {
        let mut signal = CycleSignal::new();
        signal.observe(1.0);
        assert_eq!(signal.observe(f32::NAN), None);
        assert!(signal.is_armed());
    }

    #[test]
    fn reset_rearms_explicitly() {
        let mut signal = CycleSignal::new();
        signal.observe(1.0);
        signal.reset();
        assert_eq!(signal.observe(1.0), Some(Event::RepetitionElapsed));
    }
}
