//! The three mutually exclusive session phases.

crate::state_enum! {
    /// Mode of a breathing session, without its counters.
    #[derive(Copy, Eq, Hash)]
    pub enum Phase {
        /// The guided animation is running and repetitions are being counted.
        Breathing,
        /// The user paused mid-session; counters are frozen.
        Paused,
        /// Every repetition has elapsed. Only a restart leaves this phase.
        Finished,
    }
    final: [Finished]
}

