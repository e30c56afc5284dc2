//! Pomodoro phases and the per-phase rows of the transition table.

use crate::timing::{IDLE_TIMEOUT_SECS, LONG_BREAK_SECS, PREPARE_SECS, SHORT_BREAK_SECS, WORK_SECS};

/// One state of the Pomodoro cycle.
///
/// Exactly one phase is active at a time. The discriminants are stable so a
/// phase can be stored as a byte and restored with [`Phase::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Phase {
    /// Powered down. Left unconditionally on the next tick.
    #[default]
    Off = 0,

    /// Waiting for the user to start working. Red LED blinks.
    TimeToWork = 1,

    /// Working. Red LED on.
    Work = 2,

    /// Last minutes of work; a press starts the break early.
    PrepareBreak = 3,

    /// Waiting for the user to start the break. Green LED blinks.
    TimeToBreak = 4,

    /// Short break. Green LED on.
    ShortBreak = 5,

    /// Long break, chosen by pressing during a short break. Green LED on.
    LongBreak = 6,

    /// Last minutes of the break; a press resumes work early.
    PrepareWork = 7,
}

impl Phase {
    /// All phases in discriminant order.
    pub const ALL: [Phase; 8] = [
        Phase::Off,
        Phase::TimeToWork,
        Phase::Work,
        Phase::PrepareBreak,
        Phase::TimeToBreak,
        Phase::ShortBreak,
        Phase::LongBreak,
        Phase::PrepareWork,
    ];

    /// Phase entered when the button is pressed, or `None` if a press is
    /// consumed without effect.
    pub const fn on_button(self) -> Option<Phase> {
        match self {
            Phase::Off => None,
            Phase::TimeToWork => Some(Phase::Work),
            Phase::Work => None,
            Phase::PrepareBreak => Some(Phase::ShortBreak),
            Phase::TimeToBreak => Some(Phase::ShortBreak),
            Phase::ShortBreak => Some(Phase::LongBreak),
            Phase::LongBreak => None,
            Phase::PrepareWork => Some(Phase::Work),
        }
    }

    /// Elapsed-seconds limit of this phase.
    ///
    /// The phase times out once its elapsed seconds strictly exceed this
    /// value. `Off` returns `None`: it is left on the next tick regardless.
    pub const fn timeout_after(self) -> Option<u32> {
        match self {
            Phase::Off => None,
            Phase::TimeToWork => Some(IDLE_TIMEOUT_SECS),
            Phase::Work => Some(WORK_SECS - PREPARE_SECS),
            Phase::PrepareBreak => Some(PREPARE_SECS),
            Phase::TimeToBreak => Some(IDLE_TIMEOUT_SECS),
            Phase::ShortBreak => Some(SHORT_BREAK_SECS - PREPARE_SECS),
            Phase::LongBreak => Some(LONG_BREAK_SECS - PREPARE_SECS),
            Phase::PrepareWork => Some(PREPARE_SECS),
        }
    }

    /// Phase entered when this phase times out.
    pub const fn on_timeout(self) -> Phase {
        match self {
            Phase::Off => Phase::TimeToWork,
            Phase::TimeToWork => Phase::Off,
            Phase::Work => Phase::PrepareBreak,
            Phase::PrepareBreak => Phase::TimeToBreak,
            Phase::TimeToBreak => Phase::Off,
            Phase::ShortBreak => Phase::PrepareWork,
            Phase::LongBreak => Phase::PrepareWork,
            Phase::PrepareWork => Phase::TimeToWork,
        }
    }

    /// Returns true if this phase has timed out after `elapsed_seconds`.
    #[inline]
    pub const fn is_expired(self, elapsed_seconds: u32) -> bool {
        match self.timeout_after() {
            Some(limit) => elapsed_seconds > limit,
            None => true,
        }
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase as u8
    }
}

impl TryFrom<u8> for Phase {
    type Error = PhaseError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Phase::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(PhaseError::Unknown(raw))
    }
}

/// Phase decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseError {
    /// Raw value does not name any phase.
    Unknown(u8),
}

impl core::fmt::Display for PhaseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PhaseError::Unknown(raw) => write!(f, "unknown phase discriminant {}", raw),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PhaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_round_trip() {
        for phase in Phase::ALL {
            assert_eq!(Phase::try_from(u8::from(phase)), Ok(phase));
        }
    }

    #[test]
    fn out_of_range_discriminant_is_rejected() {
        assert_eq!(Phase::try_from(8u8), Err(PhaseError::Unknown(8)));
        assert_eq!(Phase::try_from(0xFFu8), Err(PhaseError::Unknown(0xFF)));
    }

    #[test]
    fn off_always_expires() {
        assert!(Phase::Off.is_expired(0));
        assert_eq!(Phase::Off.on_timeout(), Phase::TimeToWork);
    }

    #[test]
    fn timeout_is_strictly_greater_than_limit() {
        assert!(!Phase::PrepareBreak.is_expired(120));
        assert!(Phase::PrepareBreak.is_expired(121));
        assert!(!Phase::Work.is_expired(1380));
        assert!(Phase::Work.is_expired(1381));
    }

    #[test]
    fn work_and_long_break_ignore_button() {
        assert_eq!(Phase::Work.on_button(), None);
        assert_eq!(Phase::LongBreak.on_button(), None);
        assert_eq!(Phase::Off.on_button(), None);
    }
}
