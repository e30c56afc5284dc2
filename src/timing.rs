//! Interval constants, the tick clock, and tick timer calculations.

/// Tick source frequency in Hz.
pub const TICK_HZ: u32 = 10;

/// Length of a work interval in seconds.
pub const WORK_SECS: u32 = 25 * 60;

/// Length of the "prepare" window that closes every work or break interval.
pub const PREPARE_SECS: u32 = 2 * 60;

/// Length of a short break in seconds.
pub const SHORT_BREAK_SECS: u32 = 5 * 60;

/// Length of a long break in seconds.
pub const LONG_BREAK_SECS: u32 = 15 * 60;

/// How long an unacknowledged prompt waits before powering down.
pub const IDLE_TIMEOUT_SECS: u32 = 5 * 60;

/// Sub-second tick counter and elapsed-seconds counter.
///
/// The tick phase cycles `0..TICK_HZ` and is never reset. Elapsed seconds
/// advance whenever the tick phase wraps and are reset by the controller
/// on each phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickClock {
    tick_phase: u8,
    elapsed_seconds: u32,
}

impl TickClock {
    /// Clock at tick phase 0 and zero elapsed seconds.
    pub const fn new() -> Self {
        Self {
            tick_phase: 0,
            elapsed_seconds: 0,
        }
    }

    /// Builds a clock from raw counters. The tick phase is wrapped into
    /// `0..TICK_HZ`.
    pub const fn from_parts(tick_phase: u8, elapsed_seconds: u32) -> Self {
        Self {
            tick_phase: (tick_phase as u32 % TICK_HZ) as u8,
            elapsed_seconds,
        }
    }

    /// Advances by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.tick_phase += 1;
        if u32::from(self.tick_phase) == TICK_HZ {
            self.tick_phase = 0;
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
    }

    /// Resets elapsed seconds. The tick phase keeps running.
    #[inline]
    pub fn restart_phase(&mut self) {
        self.elapsed_seconds = 0;
    }

    /// Position within the current second, `0..TICK_HZ`.
    pub const fn tick_phase(&self) -> u8 {
        self.tick_phase
    }

    /// Whole seconds since the current phase began.
    pub const fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }
}

/// Tick timer configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Prescaler or tick frequency is zero.
    ZeroFrequency,

    /// The prescaled clock is not a whole multiple of the tick frequency.
    NotDivisible {
        /// Timer input frequency after the prescaler.
        timer_hz: u32,
        /// Requested tick frequency.
        tick_hz: u32,
    },

    /// The period does not fit the timer's compare register.
    ReloadOutOfRange {
        /// Required period in timer counts.
        period: u32,
        /// Largest compare value the timer accepts.
        max: u32,
    },
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::ZeroFrequency => write!(f, "prescaler and tick frequency must be non-zero"),
            TimingError::NotDivisible { timer_hz, tick_hz } => {
                write!(f, "timer clock {} Hz is not a multiple of {} Hz", timer_hz, tick_hz)
            }
            TimingError::ReloadOutOfRange { period, max } => {
                write!(f, "period of {} counts exceeds maximum reload {}", period, max)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}

/// Computes the compare/reload value of an up-counting timer that fires at
/// `tick_hz`.
///
/// The counter runs `0..=reload`, so the value is one less than the period:
/// a 1 MHz clock divided by 8 gives 12 500 counts per 100 ms and a reload of
/// 12 499. The clock must divide exactly so elapsed seconds do not drift.
///
/// `max_reload` is the largest value the compare register holds
/// (`0xFFFF` for a 16-bit timer, `0x00FF_FFFF` for SysTick).
pub const fn timer_reload(
    clock_hz: u32,
    prescaler: u32,
    tick_hz: u32,
    max_reload: u32,
) -> Result<u32, TimingError> {
    if prescaler == 0 || tick_hz == 0 {
        return Err(TimingError::ZeroFrequency);
    }

    let timer_hz = clock_hz / prescaler;
    if timer_hz == 0 || clock_hz % prescaler != 0 || timer_hz % tick_hz != 0 {
        return Err(TimingError::NotDivisible { timer_hz, tick_hz });
    }

    let period = timer_hz / tick_hz;
    if period == 0 || period - 1 > max_reload {
        return Err(TimingError::ReloadOutOfRange {
            period,
            max: max_reload,
        });
    }

    Ok(period - 1)
}
