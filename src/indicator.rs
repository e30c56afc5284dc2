//! Indicator driver: maps controller state to the red/green LED pair and
//! the sleep mode requested until the next event.
//!
//! [`render`] is a pure function of the state. [`IndicatorDriver`] applies
//! its output to hardware through the [`StatusLeds`] trait.

use crate::controller::State;
use crate::phase::Phase;

/// Number of seconds in one slow-blink period of the prepare phases.
pub const SLOW_BLINK_SECS: u32 = 4;

/// Trait for abstracting the two status LEDs.
///
/// Implement this for your GPIO pins. Handle any hardware errors
/// internally; these methods cannot fail.
pub trait StatusLeds {
    /// Switches the red LED.
    fn set_red(&mut self, on: bool);

    /// Switches the green LED.
    fn set_green(&mut self, on: bool);
}

/// Sleep state to enter until the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// Light sleep: the tick timer keeps running and wakes the core.
    WakeOnTick,

    /// Deepest sleep: clocks halted, only a button edge wakes the core.
    WakeOnButton,
}

/// Output of one tick: LED levels plus the requested sleep mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indication {
    /// Red LED level.
    pub red: bool,

    /// Green LED level.
    pub green: bool,

    /// Sleep mode to enter after this tick.
    pub power: PowerMode,
}

impl Indication {
    /// Both LEDs off, deep sleep.
    pub const OFF: Indication = Indication {
        red: false,
        green: false,
        power: PowerMode::WakeOnButton,
    };

    const fn lit(red: bool, green: bool) -> Self {
        Self {
            red,
            green,
            power: PowerMode::WakeOnTick,
        }
    }
}

/// Computes the indicator output for `state`.
pub fn render(state: &State) -> Indication {
    let fast_blink = state.tick_phase() % 2 == 1;
    let slow_blink = state.elapsed_seconds() % SLOW_BLINK_SECS != 0;

    match state.phase {
        Phase::Off => Indication::OFF,
        Phase::TimeToWork => Indication::lit(fast_blink, false),
        Phase::Work => Indication::lit(true, false),
        Phase::PrepareBreak => Indication::lit(slow_blink, false),
        Phase::TimeToBreak => Indication::lit(false, fast_blink),
        Phase::ShortBreak | Phase::LongBreak => Indication::lit(false, true),
        Phase::PrepareWork => Indication::lit(false, slow_blink),
    }
}

/// Drives a [`StatusLeds`] implementation from successive [`Indication`]s.
///
/// Each channel is written only when its level changes, apart from the
/// first update which writes both.
pub struct IndicatorDriver<L: StatusLeds> {
    leds: L,
    current: Option<(bool, bool)>,
}

impl<L: StatusLeds> IndicatorDriver<L> {
    /// Creates a driver and switches both LEDs off.
    pub fn new(mut leds: L) -> Self {
        leds.set_red(false);
        leds.set_green(false);

        Self {
            leds,
            current: Some((false, false)),
        }
    }

    /// Applies `indication` to the LEDs and returns the sleep mode to enter.
    pub fn apply(&mut self, indication: Indication) -> PowerMode {
        let (red, green) = (indication.red, indication.green);

        match self.current {
            Some((current_red, current_green)) => {
                if red != current_red {
                    self.leds.set_red(red);
                }
                if green != current_green {
                    self.leds.set_green(green);
                }
            }
            None => {
                self.leds.set_red(red);
                self.leds.set_green(green);
            }
        }

        self.current = Some((red, green));
        indication.power
    }

    /// Forces both channels to be rewritten on the next [`apply`](Self::apply).
    ///
    /// Use after waking from a sleep mode that may have reset the GPIO
    /// output latches.
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    /// Returns the last applied LED levels as `(red, green)`.
    pub fn levels(&self) -> Option<(bool, bool)> {
        self.current
    }

    /// Returns a reference to the LEDs.
    pub fn leds(&self) -> &L {
        &self.leds
    }

    /// Consumes the driver and returns the LEDs.
    pub fn release(self) -> L {
        self.leds
    }
}
