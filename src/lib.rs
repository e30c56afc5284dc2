#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Phase`**: One state of the Pomodoro cycle and its row of the transition table
//! - **`TickClock`**: Sub-second tick phase plus seconds elapsed in the current phase
//! - **`PendingFlag`**: Single-bit latch set by the button interrupt, consumed by the tick
//! - **`transition`**: Pure state machine step, one call per tick
//! - **`Controller`**: Owns the state and runs the full tick pipeline
//! - **`render`**: Pure mapping from state to LED levels and sleep mode
//! - **`StatusLeds`**: Trait to implement for your red/green LED hardware
//! - **`IndicatorDriver`**: Applies rendered output to a `StatusLeds`, writing only on change
//! - **`Debouncer`**: Optional software debouncer for bouncing buttons
//!
//! Interval lengths and the tick rate are compile-time constants in [`timing`].

pub mod phase;
pub mod timing;
pub mod event;
pub mod controller;
pub mod indicator;
pub mod debounce;

pub use phase::{Phase, PhaseError};
pub use timing::{TICK_HZ, TickClock, TimingError, timer_reload};
pub use event::PendingFlag;
pub use controller::{Controller, Events, State, transition};
pub use indicator::{Indication, IndicatorDriver, PowerMode, StatusLeds, render};
pub use debounce::Debouncer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_start_is_off_and_dark() {
        let controller = Controller::new();
        assert_eq!(controller.phase(), Phase::Off);
        assert_eq!(controller.indication(), Indication::OFF);
    }
}
