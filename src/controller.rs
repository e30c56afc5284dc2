//! Phase controller: the Pomodoro state machine.
//!
//! Provides the pure [`transition`] function and [`Controller`], which owns
//! the state and runs one full tick: advance the clock, evaluate the
//! transition table, then render the indicator output for the resulting
//! phase.

use crate::event::PendingFlag;
use crate::indicator::{Indication, render};
use crate::phase::Phase;
use crate::timing::TickClock;

/// Complete controller state between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct State {
    /// Active phase.
    pub phase: Phase,

    /// Tick phase and elapsed seconds.
    pub clock: TickClock,
}

impl State {
    /// Cold-start state: `Off`, tick phase 0, no elapsed time.
    pub const fn new() -> Self {
        Self {
            phase: Phase::Off,
            clock: TickClock::new(),
        }
    }

    /// State at an arbitrary point of a phase.
    pub const fn at(phase: Phase, tick_phase: u8, elapsed_seconds: u32) -> Self {
        Self {
            phase,
            clock: TickClock::from_parts(tick_phase, elapsed_seconds),
        }
    }

    /// Seconds since the current phase began.
    pub const fn elapsed_seconds(&self) -> u32 {
        self.clock.elapsed_seconds()
    }

    /// Position within the current second.
    pub const fn tick_phase(&self) -> u8 {
        self.clock.tick_phase()
    }
}

/// Inputs consumed by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Events {
    /// A button press occurred since the previous tick.
    pub button_pressed: bool,
}

impl Events {
    /// No events.
    pub const NONE: Events = Events {
        button_pressed: false,
    };

    /// A single button press.
    pub const PRESS: Events = Events {
        button_pressed: true,
    };
}

/// Applies one tick to `state`.
///
/// Advances the clock, then evaluates the current phase's row of the
/// transition table: a button press with an effect wins, otherwise the
/// timeout is checked. At most one phase change happens per call, and
/// elapsed seconds are reset exactly when the phase changes.
pub fn transition(mut state: State, events: Events) -> State {
    state.clock.advance();

    let current = state.phase;
    let next = match current.on_button() {
        Some(next) if events.button_pressed => next,
        _ if current.is_expired(state.clock.elapsed_seconds()) => current.on_timeout(),
        _ => current,
    };

    if next != current {
        state.phase = next;
        state.clock.restart_phase();
    }

    state
}

#[inline]
fn log_phase_change(_from: Phase, _to: Phase) {
    #[cfg(feature = "defmt")]
    defmt::debug!("phase {} -> {}", _from, _to);
}

/// Owns the Pomodoro state and runs the per-tick pipeline.
///
/// The button interrupt only ever touches the [`PendingFlag`]; the phase and
/// clock are mutated exclusively through [`tick`](Self::tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controller {
    state: State,
}

impl Controller {
    /// Creates a controller in the cold-start state.
    pub const fn new() -> Self {
        Self {
            state: State::new(),
        }
    }

    /// Creates a controller resuming from `state`.
    pub const fn from_state(state: State) -> Self {
        Self { state }
    }

    /// Runs one tick.
    ///
    /// Consumes the pending button press (the flag is always clear
    /// afterwards), applies [`transition`], and returns the indicator output
    /// for the resulting phase.
    pub fn tick(&mut self, button: &PendingFlag) -> Indication {
        let events = Events {
            button_pressed: button.take(),
        };
        self.step(events)
    }

    /// Runs one tick with explicit events.
    pub fn step(&mut self, events: Events) -> Indication {
        let previous = self.state.phase;
        self.state = transition(self.state, events);

        if previous != self.state.phase {
            log_phase_change(previous, self.state.phase);
        }

        render(&self.state)
    }

    /// Returns the full state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the active phase.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Seconds since the active phase began.
    pub fn elapsed_seconds(&self) -> u32 {
        self.state.elapsed_seconds()
    }

    /// Position within the current second.
    pub fn tick_phase(&self) -> u8 {
        self.state.tick_phase()
    }

    /// Seconds left before the active phase times out on its own.
    ///
    /// Returns 0 for `Off`, which is left on the next tick.
    pub fn remaining_seconds(&self) -> u32 {
        match self.state.phase.timeout_after() {
            Some(limit) => (limit + 1).saturating_sub(self.state.elapsed_seconds()),
            None => 0,
        }
    }

    /// Output for the current state without advancing time.
    pub fn indication(&self) -> Indication {
        render(&self.state)
    }
}
