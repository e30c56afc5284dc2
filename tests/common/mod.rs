//! Shared test infrastructure for pomodoro-fsm integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use pomodoro_fsm::{Controller, Events, Indication, PendingFlag, Phase, StatusLeds, TICK_HZ};

// ============================================================================
// Mock LEDs
// ============================================================================

/// Which LED a write targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
}

/// Mock LED pair that records every write for testing
pub struct MockLeds {
    pub red: bool,
    pub green: bool,
    writes: heapless::Vec<(Channel, bool), 64>,
}

impl MockLeds {
    pub fn new() -> Self {
        Self {
            red: false,
            green: false,
            writes: heapless::Vec::new(),
        }
    }

    pub fn writes(&self) -> &[(Channel, bool)] {
        &self.writes
    }
}

impl StatusLeds for MockLeds {
    fn set_red(&mut self, on: bool) {
        self.red = on;
        let _ = self.writes.push((Channel::Red, on));
    }

    fn set_green(&mut self, on: bool) {
        self.green = on;
        let _ = self.writes.push((Channel::Green, on));
    }
}

// ============================================================================
// Tick helpers
// ============================================================================

/// Number of ticks in `seconds` of wall-clock time
pub const fn ticks(seconds: u32) -> u32 {
    seconds * TICK_HZ
}

/// Runs `count` ticks without button presses, returning the last indication
pub fn run_ticks(controller: &mut Controller, count: u32) -> Option<Indication> {
    let mut last = None;
    for _ in 0..count {
        last = Some(controller.step(Events::NONE));
    }
    last
}

/// Runs idle ticks until the phase differs from the current one.
///
/// Returns the number of ticks taken, or `None` if `limit` is reached first.
pub fn ticks_until_change(controller: &mut Controller, limit: u32) -> Option<u32> {
    let start = controller.phase();
    for n in 1..=limit {
        controller.step(Events::NONE);
        if controller.phase() != start {
            return Some(n);
        }
    }
    None
}

/// Presses the button and runs the tick that consumes it
pub fn press(controller: &mut Controller, button: &PendingFlag) -> Indication {
    button.raise();
    controller.tick(button)
}

/// Controller that has just entered `phase` at tick phase 0
pub fn controller_in(phase: Phase) -> Controller {
    Controller::from_state(pomodoro_fsm::State::at(phase, 0, 0))
}
