#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use pomodoro_fsm::{Controller, Debouncer, IndicatorDriver, PendingFlag, StatusLeds, timer_reload};

// ============================================================================
// Minimal LED Implementation
// ============================================================================

/// Zero-size LED pair for measuring library overhead
pub struct MinimalLeds;

impl StatusLeds for MinimalLeds {
    fn set_red(&mut self, on: bool) {
        core::hint::black_box(on);
    }

    fn set_green(&mut self, on: bool) {
        core::hint::black_box(on);
    }
}

static BUTTON: PendingFlag = PendingFlag::new();

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_library() {
    let mut controller = Controller::new();
    let mut driver = IndicatorDriver::new(MinimalLeds);
    let mut debouncer = Debouncer::new(20);

    let reload = timer_reload(core::hint::black_box(8_000_000), 1, 10, 0x00FF_FFFF);
    core::hint::black_box(reload);

    for now_ms in 0..1_000u32 {
        if debouncer.update(core::hint::black_box(now_ms % 300 < 50), now_ms) {
            BUTTON.raise();
        }
        if now_ms % 100 == 0 {
            let power = driver.apply(controller.tick(&BUTTON));
            core::hint::black_box(power);
        }
    }

    core::hint::black_box(controller.remaining_seconds());
    core::hint::black_box(driver);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_library();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
