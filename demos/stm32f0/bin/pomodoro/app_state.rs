use cortex_m::peripheral::{SCB, SYST};
use rtt_target::rprintln;

use pomodoro_fsm::{Controller, IndicatorDriver, Phase, PowerMode};
use stm32f0_demos::events::{BUTTON, TICK};

use crate::hardware_setup::{Button, HardwareContext, Leds};

/// Application state containing all runtime data
pub struct AppState {
    controller: Controller,
    driver: IndicatorDriver<Leds>,
    // Held so the pin stays configured as a pulled-up input.
    _button: Button,
    syst: SYST,
    scb: SCB,
    last_phase: Phase,
}

impl AppState {
    /// Initialize the application with hardware in the cold-start state
    pub fn new(hw: HardwareContext) -> Self {
        let controller = Controller::new();
        let last_phase = controller.phase();

        rprintln!("Initial phase: {:?}", last_phase);

        Self {
            controller,
            driver: IndicatorDriver::new(hw.leds),
            _button: hw.button,
            syst: hw.syst,
            scb: hw.scb,
            last_phase,
        }
    }

    /// Run one tick of the state machine and update the LEDs
    fn service_tick(&mut self) -> PowerMode {
        let indication = self.controller.tick(&BUTTON);
        let power = self.driver.apply(indication);

        let phase = self.controller.phase();
        if phase != self.last_phase {
            rprintln!(
                "{:?} -> {:?} ({} s until timeout)",
                self.last_phase,
                phase,
                self.controller.remaining_seconds()
            );
            self.last_phase = phase;
        }

        power
    }

    /// Enter STOP mode until the button wakes the core
    ///
    /// SysTick is halted so no tick fires while the timer is off. A press
    /// that landed after the tick entering `Off` skips STOP entirely.
    fn stop_until_button(&mut self) {
        rprintln!("Powering down, press the button to wake");

        self.syst.disable_counter();
        self.scb.set_sleepdeep();

        let slept = BUTTON.sleep_unless_pending(|| {
            cortex_m::asm::dsb();
            cortex_m::asm::wfi();
        });

        self.scb.clear_sleepdeep();
        self.syst.clear_current();
        self.syst.enable_counter();

        if slept {
            // Output latches are rewritten in full after STOP.
            self.driver.invalidate();
            rprintln!("Woken by button");
        } else {
            rprintln!("Press already pending, staying awake");
        }
    }

    /// Run the main application loop
    pub fn run(&mut self) -> ! {
        loop {
            if TICK.take() {
                if self.service_tick() == PowerMode::WakeOnButton {
                    self.stop_until_button();
                    continue;
                }
            }

            // Light sleep: SysTick or the button wakes us
            cortex_m::asm::wfi();
        }
    }
}
