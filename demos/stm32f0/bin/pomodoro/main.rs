#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::{self, interrupt};

mod app_state;
mod hardware_setup;

use app_state::AppState;

/// SysTick interrupt handler - called every 100ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_demos::events::on_tick();
}

/// EXTI lines 4..15 - user button on PC13
#[interrupt]
fn EXTI4_15() {
    hardware_setup::clear_button_interrupt();
    stm32f0_demos::events::on_button();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Pomodoro Timer ===");
    rprintln!("Starting initialization...");

    // Initialize all hardware
    let hw = hardware_setup::init_hardware();
    rprintln!("Hardware initialized successfully");

    let mut app = AppState::new(hw);

    rprintln!("=== System Ready ===");
    rprintln!("Press the button to start working.");

    // Both interrupt sources are configured; let them through.
    unsafe {
        cortex_m::peripheral::NVIC::unmask(pac::Interrupt::EXTI4_15);
    }

    // Run the main application loop (never returns)
    app.run()
}
