use cortex_m::peripheral::{SCB, SYST};
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{gpioa, gpioc, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

use pomodoro_fsm::{timer_reload, TICK_HZ};
use stm32f0_demos::status_leds::GpioStatusLeds;

/// SysTick reload register width
const SYSTICK_MAX_RELOAD: u32 = 0x00FF_FFFF;

/// SYSCFG EXTICR port selector for GPIOC
const EXTICR_PORT_C: u8 = 0b0010;

/// Type alias for the LED pair (red on PA6, green LD2 on PA5)
pub type Leds = GpioStatusLeds<gpioa::PA6<Output<PushPull>>, gpioa::PA5<Output<PushPull>>>;

/// Button type (user button on PC13, hardware RC-debounced on the Nucleo)
pub type Button = gpioc::PC13<Input<PullUp>>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub leds: Leds,
    pub button: Button,
    pub syst: SYST,
    pub scb: SCB,
}

/// Initialize all hardware peripherals
///
/// This function handles all hardware initialization in one place:
/// - Peripheral clocks for SYSCFG and PWR
/// - System clock configuration
/// - SysTick timer setup (10 Hz interrupts)
/// - LED outputs
/// - Button falling-edge interrupt
/// - STOP mode configuration for deep sleep
///
/// # Returns
/// A `HardwareContext` containing all initialized peripherals ready for use
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    // SYSCFG routes PC13 to EXTI13, PWR selects the STOP regulator mode.
    dp.RCC.apb2enr.modify(|_, w| w.syscfgen().set_bit());
    dp.RCC.apb1enr.modify(|_, w| w.pwren().set_bit());

    // Configure system clock and SysTick
    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);
    configure_systick(&rcc, &mut cp.SYST);

    // Split GPIO ports
    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let leds = setup_leds(gpioa.pa6, gpioa.pa5);
    let button = setup_button(gpioc.pc13, &dp.SYSCFG, &dp.EXTI);
    configure_stop_mode(&dp.PWR);

    HardwareContext {
        leds,
        button,
        syst: cp.SYST,
        scb: cp.SCB,
    }
}

/// Configure the system clock
///
/// The default HSI configuration is kept: it is also the clock the core
/// wakes up with after STOP mode, so the tick rate stays the same.
fn configure_clock(flash: &mut pac::FLASH, rcc: pac::RCC) -> stm32f0xx_hal::rcc::Rcc {
    let rcc = rcc.configure().freeze(flash);

    let sysclk_freq = rcc.clocks.sysclk();
    rprintln!("System clock configured: {} Hz", sysclk_freq.0);

    rcc
}

/// Configure SysTick timer for 10 Hz interrupts
fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    let reload = match timer_reload(sysclk_freq.0, 1, TICK_HZ, SYSTICK_MAX_RELOAD) {
        Ok(reload) => reload,
        Err(e) => panic!("cannot derive tick rate: {}", e),
    };

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for {} Hz (reload {})", TICK_HZ, reload);
}

/// Configure both LEDs as push-pull outputs, initially off
fn setup_leds(
    pa6: gpioa::PA6<Input<stm32f0xx_hal::gpio::Floating>>,
    pa5: gpioa::PA5<Input<stm32f0xx_hal::gpio::Floating>>,
) -> Leds {
    let (red, green) = cortex_m::interrupt::free(|cs| {
        (pa6.into_push_pull_output(cs), pa5.into_push_pull_output(cs))
    });

    rprintln!("LEDs configured on PA6 (red) and PA5 (green)");
    GpioStatusLeds::new(red, green, false)
}

/// Configure user button (PC13) with pull-up and a falling-edge interrupt
fn setup_button(
    pc13: gpioc::PC13<Input<stm32f0xx_hal::gpio::Floating>>,
    syscfg: &pac::SYSCFG,
    exti: &pac::EXTI,
) -> Button {
    let button = cortex_m::interrupt::free(|cs| pc13.into_pull_up_input(cs));

    syscfg
        .exticr4
        .modify(|_, w| unsafe { w.exti13().bits(EXTICR_PORT_C) });
    exti.ftsr.modify(|_, w| w.tr13().set_bit());
    exti.rtsr.modify(|_, w| w.tr13().clear_bit());
    // Avoid an immediate interrupt from a stale edge.
    exti.pr.write(|w| w.pr13().set_bit());
    exti.imr.modify(|_, w| w.mr13().set_bit());

    rprintln!("Button configured on PC13 (EXTI13, falling edge)");
    button
}

/// Select the low-power regulator for STOP mode
fn configure_stop_mode(pwr: &pac::PWR) {
    pwr.cr.modify(|_, w| w.pdds().clear_bit().lpds().set_bit());
    rprintln!("STOP mode configured (low-power regulator)");
}

/// Acknowledge the button interrupt. Called from the EXTI handler.
pub fn clear_button_interrupt() {
    // SAFETY: single write to a write-1-to-clear bit owned by this handler.
    let exti = unsafe { &*pac::EXTI::ptr() };
    exti.pr.write(|w| w.pr13().set_bit());
}
