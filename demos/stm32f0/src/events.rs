use pomodoro_fsm::PendingFlag;

/// Raised by the SysTick handler every 100 ms
///
/// Ticks that arrive while the previous one is still pending coalesce,
/// which is how an overrunning tick gets skipped.
pub static TICK: PendingFlag = PendingFlag::new();

/// Raised by the EXTI handler on a button press edge
pub static BUTTON: PendingFlag = PendingFlag::new();

/// Call from the SysTick exception handler.
pub fn on_tick() {
    TICK.raise();
}

/// Call from the button's EXTI interrupt handler.
pub fn on_button() {
    BUTTON.raise();
}
