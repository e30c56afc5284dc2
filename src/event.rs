//! Single-bit event latch shared between an interrupt and the tick handler.

use core::sync::atomic::{AtomicBool, Ordering};

/// A pending-event flag with one producer and one consumer.
///
/// The producer (a button or timer interrupt) calls [`raise`](Self::raise);
/// the consumer calls [`take`](Self::take) exactly once per evaluation.
/// Events raised between two takes coalesce into one.
///
/// `take` uses a load followed by a conditional store rather than a swap, so
/// the flag works on cores without compare-and-swap (e.g. Cortex-M0).
#[derive(Debug)]
pub struct PendingFlag {
    pending: AtomicBool,
}

impl PendingFlag {
    /// Creates a cleared flag. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Marks the event as pending.
    #[inline]
    pub fn raise(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Returns whether an event is pending and clears the flag.
    #[inline]
    pub fn take(&self) -> bool {
        if self.pending.load(Ordering::Acquire) {
            self.pending.store(false, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Returns whether an event is pending without clearing it.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Runs `sleep` inside a critical section unless the event is pending.
    ///
    /// Checking the flag and entering sleep must not be separated by an
    /// interrupt, or an event raised in between is only seen after the next
    /// wake-up. With interrupts masked, `wfi` still returns as soon as an
    /// interrupt becomes pending, and the handler runs once the section ends.
    ///
    /// Returns `true` if `sleep` ran.
    pub fn sleep_unless_pending<F: FnOnce()>(&self, sleep: F) -> bool {
        critical_section::with(|_| {
            if self.is_pending() {
                false
            } else {
                sleep();
                true
            }
        })
    }
}

impl Default for PendingFlag {
    fn default() -> Self {
        Self::new()
    }
}
