//! Software button debouncer for boards without hardware debouncing.
//!
//! The controller expects at most one press notification per physical
//! press. Boards whose button bounces can poll the pin through a
//! [`Debouncer`] and raise the pending flag only when it reports a press.

/// Stable-level debouncer.
///
/// Every change of the raw level restarts the settle timer. The debounced
/// level follows the raw level only after it has held for `debounce_ms`,
/// and a press is reported on the debounced transition to "down".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    stable: bool,
    raw: bool,
    changed_at_ms: u32,
    debounce_ms: u32,
}

impl Debouncer {
    /// Creates a debouncer with the button released.
    ///
    /// # Arguments
    /// * `debounce_ms` - Time the level must hold before it is accepted
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            stable: false,
            raw: false,
            changed_at_ms: 0,
            debounce_ms,
        }
    }

    /// Feeds one sample of the button level.
    ///
    /// # Arguments
    /// * `is_down` - True while the button is held
    /// * `now_ms` - Free-running millisecond counter (may wrap)
    ///
    /// # Returns
    /// `true` on the sample where a press is accepted
    pub fn update(&mut self, is_down: bool, now_ms: u32) -> bool {
        if is_down != self.raw {
            self.raw = is_down;
            self.changed_at_ms = now_ms;
        }

        if self.raw != self.stable
            && now_ms.wrapping_sub(self.changed_at_ms) >= self.debounce_ms
        {
            self.stable = self.raw;
            return self.stable;
        }

        false
    }

    /// Returns true while an accepted press is held.
    pub fn is_pressed(&self) -> bool {
        self.stable
    }
}
