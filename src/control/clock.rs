//! Monotonic tick counter.
//!
//! Wraps at `u32::MAX` (about 497 days at 10 ms per tick).  Durations are
//! computed with wrapping subtraction, which stays correct as long as the
//! two timestamps are less than one full wrap apart.

/// Tick timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SysClock(u32);

impl SysClock {
    /// Clock at a given raw tick count.
    pub const fn at(ticks: u32) -> Self {
        Self(ticks)
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Raw tick count.
    pub const fn ticks(self) -> u32 {
        self.0
    }

    /// Ticks elapsed since `earlier`, modulo the counter width.
    pub const fn ticks_since(self, earlier: SysClock) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}
