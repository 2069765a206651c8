//! Leaky-bucket ring budget.
//!
//! Credit drains by one per tick while the debounced button is held and
//! refills by one per tick while it is released, clamped to
//! `[0, capacity]`.  It tracks cumulative recent activity rather than
//! individual presses, so rapid repeated presses spend the budget just
//! as a single long hold does.

/// Bounded ring-credit counter.
#[derive(Debug, Clone)]
pub struct LeakyBucket {
    credit: u16,
    capacity: u16,
}

impl LeakyBucket {
    /// Empty bucket; it fills while the button stays idle.
    pub const fn new(capacity: u16) -> Self {
        Self {
            credit: 0,
            capacity,
        }
    }

    /// Apply one tick of drain (`is_active`) or refill.
    pub fn update(&mut self, is_active: bool) {
        if is_active {
            self.credit = self.credit.saturating_sub(1);
        } else if self.credit < self.capacity {
            self.credit += 1;
        }
    }

    pub fn credit(&self) -> u16 {
        self.credit
    }

    pub fn capacity(&self) -> u16 {
        self.capacity
    }

    pub fn is_exhausted(&self) -> bool {
        self.credit == 0
    }
}
