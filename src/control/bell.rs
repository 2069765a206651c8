//! Non-blocking bell pulse.
//!
//! A strike energises the coil and arms a tick counter; the coil is
//! released by [`BellPulse::service`] once the counter runs out.  The tick
//! loop therefore never waits on the bell.

use crate::app::ports::OutputPort;

/// One-shot pulse generator for the bell coil.
#[derive(Debug, Clone)]
pub struct BellPulse {
    pulse_ticks: u16,
    /// Ticks until the coil is released; zero when idle.
    remaining: u16,
}

impl BellPulse {
    pub const fn new(pulse_ticks: u16) -> Self {
        Self {
            pulse_ticks,
            remaining: 0,
        }
    }

    /// Energise the coil and arm the release.  Re-triggering a running
    /// pulse restarts it.
    pub fn trigger(&mut self, out: &mut impl OutputPort) {
        out.bell_on();
        self.remaining = self.pulse_ticks;
    }

    /// Count down one tick of an active pulse and release the coil when it
    /// expires.  Must run before any new strike in the same tick.
    pub fn service(&mut self, out: &mut impl OutputPort) {
        if self.remaining == 0 {
            return;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            out.bell_off();
        }
    }

    pub fn is_energised(&self) -> bool {
        self.remaining > 0
    }
}
