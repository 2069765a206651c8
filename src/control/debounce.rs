//! Run-length debounce filter.
//!
//! The raw button level must hold one value for `D` consecutive ticks
//! before it is trusted.  Contact bounce and half-cycle mains noise reset
//! the run and never reach the threshold.
//!
//! ```text
//!  raw     ‾‾|_|‾|__|‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾
//!  run      1 0 0 0 0 1 2 3 ... D  D  D
//!  stable  ‾‾‾|______________|‾‾‾‾‾‾‾‾‾   (event latched at run == D)
//! ```
//!
//! Every time the input re-stabilises an event is latched, even if it
//! settles on the value it had before the disturbance.

use log::trace;

use super::clock::SysClock;

/// Direction of a validated input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// Snapshot of the filter's bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceState {
    /// Most recent raw sample.
    pub last_raw_sample: bool,
    /// Consecutive ticks `last_raw_sample` has held, saturating at `D`.
    pub run_length: u16,
    /// True once the current run has reached `D`.
    pub is_stable: bool,
    /// When the input last became stable, or when the last stable period
    /// was broken by a change.
    pub stable_since: SysClock,
    /// A stability transition waiting to be consumed.
    pub event_pending: bool,
}

/// Debounce filter for one digital input.
#[derive(Debug, Clone)]
pub struct Debouncer {
    threshold: u16,
    state: DebounceState,
    /// Value the input held when it last became stable.
    level: bool,
}

impl Debouncer {
    /// Create a filter that trusts a level after `threshold` ticks.
    pub const fn new(threshold: u16) -> Self {
        Self {
            threshold,
            state: DebounceState {
                last_raw_sample: false,
                run_length: 0,
                is_stable: false,
                stable_since: SysClock::at(0),
                event_pending: false,
            },
            level: false,
        }
    }

    /// Feed one raw sample (`true` = pressed) taken at `now`.
    pub fn sample(&mut self, raw: bool, now: SysClock) {
        let s = &mut self.state;

        if raw != s.last_raw_sample {
            s.last_raw_sample = raw;
            s.run_length = 0;

            if s.is_stable {
                s.is_stable = false;
                s.stable_since = now;
            }
        }

        if s.run_length < self.threshold {
            s.run_length += 1;

            if s.run_length == self.threshold && !s.is_stable {
                s.is_stable = true;
                s.stable_since = now;
                s.event_pending = true;
                self.level = raw;
                trace!("debounce: stable {} at tick {}", raw, now.ticks());
            }
        }
    }

    /// Consume the pending stability event, if any.
    ///
    /// An event is only handed out while the input is stable; it is then
    /// cleared so each transition is observed exactly once.
    pub fn take_event(&mut self) -> Option<Edge> {
        if !(self.state.event_pending && self.state.is_stable) {
            return None;
        }
        self.state.event_pending = false;
        Some(if self.level { Edge::Pressed } else { Edge::Released })
    }

    /// The debounced logical level: the last value that was held for `D`
    /// ticks.  Unchanged while the input is bouncing.
    pub fn is_pressed(&self) -> bool {
        self.level
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }
}
