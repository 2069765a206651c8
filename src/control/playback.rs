//! Playback sequencer: turns one validated press into a bounded pattern
//! of light toggles and bell strikes.
//!
//! ## States
//!
//! | State       | Condition                                 |
//! |-------------|-------------------------------------------|
//! | Idle        | `countdown == 0`                          |
//! | Playing     | `countdown > 0`                           |
//! | StopPending | Playing with `stop_requested` set         |
//!
//! ## Per tick
//!
//! 1. A pending press loads `countdown` with the current ring credit and
//!    restarts `countup`.  A pending release only requests a stop.
//! 2. A stop request is honoured once `countup` reaches the minimum
//!    playback length: exactly one more tick is scheduled.
//! 3. While playing, the light toggles when the *remaining* count is a
//!    multiple of the light period and the bell strikes when it is a
//!    multiple of the bell period.  The pattern phase is therefore
//!    anchored to the end of playback, not its start.
//! 4. When `countdown` reaches zero the light is forced off.

use log::debug;

use super::debounce::{Debouncer, Edge};
use crate::config::Timing;

/// Countdown/count-up pair of the current playback cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Ticks of playback remaining.
    pub countdown: u16,
    /// Ticks played since the last press.  Only advances while playing.
    pub countup: u16,
    /// A release arrived before the minimum playback elapsed.
    pub stop_requested: bool,
}

/// Output commands produced by one sequencer tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackStep {
    /// Debounce event consumed this tick.
    pub edge: Option<Edge>,
    /// A pending stop was honoured; one final tick was scheduled.
    pub stop_honored: bool,
    pub toggle_light: bool,
    pub strike_bell: bool,
    /// Countdown reached zero this tick; the light must be switched off.
    pub finished: bool,
}

/// The playback state machine.
#[derive(Debug, Clone)]
pub struct PlaybackSequencer {
    state: PlaybackState,
    min_playback_ticks: u16,
    light_period_ticks: u16,
    bell_period_ticks: u16,
}

impl PlaybackSequencer {
    /// Periods come from a validated [`Timing`] and are never zero.
    pub const fn new(timing: &Timing) -> Self {
        Self {
            state: PlaybackState {
                countdown: 0,
                countup: 0,
                stop_requested: false,
            },
            min_playback_ticks: timing.min_playback_ticks,
            light_period_ticks: timing.light_period_ticks,
            bell_period_ticks: timing.bell_period_ticks,
        }
    }

    /// Run one tick: consume the debouncer's pending event (if any), then
    /// advance playback against the current ring `credit`.
    pub fn tick(&mut self, debounce: &mut Debouncer, credit: u16) -> PlaybackStep {
        let mut step = PlaybackStep {
            edge: debounce.take_event(),
            ..PlaybackStep::default()
        };

        match step.edge {
            Some(Edge::Pressed) => self.start(credit),
            Some(Edge::Released) => self.request_stop(),
            None => {}
        }

        let s = &mut self.state;

        if s.stop_requested && s.countup >= self.min_playback_ticks {
            debug!("playback: stop honoured after {} ticks", s.countup);
            s.countdown = 1;
            s.stop_requested = false;
            step.stop_honored = true;
        }

        if s.countdown > 0 {
            step.toggle_light = s.countdown % self.light_period_ticks == 0;
            step.strike_bell = s.countdown % self.bell_period_ticks == 0;

            s.countdown -= 1;
            s.countup = s.countup.saturating_add(1);
            step.finished = s.countdown == 0;
        }

        step
    }

    /// Begin a new cycle capped at the remaining `credit`.  With no credit
    /// left, nothing plays.
    pub fn start(&mut self, credit: u16) {
        self.state.countdown = credit;
        self.state.countup = 0;
        self.state.stop_requested = false;
    }

    /// Ask playback to stop once the minimum duration has elapsed.
    pub fn request_stop(&mut self) {
        self.state.stop_requested = true;
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.countdown > 0
    }
}
