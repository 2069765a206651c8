//! Control-loop context: the hexagonal core.
//!
//! [`Doorbell`] owns every piece of tick state (clock, debouncer, ring
//! budget, playback sequencer, bell pulse).  All I/O flows through port
//! traits injected at call sites, so the whole loop runs against mock
//! adapters on the host.
//!
//! ```text
//!  raw sample ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │           Doorbell           │
//!  OutputPort ◀── │ Debounce · Bucket · Playback │
//!                 └──────────────────────────────┘
//! ```

use log::info;

use crate::config::Timing;
use crate::control::bell::BellPulse;
use crate::control::bucket::LeakyBucket;
use crate::control::clock::SysClock;
use crate::control::debounce::{Debouncer, Edge};
use crate::control::playback::{PlaybackSequencer, PlaybackState, PlaybackStep};

use super::events::DoorbellEvent;
use super::ports::{EventSink, OutputPort};

// ───────────────────────────────────────────────────────────────
// Doorbell
// ───────────────────────────────────────────────────────────────

/// The doorbell control loop.
pub struct Doorbell {
    timing: Timing,
    clock: SysClock,
    debounce: Debouncer,
    bucket: LeakyBucket,
    playback: PlaybackSequencer,
    bell: BellPulse,
    /// `stable_since` of the last validated press.
    pressed_at: Option<SysClock>,
}

impl Doorbell {
    /// Build the context with every counter zeroed and the bucket empty.
    ///
    /// Does **not** touch the outputs; call [`start`](Self::start) next.
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            clock: SysClock::default(),
            debounce: Debouncer::new(timing.debounce_ticks),
            bucket: LeakyBucket::new(timing.bucket_capacity),
            playback: PlaybackSequencer::new(&timing),
            bell: BellPulse::new(timing.bell_pulse_ticks),
            pressed_at: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Put the outputs into their idle state and announce the start.
    pub fn start(&mut self, out: &mut impl OutputPort, sink: &mut impl EventSink) {
        out.all_off();
        sink.emit(&DoorbellEvent::Started(self.timing));
        info!(
            "Doorbell started: D={} cap={} min={} light={} bell={}",
            self.timing.debounce_ticks,
            self.timing.bucket_capacity,
            self.timing.min_playback_ticks,
            self.timing.light_period_ticks,
            self.timing.bell_period_ticks,
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one tick with the button's raw level (`true` = pressed).
    ///
    /// Order: clock → debounce → bucket → bell release → playback.
    pub fn tick(
        &mut self,
        raw: bool,
        out: &mut impl OutputPort,
        sink: &mut impl EventSink,
    ) -> PlaybackStep {
        // 1. Time base
        self.clock.advance();
        let now = self.clock;

        // 2. Input filter
        self.debounce.sample(raw, now);

        // 3. Ring budget follows the debounced level.  A press validated
        //    this tick is granted the credit held at that instant.
        let credit = self.bucket.credit();
        self.bucket.update(self.debounce.is_pressed());

        // 4. Release an expiring bell pulse before any new strike
        self.bell.service(out);

        // 5. Playback
        let step = self.playback.tick(&mut self.debounce, credit);

        match step.edge {
            Some(Edge::Pressed) => {
                self.pressed_at = Some(self.debounce.state().stable_since);
                sink.emit(&DoorbellEvent::Pressed {
                    granted_ticks: credit,
                });
            }
            Some(Edge::Released) => {
                // The release validated at power-up has no matching press.
                if let Some(at) = self.pressed_at.take() {
                    let held_ticks = self.debounce.state().stable_since.ticks_since(at);
                    sink.emit(&DoorbellEvent::Released { held_ticks });
                }
            }
            None => {}
        }

        let played_ticks = self.playback.state().countup;
        if step.stop_honored {
            sink.emit(&DoorbellEvent::StopHonored { played_ticks });
        }

        // 6. Apply outputs
        if step.toggle_light {
            out.light_toggle();
        }
        if step.strike_bell {
            self.bell.trigger(out);
        }
        if step.finished {
            out.light_off();
            sink.emit(&DoorbellEvent::PlaybackFinished { played_ticks });
        }

        step
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Ticks executed since startup (wraps).
    pub fn clock(&self) -> SysClock {
        self.clock
    }

    pub fn debounce(&self) -> &Debouncer {
        &self.debounce
    }

    /// Remaining ring credit.
    pub fn credit(&self) -> u16 {
        self.bucket.credit()
    }

    pub fn playback(&self) -> &PlaybackState {
        self.playback.state()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Whether the bell coil is currently energised.
    pub fn bell_energised(&self) -> bool {
        self.bell.is_energised()
    }
}
