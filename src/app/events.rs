//! Outbound doorbell events.
//!
//! The [`Doorbell`](super::service::Doorbell) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Only transitions produce
//! events; an idle tick emits nothing.

use crate::config::Timing;

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorbellEvent {
    /// The control loop has started (carries the active timing).
    Started(Timing),

    /// A press was validated.  `granted_ticks` is the credit loaded into the
    /// countdown; zero means the ring budget is spent and nothing plays.
    Pressed { granted_ticks: u16 },

    /// A release was validated `held_ticks` after the matching press.
    Released { held_ticks: u32 },

    /// An early release was honoured once the minimum playback had run.
    StopHonored { played_ticks: u16 },

    /// The countdown reached zero and the light was switched off.
    PlaybackFinished { played_ticks: u16 },
}
