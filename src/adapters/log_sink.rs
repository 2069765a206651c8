//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing doorbell events to the ESP-IDF
//! logger (UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::DoorbellEvent;
use crate::app::ports::EventSink;
use crate::config::Timing;

/// Adapter that logs every [`DoorbellEvent`] to the serial console.
pub struct LogEventSink {
    timing: Timing,
}

impl LogEventSink {
    /// `timing` converts tick counts back to milliseconds for display.
    pub fn new(timing: Timing) -> Self {
        Self { timing }
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &DoorbellEvent) {
        let ms = |ticks: u32| self.timing.ticks_to_ms(ticks);
        match *event {
            DoorbellEvent::Started(t) => {
                info!(
                    "START | tick={}ms debounce={}ms budget={}ms min={}ms",
                    t.tick_period_ms,
                    t.ticks_to_ms(t.debounce_ticks.into()),
                    t.ticks_to_ms(t.bucket_capacity.into()),
                    t.ticks_to_ms(t.min_playback_ticks.into()),
                );
            }
            DoorbellEvent::Pressed { granted_ticks: 0 } => {
                warn!("PRESS | ring budget exhausted, not ringing");
            }
            DoorbellEvent::Pressed { granted_ticks } => {
                info!("PRESS | ringing for up to {}ms", ms(granted_ticks.into()));
            }
            DoorbellEvent::Released { held_ticks } => {
                info!("RELEASE | held {}ms", ms(held_ticks));
            }
            DoorbellEvent::StopHonored { played_ticks } => {
                info!("STOP | after {}ms", ms(played_ticks.into()));
            }
            DoorbellEvent::PlaybackFinished { played_ticks } => {
                info!("DONE | played {}ms", ms(played_ticks.into()));
            }
        }
    }
}
