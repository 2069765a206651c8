//! Fuzz target: doorbell tick loop
//!
//! Derives a timing set from the first bytes and drives the control loop
//! with a raw-sample sequence expanded from the rest, verifying:
//! - No panics (no counter overflow, no zero divisor)
//! - Debounce run length and ring credit stay within their bounds
//! - The light is never left on while playback is idle
//!
//! cargo fuzz run fuzz_tick_sequence

#![no_main]

use doorbell::app::events::DoorbellEvent;
use doorbell::app::ports::{EventSink, OutputPort};
use doorbell::app::service::Doorbell;
use doorbell::config::Timing;
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct Pins {
    light: bool,
}

impl OutputPort for Pins {
    fn light_toggle(&mut self) {
        self.light = !self.light;
    }
    fn light_off(&mut self) {
        self.light = false;
    }
    fn bell_on(&mut self) {}
    fn bell_off(&mut self) {}
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &DoorbellEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Some((header, samples)) = data.split_first_chunk::<6>() else {
        return;
    };

    let bell = u16::from(header[4] % 16) + 2;
    let Ok(timing) = Timing::from_ticks(
        10,
        u16::from(header[0] % 32) + 1,
        u16::from(header[1]) * 4 + 1,
        u16::from(header[2]),
        u16::from(header[3] % 64) + 1,
        bell,
        u16::from(header[5]) % (bell - 1) + 1,
    ) else {
        return;
    };

    let mut door = Doorbell::new(timing);
    let mut pins = Pins::default();
    let mut sink = NullSink;
    door.start(&mut pins, &mut sink);

    // Each byte: top bit is the level, low bits the run length.
    for &byte in samples {
        let raw = byte & 0x80 != 0;
        for _ in 0..=(byte & 0x7f) {
            door.tick(raw, &mut pins, &mut sink);

            assert!(door.debounce().state().run_length <= timing.debounce_ticks);
            assert!(door.credit() <= timing.bucket_capacity);
            if !door.is_playing() {
                assert!(!pins.light, "light left on while idle");
            }
        }
    }
});
