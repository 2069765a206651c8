//! Mock output adapter and event sink for integration tests.
//!
//! Records every output call so tests can assert on the full command
//! history without touching real GPIO registers.

use doorbell::app::events::DoorbellEvent;
use doorbell::app::ports::{EventSink, OutputPort};
use doorbell::app::service::Doorbell;
use doorbell::config::Timing;

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCall {
    LightToggle,
    LightOff,
    BellOn,
    BellOff,
}

// ── MockOutputs ───────────────────────────────────────────────

/// Output adapter that mirrors pin state and logs each call with the tick
/// it happened on.
#[derive(Default)]
pub struct MockOutputs {
    pub calls: Vec<(u32, OutputCall)>,
    pub light: bool,
    pub bell: bool,
    /// Tick stamped onto recorded calls; advanced by [`Rig`].
    pub now: u32,
}

#[allow(dead_code)]
impl MockOutputs {
    pub fn count(&self, call: OutputCall) -> usize {
        self.calls.iter().filter(|(_, c)| *c == call).count()
    }

    /// Ticks on which `call` was made.
    pub fn ticks_of(&self, call: OutputCall) -> Vec<u32> {
        self.calls
            .iter()
            .filter(|(_, c)| *c == call)
            .map(|(t, _)| *t)
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl OutputPort for MockOutputs {
    fn light_toggle(&mut self) {
        self.light = !self.light;
        self.calls.push((self.now, OutputCall::LightToggle));
    }

    fn light_off(&mut self) {
        self.light = false;
        self.calls.push((self.now, OutputCall::LightOff));
    }

    fn bell_on(&mut self) {
        self.bell = true;
        self.calls.push((self.now, OutputCall::BellOn));
    }

    fn bell_off(&mut self) {
        self.bell = false;
        self.calls.push((self.now, OutputCall::BellOff));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<DoorbellEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &DoorbellEvent) {
        self.events.push(*event);
    }
}

// ── Rig ───────────────────────────────────────────────────────

/// A started doorbell wired to the mocks.
pub struct Rig {
    pub doorbell: Doorbell,
    pub out: MockOutputs,
    pub sink: RecordingSink,
}

#[allow(dead_code)]
impl Rig {
    /// D=10, capacity 500, minimum playback 100, light 20, bell 5, pulse 1.
    pub fn reference() -> Self {
        Self::with_timing(Timing::from_ticks(10, 10, 500, 100, 20, 5, 1).unwrap())
    }

    pub fn with_timing(timing: Timing) -> Self {
        let mut doorbell = Doorbell::new(timing);
        let mut out = MockOutputs::default();
        let mut sink = RecordingSink::default();
        doorbell.start(&mut out, &mut sink);
        out.clear();
        sink.events.clear();
        Self { doorbell, out, sink }
    }

    /// Run `n` ticks with a constant raw level.
    pub fn hold(&mut self, raw: bool, n: usize) {
        for _ in 0..n {
            self.step(raw);
        }
    }

    pub fn step(&mut self, raw: bool) {
        self.out.now = self.doorbell.clock().ticks().wrapping_add(1);
        self.doorbell.tick(raw, &mut self.out, &mut self.sink);
    }

    /// Idle long enough to fill the ring budget completely.
    pub fn fill_bucket(&mut self) {
        let capacity = self.doorbell.timing().bucket_capacity as usize;
        self.hold(false, capacity + 20);
        assert_eq!(self.doorbell.credit(), self.doorbell.timing().bucket_capacity);
    }

    pub fn now(&self) -> u32 {
        self.doorbell.clock().ticks()
    }
}
