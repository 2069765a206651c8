//! GPIO adapter: bridges embedded-hal pins to the domain ports.
//!
//! On the device the pins are ESP-IDF `PinDriver`s; in tests they are any
//! type implementing the embedded-hal 1.0 digital traits.  Pin errors are
//! logged and otherwise ignored, so the control loop never stalls on I/O.

use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};
use log::warn;

use crate::app::ports::OutputPort;

/// Light (stateful, for toggling) and bell coil outputs.
pub struct GpioOutputs<L, B> {
    light: L,
    bell: B,
}

impl<L, B> GpioOutputs<L, B>
where
    L: StatefulOutputPin,
    B: OutputPin,
{
    pub fn new(light: L, bell: B) -> Self {
        Self { light, bell }
    }

    /// Give the pins back (tests, shutdown).
    pub fn release(self) -> (L, B) {
        (self.light, self.bell)
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<L, B> OutputPort for GpioOutputs<L, B>
where
    L: StatefulOutputPin,
    B: OutputPin,
{
    fn light_toggle(&mut self) {
        if let Err(e) = self.light.toggle() {
            warn!("gpio: light toggle failed: {:?}", e);
        }
    }

    fn light_off(&mut self) {
        if let Err(e) = self.light.set_low() {
            warn!("gpio: light off failed: {:?}", e);
        }
    }

    fn bell_on(&mut self) {
        if let Err(e) = self.bell.set_high() {
            warn!("gpio: bell on failed: {:?}", e);
        }
    }

    fn bell_off(&mut self) {
        if let Err(e) = self.bell.set_low() {
            warn!("gpio: bell off failed: {:?}", e);
        }
    }
}

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    High,
    /// Switch to ground with a pull-up (the usual doorbell wiring).
    Low,
}

/// Raw doorbell button input.
pub struct ButtonInput<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: InputPin> ButtonInput<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// Sample the pin once.  A read error counts as "not pressed".
    pub fn is_pressed(&mut self) -> bool {
        let level = match self.active {
            ActiveLevel::High => self.pin.is_high(),
            ActiveLevel::Low => self.pin.is_low(),
        };
        level.unwrap_or_else(|e| {
            warn!("gpio: button read failed: {:?}", e);
            false
        })
    }
}
