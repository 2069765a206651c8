//! Port traits: the boundary between the control core and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Doorbell (domain)
//! ```
//!
//! Output adapters (GPIO pins, test mocks) and event sinks implement these
//! traits.  The [`Doorbell`](super::service::Doorbell) consumes them via
//! generics, so the core never touches a pin directly.

use super::events::DoorbellEvent;

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the light and the bell.
///
/// Implementations must return immediately; a bell strike is a `bell_on`
/// followed, some ticks later, by a `bell_off`.
pub trait OutputPort {
    /// Invert the light output.
    fn light_toggle(&mut self);

    /// Force the light off.
    fn light_off(&mut self);

    /// Energise the bell coil.
    fn bell_on(&mut self);

    /// Release the bell coil.
    fn bell_off(&mut self);

    /// Put every output into its safe (off) state.
    fn all_off(&mut self) {
        self.bell_off();
        self.light_off();
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`DoorbellEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &DoorbellEvent);
}
