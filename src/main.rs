//! Doorbell firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │   ButtonInput     GpioOutputs         LogEventSink       │
//! │   (GPIO in)       (OutputPort)        (EventSink)        │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │             Doorbell (pure logic)                  │  │
//! │  │  Debounce · Leaky bucket · Playback · Bell pulse   │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                                                          │
//! │  hw_timer (pending tick counter) · Watchdog              │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wiring
//!
//! | Signal | GPIO | Notes                                |
//! |--------|------|--------------------------------------|
//! | button | 4    | to ground, internal pull-up          |
//! | light  | 5    | relay driver, high = on              |
//! | bell   | 6    | coil driver, high = energised        |
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::{info, warn};

use doorbell::adapters::gpio::{ActiveLevel, ButtonInput, GpioOutputs};
use doorbell::adapters::log_sink::LogEventSink;
use doorbell::app::service::Doorbell;
use doorbell::config::{self, TIMING};
use doorbell::drivers::hw_timer;
use doorbell::drivers::watchdog::Watchdog;
use doorbell::error::{Error, HwInitError};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Doorbell v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. GPIO ───────────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let gpio_err = |e: esp_idf_svc::sys::EspError| Error::from(HwInitError::GpioConfigFailed(e.code()));

    let mut button_pin = PinDriver::input(peripherals.pins.gpio4).map_err(gpio_err)?;
    button_pin.set_pull(Pull::Up).map_err(gpio_err)?;
    let light_pin = PinDriver::output(peripherals.pins.gpio5).map_err(gpio_err)?;
    let bell_pin = PinDriver::output(peripherals.pins.gpio6).map_err(gpio_err)?;

    let mut button = ButtonInput::new(button_pin, ActiveLevel::Low);
    let mut outputs = GpioOutputs::new(light_pin, bell_pin);
    let mut sink = LogEventSink::new(TIMING);

    // ── 3. Control core ───────────────────────────────────────
    let mut doorbell = Doorbell::new(TIMING);
    doorbell.start(&mut outputs, &mut sink);

    // ── 4. Tick source and watchdog ───────────────────────────
    hw_timer::start_tick_timer(TIMING.tick_period_ms).map_err(Error::from)?;
    let watchdog = Watchdog::new(config::WATCHDOG_TIMEOUT_MS);

    info!("System ready. Entering tick loop.");

    // ── 5. Tick dispatch loop ─────────────────────────────────
    loop {
        let pending = hw_timer::take_pending_ticks();
        if pending > 1 {
            warn!("tick loop: {} ticks pending, catching up", pending);
        }

        for _ in 0..pending {
            let raw = button.is_pressed();
            doorbell.tick(raw, &mut outputs, &mut sink);
        }

        watchdog.feed();
        FreeRtos::delay_ms(1);
    }
}
