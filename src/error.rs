//! Unified error types for the doorbell firmware.
//!
//! The tick-driven core never fails: every counter is clamped.  Errors
//! only exist at the edges, when compile-time timing constants are
//! converted into ticks and when the surrounding hardware is brought up.
//! All variants are `Copy` so they can be returned from `const fn`s and
//! passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible startup operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A timing constant could not be converted into a valid tick count.
    Config(ConfigError),
    /// Peripheral or tick-timer initialisation failed.
    Init(HwInitError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Timing configuration errors
// ---------------------------------------------------------------------------

/// Rejected timing constants.  The `&'static str` names the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The tick period is zero milliseconds.
    ZeroTickPeriod,
    /// A duration rounds down to zero ticks.
    ShorterThanTick(&'static str),
    /// A duration does not fit the 16-bit tick counters.
    OutOfRange(&'static str),
    /// The bell pulse would last as long as (or longer than) the bell period,
    /// merging consecutive pulses into one continuous ring.
    PulseExceedsPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTickPeriod => write!(f, "tick period must be non-zero"),
            Self::ShorterThanTick(what) => write!(f, "{what} is shorter than one tick"),
            Self::OutOfRange(what) => write!(f, "{what} exceeds the tick counter range"),
            Self::PulseExceedsPeriod => write!(f, "bell pulse must be shorter than the bell period"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Hardware initialisation errors
// ---------------------------------------------------------------------------

/// Errors raised while bringing up the tick source and GPIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    /// `esp_timer_create` returned a non-OK code.
    TimerCreateFailed(i32),
    /// `esp_timer_start_periodic` returned a non-OK code.
    TimerStartFailed(i32),
    /// A GPIO pin driver could not be configured.
    GpioConfigFailed(i32),
}

impl fmt::Display for HwInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimerCreateFailed(rc) => write!(f, "tick timer create failed (rc={rc})"),
            Self::TimerStartFailed(rc) => write!(f, "tick timer start failed (rc={rc})"),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={rc})"),
        }
    }
}

impl std::error::Error for HwInitError {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}
