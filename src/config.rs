//! Timing configuration.
//!
//! Every threshold is a compile-time constant expressed in milliseconds and
//! converted into ticks of the control loop by [`Timing::from_millis`].  The
//! conversion is a `const fn`, so an invalid constant set fails the build
//! instead of misbehaving at the door.
//!
//! | Constant            | Reference | Ticks @ 10 ms |
//! |---------------------|-----------|---------------|
//! | debounce hold       | 100 ms    | 10            |
//! | ring budget (bucket)| 5 s       | 500           |
//! | minimum playback    | 1 s       | 100           |
//! | light toggle period | 200 ms    | 20            |
//! | bell pulse period   | 50 ms     | 5             |
//! | bell pulse length   | 3 ms      | 1 (rounded up)|

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Reference constants
// ---------------------------------------------------------------------------

/// Period of the control-loop tick.
pub const TICK_PERIOD_MS: u32 = 10;
/// How long the button must hold one level before it is trusted.
/// Covers more than one full period of 50 Hz mains hum.
pub const DEBOUNCE_MS: u32 = 100;
/// Total ringing budget; refills at the same rate it drains.
pub const RING_BUDGET_MS: u32 = 5_000;
/// A validated press always plays at least this long.
pub const MIN_PLAYBACK_MS: u32 = 1_000;
/// Light toggles every this many milliseconds of remaining playback.
pub const LIGHT_PERIOD_MS: u32 = 200;
/// Bell strikes every this many milliseconds of remaining playback.
pub const BELL_PERIOD_MS: u32 = 50;
/// How long the bell coil stays energised per strike.
pub const BELL_PULSE_MS: u32 = 3;

/// Task watchdog timeout for the control loop.
pub const WATCHDOG_TIMEOUT_MS: u32 = 1_000;

/// The reference durations, in milliseconds.
pub const REFERENCE_MILLIS: MillisTiming = MillisTiming {
    tick_period_ms: TICK_PERIOD_MS,
    debounce_ms: DEBOUNCE_MS,
    ring_budget_ms: RING_BUDGET_MS,
    min_playback_ms: MIN_PLAYBACK_MS,
    light_period_ms: LIGHT_PERIOD_MS,
    bell_period_ms: BELL_PERIOD_MS,
    bell_pulse_ms: BELL_PULSE_MS,
};

/// Tick-denominated timing used by the firmware.
pub const TIMING: Timing = match Timing::from_millis(&REFERENCE_MILLIS) {
    Ok(timing) => timing,
    Err(_) => panic!("invalid doorbell timing constants"),
};

// ---------------------------------------------------------------------------
// Timing types
// ---------------------------------------------------------------------------

/// Durations in milliseconds, before conversion to ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MillisTiming {
    pub tick_period_ms: u32,
    pub debounce_ms: u32,
    pub ring_budget_ms: u32,
    pub min_playback_ms: u32,
    pub light_period_ms: u32,
    pub bell_period_ms: u32,
    pub bell_pulse_ms: u32,
}

/// Durations in control-loop ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Wall-clock length of one tick.
    pub tick_period_ms: u32,
    /// Debounce threshold `D`.
    pub debounce_ticks: u16,
    /// Leaky-bucket capacity.
    pub bucket_capacity: u16,
    /// Countup a stop request must wait for.
    pub min_playback_ticks: u16,
    pub light_period_ticks: u16,
    pub bell_period_ticks: u16,
    /// Length of one energised bell pulse (at least one tick).
    pub bell_pulse_ticks: u16,
}

/// `?` for `const fn`.
macro_rules! const_try {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => return Err(e),
        }
    };
}

impl Timing {
    /// Convert millisecond durations into ticks and validate the result.
    ///
    /// Periods round down to whole ticks; the bell pulse rounds up so a
    /// sub-tick pulse still energises the coil for one tick.
    pub const fn from_millis(ms: &MillisTiming) -> Result<Self, ConfigError> {
        let tick = ms.tick_period_ms;
        if tick == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        let timing = Self {
            tick_period_ms: tick,
            debounce_ticks: const_try!(fit_u16(ms.debounce_ms / tick, "debounce")),
            bucket_capacity: const_try!(fit_u16(ms.ring_budget_ms / tick, "ring budget")),
            min_playback_ticks: const_try!(fit_u16(ms.min_playback_ms / tick, "minimum playback")),
            light_period_ticks: const_try!(fit_u16(ms.light_period_ms / tick, "light period")),
            bell_period_ticks: const_try!(fit_u16(ms.bell_period_ms / tick, "bell period")),
            bell_pulse_ticks: const_try!(fit_u16(ms.bell_pulse_ms.div_ceil(tick), "bell pulse")),
        };
        timing.validate()
    }

    /// Build a tick-denominated set directly.
    pub const fn from_ticks(
        tick_period_ms: u32,
        debounce_ticks: u16,
        bucket_capacity: u16,
        min_playback_ticks: u16,
        light_period_ticks: u16,
        bell_period_ticks: u16,
        bell_pulse_ticks: u16,
    ) -> Result<Self, ConfigError> {
        Self {
            tick_period_ms,
            debounce_ticks,
            bucket_capacity,
            min_playback_ticks,
            light_period_ticks,
            bell_period_ticks,
            bell_pulse_ticks,
        }
        .validate()
    }

    /// Check the invariants the control loop relies on.
    ///
    /// Periods are used as modulo divisors and the bell pulse must fall
    /// silent before the next strike, so none of them may be zero.
    pub const fn validate(self) -> Result<Self, ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.debounce_ticks == 0 {
            return Err(ConfigError::ShorterThanTick("debounce"));
        }
        if self.bucket_capacity == 0 {
            return Err(ConfigError::ShorterThanTick("ring budget"));
        }
        if self.light_period_ticks == 0 {
            return Err(ConfigError::ShorterThanTick("light period"));
        }
        if self.bell_period_ticks == 0 {
            return Err(ConfigError::ShorterThanTick("bell period"));
        }
        if self.bell_pulse_ticks == 0 {
            return Err(ConfigError::ShorterThanTick("bell pulse"));
        }
        if self.bell_pulse_ticks >= self.bell_period_ticks {
            return Err(ConfigError::PulseExceedsPeriod);
        }
        Ok(self)
    }

    /// Convert a tick count back into milliseconds (for logging).
    pub const fn ticks_to_ms(&self, ticks: u32) -> u32 {
        ticks.saturating_mul(self.tick_period_ms)
    }
}

const fn fit_u16(ticks: u32, what: &'static str) -> Result<u16, ConfigError> {
    if ticks > u16::MAX as u32 {
        Err(ConfigError::OutOfRange(what))
    } else {
        Ok(ticks as u16)
    }
}
