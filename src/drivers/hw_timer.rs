//! Periodic tick source using ESP-IDF's esp_timer API.
//!
//! The timer callback only bumps an atomic pending-tick counter; the main
//! loop drains it with [`take_pending_ticks`] and runs one control tick per
//! pending tick.  No control logic runs in the callback.
//!
//! Callbacks execute in the ESP timer task context (not ISR), so the
//! atomic is the only state shared with the main task.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::error::HwInitError;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// Ticks raised by the timer and not yet dispatched.
static PENDING_TICKS: AtomicU32 = AtomicU32::new(0);

#[cfg(target_os = "espidf")]
static mut TICK_TIMER: esp_timer_handle_t = core::ptr::null_mut();

/// Record one elapsed tick period.  Called from the timer callback.
pub fn on_tick() {
    PENDING_TICKS.fetch_add(1, Ordering::AcqRel);
}

/// Take every pending tick, leaving the counter at zero.
///
/// More than one means the main loop fell behind the tick period.
pub fn take_pending_ticks() -> u32 {
    PENDING_TICKS.swap(0, Ordering::AcqRel)
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn tick_cb(_arg: *mut core::ffi::c_void) {
    on_tick();
}

/// Start the periodic tick timer at `period_ms`.
#[cfg(target_os = "espidf")]
pub fn start_tick_timer(period_ms: u32) -> Result<(), HwInitError> {
    // SAFETY: TICK_TIMER is written here once at boot from the main task
    // before the callback can fire.  The callback touches only the atomic.
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: c"doorbell_tick".as_ptr(),
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&args, &raw mut TICK_TIMER);
        if ret != ESP_OK {
            return Err(HwInitError::TimerCreateFailed(ret));
        }
        let ret = esp_timer_start_periodic(TICK_TIMER, u64::from(period_ms) * 1_000);
        if ret != ESP_OK {
            return Err(HwInitError::TimerStartFailed(ret));
        }
    }
    log::info!("hw_timer: tick @ {} ms started", period_ms);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn start_tick_timer(period_ms: u32) -> Result<(), HwInitError> {
    log::info!("hw_timer(sim): {} ms tick not started (driven by on_tick)", period_ms);
    Ok(())
}

/// Stop the tick timer.
#[cfg(target_os = "espidf")]
pub fn stop_tick_timer() {
    // SAFETY: TICK_TIMER is a valid handle if start_tick_timer() succeeded;
    // the null check covers the case where it never ran.
    unsafe {
        let timer = TICK_TIMER;
        if !timer.is_null() {
            esp_timer_stop(timer);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn stop_tick_timer() {}
