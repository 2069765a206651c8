//! Tick source and watchdog.

pub mod hw_timer;
pub mod watchdog;
