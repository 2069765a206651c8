//! Tick-driven control core: clock, input filter, ring budget and the
//! playback pattern.  Nothing in here touches hardware.

pub mod bell;
pub mod bucket;
pub mod clock;
pub mod debounce;
pub mod playback;
