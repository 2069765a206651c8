//! Application core: the control-loop context and its port boundary.
//!
//! The tick logic lives in [`crate::control`]; this layer wires it to
//! hardware through **port traits** defined in [`ports`], keeping it fully
//! testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
