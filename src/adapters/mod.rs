//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements  | Connects to                    |
//! |------------|-------------|--------------------------------|
//! | `gpio`     | OutputPort  | light and bell GPIO outputs    |
//! |            | (input)     | button GPIO with pull-up       |
//! | `log_sink` | EventSink   | Serial log output              |

pub mod gpio;
pub mod log_sink;
