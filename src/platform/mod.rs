//! Platform abstraction layer
//!
//! Translates host events (keyboard, touch) into simulation commands. The
//! browser bootstrap in `main.rs` only forwards raw events here.

pub mod input;

pub use input::{HostEvent, command_for};
