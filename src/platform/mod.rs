//! Platform abstraction layer
//!
//! Handles the host side of the loop:
//! - Input events -> per-tick intents
//! - Fixed-rate timing

pub mod input;
pub mod time;

pub use input::{DemoPilot, InputState, Key};
pub use time::FixedTimestep;
