//! Movement intents and the motion driver
//!
//! Open-loop only: an intent maps to a fixed output per side, applied
//! immediately with no ramping.

pub mod driver;
pub mod intent;

pub use driver::MotionDriver;
pub use intent::MovementIntent;
