//! Board-agnostic core logic for the Facebot robot firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (motor channels, face canvas, serial link)
//! - Motion driver (movement intent to per-side motor output)
//! - Face animator (blink/think state machine and frame geometry)
//! - Command router (one byte per loop iteration)
//! - The cooperative control loop tying them together
//! - Configuration type definitions
//!
//! Nothing here blocks and nothing reads a clock: every time-dependent
//! call takes `now` in milliseconds, so tests drive it with a synthetic
//! clock.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod face;
pub mod motion;
pub mod router;
pub mod time;
pub mod traits;

#[cfg(test)]
pub(crate) mod fakes;

pub use control::Robot;
pub use time::Millis;
