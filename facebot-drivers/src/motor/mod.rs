//! Motor driver implementations
//!
//! - H-bridge (L298N, TB6612 and similar): IN1/IN2 select direction, the
//!   enable input takes PWM for speed

pub mod hbridge;

pub use hbridge::{DualHBridge, HBridgeSide};
