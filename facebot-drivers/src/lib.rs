//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the capability traits
//! defined in facebot-core, written against `embedded-hal` 1.0 and
//! `embedded-io` so they work with any chip HAL:
//!
//! - Motor channels (dual H-bridge: two direction pins + PWM per side)
//! - Face canvas (SSD1306/SH1106 128x64 OLED over I2C)
//! - Serial link to the voice host (non-blocking byte reads, status lines)

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod motor;
pub mod serial;

pub use display::{Oled, OledModel};
pub use motor::{DualHBridge, HBridgeSide};
pub use serial::SerialPort;
