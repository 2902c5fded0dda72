//! Display driver implementations
//!
//! - OLED: 128x64 SSD1306/SH1106 over I2C with a local frame buffer

pub mod oled;

pub use oled::{Oled, OledModel, OLED_ADDR};
