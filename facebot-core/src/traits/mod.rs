//! Capability traits
//!
//! These traits define the interface between the control loop and the
//! hardware it runs on. Each one is deliberately narrow: the core only
//! needs to set a wheel, draw a shape, or move a byte.

pub mod display;
pub mod motor;
pub mod serial;

pub use display::{DisplayError, FaceCanvas, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use motor::{MotorChannels, MotorDirection, MotorOutput, Side, SideOutput};
pub use serial::{CommandInput, StatusOutput};
