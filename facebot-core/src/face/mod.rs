//! Animated face
//!
//! The face is either idly blinking or showing a "thinking" expression.
//! What is on screen is a pure function of the face state: see
//! [`FaceState::frame`] and [`Frame::shapes`].

pub mod animator;
pub mod frame;
pub mod state;

pub use animator::FaceAnimator;
pub use frame::{Frame, Shape};
pub use state::{BlinkPhase, FaceMode, FaceState};
