//! Discrete movement requests

use crate::config::DriveSpeeds;
use crate::traits::{MotorDirection, MotorOutput, SideOutput};

/// A movement request, consumed as soon as it is made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MovementIntent {
    Forward,
    Backward,
    /// Spin left in place (left wheel back, right wheel forward)
    TurnLeft,
    /// Spin right in place (left wheel forward, right wheel back)
    TurnRight,
    Stop,
}

impl MovementIntent {
    /// Motor output for this intent
    pub fn output(self, speeds: &DriveSpeeds) -> MotorOutput {
        use MotorDirection::*;

        let (left, right, magnitude) = match self {
            MovementIntent::Forward => (Forward, Forward, speeds.straight),
            MovementIntent::Backward => (Reverse, Reverse, speeds.straight),
            MovementIntent::TurnLeft => (Reverse, Forward, speeds.turn),
            MovementIntent::TurnRight => (Forward, Reverse, speeds.turn),
            MovementIntent::Stop => return MotorOutput::STOPPED,
        };

        MotorOutput {
            left: SideOutput::new(left, magnitude),
            right: SideOutput::new(right, magnitude),
        }
    }
}
