//! Motion driver
//!
//! Translates a [`MovementIntent`] into per-side outputs on the motor
//! channels. Every call writes the hardware, so repeating an intent is
//! always safe and always yields the same output.

use crate::config::DriveSpeeds;
use crate::traits::{MotorChannels, MotorOutput};

use super::MovementIntent;

/// Motion driver state
pub struct MotionDriver<M> {
    motors: M,
    speeds: DriveSpeeds,
    /// Last commanded intent (None until the first drive)
    last_intent: Option<MovementIntent>,
    /// Output most recently written to the motors
    output: MotorOutput,
}

impl<M: MotorChannels> MotionDriver<M> {
    /// Create a new motion driver
    ///
    /// Does not touch the hardware; call `drive(Stop)` to put the motors
    /// into a known state.
    pub fn new(motors: M, speeds: DriveSpeeds) -> Self {
        Self {
            motors,
            speeds,
            last_intent: None,
            output: MotorOutput::STOPPED,
        }
    }

    /// Apply a movement intent
    pub fn drive(&mut self, intent: MovementIntent) {
        let output = intent.output(&self.speeds);
        self.motors.apply(output);
        self.output = output;
        self.last_intent = Some(intent);
    }

    /// Output most recently written to the motors
    pub fn output(&self) -> MotorOutput {
        self.output
    }

    /// Last commanded intent
    pub fn last_intent(&self) -> Option<MovementIntent> {
        self.last_intent
    }

    /// Borrow the motor channels
    pub fn motors(&self) -> &M {
        &self.motors
    }
}
