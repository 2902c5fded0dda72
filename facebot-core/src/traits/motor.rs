//! Motor channel trait
//!
//! The robot has one DC motor per side behind an H-bridge. Each side takes
//! a direction and a PWM magnitude; dead time between direction changes is
//! the driver IC's job, not ours.

/// Which wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

/// Rotation direction of one wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorDirection {
    Forward,
    Reverse,
    /// Bridge open, motor coasting
    #[default]
    Neutral,
}

/// Output applied to one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SideOutput {
    pub direction: MotorDirection,
    /// PWM magnitude (0-255)
    pub magnitude: u8,
}

impl SideOutput {
    /// Neutral with zero magnitude
    pub const STOPPED: Self = Self {
        direction: MotorDirection::Neutral,
        magnitude: 0,
    };

    pub const fn new(direction: MotorDirection, magnitude: u8) -> Self {
        Self {
            direction,
            magnitude,
        }
    }
}

/// Output applied to both sides: the state of the motors until overwritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorOutput {
    pub left: SideOutput,
    pub right: SideOutput,
}

impl MotorOutput {
    pub const STOPPED: Self = Self {
        left: SideOutput::STOPPED,
        right: SideOutput::STOPPED,
    };

    /// Get the output for one side
    pub fn side(&self, side: Side) -> SideOutput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Trait for the pair of wheel motors
///
/// Implementations apply the new state immediately and must not wait for
/// the motor to physically settle.
pub trait MotorChannels {
    /// Set direction and magnitude for one side
    fn set_side(&mut self, side: Side, direction: MotorDirection, magnitude: u8);

    /// Apply a full two-sided output, left first
    fn apply(&mut self, output: MotorOutput) {
        self.set_side(Side::Left, output.left.direction, output.left.magnitude);
        self.set_side(Side::Right, output.right.direction, output.right.magnitude);
    }
}

impl<T: MotorChannels + ?Sized> MotorChannels for &mut T {
    fn set_side(&mut self, side: Side, direction: MotorDirection, magnitude: u8) {
        (**self).set_side(side, direction, magnitude)
    }
}
