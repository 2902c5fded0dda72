//! H-bridge motor driver
//!
//! One [`HBridgeSide`] drives one motor:
//!
//! | direction | IN1  | IN2  | EN (PWM)          |
//! |-----------|------|------|-------------------|
//! | Forward   | high | low  | magnitude         |
//! | Reverse   | low  | high | magnitude         |
//! | Neutral   | low  | low  | 0 (coast)         |
//!
//! Magnitude 0-255 is scaled onto the PWM channel's own duty range.
//! Direction is written before duty so a reversal never drives the new
//! direction with stale pin levels. Dead time is the bridge IC's job.
//!
//! ```ignore
//! let left = HBridgeSide::new(in1, in2, pwm_a);
//! let right = HBridgeSide::new(in3, in4, pwm_b);
//! let mut motors = DualHBridge::new(left, right);
//! motors.set_side(Side::Left, MotorDirection::Forward, 200);
//! ```

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use facebot_core::traits::{MotorChannels, MotorDirection, Side, SideOutput};

/// One motor behind an H-bridge
pub struct HBridgeSide<IN1, IN2, EN> {
    in1: IN1,
    in2: IN2,
    enable: EN,
    /// Last applied output
    output: SideOutput,
}

impl<IN1, IN2, EN> HBridgeSide<IN1, IN2, EN>
where
    IN1: OutputPin,
    IN2: OutputPin,
    EN: SetDutyCycle,
{
    /// Create a new side; outputs are not touched until the first `set`
    pub fn new(in1: IN1, in2: IN2, enable: EN) -> Self {
        Self {
            in1,
            in2,
            enable,
            output: SideOutput::STOPPED,
        }
    }

    /// Apply direction and magnitude
    ///
    /// Pin and PWM errors are ignored: on the supported HALs these
    /// operations are infallible register writes.
    pub fn set(&mut self, direction: MotorDirection, magnitude: u8) {
        let (in1, in2, magnitude) = match direction {
            MotorDirection::Forward => (true, false, magnitude),
            MotorDirection::Reverse => (false, true, magnitude),
            MotorDirection::Neutral => (false, false, 0),
        };

        let _ = self.in1.set_state(in1.into());
        let _ = self.in2.set_state(in2.into());
        let _ = self
            .enable
            .set_duty_cycle_fraction(magnitude as u16, u8::MAX as u16);

        self.output = SideOutput::new(direction, magnitude);
    }

    /// Last applied output
    pub fn output(&self) -> SideOutput {
        self.output
    }

    /// Release the pins
    pub fn release(self) -> (IN1, IN2, EN) {
        (self.in1, self.in2, self.enable)
    }
}

/// Left and right motors
pub struct DualHBridge<L, R> {
    left: L,
    right: R,
}

impl<L, R> DualHBridge<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L1, L2, LE, R1, R2, RE> MotorChannels
    for DualHBridge<HBridgeSide<L1, L2, LE>, HBridgeSide<R1, R2, RE>>
where
    L1: OutputPin,
    L2: OutputPin,
    LE: SetDutyCycle,
    R1: OutputPin,
    R2: OutputPin,
    RE: SetDutyCycle,
{
    fn set_side(&mut self, side: Side, direction: MotorDirection, magnitude: u8) {
        match side {
            Side::Left => self.left.set(direction, magnitude),
            Side::Right => self.right.set(direction, magnitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::pwm::ErrorType as PwmErrorType;

    #[derive(Debug, Default)]
    struct FakePin {
        high: bool,
    }

    impl PinErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FakePwm {
        max: u16,
        duty: u16,
    }

    impl FakePwm {
        fn with_max(max: u16) -> Self {
            Self { max, duty: 0 }
        }
    }

    impl PwmErrorType for FakePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
            self.duty = duty;
            Ok(())
        }
    }

    type TestSide = HBridgeSide<FakePin, FakePin, FakePwm>;

    fn side(max: u16) -> TestSide {
        HBridgeSide::new(FakePin::default(), FakePin::default(), FakePwm::with_max(max))
    }

    #[test]
    fn test_forward_levels() {
        let mut s = side(255);
        s.set(MotorDirection::Forward, 200);
        let (in1, in2, en) = s.release();
        assert!(in1.high);
        assert!(!in2.high);
        assert_eq!(en.duty, 200);
    }

    #[test]
    fn test_reverse_levels() {
        let mut s = side(255);
        s.set(MotorDirection::Reverse, 150);
        assert_eq!(s.output(), SideOutput::new(MotorDirection::Reverse, 150));
        let (in1, in2, en) = s.release();
        assert!(!in1.high);
        assert!(in2.high);
        assert_eq!(en.duty, 150);
    }

    #[test]
    fn test_neutral_coasts_with_zero_duty() {
        let mut s = side(255);
        s.set(MotorDirection::Forward, 255);
        // Magnitude is ignored in neutral
        s.set(MotorDirection::Neutral, 90);
        assert_eq!(s.output(), SideOutput::STOPPED);
        let (in1, in2, en) = s.release();
        assert!(!in1.high);
        assert!(!in2.high);
        assert_eq!(en.duty, 0);
    }

    #[test]
    fn test_duty_scaled_to_channel_range() {
        let mut s = side(1000);
        s.set(MotorDirection::Forward, 255);
        assert_eq!(s.release().2.duty, 1000);

        let mut s = side(1000);
        s.set(MotorDirection::Forward, 51);
        assert_eq!(s.release().2.duty, 200);
    }

    #[test]
    fn test_dual_routes_sides() {
        let mut motors = DualHBridge::new(side(255), side(255));
        motors.set_side(Side::Left, MotorDirection::Reverse, 150);
        motors.set_side(Side::Right, MotorDirection::Forward, 150);

        assert_eq!(
            motors.left().output(),
            SideOutput::new(MotorDirection::Reverse, 150)
        );
        assert_eq!(
            motors.right().output(),
            SideOutput::new(MotorDirection::Forward, 150)
        );
    }
}
