//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wheel speeds per movement class (PWM magnitude, 0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriveSpeeds {
    /// Magnitude for straight forward/backward motion
    pub straight: u8,
    /// Magnitude for in-place turns (must be below `straight`)
    pub turn: u8,
}

impl DriveSpeeds {
    pub const DEFAULT: Self = Self {
        straight: 200,
        turn: 150,
    };
}

impl Default for DriveSpeeds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Blink dwell times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlinkTiming {
    /// How long the eyes stay open (ms)
    pub open_ms: u32,
    /// How long the eyes stay closed (ms)
    pub closed_ms: u32,
}

impl BlinkTiming {
    pub const DEFAULT: Self = Self {
        open_ms: 3000,
        closed_ms: 200,
    };
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Serial link to the voice host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SerialConfig {
    /// Baud rate in bits per second (8N1)
    pub baudrate: u32,
}

impl SerialConfig {
    pub const DEFAULT: Self = Self { baudrate: 9600 };
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete robot configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotConfig {
    pub drive: DriveSpeeds,
    pub blink: BlinkTiming,
    pub serial: SerialConfig,
}

/// Reasons a configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Straight speed is zero, so the robot could never move
    ZeroStraightSpeed,
    /// Turn speed is not below straight speed
    TurnNotSlower,
    /// A blink dwell time is zero
    ZeroDwell,
    /// Baud rate is zero
    ZeroBaudrate,
}

impl RobotConfig {
    pub const DEFAULT: Self = Self {
        drive: DriveSpeeds::DEFAULT,
        blink: BlinkTiming::DEFAULT,
        serial: SerialConfig::DEFAULT,
    };

    /// Check the cross-field rules the firmware relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drive.straight == 0 {
            return Err(ConfigError::ZeroStraightSpeed);
        }
        if self.drive.turn >= self.drive.straight {
            return Err(ConfigError::TurnNotSlower);
        }
        if self.blink.open_ms == 0 || self.blink.closed_ms == 0 {
            return Err(ConfigError::ZeroDwell);
        }
        if self.serial.baudrate == 0 {
            return Err(ConfigError::ZeroBaudrate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RobotConfig::default();
        assert_eq!(config, RobotConfig::DEFAULT);
        assert_eq!(config.blink.open_ms, 3000);
        assert_eq!(config.blink.closed_ms, 200);
        assert_eq!(config.serial.baudrate, 9600);
        assert!(config.drive.turn < config.drive.straight);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_turn_must_be_slower() {
        let mut config = RobotConfig::DEFAULT;
        config.drive.turn = config.drive.straight;
        assert_eq!(config.validate(), Err(ConfigError::TurnNotSlower));
    }

    #[test]
    fn test_rejects_zero_values() {
        let mut config = RobotConfig::DEFAULT;
        config.drive = DriveSpeeds { straight: 0, turn: 0 };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStraightSpeed));

        let mut config = RobotConfig::DEFAULT;
        config.blink.closed_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDwell));

        let mut config = RobotConfig::DEFAULT;
        config.serial.baudrate = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroBaudrate));
    }
}
