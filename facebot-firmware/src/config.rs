//! Build-time robot configuration
//!
//! `build.rs` validates robot.toml and emits `ROBOT_CONFIG`.

use facebot_core::config::{BlinkTiming, DriveSpeeds, RobotConfig, SerialConfig};

include!(concat!(env!("OUT_DIR"), "/robot_config.rs"));
