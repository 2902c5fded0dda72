//! Facebot serial command protocol
//!
//! This crate defines the byte protocol spoken between the voice host
//! (which turns speech into robot commands) and the robot firmware.
//!
//! # Protocol Overview
//!
//! Every command is exactly one ASCII byte. There is no framing, no
//! acknowledgement and no checksum:
//! ```text
//! ┌──────┐
//! │ BYTE │   one of F B R L S O T (case-sensitive)
//! │ 1B   │
//! └──────┘
//! ```
//!
//! Anything else on the wire is reported by the robot and ignored. Status
//! text flowing back from the robot is advisory only.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod host;

pub use command::{Command, COMMAND_TABLE};
pub use host::{parse_utterance, IDLE_FACE, SHUTDOWN_SEQUENCE, THINKING_FACE};
