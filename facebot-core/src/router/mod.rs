//! Command router
//!
//! Reads at most one byte per loop iteration and turns it into either a
//! wheel movement or a face change. Bursts are worked off one byte per
//! iteration so the face timer is never starved.
//!
//! The byte table itself lives in [`facebot_protocol::COMMAND_TABLE`];
//! this module only decides which component a command belongs to.

use core::fmt::Write;

use facebot_protocol::{Command, COMMAND_TABLE};
use heapless::String;

use crate::face::{FaceAnimator, FaceMode};
use crate::motion::{MotionDriver, MovementIntent};
use crate::time::Millis;
use crate::traits::{CommandInput, FaceCanvas, MotorChannels, StatusOutput};

/// Maximum status line length; longer lines are truncated
pub const STATUS_LINE_LEN: usize = 80;

/// What a command does once routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    Drive(MovementIntent),
    Face(FaceMode),
}

impl From<Command> for Action {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::DriveBackward => Action::Drive(MovementIntent::Backward),
            Command::DriveForward => Action::Drive(MovementIntent::Forward),
            Command::TurnLeft => Action::Drive(MovementIntent::TurnLeft),
            Command::TurnRight => Action::Drive(MovementIntent::TurnRight),
            Command::Stop => Action::Drive(MovementIntent::Stop),
            Command::FaceBlink => Action::Face(FaceMode::Blinking),
            Command::FaceThink => Action::Face(FaceMode::Thinking),
        }
    }
}

/// Outcome of one router poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// No byte was waiting
    Idle,
    /// A command was executed
    Executed(Command),
    /// A byte outside the protocol was consumed and reported
    Unrecognized(u8),
}

/// Command router state
pub struct CommandRouter<I, S> {
    input: I,
    status: S,
    /// Commands executed since start
    accepted: u32,
    /// Unrecognized bytes since start
    rejected: u32,
}

impl<I: CommandInput, S: StatusOutput> CommandRouter<I, S> {
    /// Create a new router
    pub fn new(input: I, status: S) -> Self {
        Self {
            input,
            status,
            accepted: 0,
            rejected: 0,
        }
    }

    /// Write the startup banner and command summary
    pub fn announce(&mut self) {
        self.status.write_line("facebot ready");

        let mut line: String<STATUS_LINE_LEN> = String::new();
        let _ = line.push_str("commands:");
        for (byte, cmd) in COMMAND_TABLE.iter() {
            let _ = write!(line, " {}={}", *byte as char, cmd.label());
        }
        self.status.write_line(&line);
    }

    /// Consume at most one byte and act on it
    ///
    /// Returns immediately with [`Dispatch::Idle`] when no byte is
    /// buffered.
    pub fn poll_and_dispatch<M, D>(
        &mut self,
        now: Millis,
        motion: &mut MotionDriver<M>,
        face: &mut FaceAnimator<D>,
    ) -> Dispatch
    where
        M: MotorChannels,
        D: FaceCanvas,
    {
        let Some(byte) = self.input.try_read_byte() else {
            return Dispatch::Idle;
        };

        let Some(cmd) = Command::from_byte(byte) else {
            self.rejected = self.rejected.wrapping_add(1);
            self.report_unrecognized(byte);
            return Dispatch::Unrecognized(byte);
        };

        match Action::from(cmd) {
            Action::Drive(intent) => motion.drive(intent),
            Action::Face(mode) => face.set_mode(mode, now),
        }

        self.accepted = self.accepted.wrapping_add(1);
        self.report_accepted(byte, cmd);
        Dispatch::Executed(cmd)
    }

    fn report_accepted(&mut self, byte: u8, cmd: Command) {
        let mut line: String<STATUS_LINE_LEN> = String::new();
        let _ = write!(line, "{}: {}", byte as char, cmd.label());
        self.status.write_line(&line);
    }

    fn report_unrecognized(&mut self, byte: u8) {
        let mut line: String<STATUS_LINE_LEN> = String::new();
        if byte.is_ascii_graphic() {
            let _ = write!(line, "unrecognized command '{}'", byte as char);
        } else {
            let _ = write!(line, "unrecognized command 0x{:02X}", byte);
        }
        self.status.write_line(&line);
    }

    /// Commands executed since start
    pub fn accepted(&self) -> u32 {
        self.accepted
    }

    /// Unrecognized bytes since start
    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    /// Borrow the input (tests feed bytes through this)
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Borrow the status sink
    pub fn status(&self) -> &S {
        &self.status
    }
}
