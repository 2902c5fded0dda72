//! Command bytes and their meaning on the robot

/// Commands understood by the robot firmware
///
/// Variants are named after what the robot does, not after the letter on
/// the wire. The letters `F` and `B` are inverted relative to their names on
/// the host (`F` backs the robot up); that mapping is part of the deployed
/// protocol and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Drive both wheels backward (`F`)
    DriveBackward,
    /// Drive both wheels forward (`B`)
    DriveForward,
    /// Spin left in place (`R`)
    TurnLeft,
    /// Spin right in place (`L`)
    TurnRight,
    /// Stop both wheels (`S`)
    Stop,
    /// Show the idle blinking face (`O`)
    FaceBlink,
    /// Show the thinking face (`T`)
    FaceThink,
}

/// Wire byte to command table
///
/// This is the whole protocol. Lookups in both directions go through it.
pub const COMMAND_TABLE: [(u8, Command); 7] = [
    (b'F', Command::DriveBackward),
    (b'B', Command::DriveForward),
    (b'R', Command::TurnLeft),
    (b'L', Command::TurnRight),
    (b'S', Command::Stop),
    (b'O', Command::FaceBlink),
    (b'T', Command::FaceThink),
];

impl Command {
    /// Parse a command from its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        COMMAND_TABLE
            .iter()
            .find(|(b, _)| *b == byte)
            .map(|(_, cmd)| *cmd)
    }

    /// Convert to wire byte
    pub fn to_byte(self) -> u8 {
        COMMAND_TABLE
            .iter()
            .find(|(_, cmd)| *cmd == self)
            .map(|(b, _)| *b)
            // Every variant has a table row; see test_table_covers_every_command
            .unwrap_or(b'S')
    }

    /// Returns true if this command moves the wheels (Stop included)
    pub fn is_motion(&self) -> bool {
        !self.is_face()
    }

    /// Returns true if this command changes the face
    pub fn is_face(&self) -> bool {
        matches!(self, Command::FaceBlink | Command::FaceThink)
    }

    /// Short human-readable label, used in status lines
    pub fn label(&self) -> &'static str {
        match self {
            Command::DriveBackward => "backward",
            Command::DriveForward => "forward",
            Command::TurnLeft => "left",
            Command::TurnRight => "right",
            Command::Stop => "stop",
            Command::FaceBlink => "blink",
            Command::FaceThink => "think",
        }
    }
}
