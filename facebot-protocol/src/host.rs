//! Host-side vocabulary
//!
//! The voice host decides which byte to send from the words it recognised.
//! Keeping the vocabulary here lets a host implementation or a test
//! harness produce exactly the bytes the robot expects.

use crate::command::Command;

/// Keyword groups checked in order; the first group with a match wins
///
/// The host thinks in its own frame: what it calls "forward" is sent as
/// `F`, which the robot executes as [`Command::DriveBackward`].
const VOCABULARY: [(&[&str], Command); 5] = [
    (&["forward", "ahead"], Command::DriveBackward),
    (&["back", "reverse"], Command::DriveForward),
    (&["left"], Command::TurnLeft),
    (&["right"], Command::TurnRight),
    (&["stop", "halt"], Command::Stop),
];

/// Face shown while the host waits on its language model
pub const THINKING_FACE: Command = Command::FaceThink;

/// Face restored after a reply or a handled motion command
pub const IDLE_FACE: Command = Command::FaceBlink;

/// Bytes the host sends when it shuts down
pub const SHUTDOWN_SEQUENCE: [Command; 2] = [Command::Stop, Command::FaceBlink];

/// Map a recognised utterance to a motion command
///
/// Matching is a case-insensitive substring search, so "go back now"
/// and "BACKWARD" both match "back". Returns `None` when the utterance is
/// not a motion request and should go to the language model instead.
pub fn parse_utterance(text: &str) -> Option<Command> {
    VOCABULARY
        .iter()
        .find(|(words, _)| words.iter().any(|w| contains_ignore_case(text, w)))
        .map(|(_, cmd)| *cmd)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_map_to_wire_bytes() {
        assert_eq!(parse_utterance("move forward").map(Command::to_byte), Some(b'F'));
        assert_eq!(parse_utterance("go ahead").map(Command::to_byte), Some(b'F'));
        assert_eq!(parse_utterance("reverse please").map(Command::to_byte), Some(b'B'));
        assert_eq!(parse_utterance("turn left").map(Command::to_byte), Some(b'R'));
        assert_eq!(parse_utterance("turn right").map(Command::to_byte), Some(b'L'));
        assert_eq!(parse_utterance("halt").map(Command::to_byte), Some(b'S'));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse_utterance("STOP"), Some(Command::Stop));
        assert_eq!(parse_utterance("Turn Left"), Some(Command::TurnLeft));
    }

    #[test]
    fn test_earlier_group_wins() {
        // "back" is checked before "left"
        assert_eq!(parse_utterance("back left"), Some(Command::DriveForward));
        // "forward" is checked before "stop"
        assert_eq!(parse_utterance("stop going forward"), Some(Command::DriveBackward));
    }

    #[test]
    fn test_non_motion_utterance() {
        assert_eq!(parse_utterance("what time is it"), None);
        assert_eq!(parse_utterance(""), None);
    }

    #[test]
    fn test_host_faces() {
        assert_eq!(THINKING_FACE.to_byte(), b'T');
        assert_eq!(IDLE_FACE.to_byte(), b'O');
        assert_eq!(SHUTDOWN_SEQUENCE.map(Command::to_byte), [b'S', b'O']);
    }
}
