//! Serial link traits
//!
//! The host link is split in two: bytes in (commands) and lines out
//! (status). Neither side may block the control loop.

/// Source of command bytes
pub trait CommandInput {
    /// Take one byte if one is already buffered
    ///
    /// Returns `None` immediately when nothing is waiting.
    fn try_read_byte(&mut self) -> Option<u8>;
}

/// Sink for human-readable status lines
///
/// Status output is advisory; implementations drop what they cannot send.
pub trait StatusOutput {
    /// Write one line (without line terminator)
    fn write_line(&mut self, line: &str);
}
