//! Serial link to the voice host
//!
//! Wraps any `embedded-io` port (a buffered UART on target, an in-memory
//! pipe in tests). Bytes are only read when the port says some are
//! already waiting, and status lines are only written when the port can
//! take them, so neither side ever blocks the control loop.

use embedded_io::{Read, ReadReady, Write, WriteReady};
use heapless::Vec;

use facebot_core::traits::{CommandInput, StatusOutput};

/// Line terminator for status output
const LINE_END: &[u8] = b"\r\n";

/// Longest status line sent in one write, terminator included
const MAX_LINE: usize = 96;

/// Serial port adapter
pub struct SerialPort<T> {
    port: T,
    /// Port errors and dropped status lines since creation
    errors: u32,
}

impl<T> SerialPort<T> {
    pub fn new(port: T) -> Self {
        Self { port, errors: 0 }
    }

    /// Port errors and dropped status lines since creation
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Borrow the underlying port
    pub fn port(&self) -> &T {
        &self.port
    }

    /// Borrow the underlying port mutably
    pub fn port_mut(&mut self) -> &mut T {
        &mut self.port
    }

    fn count_error(&mut self) {
        self.errors = self.errors.wrapping_add(1);
    }
}

impl<T: Read + ReadReady> CommandInput for SerialPort<T> {
    fn try_read_byte(&mut self) -> Option<u8> {
        match self.port.read_ready() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(_) => {
                self.count_error();
                return None;
            }
        }

        let mut buf = [0u8; 1];
        match self.port.read(&mut buf) {
            Ok(1) => Some(buf[0]),
            Ok(_) => None,
            Err(_) => {
                self.count_error();
                #[cfg(feature = "defmt")]
                defmt::warn!("serial read failed");
                None
            }
        }
    }
}

impl<T: Write + WriteReady> StatusOutput for SerialPort<T> {
    /// Send one line with a single `write`
    ///
    /// The line is dropped when the port has no room, and cut short when
    /// the port takes only part of it. Either way it counts as an error.
    fn write_line(&mut self, line: &str) {
        match self.port.write_ready() {
            Ok(true) => {}
            Ok(false) | Err(_) => {
                self.count_error();
                return;
            }
        }

        let body = line.as_bytes();
        let body = &body[..body.len().min(MAX_LINE - LINE_END.len())];
        let mut frame: Vec<u8, MAX_LINE> = Vec::new();
        let _ = frame.extend_from_slice(body);
        let _ = frame.extend_from_slice(LINE_END);

        match self.port.write(&frame) {
            Ok(n) if n == frame.len() => {}
            _ => {
                self.count_error();
                #[cfg(feature = "defmt")]
                defmt::warn!("status line dropped");
            }
        }
    }
}
