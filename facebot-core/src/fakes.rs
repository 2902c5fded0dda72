//! Fake capabilities for host tests

use heapless::{Deque, String, Vec};

use crate::face::Frame;
use crate::face::Shape;
use crate::traits::{
    CommandInput, DisplayError, FaceCanvas, MotorChannels, MotorDirection, MotorOutput, Side,
    SideOutput, StatusOutput,
};

/// Records the last output per side
#[derive(Debug, Default)]
pub struct FakeMotors {
    pub left: SideOutput,
    pub right: SideOutput,
    pub writes: usize,
}

impl FakeMotors {
    pub fn side(&self, side: Side) -> SideOutput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn output(&self) -> MotorOutput {
        MotorOutput {
            left: self.left,
            right: self.right,
        }
    }
}

impl MotorChannels for FakeMotors {
    fn set_side(&mut self, side: Side, direction: MotorDirection, magnitude: u8) {
        let out = SideOutput::new(direction, magnitude);
        match side {
            Side::Left => self.left = out,
            Side::Right => self.right = out,
        }
        self.writes += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Rect(u8, u8, u8, u8),
    Circle(u8, u8, u8),
}

impl From<&Shape> for DrawCall {
    fn from(shape: &Shape) -> Self {
        match *shape {
            Shape::Rect { x, y, w, h } => DrawCall::Rect(x, y, w, h),
            Shape::Circle { x, y, r } => DrawCall::Circle(x, y, r),
        }
    }
}

/// Keeps the draw calls since the last clear, and a copy of what was
/// on screen at the last flush
#[derive(Debug, Default)]
pub struct FakeCanvas {
    pub fail_init: bool,
    pub initialized: bool,
    pub pending: Vec<DrawCall, 16>,
    pub shown: Vec<DrawCall, 16>,
    pub clears: usize,
    pub flushes: usize,
}

impl FakeCanvas {
    /// Which frame is on screen, if it matches one exactly
    pub fn shown_frame(&self) -> Option<Frame> {
        [Frame::EyesOpen, Frame::EyesClosed, Frame::Thinking]
            .into_iter()
            .find(|frame| {
                let shapes = frame.shapes();
                shapes.len() == self.shown.len()
                    && shapes
                        .iter()
                        .zip(self.shown.iter())
                        .all(|(s, call)| DrawCall::from(s) == *call)
            })
    }
}

impl FaceCanvas for FakeCanvas {
    fn init(&mut self) -> Result<(), DisplayError> {
        if self.fail_init {
            return Err(DisplayError::Communication);
        }
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) {
        self.pending.clear();
        self.clears += 1;
    }

    fn fill_rect(&mut self, x: u8, y: u8, width: u8, height: u8) {
        let _ = self.pending.push(DrawCall::Rect(x, y, width, height));
    }

    fn fill_circle(&mut self, x: u8, y: u8, radius: u8) {
        let _ = self.pending.push(DrawCall::Circle(x, y, radius));
    }

    fn flush(&mut self) {
        self.shown = self.pending.clone();
        self.flushes += 1;
    }
}

/// Queue of bytes waiting to be read
#[derive(Debug, Default)]
pub struct FakeInput {
    pub queue: Deque<u8, 64>,
    pub reads: usize,
}

impl FakeInput {
    pub fn with_bytes(bytes: &[u8]) -> Self {
        let mut input = Self::default();
        input.push(bytes);
        input
    }

    pub fn push(&mut self, bytes: &[u8]) {
        for &b in bytes {
            let _ = self.queue.push_back(b);
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl CommandInput for FakeInput {
    fn try_read_byte(&mut self) -> Option<u8> {
        self.reads += 1;
        self.queue.pop_front()
    }
}

/// Collects status lines
#[derive(Debug, Default)]
pub struct FakeStatus {
    pub lines: Vec<String<96>, 32>,
}

impl FakeStatus {
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|l| l.as_str())
    }
}

impl StatusOutput for FakeStatus {
    fn write_line(&mut self, line: &str) {
        let mut s = String::new();
        let _ = s.push_str(line);
        let _ = self.lines.push(s);
    }
}
