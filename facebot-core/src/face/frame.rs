//! Frame geometry
//!
//! Fixed shapes for each frame on the 128x64 canvas.

use crate::traits::{FaceCanvas, CANVAS_HEIGHT, CANVAS_WIDTH};

/// A filled shape in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shape {
    Rect { x: u8, y: u8, w: u8, h: u8 },
    Circle { x: u8, y: u8, r: u8 },
}

impl Shape {
    /// Check the shape lies entirely within the canvas
    pub fn in_bounds(&self) -> bool {
        match *self {
            Shape::Rect { x, y, w, h } => {
                x as u16 + w as u16 <= CANVAS_WIDTH as u16
                    && y as u16 + h as u16 <= CANVAS_HEIGHT as u16
            }
            Shape::Circle { x, y, r } => {
                x >= r
                    && y >= r
                    && (x as u16 + r as u16) < CANVAS_WIDTH as u16
                    && (y as u16 + r as u16) < CANVAS_HEIGHT as u16
            }
        }
    }

    /// Draw onto a canvas
    pub fn draw<D: FaceCanvas + ?Sized>(&self, canvas: &mut D) {
        match *self {
            Shape::Rect { x, y, w, h } => canvas.fill_rect(x, y, w, h),
            Shape::Circle { x, y, r } => canvas.fill_circle(x, y, r),
        }
    }
}

/// Everything the face can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    EyesOpen,
    EyesClosed,
    Thinking,
}

const EYES_OPEN: [Shape; 2] = [
    Shape::Rect { x: 28, y: 14, w: 24, h: 36 },
    Shape::Rect { x: 76, y: 14, w: 24, h: 36 },
];

// Closed eyes are thin bars at the vertical middle of the open eyes
const EYES_CLOSED: [Shape; 2] = [
    Shape::Rect { x: 28, y: 30, w: 24, h: 4 },
    Shape::Rect { x: 76, y: 30, w: 24, h: 4 },
];

const THINKING: [Shape; 5] = [
    Shape::Rect { x: 22, y: 8, w: 34, h: 30 },
    Shape::Rect { x: 72, y: 8, w: 34, h: 30 },
    Shape::Circle { x: 48, y: 52, r: 3 },
    Shape::Circle { x: 64, y: 52, r: 3 },
    Shape::Circle { x: 80, y: 52, r: 3 },
];

impl Frame {
    /// Shapes making up this frame, in draw order
    pub fn shapes(&self) -> &'static [Shape] {
        match self {
            Frame::EyesOpen => &EYES_OPEN,
            Frame::EyesClosed => &EYES_CLOSED,
            Frame::Thinking => &THINKING,
        }
    }

    /// Clear, draw this frame, flush
    pub fn render<D: FaceCanvas + ?Sized>(&self, canvas: &mut D) {
        canvas.clear();
        for shape in self.shapes() {
            shape.draw(canvas);
        }
        canvas.flush();
    }
}
