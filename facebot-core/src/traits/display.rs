//! Face canvas trait

/// Canvas width in pixels
pub const CANVAS_WIDTH: u8 = 128;

/// Canvas height in pixels
pub const CANVAS_HEIGHT: u8 = 64;

/// Errors that can occur bringing up the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus error talking to the display controller
    Communication,
    /// Controller did not accept the init sequence
    NotInitialized,
}

/// Trait for a monochrome 128x64 frame buffer display
///
/// Drawing calls only touch the local buffer; `flush` pushes it to the
/// panel. Only `init` can fail. Coordinates are pixels from the top-left
/// corner and all shapes the face draws are constants inside the canvas.
pub trait FaceCanvas {
    /// Bring up the display controller
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the whole frame buffer
    fn clear(&mut self);

    /// Fill a rectangle
    fn fill_rect(&mut self, x: u8, y: u8, width: u8, height: u8);

    /// Fill a circle centered on (x, y)
    fn fill_circle(&mut self, x: u8, y: u8, radius: u8);

    /// Push the frame buffer to the panel
    fn flush(&mut self);
}
