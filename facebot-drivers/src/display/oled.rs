//! SSD1306 / SH1106 OLED display driver
//!
//! Driver for 128x64 monochrome OLED modules via blocking I2C. Drawing
//! goes to a local 1-bit frame buffer organised as 8 pages of 8 rows;
//! `flush` sends the whole buffer page by page.
//!
//! The two controllers take the same commands here; the SH1106 has a
//! 132-column RAM and the panel starts at column 2.

use embedded_hal::i2c::I2c;

use facebot_core::traits::{DisplayError, FaceCanvas, CANVAS_HEIGHT, CANVAS_WIDTH};

/// OLED I2C address (typically 0x3C or 0x3D)
pub const OLED_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = CANVAS_WIDTH as usize;
const HEIGHT: usize = CANVAS_HEIGHT as usize;
const PAGES: usize = HEIGHT / 8;

/// I2C control bytes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// Controller commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    0x02,                  // Page addressing (the only mode SH1106 has)
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0xCF, // High contrast
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// Display controller variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OledModel {
    #[default]
    Ssd1306,
    Sh1106,
}

impl OledModel {
    /// First RAM column of the visible panel
    fn column_offset(self) -> u8 {
        match self {
            OledModel::Ssd1306 => 0,
            OledModel::Sh1106 => 2,
        }
    }
}

/// OLED driver
pub struct Oled<I2C> {
    i2c: I2C,
    address: u8,
    model: OledModel,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
    /// Flushes abandoned on a bus error
    flush_errors: u32,
}

impl<I2C: I2c> Oled<I2C> {
    /// Create a new driver at the default address
    pub fn new(i2c: I2C, model: OledModel) -> Self {
        Self::with_address(i2c, model, OLED_ADDR)
    }

    /// Create a new driver at a specific address
    pub fn with_address(i2c: I2C, model: OledModel, address: u8) -> Self {
        Self {
            i2c,
            address,
            model,
            buffer: [[0; WIDTH]; PAGES],
            flush_errors: 0,
        }
    }

    /// Send one command byte
    fn command(&mut self, c: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, c])
    }

    /// Send one page of the buffer
    fn write_page(&mut self, page: usize) -> Result<(), I2C::Error> {
        let column = self.model.column_offset();
        self.i2c.write(
            self.address,
            &[
                CONTROL_COMMAND,
                cmd::SET_PAGE_ADDR | page as u8,
                cmd::SET_LOW_COLUMN | (column & 0x0F),
                cmd::SET_HIGH_COLUMN | (column >> 4),
            ],
        )?;

        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;
        data[1..].copy_from_slice(&self.buffer[page]);
        self.i2c.write(self.address, &data)
    }

    /// Set one pixel, ignoring anything off-canvas
    fn set_pixel(&mut self, x: i16, y: i16) {
        if x < 0 || y < 0 || x >= WIDTH as i16 || y >= HEIGHT as i16 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        self.buffer[y / 8][x] |= 1 << (y % 8);
    }

    /// Check whether a pixel is lit in the frame buffer
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Number of lit pixels in the frame buffer
    pub fn lit_pixels(&self) -> u32 {
        self.buffer
            .iter()
            .flat_map(|page| page.iter())
            .map(|b| b.count_ones())
            .sum()
    }

    /// Flushes abandoned on a bus error since creation
    pub fn flush_errors(&self) -> u32 {
        self.flush_errors
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> FaceCanvas for Oled<I2C> {
    fn init(&mut self) -> Result<(), DisplayError> {
        for &c in INIT_SEQUENCE {
            self.command(c).map_err(|_| DisplayError::Communication)?;
        }
        Ok(())
    }

    fn clear(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    fn fill_rect(&mut self, x: u8, y: u8, width: u8, height: u8) {
        let x_end = (x as usize + width as usize).min(WIDTH);
        let y_end = (y as usize + height as usize).min(HEIGHT);
        for py in y as usize..y_end {
            for px in x as usize..x_end {
                self.set_pixel(px as i16, py as i16);
            }
        }
    }

    fn fill_circle(&mut self, x: u8, y: u8, radius: u8) {
        let (cx, cy, r) = (x as i16, y as i16, radius as i16);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(cx + dx, cy + dy);
                }
            }
        }
    }

    fn flush(&mut self) {
        for page in 0..PAGES {
            if self.write_page(page).is_err() {
                self.flush_errors = self.flush_errors.wrapping_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("OLED flush failed at page {}", page);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use heapless::Vec;

    #[derive(Debug)]
    struct BusError;

    impl embedded_hal::i2c::Error for BusError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Records command and data bytes separately
    #[derive(Default)]
    struct FakeBus {
        fail: bool,
        address: Option<u8>,
        commands: Vec<u8, 2048>,
        data: Vec<u8, 2048>,
    }

    impl ErrorType for FakeBus {
        type Error = BusError;
    }

    impl I2c for FakeBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), BusError> {
            if self.fail {
                return Err(BusError);
            }
            self.address = Some(address);
            for op in operations {
                if let Operation::Write(bytes) = op {
                    let (control, rest) = bytes.split_first().ok_or(BusError)?;
                    let sink = if *control == CONTROL_DATA {
                        &mut self.data
                    } else {
                        &mut self.commands
                    };
                    sink.extend_from_slice(rest).map_err(|_| BusError)?;
                }
            }
            Ok(())
        }
    }

    fn oled(model: OledModel) -> Oled<FakeBus> {
        Oled::new(FakeBus::default(), model)
    }

    #[test]
    fn test_init_sends_sequence() {
        let mut display = oled(OledModel::Ssd1306);
        assert_eq!(display.init(), Ok(()));

        let bus = display.release();
        assert_eq!(bus.address, Some(OLED_ADDR));
        assert_eq!(bus.commands.as_slice(), INIT_SEQUENCE);
        assert_eq!(bus.commands.last(), Some(&cmd::DISPLAY_ON));
    }

    #[test]
    fn test_init_failure() {
        let bus = FakeBus {
            fail: true,
            ..Default::default()
        };
        let mut display = Oled::new(bus, OledModel::Ssd1306);
        assert_eq!(display.init(), Err(DisplayError::Communication));
    }

    #[test]
    fn test_fill_rect() {
        let mut display = oled(OledModel::Ssd1306);
        display.fill_rect(10, 6, 3, 4);

        assert_eq!(display.lit_pixels(), 12);
        assert!(display.pixel(10, 6));
        assert!(display.pixel(12, 9)); // crosses page boundary at y=8
        assert!(!display.pixel(13, 9));
        assert!(!display.pixel(10, 10));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut display = oled(OledModel::Ssd1306);
        display.fill_rect(126, 62, 10, 10);
        assert_eq!(display.lit_pixels(), 4);
        assert!(display.pixel(127, 63));
    }

    #[test]
    fn test_fill_circle() {
        let mut display = oled(OledModel::Ssd1306);
        display.fill_circle(64, 52, 3);

        assert!(display.pixel(64, 52));
        assert!(display.pixel(61, 52));
        assert!(display.pixel(64, 55));
        assert!(!display.pixel(61, 49)); // corner outside the circle
        assert!(!display.pixel(65, 56));
        // r=3: 29 lattice points with dx²+dy² <= 9
        assert_eq!(display.lit_pixels(), 29);
    }

    #[test]
    fn test_clear() {
        let mut display = oled(OledModel::Ssd1306);
        display.fill_rect(0, 0, 128, 64);
        assert_eq!(display.lit_pixels(), 128 * 64);
        display.clear();
        assert_eq!(display.lit_pixels(), 0);
    }

    #[test]
    fn test_flush_sends_every_page() {
        let mut display = oled(OledModel::Ssd1306);
        display.fill_rect(0, 0, 1, 1);
        display.flush();

        let bus = display.release();
        assert_eq!(bus.data.len(), WIDTH * PAGES);
        assert_eq!(bus.data[0], 0x01);
        assert_eq!(bus.data[1], 0x00);
        // Page addressing for page 0, column 0
        assert_eq!(&bus.commands[..3], &[0xB0, 0x00, 0x10]);
        assert_eq!(&bus.commands[bus.commands.len() - 3..], &[0xB7, 0x00, 0x10]);
    }

    #[test]
    fn test_sh1106_column_offset() {
        let mut display = oled(OledModel::Sh1106);
        display.flush();
        let bus = display.release();
        assert_eq!(&bus.commands[..3], &[0xB0, 0x02, 0x10]);
    }

    #[test]
    fn test_flush_error_counted_not_propagated() {
        let bus = FakeBus {
            fail: true,
            ..Default::default()
        };
        let mut display = Oled::new(bus, OledModel::Ssd1306);
        display.flush();
        display.flush();
        assert_eq!(display.flush_errors(), 2);
    }
}
