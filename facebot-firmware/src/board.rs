//! Board wiring for the Facebot carrier (Raspberry Pi Pico)
//!
//! | Function              | GPIO | Peripheral      |
//! |-----------------------|------|-----------------|
//! | Host link TX          | 0    | UART0           |
//! | Host link RX          | 1    | UART0           |
//! | Left motor enable     | 2    | PWM slice 1 (A) |
//! | Right motor enable    | 3    | PWM slice 1 (B) |
//! | OLED SDA              | 4    | I2C0            |
//! | OLED SCL              | 5    | I2C0            |
//! | Left motor IN1 / IN2  | 6, 7 | GPIO            |
//! | Right motor IN3 / IN4 | 8, 9 | GPIO            |
//!
//! Pins are claimed directly from the peripheral struct in `main`, so this
//! table and the code there must change together.

/// PWM counter wrap for the motor enable pins
///
/// 125 MHz / (PWM_TOP + 1) gives a 2 kHz carrier, which H-bridge modules
/// such as the L298N handle without audible whine at low duty.
pub const PWM_TOP: u16 = 62_499;

/// I2C clock for the OLED
pub const I2C_FREQUENCY: u32 = 400_000;

/// Host link transmit buffer (status lines)
pub const UART_TX_BUF: usize = 256;

/// Host link receive buffer (command bytes)
pub const UART_RX_BUF: usize = 64;
