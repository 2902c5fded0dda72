//! Facebot - Wheeled Robot Face & Drive Firmware
//!
//! Main firmware binary for the RP2040. One cooperative loop reads a
//! command byte from the host link, drives the motors or switches the face
//! mode, then advances the blink animation.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Instant;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use facebot_core::router::Dispatch;
use facebot_core::{Millis, Robot};
use facebot_drivers::{DualHBridge, HBridgeSide, Oled, OledModel, SerialPort};

use crate::config::ROBOT_CONFIG;

mod board;
mod config;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; board::UART_TX_BUF]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; board::UART_RX_BUF]> = StaticCell::new();

/// Milliseconds since boot, truncated to the wrapping loop clock
fn now() -> Millis {
    Instant::now().as_millis() as Millis
}

/// Park the core forever
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Facebot firmware starting...");
    info!("Config: {}", ROBOT_CONFIG);

    let p = embassy_rp::init(Default::default());

    // Motors: enable pins on one PWM slice, direction pins as plain outputs
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = board::PWM_TOP;
    let pwm = Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_2, p.PIN_3, pwm_config);
    let (Some(left_en), Some(right_en)) = pwm.split() else {
        error!("PWM slice 1 did not yield both channels");
        halt();
    };

    let left = HBridgeSide::new(
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        left_en,
    );
    let right = HBridgeSide::new(
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        right_en,
    );
    let motors = DualHBridge::new(left, right);
    info!("Motors initialized");

    // OLED on I2C0
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = board::I2C_FREQUENCY;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let canvas = Oled::new(i2c, OledModel::Ssd1306);

    // Host link on UART0
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = ROBOT_CONFIG.serial.baudrate;

    let tx_buf = TX_BUF.init([0u8; board::UART_TX_BUF]);
    let rx_buf = RX_BUF.init([0u8; board::UART_RX_BUF]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", ROBOT_CONFIG.serial.baudrate);

    let mut robot = match Robot::start(
        &ROBOT_CONFIG,
        motors,
        canvas,
        SerialPort::new(rx),
        SerialPort::new(tx),
        now(),
    ) {
        Ok(robot) => robot,
        Err(e) => {
            error!("Display init failed: {}, halting", e);
            halt();
        }
    };

    info!("Control loop running");

    loop {
        match robot.step(now()) {
            Dispatch::Idle => {}
            Dispatch::Executed(command) => debug!("Executed {}", command),
            Dispatch::Unrecognized(byte) => warn!("Unrecognized byte {=u8:#04x}", byte),
        }
        yield_now().await;
    }
}
