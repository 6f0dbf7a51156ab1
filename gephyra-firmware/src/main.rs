//! Gephyra bridge firmware
//!
//! Firmware for the STM32F407 console-to-bus bridge. Accumulates console
//! bytes from USART1 into fixed-size requests, exchanges them with the
//! peer on the I2C bus and mirrors link state on an SSD1306 OLED.

#![no_std]
#![no_main]

mod board;
mod channels;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::peripherals::USART1;
use embassy_stm32::usart::{self, Uart};
use embassy_stm32::{peripherals, rcc};
use {defmt_rtt as _, panic_probe as _};

use gephyra_display::{Color, Ssd1306, FONT_11X18, FONT_7X10};
use gephyra_hal::{I2cConfig, SystemClock};
use gephyra_hal_stm32f4::I2cBus;

use crate::tasks::{bus_task, console_rx_task, console_tx_task};

bind_interrupts!(struct Irqs {
    USART1 => usart::InterruptHandler<USART1>;
});

/// Console baud rate.
const BAUD_RATE: u32 = 115_200;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Gephyra firmware starting...");

    let p = embassy_stm32::init(Default::default());

    // Status LED, toggled once per completed exchange
    let led = Output::new(p.PD12, Level::Low, Speed::Low);

    // Register-level I2C1 on PB6 (SCL) / PB7 (SDA)
    let port = board::i2c1_port(p.I2C1, p.PB6, p.PB7);
    let pclk_hz = rcc::frequency::<peripherals::I2C1>().0;
    let mut bus = I2cBus::new(port, SystemClock, pclk_hz, I2cConfig::STANDARD).unwrap();

    // Panel bring-up and boot banner
    let mut display = Ssd1306::new();
    match display.init(&mut bus) {
        Ok(()) => {
            info!("OLED initialized");
            display.goto_xy(20, 0);
            let _ = display.put_str("GEPHYRA", &FONT_11X18, Color::White);
            display.goto_xy(10, 30);
            let _ = display.put_str("console bridge", &FONT_7X10, Color::White);
            if let Err(e) = display.update_screen(&mut bus) {
                warn!("Banner update failed: {:?}", e);
            }
        }
        Err(e) => {
            error!("Display init failed: {:?}", e);
        }
    }

    // Console UART (PA10=RX, PA9=TX)
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = BAUD_RATE;

    let uart = Uart::new(
        p.USART1,
        p.PA10, // RX
        p.PA9,  // TX
        Irqs,
        p.DMA2_CH7,
        p.DMA2_CH2,
        uart_config,
    )
    .unwrap();

    let (tx, rx) = uart.split();

    spawner.spawn(console_rx_task(rx)).unwrap();
    spawner.spawn(console_tx_task(tx)).unwrap();
    spawner.spawn(bus_task(bus, display, led)).unwrap();

    info!("All tasks spawned");
}
