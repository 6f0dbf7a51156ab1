//! Console UART receive task
//!
//! Accumulates console bytes into exchange-sized requests for the bus
//! owner.

use defmt::*;
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartRx;
use embassy_time::{Duration, Timer};

use gephyra_core::ConsoleBridge;

use crate::channels::REQUEST_CHANNEL;

/// Console RX task - builds request payloads byte by byte
#[embassy_executor::task]
pub async fn console_rx_task(mut rx: UartRx<'static, Async>) {
    info!("Console RX task started");

    let mut bridge = ConsoleBridge::new();
    let mut buf = [0u8; 1];

    loop {
        match rx.read(&mut buf).await {
            Ok(()) => {
                if let Some(request) = bridge.accept(buf[0]) {
                    trace!("Request complete");
                    REQUEST_CHANNEL.send(request).await;
                }
            }
            Err(e) => {
                warn!("Console read error: {:?}", e);
                Timer::after(Duration::from_millis(10)).await;
            }
        }
    }
}
