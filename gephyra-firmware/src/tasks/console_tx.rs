//! Console UART transmit task
//!
//! Echoes completed peer responses back to the console.

use defmt::*;
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartTx;

use crate::channels::RESPONSE_CHANNEL;

/// Console TX task - echoes responses as raw bytes
#[embassy_executor::task]
pub async fn console_tx_task(mut tx: UartTx<'static, Async>) {
    info!("Console TX task started");

    loop {
        let response = RESPONSE_CHANNEL.receive().await;
        if let Err(e) = tx.write(&response).await {
            warn!("Console write error: {:?}", e);
        }
    }
}
