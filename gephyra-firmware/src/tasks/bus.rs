//! Bus owner task
//!
//! Single owner of the I2C master, the display and the status LED. Runs
//! console exchanges from the request channel and refreshes the
//! link-health line between them.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_stm32::gpio::Output;
use embassy_time::{Duration, Ticker};

use gephyra_core::bridge::{self, BridgeError, LinkHealth, LinkPolicy};
use gephyra_core::EXCHANGE_LEN;
use gephyra_display::{Color, Ssd1306, FONT_7X10};
use gephyra_hal::SystemClock;
use gephyra_hal_stm32f4::{I2cBus, PacPort};

use crate::channels::{REQUEST_CHANNEL, RESPONSE_CHANNEL};

/// Left-aligned bus address of the console companion peripheral.
const PEER_ADDR: u8 = 0x52;

/// Link-health refresh interval
const STATUS_PERIOD_MS: u64 = 250;

/// Bus task - the only task that touches the wire
#[embassy_executor::task]
pub async fn bus_task(
    mut bus: I2cBus<PacPort, SystemClock>,
    mut display: Ssd1306,
    mut led: Output<'static>,
) {
    info!("Bus task started");

    let mut policy = LinkPolicy::new();
    let mut shown_health = None;
    let mut ticker = Ticker::every(Duration::from_millis(STATUS_PERIOD_MS));

    loop {
        match select(REQUEST_CHANNEL.receive(), ticker.next()).await {
            Either::First(request) => {
                let mut response = [0u8; EXCHANGE_LEN];
                match bridge::exchange(&mut bus, PEER_ADDR, &request, &mut response, &mut policy) {
                    Ok(()) => {
                        RESPONSE_CHANNEL.send(response).await;
                        led.toggle();
                        trace!("Exchange complete");
                    }
                    Err(BridgeError::LinkFailed(e)) => {
                        warn!("Exchange failed: {:?}", e);
                    }
                }
            }
            Either::Second(()) => {
                if shown_health != Some(policy.health()) {
                    shown_health = Some(policy.health());
                    render_health(&mut display, &mut bus, policy.health());
                }
            }
        }
    }
}

/// Redraw the status line after a health transition.
fn render_health(
    display: &mut Ssd1306,
    bus: &mut I2cBus<PacPort, SystemClock>,
    health: LinkHealth,
) {
    // Same-width labels so the longer one never leaves stale pixels
    let label = match health {
        LinkHealth::Healthy => "LINK OK  ",
        LinkHealth::Degraded => "LINK DOWN",
    };

    display.goto_xy(0, 54);
    let _ = display.put_str(label, &FONT_7X10, Color::White);
    if let Err(e) = display.update_screen(bus) {
        warn!("Status update failed: {:?}", e);
    }
}
