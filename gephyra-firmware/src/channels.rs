//! Inter-task communication channels
//!
//! Static embassy-sync channels carrying the fixed-size exchange
//! payloads between tasks. These are the only shared state.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use gephyra_core::EXCHANGE_LEN;

/// Channel capacity for pending console requests
const REQUEST_CHANNEL_SIZE: usize = 4;

/// Channel capacity for responses awaiting echo
const RESPONSE_CHANNEL_SIZE: usize = 4;

/// Full request payloads from the console accumulator to the bus owner
pub static REQUEST_CHANNEL: Channel<
    CriticalSectionRawMutex,
    [u8; EXCHANGE_LEN],
    REQUEST_CHANNEL_SIZE,
> = Channel::new();

/// Peer responses from the bus owner to the console echo task
pub static RESPONSE_CHANNEL: Channel<
    CriticalSectionRawMutex,
    [u8; EXCHANGE_LEN],
    RESPONSE_CHANNEL_SIZE,
> = Channel::new();
