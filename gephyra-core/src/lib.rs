//! Board-agnostic core logic for the Gephyra console bridge
//!
//! This crate contains the application logic that does not depend on
//! specific hardware implementations:
//!
//! - Console byte accumulation into fixed-size request payloads
//! - The write-then-read bus exchange with bounded retry
//! - Link health tracking

#![no_std]
#![deny(unsafe_code)]

pub mod bridge;

pub use bridge::{
    exchange, BridgeError, ConsoleBridge, LinkHealth, LinkPolicy, EXCHANGE_LEN,
};
