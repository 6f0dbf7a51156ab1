//! Hardware abstraction traits for Gephyra
//!
//! Defines the contracts the portable crates program against: the I2C
//! bus-master transaction contract and the monotonic clock that bounds
//! every wait inside a driver. Chip crates supply the implementations.

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod time;

pub use i2c::{BusError, BusPhase, FastDuty, I2cConfig, I2cMaster};
pub use time::{Deadline, Monotonic, SystemClock};
