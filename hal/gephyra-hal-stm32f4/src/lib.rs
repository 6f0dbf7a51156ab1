//! STM32F4 hardware layer for Gephyra
//!
//! Home of the register-level I2C bus master: the flag-polled transaction
//! engine (`i2c`), the timing math (`timing`) and the status-flag
//! encodings (`regs`). The engine is generic over the `I2cPort` register
//! seam, so the same code runs against the real peripheral (`port`,
//! behind a chip feature) or a scripted fake in host tests.

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
#[cfg(any(feature = "stm32f407vg", feature = "stm32f411ce"))]
pub mod port;
pub mod regs;
pub mod timing;

pub use i2c::{BusTimeouts, I2cBus, I2cPort};
#[cfg(any(feature = "stm32f407vg", feature = "stm32f411ce"))]
pub use port::PacPort;
pub use regs::Flag;
pub use timing::{BusTiming, ConfigError};
