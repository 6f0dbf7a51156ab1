//! Board wiring for the STM32F407 bridge
//!
//! Claims I2C1 on PB6 (SCL) / PB7 (SDA): peripheral clock, open-drain
//! alternate-function pins, then hands the register block to the port.

use embassy_stm32::pac;
use embassy_stm32::pac::gpio::vals::{Moder, Ospeedr, Ot, Pupdr};
use embassy_stm32::peripherals::{I2C1, PB6, PB7};
use embassy_stm32::Peri;

use gephyra_hal_stm32f4::PacPort;

/// I2C1 alternate function number on PB6/PB7.
const AF_I2C1: u8 = 4;

/// Bring up I2C1 and wrap it as a register port.
///
/// Consumes the peripheral and pin singletons so nothing else in the
/// firmware can claim them.
pub fn i2c1_port(
    _instance: Peri<'static, I2C1>,
    _scl: Peri<'static, PB6>,
    _sda: Peri<'static, PB7>,
) -> PacPort {
    // Peripheral clock plus a reset pulse for a clean register state
    pac::RCC.ahb1enr().modify(|w| w.set_gpioben(true));
    pac::RCC.apb1enr().modify(|w| w.set_i2c1en(true));
    pac::RCC.apb1rstr().modify(|w| w.set_i2c1rst(true));
    pac::RCC.apb1rstr().modify(|w| w.set_i2c1rst(false));

    // PB6/PB7 as open-drain AF4 with pull-ups
    let gpio = pac::GPIOB;
    for pin in [6usize, 7] {
        gpio.otyper().modify(|w| w.set_ot(pin, Ot::OPEN_DRAIN));
        gpio.ospeedr()
            .modify(|w| w.set_ospeedr(pin, Ospeedr::HIGH_SPEED));
        gpio.pupdr().modify(|w| w.set_pupdr(pin, Pupdr::PULL_UP));
        gpio.afr(pin / 8).modify(|w| w.set_afr(pin % 8, AF_I2C1));
        gpio.moder().modify(|w| w.set_moder(pin, Moder::ALTERNATE));
    }

    PacPort::new(pac::I2C1)
}
