//! PAC-backed register port
//!
//! Maps the `I2cPort` seam onto a real I2C instance through the embassy
//! PAC. Clock and GPIO bring-up belong to the board code; this type only
//! drives the I2C register block itself.

use embassy_stm32::pac::i2c::I2c as I2cInstance;

use gephyra_hal::FastDuty;

use crate::i2c::I2cPort;
use crate::regs::Flag;
use crate::timing::BusTiming;

// OAR1 bit 14 must be kept set by software
const OAR1_RESERVED: u32 = 1 << 14;

/// Register port over a PAC I2C instance.
pub struct PacPort {
    regs: I2cInstance,
}

impl PacPort {
    /// Wrap a PAC instance, e.g. `embassy_stm32::pac::I2C1`.
    pub fn new(regs: I2cInstance) -> Self {
        Self { regs }
    }
}

impl I2cPort for PacPort {
    fn configure(&mut self, timing: &BusTiming) {
        self.regs.cr1().modify(|w| w.set_pe(false));
        self.regs.cr2().modify(|w| w.set_freq(timing.freq_range));
        self.regs.ccr().write(|w| {
            w.set_f_s(timing.fast);
            w.set_duty(matches!(timing.duty, FastDuty::Ratio16to9));
            w.set_ccr(timing.ccr);
        });
        self.regs.trise().write(|w| w.set_trise(timing.trise));
        self.regs.oar1().write(|w| w.0 = OAR1_RESERVED);
        self.regs.cr1().modify(|w| w.set_pe(true));
    }

    fn flag(&mut self, flag: Flag) -> bool {
        let status = if flag.in_sr2() {
            self.regs.sr2().read().0
        } else {
            self.regs.sr1().read().0
        };
        status & flag.bit() != 0
    }

    fn request_start(&mut self) {
        self.regs.cr1().modify(|w| w.set_start(true));
    }

    fn request_stop(&mut self) {
        self.regs.cr1().modify(|w| w.set_stop(true));
    }

    fn stop_pending(&mut self) -> bool {
        self.regs.cr1().read().stop()
    }

    fn set_ack(&mut self, on: bool) {
        self.regs.cr1().modify(|w| w.set_ack(on));
    }

    fn clear_address_flag(&mut self) {
        let _ = self.regs.sr1().read();
        let _ = self.regs.sr2().read();
    }

    fn clear_ack_failure(&mut self) {
        self.regs.sr1().modify(|w| w.set_af(false));
    }

    fn write_data(&mut self, byte: u8) {
        self.regs.dr().write(|w| w.set_dr(byte));
    }

    fn read_data(&mut self) -> u8 {
        self.regs.dr().read().dr()
    }
}
