//! I2C peripheral status-flag encodings
//!
//! The F4's I2C status is split across SR1 and SR2. Flags are encoded the
//! way the reference manual tables number them, with a bank marker in the
//! upper half-word: 0x0001_0000 for SR1, 0x0010_0000 for SR2. The low
//! half-word is the bit mask within the selected register.

/// Mask selecting the in-register bit of a flag encoding.
pub const FLAG_MASK: u32 = 0x0000_FFFF;

/// SR1 bank marker.
pub const BANK_SR1: u32 = 0x0001_0000;

/// SR2 bank marker.
pub const BANK_SR2: u32 = 0x0010_0000;

/// Status flags polled by the transaction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flag {
    /// Start condition generated (SR1 bit 0)
    StartBit,
    /// Address sent and acknowledged (SR1 bit 1)
    Address,
    /// Byte transfer finished (SR1 bit 2)
    ByteTransferFinished,
    /// Receive data register not empty (SR1 bit 6)
    RxNotEmpty,
    /// Transmit data register empty (SR1 bit 7)
    TxEmpty,
    /// Acknowledge failure (SR1 bit 10)
    AckFailure,
    /// Bus busy (SR2 bit 1)
    Busy,
}

impl Flag {
    /// Raw encoding: bank marker plus in-register bit.
    pub const fn raw(self) -> u32 {
        match self {
            Flag::StartBit => BANK_SR1 | (1 << 0),
            Flag::Address => BANK_SR1 | (1 << 1),
            Flag::ByteTransferFinished => BANK_SR1 | (1 << 2),
            Flag::RxNotEmpty => BANK_SR1 | (1 << 6),
            Flag::TxEmpty => BANK_SR1 | (1 << 7),
            Flag::AckFailure => BANK_SR1 | (1 << 10),
            Flag::Busy => BANK_SR2 | (1 << 1),
        }
    }

    /// True for flags that live in SR2.
    pub const fn in_sr2(self) -> bool {
        self.raw() & BANK_SR2 != 0
    }

    /// Bit mask within the status register.
    pub const fn bit(self) -> u32 {
        self.raw() & FLAG_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_banks() {
        assert!(!Flag::StartBit.in_sr2());
        assert!(!Flag::AckFailure.in_sr2());
        assert!(Flag::Busy.in_sr2());
    }

    #[test]
    fn test_flag_encodings() {
        // Reference manual numbering
        assert_eq!(Flag::StartBit.raw(), 0x0001_0001);
        assert_eq!(Flag::Address.raw(), 0x0001_0002);
        assert_eq!(Flag::ByteTransferFinished.raw(), 0x0001_0004);
        assert_eq!(Flag::RxNotEmpty.raw(), 0x0001_0040);
        assert_eq!(Flag::TxEmpty.raw(), 0x0001_0080);
        assert_eq!(Flag::AckFailure.raw(), 0x0001_0400);
        assert_eq!(Flag::Busy.raw(), 0x0010_0002);
    }

    #[test]
    fn test_bit_strips_bank() {
        assert_eq!(Flag::TxEmpty.bit(), 0x0080);
        assert_eq!(Flag::Busy.bit(), 0x0002);
    }
}
