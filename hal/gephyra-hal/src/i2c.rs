//! I2C bus-master abstraction
//!
//! Device addresses are passed left-aligned: the upper seven bits select
//! the device, bit 0 is reserved for the direction bit the driver appends
//! on the wire.

/// Transaction phase in which a bounded wait can run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusPhase {
    /// Waiting for the bus to leave the busy state
    Idle,
    /// Waiting for the start condition to appear on the wire
    Start,
    /// Waiting for the address byte to be acknowledged
    Address,
    /// Waiting for a data byte to complete
    Transfer,
    /// Waiting for the stop condition to finish
    Stop,
}

/// Bus transaction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// A flag wait exceeded its deadline in the given phase.
    ///
    /// The driver abandons the transaction where it stalled; callers must
    /// assume the bus may need recovery before reuse.
    Timeout(BusPhase),
    /// A readiness probe exhausted its trials without an acknowledge.
    NoAcknowledge,
}

/// Fast-mode duty cycle, t_low : t_high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FastDuty {
    Ratio2to1,
    Ratio16to9,
}

/// I2C bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Bus clock frequency in Hz
    pub frequency: u32,
    /// Duty cycle applied above 100 kHz; ignored in standard mode
    pub duty: FastDuty,
}

impl I2cConfig {
    /// Standard mode: 100 kHz
    pub const STANDARD: Self = Self {
        frequency: 100_000,
        duty: FastDuty::Ratio2to1,
    };

    /// Fast mode: 400 kHz
    pub const FAST: Self = Self {
        frequency: 400_000,
        duty: FastDuty::Ratio2to1,
    };
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Blocking bus-master transaction contract.
///
/// A call executes one complete transaction: start, address, data phases,
/// stop. Every wait inside an implementation is bounded, so a call either
/// completes or returns `BusError::Timeout` naming the phase that
/// stalled. Implementations never retry on their own; retry policy
/// belongs to the caller.
pub trait I2cMaster {
    /// Write `data` to the device at the left-aligned `address`.
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError>;

    /// Read `buffer.len()` bytes from the device at the left-aligned
    /// `address`.
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), BusError>;

    /// Probe for a device by running the start/address phase up to
    /// `trials` times, each bounded by `timeout_ms`.
    fn is_device_ready(&mut self, address: u8, trials: u8, timeout_ms: u32)
        -> Result<(), BusError>;
}
