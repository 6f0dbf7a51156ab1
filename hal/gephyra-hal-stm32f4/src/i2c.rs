//! Flag-polled I2C bus master
//!
//! Blocking transaction engine over the raw register port. Every phase
//! waits on a status flag bounded by a deadline; a stalled phase abandons
//! the transaction and reports which phase timed out. The engine never
//! retries; retry policy belongs to the caller.

use embassy_time::Duration;
use gephyra_hal::{BusError, BusPhase, Deadline, I2cConfig, I2cMaster, Monotonic};

use crate::regs::Flag;
use crate::timing::{self, BusTiming, ConfigError};

/// Raw register access driven by the transaction engine.
///
/// Implementations map these onto the peripheral's CR1/SR1/SR2/DR
/// registers; host tests script them.
pub trait I2cPort {
    /// Program the timing registers and enable the peripheral.
    fn configure(&mut self, timing: &BusTiming);

    /// Read one status flag.
    fn flag(&mut self, flag: Flag) -> bool;

    /// Request a start condition.
    fn request_start(&mut self);

    /// Request a stop condition.
    fn request_stop(&mut self);

    /// True while a requested stop condition has not completed.
    fn stop_pending(&mut self) -> bool;

    /// Enable or disable acknowledging received bytes.
    fn set_ack(&mut self, on: bool);

    /// Clear the address flag (SR1 then SR2 read sequence).
    fn clear_address_flag(&mut self);

    /// Clear the acknowledge-failure flag.
    fn clear_ack_failure(&mut self);

    /// Load one byte into the data register.
    fn write_data(&mut self, byte: u8);

    /// Take one byte from the data register.
    fn read_data(&mut self) -> u8;
}

/// Per-phase wait budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusTimeouts {
    /// Generic flag wait: start, address and byte phases
    pub flag: Duration,
    /// Bus-idle wait before a transaction
    pub busy: Duration,
    /// Stop-condition completion wait
    pub stop: Duration,
}

impl Default for BusTimeouts {
    fn default() -> Self {
        Self {
            flag: Duration::from_millis(35),
            busy: Duration::from_millis(25),
            stop: Duration::from_millis(5),
        }
    }
}

const DIR_WRITE: u8 = 0x00;
const DIR_READ: u8 = 0x01;

/// Flag-polled bus master over a register port and a monotonic clock.
pub struct I2cBus<P, C> {
    port: P,
    clock: C,
    timeouts: BusTimeouts,
}

impl<P: I2cPort, C: Monotonic> I2cBus<P, C> {
    /// Configure the peripheral for `config` and hand back the driver.
    ///
    /// Timing is computed from `pclk_hz`, the APB1 clock feeding the
    /// peripheral; an unprogrammable request is rejected before the port
    /// is touched.
    pub fn new(
        mut port: P,
        clock: C,
        pclk_hz: u32,
        config: I2cConfig,
    ) -> Result<Self, ConfigError> {
        let timing = timing::compute(pclk_hz, &config)?;
        port.configure(&timing);
        Ok(Self {
            port,
            clock,
            timeouts: BusTimeouts::default(),
        })
    }

    /// Replace the default wait budgets.
    pub fn with_timeouts(mut self, timeouts: BusTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Release the underlying port.
    pub fn release(self) -> P {
        self.port
    }

    fn wait_flag(
        &mut self,
        flag: Flag,
        level: bool,
        budget: Duration,
        phase: BusPhase,
    ) -> Result<(), BusError> {
        let deadline = Deadline::after(&self.clock, budget);
        while self.port.flag(flag) != level {
            if deadline.expired(&self.clock) {
                return Err(BusError::Timeout(phase));
            }
        }
        Ok(())
    }

    /// Busy-wait, start and address phases shared by both directions.
    ///
    /// Leaves the address flag set; the caller clears it once direction
    /// specific setup is done.
    fn open(&mut self, address: u8, dir: u8) -> Result<(), BusError> {
        self.wait_flag(Flag::Busy, false, self.timeouts.busy, BusPhase::Idle)?;
        self.port.request_start();
        self.wait_flag(Flag::StartBit, true, self.timeouts.flag, BusPhase::Start)?;
        self.port.write_data((address & !0x01) | dir);
        self.wait_flag(Flag::Address, true, self.timeouts.flag, BusPhase::Address)?;
        Ok(())
    }

    /// Wait for a previously requested stop condition to complete.
    fn finish_stop(&mut self) -> Result<(), BusError> {
        let deadline = Deadline::after(&self.clock, self.timeouts.stop);
        while self.port.stop_pending() {
            if deadline.expired(&self.clock) {
                return Err(BusError::Timeout(BusPhase::Stop));
            }
        }
        Ok(())
    }
}

impl<P: I2cPort, C: Monotonic> I2cMaster for I2cBus<P, C> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        self.open(address, DIR_WRITE)?;
        self.port.clear_address_flag();

        for &byte in data {
            self.wait_flag(Flag::TxEmpty, true, self.timeouts.flag, BusPhase::Transfer)?;
            self.port.write_data(byte);
        }
        self.wait_flag(
            Flag::ByteTransferFinished,
            true,
            self.timeouts.flag,
            BusPhase::Transfer,
        )?;

        self.port.request_stop();
        self.finish_stop()
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), BusError> {
        if buffer.is_empty() {
            return Ok(());
        }

        self.port.set_ack(true);
        self.open(address, DIR_READ)?;

        let last = buffer.len() - 1;
        if last == 0 {
            // Single byte: NACK it and queue the stop before the transfer
            self.port.set_ack(false);
            self.port.clear_address_flag();
            self.port.request_stop();
            self.wait_flag(Flag::RxNotEmpty, true, self.timeouts.flag, BusPhase::Transfer)?;
            buffer[0] = self.port.read_data();
        } else {
            self.port.clear_address_flag();
            for i in 0..buffer.len() {
                if i == last {
                    self.port.set_ack(false);
                    self.port.request_stop();
                }
                self.wait_flag(Flag::RxNotEmpty, true, self.timeouts.flag, BusPhase::Transfer)?;
                buffer[i] = self.port.read_data();
            }
        }

        self.finish_stop()
    }

    fn is_device_ready(
        &mut self,
        address: u8,
        trials: u8,
        timeout_ms: u32,
    ) -> Result<(), BusError> {
        let budget = Duration::from_millis(timeout_ms as u64);

        for _ in 0..trials {
            self.wait_flag(Flag::Busy, false, self.timeouts.busy, BusPhase::Idle)?;
            self.port.request_start();
            self.wait_flag(Flag::StartBit, true, self.timeouts.flag, BusPhase::Start)?;
            self.port.write_data(address & !0x01);

            // The device answers with the address flag, absence with an
            // acknowledge failure
            let deadline = Deadline::after(&self.clock, budget);
            loop {
                if self.port.flag(Flag::Address) {
                    self.port.clear_address_flag();
                    self.port.request_stop();
                    return self.finish_stop();
                }
                if self.port.flag(Flag::AckFailure) {
                    self.port.clear_ack_failure();
                    self.port.request_stop();
                    self.finish_stop()?;
                    break;
                }
                if deadline.expired(&self.clock) {
                    return Err(BusError::Timeout(BusPhase::Address));
                }
            }
        }

        Err(BusError::NoAcknowledge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embassy_time::Instant;
    use heapless::Vec;

    /// Clock that advances one millisecond per observation, so stalled
    /// polls run out of budget deterministically.
    struct TickClock {
        ticks: Cell<u64>,
    }

    impl TickClock {
        fn new() -> Self {
            Self {
                ticks: Cell::new(0),
            }
        }
    }

    impl Monotonic for TickClock {
        fn now(&self) -> Instant {
            let t = self.ticks.get();
            self.ticks
                .set(t + Duration::from_millis(1).as_ticks());
            Instant::from_ticks(t)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Start,
        Stop,
        Byte(u8),
        Read(u8),
        Ack(bool),
    }

    /// Scripted register port emulating a cooperative peripheral.
    struct FakePort {
        /// Device on the wire acknowledges its address
        acks: bool,
        /// Address byte draws no reaction at all (no ack, no failure)
        silent: bool,
        /// Bus never reports idle
        stuck_busy: bool,
        /// Start condition appears after a request
        start_appears: bool,
        sr_start: bool,
        sr_addr: bool,
        sr_af: bool,
        addr_phase_done: bool,
        rx: Vec<u8, 16>,
        rx_next: usize,
        stop_pending: bool,
        log: Vec<Event, 64>,
        configured: Option<BusTiming>,
    }

    impl FakePort {
        fn device() -> Self {
            Self {
                acks: true,
                silent: false,
                stuck_busy: false,
                start_appears: true,
                sr_start: false,
                sr_addr: false,
                sr_af: false,
                addr_phase_done: false,
                rx: Vec::new(),
                rx_next: 0,
                stop_pending: false,
                log: Vec::new(),
                configured: None,
            }
        }

        fn absent_device() -> Self {
            Self {
                acks: false,
                ..Self::device()
            }
        }

        fn with_rx(mut self, bytes: &[u8]) -> Self {
            self.rx.extend_from_slice(bytes).unwrap();
            self
        }
    }

    impl I2cPort for FakePort {
        fn configure(&mut self, timing: &BusTiming) {
            self.configured = Some(*timing);
        }

        fn flag(&mut self, flag: Flag) -> bool {
            match flag {
                Flag::Busy => self.stuck_busy,
                Flag::StartBit => self.sr_start,
                Flag::Address => self.sr_addr,
                Flag::AckFailure => self.sr_af,
                Flag::TxEmpty => self.addr_phase_done,
                Flag::ByteTransferFinished => self.addr_phase_done,
                Flag::RxNotEmpty => self.addr_phase_done && self.rx_next < self.rx.len(),
            }
        }

        fn request_start(&mut self) {
            self.log.push(Event::Start).unwrap();
            if self.start_appears {
                self.sr_start = true;
            }
        }

        fn request_stop(&mut self) {
            self.log.push(Event::Stop).unwrap();
            self.stop_pending = true;
        }

        fn stop_pending(&mut self) -> bool {
            let pending = self.stop_pending;
            self.stop_pending = false;
            pending
        }

        fn set_ack(&mut self, on: bool) {
            self.log.push(Event::Ack(on)).unwrap();
        }

        fn clear_address_flag(&mut self) {
            self.sr_addr = false;
            self.addr_phase_done = true;
        }

        fn clear_ack_failure(&mut self) {
            self.sr_af = false;
        }

        fn write_data(&mut self, byte: u8) {
            self.log.push(Event::Byte(byte)).unwrap();
            if self.sr_start {
                // Address byte
                self.sr_start = false;
                if self.silent {
                    // No reaction on the wire
                } else if self.acks {
                    self.sr_addr = true;
                } else {
                    self.sr_af = true;
                }
            }
        }

        fn read_data(&mut self) -> u8 {
            let byte = self.rx[self.rx_next];
            self.rx_next += 1;
            self.log.push(Event::Read(byte)).unwrap();
            byte
        }
    }

    const PCLK1: u32 = 42_000_000;
    const DEV: u8 = 0x78;

    fn bus(port: FakePort) -> I2cBus<FakePort, TickClock> {
        I2cBus::new(port, TickClock::new(), PCLK1, I2cConfig::STANDARD).unwrap()
    }

    #[test]
    fn test_new_programs_timing() {
        let port = bus(FakePort::device()).release();
        let timing = port.configured.unwrap();
        assert_eq!(timing.freq_range, 42);
        assert_eq!(timing.ccr, 210);
        assert!(!timing.fast);
    }

    #[test]
    fn test_new_rejects_bad_config_before_configure() {
        let result = I2cBus::new(
            FakePort::device(),
            TickClock::new(),
            1_000_000,
            I2cConfig::STANDARD,
        );
        assert!(matches!(result, Err(ConfigError::UnsupportedPeripheralClock)));
    }

    #[test]
    fn test_write_sequence() {
        let mut bus = bus(FakePort::device());
        bus.write(DEV, &[0x00, 0xAE]).unwrap();

        let port = bus.release();
        assert_eq!(
            &port.log[..],
            &[
                Event::Start,
                Event::Byte(0x78),
                Event::Byte(0x00),
                Event::Byte(0xAE),
                Event::Stop,
            ][..]
        );
    }

    #[test]
    fn test_write_sets_direction_bit_low() {
        let mut bus = bus(FakePort::device());
        // Address with the reserved bit set still goes out as a write
        bus.write(0x79, &[0x55]).unwrap();

        let port = bus.release();
        assert_eq!(port.log[1], Event::Byte(0x78));
    }

    #[test]
    fn test_read_multi_byte_sequence() {
        let mut bus = bus(FakePort::device().with_rx(&[0xAA, 0xBB, 0xCC]));
        let mut buf = [0u8; 3];
        bus.read(DEV, &mut buf).unwrap();
        assert_eq!(buf, [0xAA, 0xBB, 0xCC]);

        let port = bus.release();
        assert_eq!(
            &port.log[..],
            &[
                Event::Ack(true),
                Event::Start,
                Event::Byte(0x79),
                Event::Read(0xAA),
                Event::Read(0xBB),
                Event::Ack(false),
                Event::Stop,
                Event::Read(0xCC),
            ][..]
        );
    }

    #[test]
    fn test_read_single_byte_nacks_before_transfer() {
        let mut bus = bus(FakePort::device().with_rx(&[0x42]));
        let mut buf = [0u8; 1];
        bus.read(DEV, &mut buf).unwrap();
        assert_eq!(buf, [0x42]);

        let port = bus.release();
        assert_eq!(
            &port.log[..],
            &[
                Event::Ack(true),
                Event::Start,
                Event::Byte(0x79),
                Event::Ack(false),
                Event::Stop,
                Event::Read(0x42),
            ][..]
        );
    }

    #[test]
    fn test_empty_read_is_noop() {
        let mut bus = bus(FakePort::device());
        let mut buf = [0u8; 0];
        bus.read(DEV, &mut buf).unwrap();
        assert!(bus.release().log.is_empty());
    }

    #[test]
    fn test_write_times_out_when_address_unacknowledged() {
        let mut port = FakePort::device();
        port.acks = false;

        let mut bus = bus(port);
        let err = bus.write(DEV, &[0x00]).unwrap_err();
        assert_eq!(err, BusError::Timeout(BusPhase::Address));

        // Nothing past the address byte went out
        let port = bus.release();
        assert_eq!(&port.log[..], &[Event::Start, Event::Byte(0x78)][..]);
    }

    #[test]
    fn test_write_times_out_on_stuck_busy() {
        let mut port = FakePort::device();
        port.stuck_busy = true;

        let mut bus = bus(port);
        let err = bus.write(DEV, &[0x00]).unwrap_err();
        assert_eq!(err, BusError::Timeout(BusPhase::Idle));
        assert!(bus.release().log.is_empty());
    }

    #[test]
    fn test_write_times_out_when_start_never_appears() {
        let mut port = FakePort::device();
        port.start_appears = false;

        let mut bus = bus(port);
        let err = bus.write(DEV, &[0x00]).unwrap_err();
        assert_eq!(err, BusError::Timeout(BusPhase::Start));
    }

    #[test]
    fn test_custom_timeouts_apply() {
        let mut port = FakePort::device();
        port.stuck_busy = true;

        let timeouts = BusTimeouts {
            busy: Duration::from_millis(2),
            ..BusTimeouts::default()
        };
        let mut bus = bus(port).with_timeouts(timeouts);
        let err = bus.write(DEV, &[0x00]).unwrap_err();
        assert_eq!(err, BusError::Timeout(BusPhase::Idle));
    }

    #[test]
    fn test_probe_finds_present_device() {
        let mut bus = bus(FakePort::device());
        bus.is_device_ready(DEV, 3, 10).unwrap();

        let port = bus.release();
        // One trial: start, address byte, stop
        assert_eq!(
            &port.log[..],
            &[Event::Start, Event::Byte(0x78), Event::Stop][..]
        );
    }

    #[test]
    fn test_probe_exhausts_trials_on_nack() {
        let mut bus = bus(FakePort::absent_device());
        let err = bus.is_device_ready(DEV, 3, 10).unwrap_err();
        assert_eq!(err, BusError::NoAcknowledge);

        let port = bus.release();
        let starts = port
            .log
            .iter()
            .filter(|e| matches!(e, Event::Start))
            .count();
        assert_eq!(starts, 3);
    }

    #[test]
    fn test_probe_zero_trials() {
        let mut bus = bus(FakePort::device());
        let err = bus.is_device_ready(DEV, 0, 10).unwrap_err();
        assert_eq!(err, BusError::NoAcknowledge);
    }

    #[test]
    fn test_probe_times_out_on_silent_wire() {
        // Neither address-acknowledge nor failure ever appears
        let mut port = FakePort::device();
        port.silent = true;

        let mut bus = bus(port);
        let err = bus.is_device_ready(DEV, 3, 5).unwrap_err();
        assert_eq!(err, BusError::Timeout(BusPhase::Address));
    }
}
