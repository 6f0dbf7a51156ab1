//! Console-to-bus bridge
//!
//! Accumulates console bytes into fixed-size requests, runs the
//! write-then-read exchange with the peer and tracks link health.

use gephyra_hal::{BusError, I2cMaster};

/// Bytes per exchange, both directions.
pub const EXCHANGE_LEN: usize = 10;

/// Whole-exchange attempts before an exchange is declared failed.
pub const DEFAULT_MAX_ATTEMPTS: u8 = 3;

/// Consecutive failed exchanges before the link reports degraded.
pub const FAILURE_THRESHOLD: u8 = 3;

/// Observable link condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkHealth {
    /// Exchanges are completing
    Healthy,
    /// Too many consecutive failures
    Degraded,
}

/// Exchange failure after the retry budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// Every attempt failed; carries the last bus error
    LinkFailed(BusError),
}

/// Retry budget plus consecutive-failure tracking
///
/// An exchange is retried whole up to `max_attempts` times, then the
/// failure is recorded and surfaced. The link never blocks on a dead
/// peer; callers watch `health()` instead.
#[derive(Debug, Clone)]
pub struct LinkPolicy {
    /// Attempts per exchange before giving up
    max_attempts: u8,
    /// Failed exchanges since the last success
    consecutive_failures: u8,
    health: LinkHealth,
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkPolicy {
    /// Policy with the default retry budget.
    pub fn new() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }

    /// Policy with a custom retry budget (at least one attempt).
    pub fn with_max_attempts(max_attempts: u8) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            consecutive_failures: 0,
            health: LinkHealth::Healthy,
        }
    }

    /// Current link condition.
    pub fn health(&self) -> LinkHealth {
        self.health
    }

    /// Failed exchanges since the last success.
    pub fn consecutive_failures(&self) -> u8 {
        self.consecutive_failures
    }

    fn record_success(&mut self) {
        self.consecutive_failures = 0;
        self.health = LinkHealth::Healthy;
    }

    fn record_failure(&mut self) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        if self.consecutive_failures >= FAILURE_THRESHOLD {
            self.health = LinkHealth::Degraded;
        }
    }
}

/// Accumulates inbound console bytes into exchange-sized payloads.
#[derive(Debug)]
pub struct ConsoleBridge {
    buf: [u8; EXCHANGE_LEN],
    len: usize,
}

impl Default for ConsoleBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBridge {
    /// Empty accumulator.
    pub const fn new() -> Self {
        Self {
            buf: [0; EXCHANGE_LEN],
            len: 0,
        }
    }

    /// Bytes collected toward the current batch.
    pub fn pending(&self) -> usize {
        self.len
    }

    /// Feed one byte; returns the full payload exactly when the batch
    /// fills, then resets for the next one.
    pub fn accept(&mut self, byte: u8) -> Option<[u8; EXCHANGE_LEN]> {
        self.buf[self.len] = byte;
        self.len += 1;
        if self.len == EXCHANGE_LEN {
            self.len = 0;
            Some(self.buf)
        } else {
            None
        }
    }
}

/// One request/response round trip with the peer.
///
/// Writes the request, reads the reply, retrying the whole transaction
/// pair up to the policy's budget. The policy records the outcome so
/// callers can report link health.
pub fn exchange<B: I2cMaster>(
    bus: &mut B,
    address: u8,
    request: &[u8; EXCHANGE_LEN],
    response: &mut [u8; EXCHANGE_LEN],
    policy: &mut LinkPolicy,
) -> Result<(), BridgeError> {
    let mut attempt = 0;
    loop {
        match try_exchange(bus, address, request, response) {
            Ok(()) => {
                policy.record_success();
                return Ok(());
            }
            Err(err) => {
                attempt += 1;
                if attempt >= policy.max_attempts {
                    policy.record_failure();
                    return Err(BridgeError::LinkFailed(err));
                }
            }
        }
    }
}

fn try_exchange<B: I2cMaster>(
    bus: &mut B,
    address: u8,
    request: &[u8; EXCHANGE_LEN],
    response: &mut [u8; EXCHANGE_LEN],
) -> Result<(), BusError> {
    bus.write(address, request)?;
    bus.read(address, response)
}
