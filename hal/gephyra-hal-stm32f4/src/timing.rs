//! Bus timing computation
//!
//! Derives the FREQ, CCR and TRISE register values from the APB1 clock
//! feeding the peripheral and the requested bus frequency. Standard mode
//! holds SCL high and low for equal CCR periods; fast mode splits the
//! period 2:1 or 16:9 per the duty setting. TRISE is the maximum SDA/SCL
//! rise time expressed in peripheral clock periods plus one.

use gephyra_hal::{FastDuty, I2cConfig};

/// Timing requests the peripheral cannot satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// APB1 clock outside the 2..=50 MHz range the peripheral accepts
    UnsupportedPeripheralClock,
    /// Requested bus frequency is zero, above fast mode, or yields a
    /// divider that does not fit the CCR field
    UnsupportedFrequency,
}

/// Register values programmed at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTiming {
    /// CR2 FREQ field: APB1 clock in MHz
    pub freq_range: u8,
    /// CCR divider field (12 bits)
    pub ccr: u16,
    /// Fast-mode select (CCR F/S bit)
    pub fast: bool,
    /// Fast-mode duty cycle (CCR DUTY bit when Ratio16to9)
    pub duty: FastDuty,
    /// TRISE register value
    pub trise: u8,
}

/// Upper bound of standard mode.
pub const STANDARD_MODE_MAX_HZ: u32 = 100_000;

/// Upper bound of fast mode.
pub const FAST_MODE_MAX_HZ: u32 = 400_000;

const PCLK_MIN_HZ: u32 = 2_000_000;
const PCLK_MAX_HZ: u32 = 50_000_000;
const CCR_FIELD_MAX: u32 = 0x0FFF;

/// Compute the timing registers for `config` on a bus fed by `pclk_hz`.
pub fn compute(pclk_hz: u32, config: &I2cConfig) -> Result<BusTiming, ConfigError> {
    if !(PCLK_MIN_HZ..=PCLK_MAX_HZ).contains(&pclk_hz) {
        return Err(ConfigError::UnsupportedPeripheralClock);
    }
    if config.frequency == 0 || config.frequency > FAST_MODE_MAX_HZ {
        return Err(ConfigError::UnsupportedFrequency);
    }

    let freq_range = pclk_hz / 1_000_000;

    let (ccr, fast, trise) = if config.frequency <= STANDARD_MODE_MAX_HZ {
        // Thigh = Tlow = CCR * Tpclk, hardware minimum divider of 4
        let ccr = (pclk_hz / (config.frequency * 2)).max(4);
        (ccr, false, freq_range + 1)
    } else {
        let ccr = match config.duty {
            FastDuty::Ratio2to1 => pclk_hz / (config.frequency * 3),
            FastDuty::Ratio16to9 => pclk_hz / (config.frequency * 25),
        }
        .max(1);
        (ccr, true, freq_range * 300 / 1000 + 1)
    };

    if ccr > CCR_FIELD_MAX {
        return Err(ConfigError::UnsupportedFrequency);
    }

    Ok(BusTiming {
        freq_range: freq_range as u8,
        ccr: ccr as u16,
        fast,
        duty: config.duty,
        trise: trise as u8,
    })
}
