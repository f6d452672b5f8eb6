//! Bus configuration
//!
//! The driver writes through an [`embedded_hal::i2c::I2c`] bus and reads
//! only [`BusConfig::address`]. Clock rate, pull-ups and the write timeout
//! are applied by the HAL (or a timing wrapper) that builds that bus;
//! [`BusConfig`] carries the values so board code can hand them over. A
//! write that exceeds the timeout must come back as a bus error.

/// 7-bit I2C address of the controller (SA0 tied low)
pub const I2C_ADDRESS: u8 = 0x3C;

/// Bus clock the driver was characterised at (Fast-mode Plus)
pub const I2C_FREQUENCY_HZ: u32 = 1_000_000;

/// Upper bound for a single bus write before it is reported as failed
pub const WRITE_TIMEOUT_MS: u32 = 100;

/// I2C settings for the bus that backs a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// 7-bit device address
    pub address: u8,
    /// Clock frequency in Hz
    pub frequency_hz: u32,
    /// Per-write timeout in milliseconds
    pub write_timeout_ms: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            address: I2C_ADDRESS,
            frequency_hz: I2C_FREQUENCY_HZ,
            write_timeout_ms: WRITE_TIMEOUT_MS,
        }
    }
}
