//! Blocking I2C with a per-transaction deadline
//!
//! embassy-rp's blocking I2C has no timeout, so a wedged bus would hang the
//! driver forever. This runs the interrupt-driven async driver to completion
//! under `with_timeout` and exposes it through the blocking embedded-hal
//! trait the display driver expects.

use embassy_futures::block_on;
use embassy_rp::i2c::{self, Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{with_timeout, Duration};
use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

#[derive(Debug)]
pub enum TimedI2cError {
    Bus(i2c::Error),
    Timeout,
}

impl embedded_hal::i2c::Error for TimedI2cError {
    fn kind(&self) -> ErrorKind {
        match self {
            TimedI2cError::Bus(e) => embedded_hal::i2c::Error::kind(e),
            TimedI2cError::Timeout => ErrorKind::Other,
        }
    }
}

pub struct TimedI2c<'d> {
    inner: I2c<'d, I2C0, Async>,
    timeout: Duration,
}

impl<'d> TimedI2c<'d> {
    pub fn new(inner: I2c<'d, I2C0, Async>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

impl ErrorType for TimedI2c<'_> {
    type Error = TimedI2cError;
}

impl embedded_hal::i2c::I2c for TimedI2c<'_> {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let transfer = embedded_hal_async::i2c::I2c::transaction(&mut self.inner, address, operations);
        match block_on(with_timeout(self.timeout, transfer)) {
            Ok(result) => result.map_err(TimedI2cError::Bus),
            Err(_) => Err(TimedI2cError::Timeout),
        }
    }
}
