//! I2C transaction framing
//!
//! Every write to the controller starts with a control byte telling it how
//! to treat the bytes that follow:
//!
//! | control | meaning                          |
//! |---------|----------------------------------|
//! | `0x80`  | exactly one command byte follows |
//! | `0x00`  | a stream of command bytes        |
//! | `0x40`  | a stream of GDDRAM data bytes    |
//!
//! Each method here performs exactly one bus transaction and reports its
//! status. Streams are sent as two adjacent write operations in one
//! transaction, so the payload is never copied.

use embedded_hal::i2c::{I2c, Operation};
use log::debug;

use crate::config::I2C_ADDRESS;
use crate::error::Error;
use crate::flag::Control;

/// Owns the bus and frames outgoing bytes for the controller
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Wrap a configured bus, talking to the controller at `0x3C`
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, I2C_ADDRESS)
    }

    /// Wrap a configured bus, talking to the controller at `address`
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        I2cInterface { i2c, address }
    }

    /// 7-bit address every transaction goes to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Send a single command byte
    pub fn cmd(&mut self, cmd: u8) -> Result<(), Error<I2C::Error>> {
        debug!("cmd: {:#04x}", cmd);
        self.i2c
            .write(self.address, &[Control::SINGLE_COMMAND, cmd])
            .map_err(Error::Bus)
    }

    /// Send a list of commands and parameters in one transaction
    pub fn cmds(&mut self, cmds: &[u8]) -> Result<(), Error<I2C::Error>> {
        debug!("cmds: {:02x?}", cmds);
        self.stream(Control::COMMAND_STREAM, cmds)
    }

    /// Stream bytes into GDDRAM at the controller's current address pointer
    pub fn data(&mut self, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        debug!("data: {} bytes", data.len());
        self.stream(Control::DATA_STREAM, data)
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn stream(&mut self, control: u8, payload: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&[control]), Operation::Write(payload)],
            )
            .map_err(Error::Bus)
    }
}
