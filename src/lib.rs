//! SSD1306 OLED Display Driver
//!
//! Blocking driver for 128x64 and 128x32 monochrome OLED panels driven by an
//! SSD1306 controller over I2C, built on the [`embedded-hal`] 1.0 `I2c` trait.
//!
//! The driver keeps a framebuffer laid out exactly like the controller's
//! GDDRAM: one byte per column per 8-pixel page, bit 0 at the top. Every
//! drawing call updates that buffer and then streams it to the panel.
//!
//! Text is drawn with a fixed 6x8 font covering printable ASCII, 21
//! characters per page row.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use ssd1306_text::prelude::*;
//!
//! // `i2c` is any embedded-hal I2c bus configured per `BusConfig::default()`
//! let mut display = Ssd1306::init(i2c, DisplaySize::Display128x64)?;
//!
//! display.clear()?;
//! display.write_string("Chip Temp: 27.0 *C", 0, 0)?;
//! ```
//!
//! Every operation returns the bus error if the write fails, so a panel that
//! drops off the bus shows up as [`Error::Bus`](error::Error::Bus) instead of
//! a silently stale screen.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod cmd;
pub mod config;
pub mod driver;
pub mod error;
mod flag;
pub mod font;
pub mod interface;
pub mod size;

/// Useful exports
pub mod prelude {
    pub use crate::config::BusConfig;
    pub use crate::driver::{Ssd1306, CHARS_PER_LINE};
    pub use crate::error::Error;
    pub use crate::size::DisplaySize;
}
