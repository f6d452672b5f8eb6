//! Error types for the driver
//!
//! [`Error`] is generic over the bus error so callers can still match on
//! what the HAL reported (NACK, arbitration loss, timeout).

use core::fmt::Debug;

/// Errors that can occur when talking to the display or drawing into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// The I2C write did not complete (timeout, NACK or short write)
    Bus(E),
    /// Character has no glyph in the font table
    UnsupportedChar(char),
    /// Text would run past the end of the line
    TextOverflow {
        /// Starting character column
        offset: u8,
        /// Number of characters requested
        len: usize,
        /// Characters that fit on one line
        max: usize,
    },
    /// Page index past the bottom of the panel
    PageOutOfRange {
        /// Page requested
        page: u8,
        /// Pages on this panel
        pages: u8,
    },
    /// Render window is empty or outside the panel
    InvalidWindow,
}

impl<E: Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "I2C write failed: {e:?}"),
            Error::UnsupportedChar(c) => write!(f, "No glyph for character {c:?}"),
            Error::TextOverflow { offset, len, max } => write!(
                f,
                "Text of {len} chars at column {offset} exceeds {max} chars per line"
            ),
            Error::PageOutOfRange { page, pages } => {
                write!(f, "Page {page} out of range (panel has {pages})")
            }
            Error::InvalidWindow => write!(f, "Invalid render window"),
        }
    }
}

impl<E: Debug> core::error::Error for Error<E> {}
