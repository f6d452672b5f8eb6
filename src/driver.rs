//! Driver for interacting with an SSD1306 over I2C
use embedded_hal::i2c::I2c;
use log::debug;

use crate::cmd::Cmd;
use crate::config::BusConfig;
use crate::error::Error;
use crate::flag::Flag;
use crate::font::{self, GLYPH_WIDTH};
use crate::interface::I2cInterface;
use crate::size::{DisplaySize, MAX_BUFFER_LEN, WIDTH};

/// Whole characters that fit on one page row
pub const CHARS_PER_LINE: usize = WIDTH as usize / GLYPH_WIDTH;

/// Position of the COM pins parameter in [`DEFAULT_INIT_SEQUENCE`]
const COM_PINS_INDEX: usize = 10;

/// Power-up command list for a 128x32 panel.
///
/// [`init_sequence`] patches the COM pins parameter for taller panels.
pub const DEFAULT_INIT_SEQUENCE: [u8; 20] = [
    Cmd::SET_MULTIPLEX_RATIO,
    Flag::MULTIPLEX_64,
    Cmd::SET_DISPLAY_OFFSET,
    Flag::DISPLAY_OFFSET_NONE,
    Cmd::SET_MEMORY_MODE,
    Flag::MEMORY_MODE_HORIZONTAL,
    // start line 0
    Cmd::SET_START_LINE,
    Cmd::SEGMENT_REMAP_0,
    Cmd::COM_SCAN_DIR_NORMAL,
    Cmd::SET_COM_PINS,
    Flag::COM_PINS_SEQUENTIAL,
    Cmd::SET_CONTRAST,
    Flag::CONTRAST_DEFAULT,
    Cmd::DISPLAY_ALL_ON_RESUME,
    Cmd::NORMAL_DISPLAY,
    Cmd::SET_CLOCK_DIV,
    Flag::CLOCK_DIV_DEFAULT,
    Cmd::CHARGE_PUMP,
    Flag::CHARGE_PUMP_ENABLE,
    Cmd::DISPLAY_ON,
];

/// Power-up command list for the given panel
pub fn init_sequence(size: DisplaySize) -> [u8; 20] {
    let mut sequence = DEFAULT_INIT_SEQUENCE;
    if size.height() == 64 {
        sequence[COM_PINS_INDEX] = Flag::COM_PINS_ALTERNATIVE;
    }
    sequence
}

/// An initialised display and the framebuffer mirroring its GDDRAM.
///
/// Operations must not be interleaved from several threads; wrap the
/// instance in a mutex if it is shared.
pub struct Ssd1306<I2C> {
    interface: I2cInterface<I2C>,
    size: DisplaySize,
    /// Only the first `size.buffer_len()` bytes are in use.
    buffer: [u8; MAX_BUFFER_LEN],
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Take ownership of a configured bus and power the panel up, using
    /// the default address `0x3C`.
    ///
    /// See [`init_with_config`](Self::init_with_config).
    pub fn init(i2c: I2C, size: DisplaySize) -> Result<Self, Error<I2C::Error>> {
        Self::init_with_config(i2c, size, &BusConfig::default())
    }

    /// Take ownership of a configured bus and power the panel up.
    ///
    /// Transactions go to `config.address`. Pins, pull-ups, clock rate and
    /// the per-write timeout are properties of the bus itself and must
    /// already be applied by the HAL that built `i2c`; a write that times
    /// out comes back as [`Error::Bus`]. The framebuffer starts zeroed but
    /// is not pushed to the panel until the first draw call.
    pub fn init_with_config(
        i2c: I2C,
        size: DisplaySize,
        config: &BusConfig,
    ) -> Result<Self, Error<I2C::Error>> {
        debug!(
            "creating new Ssd1306 instance ({}x{}) at {:#04x}",
            size.width(),
            size.height(),
            config.address
        );
        let mut display = Ssd1306 {
            interface: I2cInterface::with_address(i2c, config.address),
            size,
            buffer: [0; MAX_BUFFER_LEN],
        };
        display.interface.cmds(&init_sequence(size))?;
        debug!("init sequence complete");
        Ok(display)
    }

    /// Panel geometry
    pub fn size(&self) -> DisplaySize {
        self.size
    }

    /// Current framebuffer contents, `width * height / 8` bytes
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..self.size.buffer_len()]
    }

    /// Push the framebuffer into GDDRAM through the given address window.
    ///
    /// The whole framebuffer is streamed regardless of the window; the
    /// controller wraps its address pointer inside the window.
    pub fn render(
        &mut self,
        start_page: u8,
        end_page: u8,
        start_col: u8,
        end_col: u8,
    ) -> Result<(), Error<I2C::Error>> {
        if start_page > end_page
            || end_page >= self.size.pages()
            || start_col > end_col
            || end_col >= self.size.width()
        {
            return Err(Error::InvalidWindow);
        }
        debug!(
            "render: pages {}-{}, columns {}-{}",
            start_page, end_page, start_col, end_col
        );
        self.interface.cmds(&[
            Cmd::COLUMN_ADDR,
            start_col,
            end_col,
            Cmd::PAGE_ADDR,
            start_page,
            end_page,
        ])?;
        let len = self.size.buffer_len();
        self.interface.data(&self.buffer[..len])
    }

    /// Render the whole screen
    pub fn flush(&mut self) -> Result<(), Error<I2C::Error>> {
        self.render(0, self.size.pages() - 1, 0, self.size.width() - 1)
    }

    /// Blank the framebuffer and the panel
    pub fn clear(&mut self) -> Result<(), Error<I2C::Error>> {
        debug!("clearing framebuffer");
        self.buffer.fill(0);
        self.flush()
    }

    /// Draw `text` on page row `page`, starting at character column
    /// `char_offset`, then render the whole screen.
    ///
    /// A line holds [`CHARS_PER_LINE`] characters. Text that would run past
    /// the end of the line is rejected rather than clipped, as are
    /// characters outside `' '..='~'`. Both checks happen before anything is
    /// written, so a rejected call leaves the framebuffer untouched. If the
    /// bus write fails the framebuffer keeps the new text.
    pub fn write_string(
        &mut self,
        text: &str,
        page: u8,
        char_offset: u8,
    ) -> Result<(), Error<I2C::Error>> {
        let pages = self.size.pages();
        if page >= pages {
            return Err(Error::PageOutOfRange { page, pages });
        }

        let len = text.chars().count();
        if usize::from(char_offset) + len > CHARS_PER_LINE {
            return Err(Error::TextOverflow {
                offset: char_offset,
                len,
                max: CHARS_PER_LINE,
            });
        }

        // len <= CHARS_PER_LINE, so every glyph has a slot
        let mut glyphs = [&font::FONT_6X8[0]; CHARS_PER_LINE];
        for (slot, c) in glyphs.iter_mut().zip(text.chars()) {
            *slot = font::glyph(c).ok_or(Error::UnsupportedChar(c))?;
        }

        debug!("write_string: {:?} at page {}, column {}", text, page, char_offset);
        for (i, glyph) in glyphs[..len].iter().enumerate() {
            let offset = self.cell_offset(page, usize::from(char_offset) + i);
            self.buffer[offset..offset + GLYPH_WIDTH].copy_from_slice(*glyph);
        }

        self.flush()
    }

    /// Light every pixel regardless of GDDRAM
    pub fn display_full_on(&mut self) -> Result<(), Error<I2C::Error>> {
        self.interface.cmd(Cmd::DISPLAY_ALL_ON)
    }

    /// Show GDDRAM contents again after [`display_full_on`](Self::display_full_on)
    pub fn display_resume_content(&mut self) -> Result<(), Error<I2C::Error>> {
        self.interface.cmd(Cmd::DISPLAY_ALL_ON_RESUME)
    }

    /// Set the contrast level, 0x7F after init
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<I2C::Error>> {
        self.interface.cmds(&[Cmd::SET_CONTRAST, contrast])
    }

    /// Swap lit and unlit pixels without touching GDDRAM
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<I2C::Error>> {
        self.interface.cmd(if inverted {
            Cmd::INVERT_DISPLAY
        } else {
            Cmd::NORMAL_DISPLAY
        })
    }

    /// Turn the panel on, or put it to sleep. GDDRAM is retained while off.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<I2C::Error>> {
        self.interface.cmd(if on {
            Cmd::DISPLAY_ON
        } else {
            Cmd::DISPLAY_OFF
        })
    }

    /// Give the bus back, dropping the framebuffer
    pub fn release(self) -> I2C {
        self.interface.release()
    }

    // byte index of character cell `column` on `page`
    fn cell_offset(&self, page: u8, column: usize) -> usize {
        usize::from(self.size.width()) * usize::from(page) + GLYPH_WIDTH * column
    }
}
