//! Supported panel geometries

/// Width shared by every supported panel
pub const WIDTH: u8 = 128;

/// Framebuffer length of the largest supported panel
pub const MAX_BUFFER_LEN: usize = WIDTH as usize * 64 / 8;

/// Panel variants the driver can talk to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplaySize {
    /// 128x64 pixels, 8 pages
    #[default]
    Display128x64,
    /// 128x32 pixels, 4 pages
    Display128x32,
}

impl DisplaySize {
    /// Width in pixels
    pub const fn width(self) -> u8 {
        WIDTH
    }

    /// Height in pixels
    pub const fn height(self) -> u8 {
        match self {
            DisplaySize::Display128x64 => 64,
            DisplaySize::Display128x32 => 32,
        }
    }

    /// Number of 8-pixel-tall pages
    pub const fn pages(self) -> u8 {
        self.height() / 8
    }

    /// Framebuffer length in bytes, one bit per pixel
    pub const fn buffer_len(self) -> usize {
        self.width() as usize * self.height() as usize / 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_len_is_one_bit_per_pixel() {
        for size in [DisplaySize::Display128x64, DisplaySize::Display128x32] {
            assert_eq!(
                size.buffer_len(),
                size.width() as usize * size.height() as usize / 8
            );
        }
        assert_eq!(DisplaySize::Display128x64.buffer_len(), MAX_BUFFER_LEN);
        assert_eq!(DisplaySize::Display128x32.buffer_len(), 512);
    }

    #[test]
    fn pages() {
        assert_eq!(DisplaySize::Display128x64.pages(), 8);
        assert_eq!(DisplaySize::Display128x32.pages(), 4);
    }
}
