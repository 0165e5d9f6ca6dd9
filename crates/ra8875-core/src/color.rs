//! Color types and their decomposition into the controller's three
//! foreground color registers.
//!
//! The controller takes colors as three separate register writes (red,
//! green, blue) regardless of depth: 5/6/5 bit fields in 16 bpp mode,
//! 3/3/2 in 8 bpp mode.

/// 16-bit RGB565 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);

    /// Pack 8-bit channels, truncating to 5/6/5 bits.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | (((b & 0xF8) as u16) >> 3))
    }

    /// Split into the `[red, green, blue]` register values (5/6/5 bits).
    pub const fn components(self) -> [u8; 3] {
        [
            (self.0 >> 11) as u8,
            ((self.0 & 0x07E0) >> 5) as u8,
            (self.0 & 0x001F) as u8,
        ]
    }

    /// Reassemble from the three register values. Lossless inverse of
    /// [`Rgb565::components`].
    pub const fn from_components(parts: [u8; 3]) -> Self {
        Self(
            (((parts[0] & 0x1F) as u16) << 11)
                | (((parts[1] & 0x3F) as u16) << 5)
                | ((parts[2] & 0x1F) as u16),
        )
    }
}

/// 8-bit RGB332 color, used as the BTE transparency key in 8 bpp mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb332(pub u8);

impl Rgb332 {
    /// Pack 8-bit channels, truncating to 3/3/2 bits.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self((r & 0xE0) | ((g & 0xE0) >> 3) | ((b & 0xE0) >> 6))
    }

    /// Split into the `[red, green, blue]` register values (3/3/2 bits).
    pub const fn components(self) -> [u8; 3] {
        [self.0 >> 5, (self.0 & 0x1C) >> 2, self.0 & 0x03]
    }

    /// Reassemble from the three register values. Lossless inverse of
    /// [`Rgb332::components`].
    pub const fn from_components(parts: [u8; 3]) -> Self {
        Self(((parts[0] & 0x07) << 5) | ((parts[1] & 0x07) << 2) | (parts[2] & 0x03))
    }
}
