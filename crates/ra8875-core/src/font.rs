//! Font selection types for the controller's internal character ROM and
//! external serial font ROM chips.

/// Width of a glyph in the built-in ROM font, in pixels.
pub const ROM_TEXT_WIDTH: u16 = 8;
/// Height of a glyph in the built-in ROM font, in pixels.
pub const ROM_TEXT_HEIGHT: u16 = 16;

/// Character encodings, as encoded into FNCR0/SFRS.
///
/// Values 0x00..=0x07 select external font ROM encodings; 0x10..=0x13
/// select internal ROM code pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FontEncoding {
    /// GB2312 (Simplified Chinese).
    Gb2312 = 0x00,
    /// GB12345/GB18030 (Chinese).
    Gb18030 = 0x01,
    /// Big5 (Traditional Chinese).
    Big5 = 0x02,
    Unicode = 0x03,
    Ascii = 0x04,
    UniJapanese = 0x05,
    /// JIS X 0208.
    JisX0208 = 0x06,
    /// Latin/Greek/Cyrillic/Arabic.
    LatinGreekCyrillicArabic = 0x07,
    /// ISO 8859-1 (Latin 1).
    Iso8859_1 = 0x10,
    /// ISO 8859-2 (Latin 2: Eastern European).
    Iso8859_2 = 0x11,
    /// ISO 8859-3 (Latin 3: South European).
    Iso8859_3 = 0x12,
    /// ISO 8859-4 (Latin 4: Northern European).
    Iso8859_4 = 0x13,
}

impl FontEncoding {
    /// True for the internal-ROM code pages (0x10..=0x13).
    pub const fn is_internal(self) -> bool {
        (self as u8) & 0x10 != 0
    }
}

/// Glyph size of an external font ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FontSize {
    Size16 = 0x00,
    Size24 = 0x01,
    Size32 = 0x02,
}

/// Typeface family of an external font ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FontFamily {
    Fixed = 0x00,
    Arial = 0x01,
    Times = 0x02,
    FixedBold = 0x03,
}

/// Supported external serial font ROM chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FontRom {
    Gt21l16t1w = 0,
    Gt30l16u2w = 1,
    Gt30l24t3y = 2,
    Gt30l24m1z = 3,
    Gt30l32s4w = 4,
}
