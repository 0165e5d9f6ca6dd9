//! Device configuration: supported panel geometries, their fixed timing
//! tables, and poll budgets for busy-bit waits.
//!
//! Timing values are resolution-indexed constants, not computed. The PLL
//! divisors derive a 55 or 60 MHz system clock from the presumed 20 MHz
//! external crystal.

/// Color depth of the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorDepth {
    /// 8 bpp, RGB332.
    Bpp8,
    /// 16 bpp, RGB565.
    Bpp16,
}

/// Panel resolutions the driver knows how to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    Res480x272,
    Res800x480,
}

/// Fixed per-resolution timing and clock constants.
pub struct PanelTiming {
    /// PLLC1: PLL input parameter.
    pub pll_input: u8,
    /// PLLC2: PLL output divider.
    pub pll_divider: u8,
    /// PCSR: pixel clock edge and divider.
    pub pixel_clock: u8,
    /// HNDFTR: DE polarity and horizontal fine tuning.
    pub h_fine_tune: u8,
    /// HNDR: horizontal non-display period, in (n + 1) * 8 px units.
    pub h_nondisplay: u8,
    /// HSTR: HSYNC start position, in (n + 1) * 8 px units.
    pub hsync_start: u8,
    /// HPWR: HSYNC polarity and pulse width, in (n + 1) * 8 px units.
    pub hsync_width: u8,
    /// VNDR: vertical non-display period, in (n + 1) lines.
    pub v_nondisplay: u16,
    /// VSTR: VSYNC start position, in (n + 1) lines.
    pub vsync_start: u16,
    /// VPWR: VSYNC polarity and pulse width, in (n + 1) lines.
    pub vsync_width: u8,
}

/// 480x272: SYS_CLK = 20 MHz * (0x0A + 1) / 4 = 55 MHz, PCLK = SYS_CLK / 4.
const TIMING_480X272: PanelTiming = PanelTiming {
    pll_input: 0x0A,
    pll_divider: 0x02,
    pixel_clock: 0x82,
    h_fine_tune: 0x00,
    h_nondisplay: 0x01,
    hsync_start: 0x00,
    hsync_width: 0x05,
    v_nondisplay: 0x02,
    vsync_start: 0x07,
    vsync_width: 0x09,
};

/// 800x480: SYS_CLK = 20 MHz * (0x0B + 1) / 4 = 60 MHz, PCLK = SYS_CLK / 2.
const TIMING_800X480: PanelTiming = PanelTiming {
    pll_input: 0x0B,
    pll_divider: 0x02,
    pixel_clock: 0x81,
    h_fine_tune: 0x00,
    h_nondisplay: 0x03,
    hsync_start: 0x03,
    hsync_width: 0x0B,
    v_nondisplay: 0x20,
    vsync_start: 0x16,
    vsync_width: 0x01,
};

impl Resolution {
    /// Look up a resolution by panel size. Returns `None` for any pair
    /// outside the supported set.
    pub const fn from_size(width: u16, height: u16) -> Option<Self> {
        match (width, height) {
            (480, 272) => Some(Resolution::Res480x272),
            (800, 480) => Some(Resolution::Res800x480),
            _ => None,
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            Resolution::Res480x272 => 480,
            Resolution::Res800x480 => 800,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            Resolution::Res480x272 => 272,
            Resolution::Res800x480 => 480,
        }
    }

    pub const fn timing(self) -> &'static PanelTiming {
        match self {
            Resolution::Res480x272 => &TIMING_480X272,
            Resolution::Res800x480 => &TIMING_800X480,
        }
    }
}

/// Immutable post-init device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    resolution: Resolution,
    depth: ColorDepth,
}

impl DeviceConfig {
    /// Validate a requested panel geometry. Performs no bus I/O; an
    /// unsupported size yields `None` and the caller must abort before
    /// touching the device.
    pub const fn new(width: u16, height: u16, depth: ColorDepth) -> Option<Self> {
        match Resolution::from_size(width, height) {
            Some(resolution) => Some(Self { resolution, depth }),
            None => None,
        }
    }

    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub const fn depth(&self) -> ColorDepth {
        self.depth
    }

    pub const fn width(&self) -> u16 {
        self.resolution.width()
    }

    pub const fn height(&self) -> u16 {
        self.resolution.height()
    }
}

/// Budget for bounded busy-bit polls.
///
/// A poll reads the busy bit up to `attempts` times, sleeping
/// `interval_us` between reads, then gives up with
/// [`Error::DeviceTimeout`](crate::Error::DeviceTimeout). The default
/// allows roughly 250 ms, comfortably above the longest hardware
/// operation (a full-screen memory clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollBudget {
    pub attempts: u32,
    pub interval_us: u32,
}

impl Default for PollBudget {
    fn default() -> Self {
        Self {
            attempts: 25_000,
            interval_us: 10,
        }
    }
}
