//! Platform-agnostic RA8875 driver, generic over [`BusTransport`].
//!
//! All drawing is delegated to the controller's hardware accelerator;
//! nothing is rasterized or buffered host-side. Every public operation
//! is synchronous: it stages its parameters over the bus, triggers the
//! hardware, and (where the hardware signals completion) polls a busy
//! bit under a bounded [`PollBudget`].
//!
//! The device keeps one piece of implicit state the driver must respect:
//! the "current register" selected by the last command cycle, which all
//! bare data cycles address until it is changed. The driver mirrors that
//! pointer in [`Ra8875::current_register`] and relies on `&mut self` to
//! keep multi-cycle sequences from interleaving.

mod bte;
mod draw;

use embedded_hal::delay::DelayNs;
use ra8875_hal::{BusTransport, ResetLine};

use crate::color::Rgb565;
use crate::config::{ColorDepth, DeviceConfig, PollBudget};
use crate::font::{FontEncoding, FontFamily, FontRom, FontSize, ROM_TEXT_HEIGHT};
use crate::geometry::{Point, Rect};
use crate::registers as regs;
use crate::registers::{Layer, LayerMode};

/// Driver error, generic over the transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The requested resolution/depth pair is not in the supported set.
    /// Raised before any bus I/O.
    UnsupportedConfiguration,
    /// A busy-bit poll exhausted its budget. The device may be wedged;
    /// the driver attempts no recovery and the caller must decide
    /// whether to re-initialize.
    DeviceTimeout,
    /// Bus transport failure, propagated uninterpreted.
    Transport(E),
}

impl<E: core::fmt::Debug> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Transport(e)
    }
}

/// RA8875 display controller driver.
///
/// Owns the bus transport, a delay provider for settle times and poll
/// intervals, and an optional reset line. Construct with [`Ra8875::new`],
/// which runs the full bring-up sequence.
pub struct Ra8875<S: BusTransport, D: DelayNs, R: ResetLine = ra8875_hal::NoResetLine> {
    bus: S,
    delay: D,
    reset: Option<R>,
    config: DeviceConfig,
    poll: PollBudget,
    /// Mirror of the device's implicit current-register pointer.
    current_register: Option<u8>,
    text_color: Rgb565,
}

impl<S: BusTransport, D: DelayNs, R: ResetLine> Ra8875<S, D, R> {
    /// Bring up the controller and return a ready driver.
    ///
    /// Validates the requested geometry before any bus activity, then
    /// runs the fixed init sequence: reset, PLL configuration, timing
    /// registers, layer/window setup, power on. A failed step aborts the
    /// whole sequence; no partially initialized driver is returned.
    ///
    /// With `reset: Some(line)` the controller is hard-reset by pulsing
    /// the line; without one the software reset command is used instead.
    pub fn new(
        bus: S,
        delay: D,
        reset: Option<R>,
        width: u16,
        height: u16,
        depth: ColorDepth,
    ) -> Result<Self, Error<S::Error>> {
        let config = DeviceConfig::new(width, height, depth)
            .ok_or(Error::UnsupportedConfiguration)?;

        let mut driver = Self {
            bus,
            delay,
            reset,
            config,
            poll: PollBudget::default(),
            current_register: None,
            text_color: Rgb565::WHITE,
        };

        driver.reset_device()?;
        driver.init_pll()?;
        driver.init_timing()?;

        // Enable two-layer mode and open the window to the full panel.
        driver.write_register(regs::DPCR, regs::DPCR_TWO_LAYER)?;
        driver.set_active_window(Rect::new(0, 0, width, height))?;
        driver.select_internal_font(FontEncoding::Iso8859_1)?;

        driver.write_register(regs::PWRR, regs::PWRR_DISPLAY_ON)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("ra8875: init complete ({=u16}x{=u16})", width, height);

        Ok(driver)
    }

    /// Replace the default busy-wait budget.
    pub fn set_poll_budget(&mut self, budget: PollBudget) {
        self.poll = budget;
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn width(&self) -> u16 {
        self.config.width()
    }

    pub fn height(&self) -> u16 {
        self.config.height()
    }

    /// Register a bare data cycle would currently address, as last
    /// selected by a command cycle. `None` until the first selection.
    pub fn current_register(&self) -> Option<u8> {
        self.current_register
    }

    /// Release the transport, delay provider, and reset line.
    pub fn release(self) -> (S, D, Option<R>) {
        (self.bus, self.delay, self.reset)
    }

    // --- Register access layer ---

    /// Select the register subsequent data cycles will address.
    pub fn write_command_select(&mut self, reg: u8) -> Result<(), Error<S::Error>> {
        self.bus.exchange(regs::CMD_WRITE, reg)?;
        self.current_register = Some(reg);
        Ok(())
    }

    /// Write one byte to the currently selected register.
    pub fn write_data(&mut self, value: u8) -> Result<(), Error<S::Error>> {
        self.bus.exchange(regs::DATA_WRITE, value)?;
        Ok(())
    }

    /// Read one byte from the currently selected register.
    pub fn read_data(&mut self) -> Result<u8, Error<S::Error>> {
        Ok(self.bus.exchange(regs::DATA_READ, 0)?)
    }

    /// Read the status register. Uses its dedicated cycle type; the
    /// current-register selection is neither used nor disturbed.
    pub fn read_status(&mut self) -> Result<u8, Error<S::Error>> {
        Ok(self.bus.exchange(regs::STATUS_READ, 0)?)
    }

    /// Select `reg` and write one byte to it.
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<S::Error>> {
        self.write_command_select(reg)?;
        self.write_data(value)
    }

    /// Select `reg` and read one byte from it.
    pub fn read_register(&mut self, reg: u8) -> Result<u8, Error<S::Error>> {
        self.write_command_select(reg)?;
        self.read_data()
    }

    /// Write a 16-bit value to a low/high register pair, low register
    /// first. Both halves go out within this one call so the device
    /// never latches an inconsistent intermediate.
    pub fn write_register_pair(
        &mut self,
        low: u8,
        high: u8,
        value: u16,
    ) -> Result<(), Error<S::Error>> {
        self.write_register(low, (value & 0xFF) as u8)?;
        self.write_register(high, (value >> 8) as u8)
    }

    /// Read a 16-bit value from a low/high register pair.
    pub fn read_register_pair(&mut self, low: u8, high: u8) -> Result<u16, Error<S::Error>> {
        let lo = self.read_register(low)?;
        let hi = self.read_register(high)?;
        Ok(((hi as u16) << 8) | lo as u16)
    }

    /// Read-modify-write `reg` through a single register selection: the
    /// data read and the data write both address the selection made
    /// here, exercising the device's persistent current-register state.
    fn modify_register(
        &mut self,
        reg: u8,
        f: impl FnOnce(u8) -> u8,
    ) -> Result<u8, Error<S::Error>> {
        self.write_command_select(reg)?;
        let old = self.read_data()?;
        let new = f(old);
        self.write_data(new)?;
        Ok(new)
    }

    /// Poll `reg` until the bits in `mask` clear, within the poll budget.
    fn wait_register_clear(&mut self, reg: u8, mask: u8) -> Result<(), Error<S::Error>> {
        for _ in 0..self.poll.attempts {
            if self.read_register(reg)? & mask == 0 {
                return Ok(());
            }
            self.delay.delay_us(self.poll.interval_us);
        }
        Err(Error::DeviceTimeout)
    }

    /// Poll the status register until the bits in `mask` clear.
    fn wait_status_clear(&mut self, mask: u8) -> Result<(), Error<S::Error>> {
        for _ in 0..self.poll.attempts {
            if self.read_status()? & mask == 0 {
                return Ok(());
            }
            self.delay.delay_us(self.poll.interval_us);
        }
        Err(Error::DeviceTimeout)
    }

    /// Wait until both memory and BTE busy bits are clear.
    fn wait_core_idle(&mut self) -> Result<(), Error<S::Error>> {
        self.wait_status_clear(regs::STATUS_MEMORY_BUSY | regs::STATUS_BTE_BUSY)
    }

    // --- Initialization sequencer ---

    fn reset_device(&mut self) -> Result<(), Error<S::Error>> {
        if self.reset.is_some() {
            self.hard_reset();
            Ok(())
        } else {
            self.soft_reset()
        }
    }

    /// Pulse the reset line low. Preferred over the software reset
    /// command when a line is wired up.
    fn hard_reset(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("ra8875: hard reset");

        if let Some(line) = self.reset.as_mut() {
            line.release_reset();
            self.delay.delay_ms(5);
            line.assert_reset();
            self.delay.delay_ms(5);
            line.release_reset();
            self.delay.delay_ms(5);
        }
    }

    /// Software reset: set and clear the reset bit of the power
    /// register, with settle time around each transaction.
    fn soft_reset(&mut self) -> Result<(), Error<S::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ra8875: soft reset");

        self.delay.delay_ms(50);
        let pwrr = self.read_register(regs::PWRR)?;
        self.delay.delay_ms(50);
        self.write_register(regs::PWRR, pwrr | regs::PWRR_SOFT_RESET)?;
        self.delay.delay_ms(50);
        self.write_register(regs::PWRR, pwrr & !regs::PWRR_SOFT_RESET)?;
        self.delay.delay_ms(50);
        Ok(())
    }

    fn init_pll(&mut self) -> Result<(), Error<S::Error>> {
        let timing = self.config.resolution().timing();

        self.write_register(regs::PLLC1, timing.pll_input)?;
        self.delay.delay_ms(2);
        self.write_register(regs::PLLC2, timing.pll_divider)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn init_timing(&mut self) -> Result<(), Error<S::Error>> {
        let resolution = self.config.resolution();
        let timing = resolution.timing();

        let sysr = match self.config.depth() {
            ColorDepth::Bpp16 => regs::SYSR_COLOR_16BPP,
            ColorDepth::Bpp8 => 0x00,
        };
        self.write_register(regs::SYSR, sysr)?;
        self.write_register(regs::PCSR, timing.pixel_clock)?;
        self.delay.delay_ms(5);

        // Horizontal: width is (HDWR + 1) * 8 pixels.
        self.write_register(regs::HDWR, (resolution.width() / 8 - 1) as u8)?;
        self.write_register(regs::HNDFTR, timing.h_fine_tune)?;
        self.write_register(regs::HNDR, timing.h_nondisplay)?;
        self.write_register(regs::HSTR, timing.hsync_start)?;
        self.write_register(regs::HPWR, timing.hsync_width)?;

        // Vertical: height is (VDHR + 1) lines.
        self.write_register_pair(regs::VDHR0, regs::VDHR1, resolution.height() - 1)?;
        self.write_register_pair(regs::VNDR0, regs::VNDR1, timing.v_nondisplay)?;
        self.write_register_pair(regs::VSTR0, regs::VSTR1, timing.vsync_start)?;
        self.write_register(regs::VPWR, timing.vsync_width)?;

        self.delay.delay_ms(5);
        Ok(())
    }

    // --- Display control ---

    /// Enable or disable the backlight: GPIOX gates the display supply
    /// on common modules, PWM1 drives the backlight itself.
    pub fn set_backlight(&mut self, enabled: bool) -> Result<(), Error<S::Error>> {
        self.write_register(regs::GPIOX, enabled as u8)?;
        self.write_register(
            regs::P1CR,
            if enabled {
                regs::P1CR_ENABLE
            } else {
                regs::P1CR_DISABLE
            },
        )?;
        // Full duty cycle (brightness).
        self.write_register(regs::P1DCR, 0xFF)
    }

    /// Restrict drawing to `window`. Edges are inclusive on the wire.
    pub fn set_active_window(&mut self, window: Rect) -> Result<(), Error<S::Error>> {
        self.write_register_pair(regs::HSAW0, regs::HSAW1, window.x)?;
        self.write_register_pair(regs::HEAW0, regs::HEAW1, window.right())?;
        self.write_register_pair(regs::VSAW0, regs::VSAW1, window.y)?;
        self.write_register_pair(regs::VEAW0, regs::VEAW1, window.bottom())
    }

    pub fn set_scroll_window(&mut self, window: Rect) -> Result<(), Error<S::Error>> {
        self.write_register_pair(regs::HSSW0, regs::HSSW1, window.x)?;
        self.write_register_pair(regs::HESW0, regs::HESW1, window.right())?;
        self.write_register_pair(regs::VSSW0, regs::VSSW1, window.y)?;
        self.write_register_pair(regs::VESW0, regs::VESW1, window.bottom())
    }

    pub fn set_scroll_offset(&mut self, x: u16, y: u16) -> Result<(), Error<S::Error>> {
        self.write_register_pair(regs::HOFS0, regs::HOFS1, x)?;
        self.write_register_pair(regs::VOFS0, regs::VOFS1, y)
    }

    /// Clear the current draw layer's frame-buffer memory and wait for
    /// the controller to finish.
    pub fn clear_memory(&mut self) -> Result<(), Error<S::Error>> {
        self.write_register(regs::MCLR, regs::MCLR_START)?;
        self.wait_register_clear(regs::MCLR, regs::MCLR_START)
    }

    /// Select how the two layers are composited for display.
    pub fn set_layer_mode(&mut self, mode: LayerMode) -> Result<(), Error<S::Error>> {
        self.modify_register(regs::LTPR0, |v| (v & 0xF8) | mode as u8)?;
        // Both layers fully displayed.
        self.write_register(regs::LTPR1, 0x00)
    }

    /// Select which layer subsequent drawing operations target.
    pub fn set_draw_layer(&mut self, layer: Layer) -> Result<(), Error<S::Error>> {
        self.modify_register(regs::MWCR1, |v| (v & 0xFE) | layer.mwcr1_bit())?;
        Ok(())
    }

    // --- Text ---

    /// Set the color used for subsequent text writes. Takes effect when
    /// text mode is next entered.
    pub fn set_text_color(&mut self, color: Rgb565) {
        self.text_color = color;
    }

    /// Move the font write cursor.
    pub fn set_cursor(&mut self, position: Point) -> Result<(), Error<S::Error>> {
        self.write_register_pair(regs::FCURX0, regs::FCURX1, position.x)?;
        self.write_register_pair(regs::FCURY0, regs::FCURY1, position.y)
    }

    /// Read back the font write cursor.
    pub fn get_cursor(&mut self) -> Result<Point, Error<S::Error>> {
        let x = self.read_register_pair(regs::FCURX0, regs::FCURX1)?;
        let y = self.read_register_pair(regs::FCURY0, regs::FCURY1)?;
        Ok(Point::new(x, y))
    }

    pub fn set_cursor_visibility(
        &mut self,
        visible: bool,
        blink: bool,
    ) -> Result<(), Error<S::Error>> {
        self.modify_register(regs::MWCR0, |mut v| {
            if visible {
                v |= regs::MWCR0_CURSOR_VISIBLE;
            } else {
                v &= !regs::MWCR0_CURSOR_VISIBLE;
            }
            if blink {
                v |= regs::MWCR0_CURSOR_BLINK;
            } else {
                v &= !regs::MWCR0_CURSOR_BLINK;
            }
            v
        })?;
        Ok(())
    }

    /// Glyph scale factors, each clamped to 1..=4.
    pub fn set_text_size(&mut self, x_scale: u8, y_scale: u8) -> Result<(), Error<S::Error>> {
        let x_scale = x_scale.clamp(1, 4);
        let y_scale = y_scale.clamp(1, 4);
        self.modify_register(regs::FNCR1, |v| {
            (v & 0xF0) | ((x_scale - 1) << 2) | (y_scale - 1)
        })?;
        Ok(())
    }

    pub fn text_size_x(&mut self) -> Result<u8, Error<S::Error>> {
        let fncr1 = self.read_register(regs::FNCR1)?;
        Ok(((fncr1 >> 2) & 0x03) + 1)
    }

    pub fn text_size_y(&mut self) -> Result<u8, Error<S::Error>> {
        let fncr1 = self.read_register(regs::FNCR1)?;
        Ok((fncr1 & 0x03) + 1)
    }

    /// Select an internal-ROM code page. Non-internal encodings fall
    /// back to ISO 8859-1.
    pub fn select_internal_font(&mut self, encoding: FontEncoding) -> Result<(), Error<S::Error>> {
        let encoding = if encoding.is_internal() {
            encoding
        } else {
            FontEncoding::Iso8859_1
        };

        // Internal ROM, code page in the low two bits.
        self.write_register(regs::FNCR0, encoding as u8 & 0x03)?;

        // The datasheet wants the low SFRS bits zero with the internal ROM.
        let sfrs = self.read_register(regs::SFRS)?;
        self.write_register(regs::SFRS, sfrs & 0xFC)
    }

    /// Select a font from an external serial font ROM. External
    /// encodings only; internal code pages fall back to ASCII.
    pub fn select_external_font(
        &mut self,
        family: FontFamily,
        size: FontSize,
        encoding: FontEncoding,
    ) -> Result<(), Error<S::Error>> {
        let encoding = if encoding as u8 & 0xF8 == 0 {
            encoding
        } else {
            FontEncoding::Ascii
        };

        // External font ROM source.
        self.write_register(regs::FNCR0, 0x20)?;
        self.write_register(regs::FWTSR, (size as u8 & 0x03) << 6)?;

        let sfrs = self.read_register(regs::SFRS)?;
        self.write_register(
            regs::SFRS,
            (sfrs & 0xE0) | ((encoding as u8) << 2) | (family as u8 & 0x03),
        )
    }

    /// Configure access to an external serial font ROM chip.
    pub fn init_external_font_rom(
        &mut self,
        spi_interface: u8,
        chip: FontRom,
    ) -> Result<(), Error<S::Error>> {
        // Font ROM SPI clock: system clock / 4.
        self.write_register(regs::SFCLR, 0x03)?;

        // 24-bit address mode, SPI mode 0, 1 dummy byte, font mode, single mode.
        let sroc = 0x08 | ((spi_interface & 0x01) << 7);
        self.write_register(regs::SROC, sroc)?;

        // Font/DMA mode rather than direct access.
        self.write_register(regs::SACS_MODE, 0x00)?;

        let sfrs = self.read_register(regs::SFRS)?;
        self.write_register(regs::SFRS, (sfrs & 0x1F) | ((chip as u8 & 0x07) << 5))
    }

    /// Write raw character codes at the cursor.
    pub fn put_chars(&mut self, chars: &[u8]) -> Result<(), Error<S::Error>> {
        self.enter_text_mode()?;
        self.write_command_select(regs::MRWC)?;
        for &c in chars {
            self.wait_core_idle()?;
            self.write_data(c)?;
        }
        self.enter_graphics_mode()
    }

    /// Write 16-bit character codes (for double-byte encodings), high
    /// byte first.
    pub fn put_chars16(&mut self, chars: &[u16]) -> Result<(), Error<S::Error>> {
        self.enter_text_mode()?;
        self.write_command_select(regs::MRWC)?;
        for &c in chars {
            self.wait_core_idle()?;
            self.write_data((c >> 8) as u8)?;
            self.wait_core_idle()?;
            self.write_data((c & 0xFF) as u8)?;
        }
        self.enter_graphics_mode()
    }

    /// Write text at the cursor. Carriage returns are ignored; a line
    /// feed moves the cursor to column zero one glyph row down.
    pub fn write_text(&mut self, text: &str) -> Result<(), Error<S::Error>> {
        self.enter_text_mode()?;
        self.write_command_select(regs::MRWC)?;

        for &c in text.as_bytes() {
            match c {
                b'\r' => {}
                b'\n' => {
                    let row = ROM_TEXT_HEIGHT * self.text_size_y()? as u16;
                    let y = self.get_cursor()?.y;
                    self.set_cursor(Point::new(0, y + row))?;
                    // Cursor moves disturbed the register selection.
                    self.write_command_select(regs::MRWC)?;
                }
                _ => {
                    self.wait_core_idle()?;
                    self.write_data(c)?;
                }
            }
        }

        self.enter_graphics_mode()
    }

    /// Switch the memory write path to text mode and restore the text
    /// color (shape draws overwrite the foreground color registers).
    fn enter_text_mode(&mut self) -> Result<(), Error<S::Error>> {
        self.wait_core_idle()?;

        let color = self.text_color;
        self.stage_foreground_color(color)?;

        self.modify_register(regs::MWCR0, |v| v | regs::MWCR0_TEXT_MODE)?;
        Ok(())
    }

    /// Switch the memory write path back to graphics mode.
    fn enter_graphics_mode(&mut self) -> Result<(), Error<S::Error>> {
        self.wait_core_idle()?;
        self.modify_register(regs::MWCR0, |v| v & !regs::MWCR0_TEXT_MODE)?;
        Ok(())
    }
}
