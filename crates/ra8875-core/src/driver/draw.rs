//! Drawing command engine: stages geometry and color into the draw
//! registers, triggers the hardware operation, and polls its busy bit.
//!
//! Staging order matters. The foreground color registers must be written
//! after geometry and before the trigger, all within one call, or the
//! device may latch a previous color.

use embedded_hal::delay::DelayNs;
use ra8875_hal::{BusTransport, ResetLine};

use crate::color::Rgb565;
use crate::config::ColorDepth;
use crate::geometry::Point;
use crate::registers as regs;

use super::{Error, Ra8875};

impl<S: BusTransport, D: DelayNs, R: ResetLine> Ra8875<S, D, R> {
    pub fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        color: Rgb565,
    ) -> Result<(), Error<S::Error>> {
        self.draw_two_point_shape(start, end, color, regs::DCR_OP_LINE)
    }

    pub fn draw_rect(
        &mut self,
        start: Point,
        end: Point,
        color: Rgb565,
    ) -> Result<(), Error<S::Error>> {
        self.draw_two_point_shape(start, end, color, regs::DCR_OP_SQUARE)
    }

    pub fn fill_rect(
        &mut self,
        start: Point,
        end: Point,
        color: Rgb565,
    ) -> Result<(), Error<S::Error>> {
        self.draw_two_point_shape(start, end, color, regs::DCR_OP_SQUARE_FILL)
    }

    pub fn draw_triangle(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        color: Rgb565,
    ) -> Result<(), Error<S::Error>> {
        self.draw_three_point_shape(p1, p2, p3, color, regs::DCR_OP_TRIANGLE)
    }

    pub fn fill_triangle(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        color: Rgb565,
    ) -> Result<(), Error<S::Error>> {
        self.draw_three_point_shape(p1, p2, p3, color, regs::DCR_OP_TRIANGLE_FILL)
    }

    pub fn draw_circle(
        &mut self,
        center: Point,
        radius: u8,
        color: Rgb565,
    ) -> Result<(), Error<S::Error>> {
        self.draw_circle_shape(center, radius, color, regs::DCR_OP_CIRCLE)
    }

    pub fn fill_circle(
        &mut self,
        center: Point,
        radius: u8,
        color: Rgb565,
    ) -> Result<(), Error<S::Error>> {
        self.draw_circle_shape(center, radius, color, regs::DCR_OP_CIRCLE_FILL)
    }

    /// Write one pixel through the memory write port. `raw` is the pixel
    /// value at the configured depth: RGB565 in 16 bpp mode, RGB332 in
    /// the low byte in 8 bpp mode.
    pub fn draw_pixel(&mut self, position: Point, raw: u16) -> Result<(), Error<S::Error>> {
        self.set_draw_position(position)?;
        self.push_pixel(raw)
    }

    /// Move the memory write cursor without writing.
    pub fn set_draw_position(&mut self, position: Point) -> Result<(), Error<S::Error>> {
        self.write_register_pair(regs::CURH0, regs::CURH1, position.x)?;
        self.write_register_pair(regs::CURV0, regs::CURV1, position.y)
    }

    /// Write one pixel at the memory write cursor and advance it.
    pub fn push_pixel(&mut self, raw: u16) -> Result<(), Error<S::Error>> {
        self.write_command_select(regs::MRWC)?;
        match self.config().depth() {
            ColorDepth::Bpp8 => self.write_data(raw as u8),
            ColorDepth::Bpp16 => {
                self.write_data((raw >> 8) as u8)?;
                self.write_data((raw & 0xFF) as u8)
            }
        }
    }

    /// Line, square, or filled square: start point, end point, color,
    /// then trigger bit 0x80 OR'd with the operation code.
    fn draw_two_point_shape(
        &mut self,
        start: Point,
        end: Point,
        color: Rgb565,
        op: u8,
    ) -> Result<(), Error<S::Error>> {
        self.write_register_pair(regs::DLHSR0, regs::DLHSR1, start.x)?;
        self.write_register_pair(regs::DLVSR0, regs::DLVSR1, start.y)?;
        self.write_register_pair(regs::DLHER0, regs::DLHER1, end.x)?;
        self.write_register_pair(regs::DLVER0, regs::DLVER1, end.y)?;

        self.stage_foreground_color(color)?;
        self.trigger_and_wait(regs::DCR_START, op)
    }

    /// Triangle or filled triangle: the third point goes into the
    /// dedicated triangle-point registers.
    fn draw_three_point_shape(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        color: Rgb565,
        op: u8,
    ) -> Result<(), Error<S::Error>> {
        self.write_register_pair(regs::DLHSR0, regs::DLHSR1, p1.x)?;
        self.write_register_pair(regs::DLVSR0, regs::DLVSR1, p1.y)?;
        self.write_register_pair(regs::DLHER0, regs::DLHER1, p2.x)?;
        self.write_register_pair(regs::DLVER0, regs::DLVER1, p2.y)?;
        self.write_register_pair(regs::DTPH0, regs::DTPH1, p3.x)?;
        self.write_register_pair(regs::DTPV0, regs::DTPV1, p3.y)?;

        self.stage_foreground_color(color)?;
        self.trigger_and_wait(regs::DCR_START, op)
    }

    /// Circle or filled circle: trigger bit 0x40, not 0x80.
    fn draw_circle_shape(
        &mut self,
        center: Point,
        radius: u8,
        color: Rgb565,
        op: u8,
    ) -> Result<(), Error<S::Error>> {
        self.write_register_pair(regs::DCHR0, regs::DCHR1, center.x)?;
        self.write_register_pair(regs::DCVR0, regs::DCVR1, center.y)?;
        self.write_register(regs::DCRR, radius)?;

        self.stage_foreground_color(color)?;
        self.trigger_and_wait(regs::DCR_START_CIRCLE, op)
    }

    pub(super) fn stage_foreground_color(&mut self, color: Rgb565) -> Result<(), Error<S::Error>> {
        let [r, g, b] = color.components();
        self.write_register(regs::FGCR0, r)?;
        self.write_register(regs::FGCR1, g)?;
        self.write_register(regs::FGCR2, b)
    }

    /// Kick the draw control register and poll the trigger bit until the
    /// hardware clears it.
    fn trigger_and_wait(&mut self, trigger: u8, op: u8) -> Result<(), Error<S::Error>> {
        self.write_register(regs::DCR, trigger | op)?;
        self.wait_register_clear(regs::DCR, trigger)
    }
}
