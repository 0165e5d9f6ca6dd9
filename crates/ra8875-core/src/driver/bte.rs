//! Block Transfer Engine controller: rectangular block copies between
//! layers and positions in device memory.
//!
//! Staging order is fixed: source point (layer bit packed into the
//! vertical-high byte), destination point (same packing), width, height,
//! optional transparency key, then the two-register trigger (operation
//! select, then start). Completion is signaled through the shared status
//! register's BTE busy bit, not through the BTE's own control register.

use embedded_hal::delay::DelayNs;
use ra8875_hal::{BusTransport, ResetLine};

use crate::color::Rgb332;
use crate::geometry::{Point, Rect};
use crate::registers as regs;
use crate::registers::Layer;

use super::{Error, Ra8875};

impl<S: BusTransport, D: DelayNs, R: ResetLine> Ra8875<S, D, R> {
    /// Copy the `src` block from `src_layer` to `dst` on `dst_layer`.
    ///
    /// With `transparency: Some(key)`, source pixels matching the key are
    /// skipped (transparent move). The ROP field stays set to "source"
    /// in that mode even though the datasheet says it does not apply;
    /// observed hardware honors it.
    ///
    /// A zero-width or zero-height copy is undefined at the device and
    /// is short-circuited here without touching the bus.
    pub fn block_copy(
        &mut self,
        src_layer: Layer,
        src: Rect,
        dst_layer: Layer,
        dst: Point,
        transparency: Option<Rgb332>,
    ) -> Result<(), Error<S::Error>> {
        if src.is_empty() {
            return Ok(());
        }

        // Source point, layer bit in the vertical-high byte.
        self.write_register_pair(regs::HSBE0, regs::HSBE1, src.x)?;
        self.write_register(regs::VSBE0, (src.y & 0xFF) as u8)?;
        self.write_register(regs::VSBE1, ((src.y >> 8) as u8) | src_layer.bte_bit())?;

        // Destination point, same packing.
        self.write_register_pair(regs::HDBE0, regs::HDBE1, dst.x)?;
        self.write_register(regs::VDBE0, (dst.y & 0xFF) as u8)?;
        self.write_register(regs::VDBE1, ((dst.y >> 8) as u8) | dst_layer.bte_bit())?;

        self.write_register_pair(regs::BEWR0, regs::BEWR1, src.width)?;
        self.write_register_pair(regs::BEHR0, regs::BEHR1, src.height)?;

        let operation = match transparency {
            Some(key) => {
                let [r, g, b] = key.components();
                self.write_register(regs::FGCR0, r)?;
                self.write_register(regs::FGCR1, g)?;
                self.write_register(regs::FGCR2, b)?;
                regs::BECR1_MOVE_TRANSPARENT
            }
            None => regs::BECR1_MOVE_ROP_SOURCE,
        };
        self.write_register(regs::BECR1, operation)?;

        self.write_register(regs::BECR0, regs::BECR0_START)?;
        self.wait_status_clear(regs::STATUS_BTE_BUSY)
    }
}
