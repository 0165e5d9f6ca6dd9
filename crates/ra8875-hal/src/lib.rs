#![no_std]

/// Abstracts the RA8875's 2-byte SPI cycle over any bus implementation.
///
/// Every register access the controller understands is one full-duplex
/// 2-byte exchange: a cycle-type byte (RS in bit 7, RW in bit 6, see
/// datasheet section 6-1-2-2) followed by a single payload byte.
/// Implementations assert chip select for the duration of the exchange,
/// clock bits MSB first, and release chip select on every exit path,
/// including errors.
pub trait BusTransport {
    type Error: core::fmt::Debug;

    /// Perform one chip-select-framed 2-byte exchange.
    ///
    /// Returns the byte clocked in while `payload` was clocked out. For
    /// write cycles the device drives nothing meaningful during the
    /// payload phase and the returned byte can be ignored.
    fn exchange(&mut self, cycle: u8, payload: u8) -> Result<u8, Self::Error>;
}

/// Abstracts the controller's active-low reset line.
///
/// GPIO writes are treated as infallible here; adapters over fallible
/// pin types swallow pin errors at this boundary.
pub trait ResetLine {
    /// Drive the reset line to its active (low) state.
    fn assert_reset(&mut self);

    /// Release the reset line to its inactive (high) state.
    fn release_reset(&mut self);
}

/// Reset-line placeholder for panels wired without one.
///
/// A driver constructed with `None::<NoResetLine>` falls back to the
/// software reset command during bring-up.
pub struct NoResetLine;

impl ResetLine for NoResetLine {
    fn assert_reset(&mut self) {}

    fn release_reset(&mut self) {}
}
