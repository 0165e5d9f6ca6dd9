//! SPI transport for the RA8875 driver over `embedded-hal` 1.0 traits.
//!
//! The controller expects each register access as one 2-byte full-duplex
//! exchange, MSB first, chip select held low for the duration. Clock
//! mode is 3 (idle high, sample on trailing edge). Keep the clock rate
//! conservative until PLL bring-up completes: the read ceiling is
//! system clock / 6, which is about 3 MHz at the 20 MHz crystal default.

#![no_std]

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use ra8875_hal::{BusTransport, ResetLine};

/// Transport error: SPI bus or chip-select pin failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<SpiE, PinE> {
    Spi(SpiE),
    ChipSelect(PinE),
}

/// [`BusTransport`] over a raw SPI bus plus a dedicated chip-select pin.
///
/// Chip select frames each 2-byte exchange and is released on every
/// exit path, including SPI errors, so a failed transfer cannot leave
/// the device selected.
pub struct SpiBusTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI: SpiBus, CS: OutputPin> SpiBusTransport<SPI, CS> {
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Release the bus and chip-select pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI: SpiBus, CS: OutputPin> BusTransport for SpiBusTransport<SPI, CS> {
    type Error = TransportError<SPI::Error, CS::Error>;

    fn exchange(&mut self, cycle: u8, payload: u8) -> Result<u8, Self::Error> {
        let tx = [cycle, payload];
        let mut rx = [0u8; 2];

        self.cs.set_low().map_err(TransportError::ChipSelect)?;
        let result = self.spi.transfer(&mut rx, &tx);
        let flush = self.spi.flush();
        self.cs.set_high().map_err(TransportError::ChipSelect)?;

        result.map_err(TransportError::Spi)?;
        flush.map_err(TransportError::Spi)?;
        Ok(rx[1])
    }
}

/// [`ResetLine`] over an active-low GPIO pin.
///
/// Pin errors are swallowed at this boundary; GPIO writes do not fail on
/// real hardware and the reset contract is infallible.
pub struct GpioReset<P> {
    pin: P,
}

impl<P: OutputPin> GpioReset<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ResetLine for GpioReset<P> {
    fn assert_reset(&mut self) {
        let _ = self.pin.set_low();
    }

    fn release_reset(&mut self) {
        let _ = self.pin.set_high();
    }
}
