//! Platform-agnostic driver for the RA8875 TFT display controller.
//!
//! The RA8875 is a memory-mapped display controller reached over a
//! narrow SPI link: every register access is a 2-byte command/data
//! exchange, and all drawing (lines, rectangles, triangles, circles,
//! block copies) is executed by the controller's own hardware
//! accelerator. This crate sequences those register accesses — bring-up,
//! drawing command staging, and the Block Transfer Engine — over any
//! [`ra8875_hal::BusTransport`] implementation.
//!
//! No pixels are rasterized or buffered host-side, and a driver instance
//! manages exactly one controller.

#![no_std]

pub mod color;
pub mod config;
pub mod driver;
pub mod font;
pub mod geometry;
pub mod registers;

pub use color::{Rgb332, Rgb565};
pub use config::{ColorDepth, DeviceConfig, PollBudget, Resolution};
pub use driver::{Error, Ra8875};
pub use font::{FontEncoding, FontFamily, FontRom, FontSize};
pub use geometry::{Point, Rect};
pub use registers::{Layer, LayerMode};
