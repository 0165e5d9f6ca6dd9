//! Block Transfer Engine tests: staging order, layer-bit packing,
//! transparency keys, and the zero-size short circuit.

mod common;

use common::make_driver;
use ra8875_core::registers as regs;
use ra8875_core::{Error, Layer, Point, PollBudget, Rect, Rgb332};

#[test]
fn plain_copy_stages_blocks_and_starts() {
    let (mut driver, device) = make_driver();

    driver
        .block_copy(
            Layer::Layer1,
            Rect::new(10, 20, 100, 50),
            Layer::Layer1,
            Point::new(200, 100),
            None,
        )
        .unwrap();

    assert_eq!(device.last_write_to(regs::HSBE0), Some(10));
    assert_eq!(device.last_write_to(regs::VSBE0), Some(20));
    assert_eq!(device.last_write_to(regs::VSBE1), Some(0x00));
    assert_eq!(device.last_write_to(regs::HDBE0), Some(200));
    assert_eq!(device.last_write_to(regs::VDBE0), Some(100));
    assert_eq!(device.last_write_to(regs::VDBE1), Some(0x00));
    assert_eq!(device.last_write_to(regs::BEWR0), Some(100));
    assert_eq!(device.last_write_to(regs::BEHR0), Some(50));

    assert_eq!(
        device.last_write_to(regs::BECR1),
        Some(regs::BECR1_MOVE_ROP_SOURCE)
    );
    assert_eq!(device.last_write_to(regs::BECR0), Some(regs::BECR0_START));

    // Operation select must be staged before the start bit.
    let select = device
        .index_of_write(regs::BECR1, regs::BECR1_MOVE_ROP_SOURCE)
        .unwrap();
    let start = device
        .index_of_write(regs::BECR0, regs::BECR0_START)
        .unwrap();
    assert!(select < start);
}

#[test]
fn layer_bits_pack_into_vertical_high_bytes() {
    let (mut driver, device) = make_driver();

    driver
        .block_copy(
            Layer::Layer2,
            Rect::new(0, 300, 10, 10),
            Layer::Layer2,
            Point::new(0, 0),
            None,
        )
        .unwrap();

    // Source y = 300 = 0x012C, layer 2 bit OR'd into the high byte.
    assert_eq!(device.last_write_to(regs::VSBE0), Some(0x2C));
    assert_eq!(device.last_write_to(regs::VSBE1), Some(0x81));
    assert_eq!(device.last_write_to(regs::VDBE1), Some(0x80));
}

#[test]
fn transparent_copy_stages_key_and_keeps_rop() {
    let (mut driver, device) = make_driver();

    let key = Rgb332::new(0xFF, 0x00, 0x00);
    driver
        .block_copy(
            Layer::Layer1,
            Rect::new(0, 0, 64, 64),
            Layer::Layer2,
            Point::new(0, 0),
            Some(key),
        )
        .unwrap();

    // Key decomposes 3/3/2 into the foreground color registers.
    assert_eq!(device.last_write_to(regs::FGCR0), Some(0x07));
    assert_eq!(device.last_write_to(regs::FGCR1), Some(0x00));
    assert_eq!(device.last_write_to(regs::FGCR2), Some(0x00));
    assert_eq!(
        device.last_write_to(regs::BECR1),
        Some(regs::BECR1_MOVE_TRANSPARENT)
    );
}

#[test]
fn zero_size_copy_is_a_no_op() {
    let (mut driver, device) = make_driver();

    driver
        .block_copy(
            Layer::Layer1,
            Rect::new(10, 10, 0, 50),
            Layer::Layer1,
            Point::new(0, 0),
            None,
        )
        .unwrap();
    driver
        .block_copy(
            Layer::Layer1,
            Rect::new(10, 10, 50, 0),
            Layer::Layer1,
            Point::new(0, 0),
            None,
        )
        .unwrap();

    assert_eq!(device.frame_count(), 0, "no bus traffic for empty blocks");
}

#[test]
fn copy_times_out_on_wedged_device() {
    let (mut driver, device) = make_driver();
    device.set_stuck(true);
    driver.set_poll_budget(PollBudget {
        attempts: 3,
        interval_us: 1,
    });

    let result = driver.block_copy(
        Layer::Layer1,
        Rect::new(0, 0, 10, 10),
        Layer::Layer1,
        Point::new(0, 0),
        None,
    );
    assert_eq!(result, Err(Error::DeviceTimeout));
}
