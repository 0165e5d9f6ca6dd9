//! Drawing command engine tests: staging order, trigger codes, and the
//! busy-bit poll, all against the simulated register file.

mod common;

use common::{make_driver, MockDevice, SpyDelay};
use ra8875_core::registers as regs;
use ra8875_core::{ColorDepth, Error, Point, PollBudget, Ra8875, Rgb565};
use ra8875_hal::NoResetLine;

const RED: Rgb565 = Rgb565::new(255, 0, 0);

#[test]
fn fill_rect_stages_geometry_color_then_trigger() {
    let (mut driver, device) = make_driver();

    driver
        .fill_rect(Point::new(10, 10), Point::new(50, 50), RED)
        .unwrap();

    assert_eq!(device.last_write_to(regs::DLHSR0), Some(10));
    assert_eq!(device.last_write_to(regs::DLVSR0), Some(10));
    assert_eq!(device.last_write_to(regs::DLHER0), Some(50));
    assert_eq!(device.last_write_to(regs::DLVER0), Some(50));

    // RGB565 red decomposes to 5/6/5 register values.
    assert_eq!(device.last_write_to(regs::FGCR0), Some(0x1F));
    assert_eq!(device.last_write_to(regs::FGCR1), Some(0x00));
    assert_eq!(device.last_write_to(regs::FGCR2), Some(0x00));

    assert_eq!(device.last_write_to(regs::DCR), Some(0xB0));

    // Geometry before color before trigger, within this one call.
    let geometry = device.index_of_write(regs::DLHSR0, 10).unwrap();
    let color = device.index_of_write(regs::FGCR0, 0x1F).unwrap();
    let trigger = device.index_of_write(regs::DCR, 0xB0).unwrap();
    assert!(geometry < color && color < trigger);
}

#[test]
fn line_and_outline_trigger_codes() {
    let (mut driver, device) = make_driver();

    driver
        .draw_line(Point::new(0, 0), Point::new(100, 100), RED)
        .unwrap();
    assert_eq!(device.last_write_to(regs::DCR), Some(0x80));

    driver
        .draw_rect(Point::new(0, 0), Point::new(100, 100), RED)
        .unwrap();
    assert_eq!(device.last_write_to(regs::DCR), Some(0x90));
}

#[test]
fn triangle_stages_third_point() {
    let (mut driver, device) = make_driver();

    driver
        .draw_triangle(
            Point::new(10, 10),
            Point::new(100, 10),
            Point::new(55, 300),
            RED,
        )
        .unwrap();

    assert_eq!(device.last_write_to(regs::DLHSR0), Some(10));
    assert_eq!(device.last_write_to(regs::DLHER0), Some(100));
    assert_eq!(device.last_write_to(regs::DTPH0), Some(55));
    // Third point y = 300 = 0x012C.
    assert_eq!(device.last_write_to(regs::DTPV0), Some(0x2C));
    assert_eq!(device.last_write_to(regs::DTPV1), Some(0x01));
    assert_eq!(device.last_write_to(regs::DCR), Some(0x81));

    driver
        .fill_triangle(
            Point::new(10, 10),
            Point::new(100, 10),
            Point::new(55, 300),
            RED,
        )
        .unwrap();
    assert_eq!(device.last_write_to(regs::DCR), Some(0xA1));
}

#[test]
fn circles_use_their_own_trigger_bit() {
    let (mut driver, device) = make_driver();

    driver.draw_circle(Point::new(240, 136), 40, RED).unwrap();
    assert_eq!(device.last_write_to(regs::DCHR0), Some(0xF0));
    assert_eq!(device.last_write_to(regs::DCVR0), Some(0x88));
    assert_eq!(device.last_write_to(regs::DCRR), Some(40));
    assert_eq!(device.last_write_to(regs::DCR), Some(0x40));

    driver.fill_circle(Point::new(240, 136), 40, RED).unwrap();
    assert_eq!(device.last_write_to(regs::DCR), Some(0x60));
}

#[test]
fn draw_times_out_on_wedged_device() {
    let (mut driver, device) = make_driver();
    device.set_stuck(true);
    driver.set_poll_budget(PollBudget {
        attempts: 3,
        interval_us: 1,
    });

    let result = driver.draw_line(Point::new(0, 0), Point::new(10, 10), RED);
    assert_eq!(result, Err(Error::DeviceTimeout));
}

#[test]
fn pixel_write_at_16bpp_sends_two_bytes_high_first() {
    let (mut driver, device) = make_driver();

    driver.draw_pixel(Point::new(3, 4), 0xF81F).unwrap();

    assert_eq!(device.last_write_to(regs::CURH0), Some(3));
    assert_eq!(device.last_write_to(regs::CURV0), Some(4));
    assert_eq!(device.writes_to(regs::MRWC), vec![0xF8, 0x1F]);
}

#[test]
fn pixel_write_at_8bpp_sends_one_byte() {
    let device = MockDevice::new();
    let mut driver = Ra8875::<_, _, NoResetLine>::new(
        device.clone(),
        SpyDelay::new(),
        None,
        480,
        272,
        ColorDepth::Bpp8,
    )
    .expect("init should succeed");
    device.clear_log();

    driver.draw_pixel(Point::new(3, 4), 0x00E0).unwrap();

    assert_eq!(device.writes_to(regs::MRWC), vec![0xE0]);
}
