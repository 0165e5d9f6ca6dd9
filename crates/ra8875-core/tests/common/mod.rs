//! Shared test doubles: a simulated RA8875 register file behind the
//! 2-byte SPI protocol, plus delay and reset-line spies.

// Each test binary compiles its own copy; not all of them use every helper.
#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use ra8875_core::registers as regs;
use ra8875_core::{ColorDepth, Ra8875};
use ra8875_hal::{BusTransport, NoResetLine, ResetLine};

/// One captured bus exchange: (cycle byte, payload byte).
pub type Frame = (u8, u8);

struct Inner {
    frames: Vec<Frame>,
    regs: [u8; 256],
    current: Option<u8>,
    /// When true, busy bits stay latched so every poll times out.
    stuck: bool,
    /// Register writes in order, resolved against the current register.
    reg_writes: Vec<(u8, u8)>,
}

/// Simulated device. Tracks the implicit current-register pointer,
/// stores data writes into a 256-byte register file, and clears
/// self-resetting trigger bits (DCR, BECR0, MCLR) on write so bounded
/// polls terminate immediately.
#[derive(Clone)]
pub struct MockDevice {
    inner: Rc<RefCell<Inner>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                frames: Vec::new(),
                regs: [0u8; 256],
                current: None,
                stuck: false,
                reg_writes: Vec::new(),
            })),
        }
    }

    /// Preload a register value (for read-modify-write paths).
    pub fn set_reg(&self, reg: u8, value: u8) {
        self.inner.borrow_mut().regs[reg as usize] = value;
    }

    pub fn reg(&self, reg: u8) -> u8 {
        self.inner.borrow().regs[reg as usize]
    }

    /// Latch busy bits so polls never see them clear.
    pub fn set_stuck(&self, stuck: bool) {
        self.inner.borrow_mut().stuck = stuck;
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.inner.borrow().frames.clone()
    }

    pub fn frame_count(&self) -> usize {
        self.inner.borrow().frames.len()
    }

    /// All register writes in order.
    pub fn reg_writes(&self) -> Vec<(u8, u8)> {
        self.inner.borrow().reg_writes.clone()
    }

    /// Values written to `reg`, in order.
    pub fn writes_to(&self, reg: u8) -> Vec<u8> {
        self.inner
            .borrow()
            .reg_writes
            .iter()
            .filter(|(r, _)| *r == reg)
            .map(|(_, v)| *v)
            .collect()
    }

    pub fn last_write_to(&self, reg: u8) -> Option<u8> {
        self.writes_to(reg).last().copied()
    }

    /// Index of the first write of `value` to `reg` in the write log.
    pub fn index_of_write(&self, reg: u8, value: u8) -> Option<usize> {
        self.inner
            .borrow()
            .reg_writes
            .iter()
            .position(|&(r, v)| r == reg && v == value)
    }

    /// Forget everything recorded so far (typically right after init).
    pub fn clear_log(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.frames.clear();
        inner.reg_writes.clear();
    }
}

impl BusTransport for MockDevice {
    type Error = Infallible;

    fn exchange(&mut self, cycle: u8, payload: u8) -> Result<u8, Self::Error> {
        let mut inner = self.inner.borrow_mut();
        inner.frames.push((cycle, payload));

        match cycle {
            regs::CMD_WRITE => {
                inner.current = Some(payload);
                Ok(0)
            }
            regs::DATA_WRITE => {
                if let Some(reg) = inner.current {
                    inner.regs[reg as usize] = payload;
                    inner.reg_writes.push((reg, payload));
                    if !inner.stuck {
                        // Self-resetting trigger bits: the hardware
                        // clears them when the operation completes.
                        match reg {
                            regs::DCR => {
                                inner.regs[reg as usize] &=
                                    !(regs::DCR_START | regs::DCR_START_CIRCLE);
                            }
                            regs::MCLR => {
                                inner.regs[reg as usize] &= !regs::MCLR_START;
                            }
                            regs::BECR0 => {
                                inner.regs[reg as usize] &= !regs::BECR0_START;
                            }
                            _ => {}
                        }
                    }
                }
                Ok(0)
            }
            regs::DATA_READ => Ok(inner.current.map(|r| inner.regs[r as usize]).unwrap_or(0)),
            regs::STATUS_READ => Ok(if inner.stuck {
                regs::STATUS_MEMORY_BUSY | regs::STATUS_BTE_BUSY
            } else {
                0
            }),
            _ => Ok(0),
        }
    }
}

/// DelayNs spy that only accumulates requested time.
#[derive(Clone)]
pub struct SpyDelay {
    pub total_ns: Rc<RefCell<u64>>,
}

impl SpyDelay {
    pub fn new() -> Self {
        Self {
            total_ns: Rc::new(RefCell::new(0)),
        }
    }

    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }
}

impl DelayNs for SpyDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }
}

/// Reset line spy recording every transition.
#[derive(Clone)]
pub struct SpyResetLine {
    /// true = asserted (driven low).
    pub transitions: Rc<RefCell<Vec<bool>>>,
}

impl SpyResetLine {
    pub fn new() -> Self {
        Self {
            transitions: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn log(&self) -> Vec<bool> {
        self.transitions.borrow().clone()
    }
}

impl ResetLine for SpyResetLine {
    fn assert_reset(&mut self) {
        self.transitions.borrow_mut().push(true);
    }

    fn release_reset(&mut self) {
        self.transitions.borrow_mut().push(false);
    }
}

/// A driver initialized for a 480x272 16 bpp panel over the mock device,
/// soft-reset path, with the recorded init traffic cleared.
pub fn make_driver() -> (Ra8875<MockDevice, SpyDelay>, MockDevice) {
    let device = MockDevice::new();
    let driver = Ra8875::<_, _, NoResetLine>::new(
        device.clone(),
        SpyDelay::new(),
        None,
        480,
        272,
        ColorDepth::Bpp16,
    )
    .expect("init should succeed for 480x272x16");
    device.clear_log();
    (driver, device)
}

/// Same as [`make_driver`] but keeps the init traffic in the log.
pub fn make_driver_logged() -> (Ra8875<MockDevice, SpyDelay>, MockDevice) {
    let device = MockDevice::new();
    let driver = Ra8875::<_, _, NoResetLine>::new(
        device.clone(),
        SpyDelay::new(),
        None,
        480,
        272,
        ColorDepth::Bpp16,
    )
    .expect("init should succeed for 480x272x16");
    (driver, device)
}
