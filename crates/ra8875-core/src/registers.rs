//! RA8875 register addresses and bit-field constants.
//!
//! Reproduced from the RA8875 datasheet register map. These addresses are
//! the wire contract with the hardware and must not be changed.

// --- SPI cycle types (datasheet 6-1-2-2) ---
//
// The first byte of every 2-byte exchange selects the cycle: bit 7 is RS
// (0 data, 1 command), bit 6 is RW (0 write, 1 read).

/// Write one byte to the currently selected register.
pub const DATA_WRITE: u8 = 0x00;
/// Read one byte from the currently selected register.
pub const DATA_READ: u8 = 0x40;
/// Select the register subsequent data cycles address.
pub const CMD_WRITE: u8 = 0x80;
/// Read the status register. The status register has no address and is
/// only reachable through this cycle type.
pub const STATUS_READ: u8 = 0xC0;

// --- System & configuration registers (datasheet 5-2) ---

/// Power and display control register.
pub const PWRR: u8 = 0x01;
/// Memory read/write command.
pub const MRWC: u8 = 0x02;
/// Pixel clock setting register.
pub const PCSR: u8 = 0x04;
/// Serial Flash/ROM configuration register.
pub const SROC: u8 = 0x05;
/// Serial Flash/ROM CLK setting register.
pub const SFCLR: u8 = 0x06;
/// System configuration register.
pub const SYSR: u8 = 0x10;
/// Horizontal display width register.
pub const HDWR: u8 = 0x14;
/// Horizontal non-display period fine tuning option register.
pub const HNDFTR: u8 = 0x15;
/// Horizontal non-display period register.
pub const HNDR: u8 = 0x16;
/// HSYNC start position register.
pub const HSTR: u8 = 0x17;
/// HSYNC pulse width register.
pub const HPWR: u8 = 0x18;
/// Vertical display height register 0.
pub const VDHR0: u8 = 0x19;
/// Vertical display height register 1.
pub const VDHR1: u8 = 0x1A;
/// Vertical non-display period register 0.
pub const VNDR0: u8 = 0x1B;
/// Vertical non-display period register 1.
pub const VNDR1: u8 = 0x1C;
/// VSYNC start position register 0.
pub const VSTR0: u8 = 0x1D;
/// VSYNC start position register 1.
pub const VSTR1: u8 = 0x1E;
/// VSYNC pulse width register.
pub const VPWR: u8 = 0x1F;

// --- LCD display control registers (datasheet 5-3) ---

/// Display configuration register.
pub const DPCR: u8 = 0x20;
/// Font control register 0.
pub const FNCR0: u8 = 0x21;
/// Font control register 1.
pub const FNCR1: u8 = 0x22;
/// CGRAM select register.
pub const CGSR: u8 = 0x23;
/// Horizontal scroll offset register 0.
pub const HOFS0: u8 = 0x24;
/// Horizontal scroll offset register 1.
pub const HOFS1: u8 = 0x25;
/// Vertical scroll offset register 0.
pub const VOFS0: u8 = 0x26;
/// Vertical scroll offset register 1.
pub const VOFS1: u8 = 0x27;
/// Font write cursor X register 0.
pub const FCURX0: u8 = 0x2A;
/// Font write cursor X register 1.
pub const FCURX1: u8 = 0x2B;
/// Font write cursor Y register 0.
pub const FCURY0: u8 = 0x2C;
/// Font write cursor Y register 1.
pub const FCURY1: u8 = 0x2D;
/// Font write type setting register.
pub const FWTSR: u8 = 0x2E;
/// Serial font ROM setting.
pub const SFRS: u8 = 0x2F;

// --- Active window & scroll window registers (datasheet 5-4) ---

/// Horizontal start point 0 of active window.
pub const HSAW0: u8 = 0x30;
/// Horizontal start point 1 of active window.
pub const HSAW1: u8 = 0x31;
/// Vertical start point 0 of active window.
pub const VSAW0: u8 = 0x32;
/// Vertical start point 1 of active window.
pub const VSAW1: u8 = 0x33;
/// Horizontal end point 0 of active window.
pub const HEAW0: u8 = 0x34;
/// Horizontal end point 1 of active window.
pub const HEAW1: u8 = 0x35;
/// Vertical end point 0 of active window.
pub const VEAW0: u8 = 0x36;
/// Vertical end point 1 of active window.
pub const VEAW1: u8 = 0x37;
/// Horizontal start point 0 of scroll window.
pub const HSSW0: u8 = 0x38;
/// Horizontal start point 1 of scroll window.
pub const HSSW1: u8 = 0x39;
/// Vertical start point 0 of scroll window.
pub const VSSW0: u8 = 0x3A;
/// Vertical start point 1 of scroll window.
pub const VSSW1: u8 = 0x3B;
/// Horizontal end point 0 of scroll window.
pub const HESW0: u8 = 0x3C;
/// Horizontal end point 1 of scroll window.
pub const HESW1: u8 = 0x3D;
/// Vertical end point 0 of scroll window.
pub const VESW0: u8 = 0x3E;
/// Vertical end point 1 of scroll window.
pub const VESW1: u8 = 0x3F;

// --- Cursor setting registers (datasheet 5-5) ---

/// Memory write control register 0.
pub const MWCR0: u8 = 0x40;
/// Memory write control register 1.
pub const MWCR1: u8 = 0x41;
/// Memory write cursor horizontal position 0.
pub const CURH0: u8 = 0x46;
/// Memory write cursor horizontal position 1.
pub const CURH1: u8 = 0x47;
/// Memory write cursor vertical position 0.
pub const CURV0: u8 = 0x48;
/// Memory write cursor vertical position 1.
pub const CURV1: u8 = 0x49;

// --- Block Transfer Engine registers (datasheet 5-6) ---

/// BTE function control register 0.
pub const BECR0: u8 = 0x50;
/// BTE function control register 1.
pub const BECR1: u8 = 0x51;
/// Layer transparency register 0.
pub const LTPR0: u8 = 0x52;
/// Layer transparency register 1.
pub const LTPR1: u8 = 0x53;
/// Horizontal source point 0 of BTE.
pub const HSBE0: u8 = 0x54;
/// Horizontal source point 1 of BTE.
pub const HSBE1: u8 = 0x55;
/// Vertical source point 0 of BTE.
pub const VSBE0: u8 = 0x56;
/// Vertical source point 1 of BTE. Bit 7 selects the source layer.
pub const VSBE1: u8 = 0x57;
/// Horizontal destination point 0 of BTE.
pub const HDBE0: u8 = 0x58;
/// Horizontal destination point 1 of BTE.
pub const HDBE1: u8 = 0x59;
/// Vertical destination point 0 of BTE.
pub const VDBE0: u8 = 0x5A;
/// Vertical destination point 1 of BTE. Bit 7 selects the destination layer.
pub const VDBE1: u8 = 0x5B;
/// BTE width register 0.
pub const BEWR0: u8 = 0x5C;
/// BTE width register 1.
pub const BEWR1: u8 = 0x5D;
/// BTE height register 0.
pub const BEHR0: u8 = 0x5E;
/// BTE height register 1.
pub const BEHR1: u8 = 0x5F;
/// Background color register 0 (red).
pub const BGCR0: u8 = 0x60;
/// Background color register 1 (green).
pub const BGCR1: u8 = 0x61;
/// Background color register 2 (blue).
pub const BGCR2: u8 = 0x62;
/// Foreground color register 0 (red).
pub const FGCR0: u8 = 0x63;
/// Foreground color register 1 (green).
pub const FGCR1: u8 = 0x64;
/// Foreground color register 2 (blue).
pub const FGCR2: u8 = 0x65;
/// Pattern set number for BTE.
pub const PTNO: u8 = 0x66;
/// Background color register for transparency 0 (red).
pub const BGTR0: u8 = 0x67;
/// Background color register for transparency 1 (green).
pub const BGTR1: u8 = 0x68;
/// Background color register for transparency 2 (blue).
pub const BGTR2: u8 = 0x69;

// --- PLL setting registers (datasheet 5-9) ---

/// PLL control register 1.
pub const PLLC1: u8 = 0x88;
/// PLL control register 2.
pub const PLLC2: u8 = 0x89;

// --- PWM control registers (datasheet 5-10) ---

/// PWM1 control register.
pub const P1CR: u8 = 0x8A;
/// PWM1 duty cycle register.
pub const P1DCR: u8 = 0x8B;
/// Memory clear control register.
pub const MCLR: u8 = 0x8E;

// --- Drawing control registers (datasheet 5-11) ---

/// Draw control register.
pub const DCR: u8 = 0x90;
/// Draw line horizontal start register 0.
pub const DLHSR0: u8 = 0x91;
/// Draw line horizontal start register 1.
pub const DLHSR1: u8 = 0x92;
/// Draw line vertical start register 0.
pub const DLVSR0: u8 = 0x93;
/// Draw line vertical start register 1.
pub const DLVSR1: u8 = 0x94;
/// Draw line horizontal end register 0.
pub const DLHER0: u8 = 0x95;
/// Draw line horizontal end register 1.
pub const DLHER1: u8 = 0x96;
/// Draw line vertical end register 0.
pub const DLVER0: u8 = 0x97;
/// Draw line vertical end register 1.
pub const DLVER1: u8 = 0x98;
/// Draw circle horizontal register 0.
pub const DCHR0: u8 = 0x99;
/// Draw circle horizontal register 1.
pub const DCHR1: u8 = 0x9A;
/// Draw circle vertical register 0.
pub const DCVR0: u8 = 0x9B;
/// Draw circle vertical register 1.
pub const DCVR1: u8 = 0x9C;
/// Draw circle radius register.
pub const DCRR: u8 = 0x9D;
/// Draw triangle point horizontal register 0.
pub const DTPH0: u8 = 0xA9;
/// Draw triangle point horizontal register 1.
pub const DTPH1: u8 = 0xAA;
/// Draw triangle point vertical register 0.
pub const DTPV0: u8 = 0xAB;
/// Draw triangle point vertical register 1.
pub const DTPV1: u8 = 0xAC;

// --- Key & IO control registers (datasheet 5-13) ---

/// Extra general purpose IO register.
pub const GPIOX: u8 = 0xC7;

// --- Serial flash control registers (datasheet 5-15) ---

/// Serial Flash/ROM direct access mode.
pub const SACS_MODE: u8 = 0xE0;

// --- Interrupt control registers (datasheet 5-16) ---

/// Interrupt control register 1.
pub const INTC1: u8 = 0xF0;
/// Interrupt control register 2.
pub const INTC2: u8 = 0xF1;

// --- Status register bits ---

/// Memory read/write busy.
pub const STATUS_MEMORY_BUSY: u8 = 0x80;
/// BTE operation in flight.
pub const STATUS_BTE_BUSY: u8 = 0x40;

// --- PWRR bits ---

/// Display on.
pub const PWRR_DISPLAY_ON: u8 = 0x80;
/// Software reset.
pub const PWRR_SOFT_RESET: u8 = 0x01;

// --- SYSR bits ---

/// 16 bpp (65k color) mode; cleared selects 8 bpp (256 color).
pub const SYSR_COLOR_16BPP: u8 = 0x08;

// --- DPCR bits ---

/// Two-layer display mode.
pub const DPCR_TWO_LAYER: u8 = 0x80;

// --- MWCR0 bits ---

/// Text mode; cleared selects graphics mode.
pub const MWCR0_TEXT_MODE: u8 = 0x80;
/// Text cursor visible.
pub const MWCR0_CURSOR_VISIBLE: u8 = 0x40;
/// Text cursor blink.
pub const MWCR0_CURSOR_BLINK: u8 = 0x20;

// --- MCLR bits ---

/// Start memory clear; doubles as the busy bit while clearing runs.
pub const MCLR_START: u8 = 0x80;

// --- DCR bits ---
//
// The draw control register packs two distinct trigger/busy bits. Bit 7
// starts line, square, and triangle operations; bit 6 starts circle
// operations. They are not interchangeable: each doubles as the busy bit
// for its own operation class.

/// Start bit and busy bit for line/square/triangle draws.
pub const DCR_START: u8 = 0x80;
/// Start bit and busy bit for circle draws.
pub const DCR_START_CIRCLE: u8 = 0x40;

/// Draw line (combined with [`DCR_START`]).
pub const DCR_OP_LINE: u8 = 0x00;
/// Draw square outline.
pub const DCR_OP_SQUARE: u8 = 0x10;
/// Draw filled square.
pub const DCR_OP_SQUARE_FILL: u8 = 0x30;
/// Draw triangle outline.
pub const DCR_OP_TRIANGLE: u8 = 0x01;
/// Draw filled triangle.
pub const DCR_OP_TRIANGLE_FILL: u8 = 0x21;
/// Draw circle outline (combined with [`DCR_START_CIRCLE`]).
pub const DCR_OP_CIRCLE: u8 = 0x00;
/// Draw filled circle.
pub const DCR_OP_CIRCLE_FILL: u8 = 0x20;

// --- BTE control bits ---

/// Start BTE operation; source and destination are rectangular blocks.
pub const BECR0_START: u8 = 0x80;
/// Move in positive direction with ROP, ROP = source.
pub const BECR1_MOVE_ROP_SOURCE: u8 = 0xC2;
/// Transparent move in positive direction, ROP field kept at "source".
///
/// Datasheet section 7-6 says ROP does not apply to Transparent Move,
/// but the hardware has been observed to honor it anyway.
pub const BECR1_MOVE_TRANSPARENT: u8 = 0xC5;

/// Layer-select bit packed into the vertical-high staging byte of the
/// BTE source (VSBE1) and destination (VDBE1) points.
pub const BTE_LAYER_BIT: u8 = 0x80;

// --- PWM1 control values ---

/// PWM1 enabled, SYS_CLK / 1024.
pub const P1CR_ENABLE: u8 = 0x8A;
/// PWM1 disabled, SYS_CLK / 1024.
pub const P1CR_DISABLE: u8 = 0x0A;

/// One of the two frame-buffer layers the controller composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Layer1,
    Layer2,
}

impl Layer {
    /// Layer-select bit as packed into VSBE1/VDBE1 for BTE operations.
    pub const fn bte_bit(self) -> u8 {
        match self {
            Layer::Layer1 => 0x00,
            Layer::Layer2 => BTE_LAYER_BIT,
        }
    }

    /// Layer index bit as written to MWCR1 bit 0.
    pub const fn mwcr1_bit(self) -> u8 {
        match self {
            Layer::Layer1 => 0x00,
            Layer::Layer2 => 0x01,
        }
    }
}

/// Layer compositing mode, written to the low bits of LTPR0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LayerMode {
    /// Show layer 1 only.
    Layer1 = 0x00,
    /// Show layer 2 only.
    Layer2 = 0x01,
    Lighten = 0x02,
    Transparent = 0x03,
    Or = 0x04,
    And = 0x05,
    FloatingWindow = 0x06,
}
