//! SSD1306 OLED driver
//!
//! Driver for 128x64 SSD1306 panels on I2C. The chip runs in horizontal
//! addressing mode, so one flush is a window reset followed by the whole
//! page buffer in display RAM order.

use alarmist_display::{DisplayBackend, DisplayError, Framebuffer, WIDTH};
use alarmist_hal::I2cBus;

/// Default address with SA0 low
pub const SSD1306_ADDR: u8 = 0x3C;

const PAGES: u8 = 8;

/// Control byte for a command stream
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte for a data stream
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

const INIT_SEQUENCE: &[u8] = &[
    CONTROL_COMMAND,
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80,
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14,
    cmd::SET_MEMORY_MODE,
    0x00, // horizontal
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_FROM_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// Full-screen column and page window
const WINDOW: &[u8] = &[
    CONTROL_COMMAND,
    cmd::SET_COLUMN_ADDR,
    0,
    (WIDTH - 1) as u8,
    cmd::SET_PAGE_ADDR,
    0,
    PAGES - 1,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I> {
    bus: I,
    address: u8,
    initialized: bool,
}

impl<I: I2cBus> Ssd1306<I> {
    pub fn new(bus: I) -> Self {
        Self::with_address(bus, SSD1306_ADDR)
    }

    pub fn with_address(bus: I, address: u8) -> Self {
        Self {
            bus,
            address,
            initialized: false,
        }
    }

    pub fn free(self) -> I {
        self.bus
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.bus
            .write(self.address, bytes)
            .map_err(|_| DisplayError::Communication)
    }
}

impl<I: I2cBus> DisplayBackend for Ssd1306<I> {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.send(INIT_SEQUENCE)?;
        self.initialized = true;
        Ok(())
    }

    fn flush(&mut self, frame: &Framebuffer) -> Result<(), DisplayError> {
        // A panel that missed its init at power-up gets another try here
        if !self.initialized {
            self.init()?;
        }
        self.send(WINDOW)?;

        // One data transaction per page
        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;
        for page in frame.as_bytes().chunks(WIDTH) {
            data[1..].copy_from_slice(page);
            self.send(&data)?;
        }
        Ok(())
    }
}
