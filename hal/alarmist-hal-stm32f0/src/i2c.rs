//! I2C bus for STM32F0
//!
//! The RTC and the OLED share I2C1 in blocking master mode. The peripheral
//! sits in a `RefCell` and each driver gets an `embedded-hal-bus` device
//! on it.

use core::cell::RefCell;

use alarmist_hal::{HalI2c, I2cSpeed};
use embassy_stm32::i2c::{Config, I2c, Master};
use embassy_stm32::mode::Blocking;
use embassy_stm32::time::Hertz;
use embedded_hal_bus::i2c::RefCellDevice;

/// I2C master in blocking mode
pub type BlockingI2c<'d> = I2c<'d, Blocking, Master>;

/// One driver's handle to the shared bus
pub type SharedI2c<'a, 'd> = HalI2c<RefCellDevice<'a, BlockingI2c<'d>>>;

/// Peripheral config for a speed preset
pub fn config(speed: I2cSpeed) -> Config {
    let mut config = Config::default();
    config.frequency = Hertz(speed.frequency());
    config
}

/// Hand out a driver handle on `bus`
pub fn shared<'a, 'd>(bus: &'a RefCell<BlockingI2c<'d>>) -> SharedI2c<'a, 'd> {
    HalI2c::new(RefCellDevice::new(bus))
}
