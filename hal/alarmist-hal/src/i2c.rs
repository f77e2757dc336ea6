//! I2C bus abstractions
//!
//! The RTC and the OLED share one blocking I2C master. A stalled
//! transaction stalls the whole clock; there is no timeout at this layer.

use embedded_hal::i2c::I2c;

/// Blocking I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a register pointer then read back in a single transaction
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically the register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        (**self).write_read(address, write_data, read_buf)
    }
}

/// [`I2cBus`] over any `embedded-hal` I2C master
///
/// Wrap an `embedded_hal_bus::i2c::RefCellDevice` to give the RTC and the
/// OLED drivers each their own handle to one physical bus.
pub struct HalI2c<T> {
    i2c: T,
}

impl<T: I2c> HalI2c<T> {
    pub fn new(i2c: T) -> Self {
        Self { i2c }
    }

    /// Release the wrapped master
    pub fn free(self) -> T {
        self.i2c
    }
}

impl<T: I2c> I2cBus for HalI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        I2c::write(&mut self.i2c, address, data)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        I2c::write_read(&mut self.i2c, address, write_data, read_buf)
    }
}

/// I2C bus speed preset
///
/// Names in `clock.toml` are the serde names (`"400khz"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum I2cSpeed {
    /// 10 kHz
    #[cfg_attr(feature = "serde", serde(rename = "10khz"))]
    Khz10,
    /// 100 kHz standard mode
    #[cfg_attr(feature = "serde", serde(rename = "100khz"))]
    Khz100,
    /// 400 kHz fast mode
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "400khz"))]
    Khz400,
    /// 1 MHz fast mode plus
    #[cfg_attr(feature = "serde", serde(rename = "1mhz"))]
    Mhz1,
}

impl I2cSpeed {
    /// SCL frequency in Hz
    pub const fn frequency(self) -> u32 {
        match self {
            I2cSpeed::Khz10 => 10_000,
            I2cSpeed::Khz100 => 100_000,
            I2cSpeed::Khz400 => 400_000,
            I2cSpeed::Mhz1 => 1_000_000,
        }
    }
}
