//! DS3231 real-time clock over I2C
//!
//! Only the time registers (0x00-0x02) and alarm 1 (0x07-0x0A) are used.
//! The clock runs in 24-hour mode; day/date registers are left alone.

use alarmist_core::time::TimeWord;
use alarmist_core::traits::{RealTimeClock, RtcError};
use alarmist_hal::I2cBus;

/// Fixed DS3231 bus address
pub const DS3231_ADDR: u8 = 0x68;

mod reg {
    pub const SECONDS: u8 = 0x00;
    pub const ALARM1_SECONDS: u8 = 0x07;
    pub const ALARM1_MINUTES: u8 = 0x08;
}

/// A1M4 in the alarm 1 day register: ignore the day, match h:m:s daily
const A1M4: u8 = 0x80;

/// DS3231 driver
pub struct Ds3231<I> {
    bus: I,
    address: u8,
}

impl<I: I2cBus> Ds3231<I> {
    /// Create a driver at the standard address
    pub fn new(bus: I) -> Self {
        Self::with_address(bus, DS3231_ADDR)
    }

    pub fn with_address(bus: I, address: u8) -> Self {
        Self { bus, address }
    }

    /// Release the bus
    pub fn free(self) -> I {
        self.bus
    }

    fn read<const N: usize>(&mut self, register: u8) -> Result<[u8; N], RtcError> {
        let mut buf = [0u8; N];
        self.bus
            .write_read(self.address, &[register], &mut buf)
            .map_err(|_| RtcError::Bus)?;
        Ok(buf)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), RtcError> {
        self.bus.write(self.address, data).map_err(|_| RtcError::Bus)
    }
}

/// Ones nibble must be a decimal digit
fn check_bcd(byte: u8) -> Result<u8, RtcError> {
    if byte & 0x0F > 9 {
        return Err(RtcError::InvalidData);
    }
    Ok(byte)
}

impl<I: I2cBus> RealTimeClock for Ds3231<I> {
    fn read_time(&mut self) -> Result<TimeWord, RtcError> {
        let [seconds, minutes, hours] = self.read::<3>(reg::SECONDS)?;
        Ok(TimeWord::from_registers(
            check_bcd(seconds)?,
            check_bcd(minutes)?,
            check_bcd(hours)?,
        ))
    }

    /// Seconds restart at zero
    fn write_time(&mut self, hours_bcd: u8, minutes_bcd: u8) -> Result<(), RtcError> {
        self.write(&[reg::SECONDS, 0x00, minutes_bcd, hours_bcd])
    }

    fn read_alarm(&mut self) -> Result<u32, RtcError> {
        let [minutes, hours] = self.read::<2>(reg::ALARM1_MINUTES)?;
        Ok(check_bcd(minutes)? as u32 | (check_bcd(hours)? as u32) << 8)
    }

    fn write_alarm(&mut self, hours_bcd: u8, minutes_bcd: u8) -> Result<(), RtcError> {
        self.write(&[reg::ALARM1_SECONDS, 0x00, minutes_bcd, hours_bcd, A1M4])
    }
}
