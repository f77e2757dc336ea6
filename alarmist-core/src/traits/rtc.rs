//! Real-time clock trait

use crate::time::TimeWord;

/// Errors that can occur talking to the RTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtcError {
    /// I2C transaction failed
    Bus,
    /// Register contents are not valid BCD
    InvalidData,
}

/// Trait for the battery-backed clock chip
///
/// All values cross this boundary BCD-encoded. The alarm is read back in
/// its raw register layout (`min | hr << 8`), not in time-word layout.
pub trait RealTimeClock {
    /// Read seconds, minutes and hours as a packed [`TimeWord`]
    fn read_time(&mut self) -> Result<TimeWord, RtcError>;

    /// Set hours and minutes; seconds restart at zero
    fn write_time(&mut self, hours_bcd: u8, minutes_bcd: u8) -> Result<(), RtcError>;

    /// Read the raw alarm register word
    fn read_alarm(&mut self) -> Result<u32, RtcError>;

    /// Set the daily alarm time
    fn write_alarm(&mut self, hours_bcd: u8, minutes_bcd: u8) -> Result<(), RtcError>;
}

impl<T: RealTimeClock + ?Sized> RealTimeClock for &mut T {
    fn read_time(&mut self) -> Result<TimeWord, RtcError> {
        (**self).read_time()
    }

    fn write_time(&mut self, hours_bcd: u8, minutes_bcd: u8) -> Result<(), RtcError> {
        (**self).write_time(hours_bcd, minutes_bcd)
    }

    fn read_alarm(&mut self) -> Result<u32, RtcError> {
        (**self).read_alarm()
    }

    fn write_alarm(&mut self, hours_bcd: u8, minutes_bcd: u8) -> Result<(), RtcError> {
        (**self).write_alarm(hours_bcd, minutes_bcd)
    }
}
