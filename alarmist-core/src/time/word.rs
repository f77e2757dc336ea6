//! Packed time and alarm words

use super::bcd::{decode_bcd_time, ALARM_OFFSETS, TIME_OFFSETS};

/// Hours and minutes fields of a time word (bits 8-23)
pub const ALARM_MATCH_MASK: u32 = 0x00FF_FF00;

/// Current time as read from the RTC: `sec | min << 8 | hr << 16`
///
/// Bit 0 is the low bit of the BCD seconds register. It flips every second
/// and drives every blink on screen and on the segment display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeWord(pub u32);

impl TimeWord {
    /// Pack the three BCD time registers
    pub const fn from_registers(seconds: u8, minutes: u8, hours: u8) -> Self {
        Self(seconds as u32 | (minutes as u32) << 8 | (hours as u32) << 16)
    }

    /// Seconds parity bit
    #[inline]
    pub const fn blink_phase(self) -> bool {
        self.0 & 0x01 != 0
    }

    pub fn hours_minutes(self) -> (u8, u8) {
        decode_bcd_time(self.0, &TIME_OFFSETS)
    }

    /// Digits in segment shift order: minutes ones, minutes tens,
    /// hours ones, hours tens
    pub const fn segment_digits(self) -> [u8; 4] {
        let w = self.0;
        [
            ((w >> TIME_OFFSETS.minutes_ones) & 0x0F) as u8,
            ((w >> TIME_OFFSETS.minutes_tens) & 0x0F) as u8,
            ((w >> TIME_OFFSETS.hours_ones) & 0x0F) as u8,
            ((w >> TIME_OFFSETS.hours_tens) & 0x03) as u8,
        ]
    }

    /// Hour and minute bits only, in the same position as an [`AlarmWord`]
    #[inline]
    pub const fn alarm_key(self) -> u32 {
        self.0 & ALARM_MATCH_MASK
    }
}

/// Alarm time in time-word layout: the raw alarm register shifted left 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmWord(pub u32);

impl AlarmWord {
    /// Convert a raw alarm register word (`min | hr << 8`)
    pub const fn from_register(raw: u32) -> Self {
        Self(raw << 8)
    }

    /// Back to the raw register layout
    pub const fn register(self) -> u32 {
        self.0 >> 8
    }

    pub fn hours_minutes(self) -> (u8, u8) {
        decode_bcd_time(self.register(), &ALARM_OFFSETS)
    }

    /// True when `time` is on the alarm minute
    #[inline]
    pub const fn matches(self, time: TimeWord) -> bool {
        time.alarm_key() == self.0
    }
}
