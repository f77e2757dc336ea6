//! Packed BCD field codec
//!
//! The RTC hands back hours and minutes as BCD nibbles inside a 32-bit word.
//! The "current time" read and the "alarm 1" read place those nibbles at
//! different bit offsets, so each word kind has its own [`FieldOffsets`]
//! table. The two tables must stay separate.

/// Bit offsets of the four BCD digits inside a packed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldOffsets {
    /// Hours tens digit (2-bit field, 0-2)
    pub hours_tens: u8,
    /// Hours ones digit
    pub hours_ones: u8,
    /// Minutes tens digit
    pub minutes_tens: u8,
    /// Minutes ones digit
    pub minutes_ones: u8,
}

/// Layout of a current-time word: `sec | min << 8 | hr << 16`
pub const TIME_OFFSETS: FieldOffsets = FieldOffsets {
    hours_tens: 20,
    hours_ones: 16,
    minutes_tens: 12,
    minutes_ones: 8,
};

/// Layout of a raw alarm register word: `min | hr << 8`
pub const ALARM_OFFSETS: FieldOffsets = FieldOffsets {
    hours_tens: 12,
    hours_ones: 8,
    minutes_tens: 4,
    minutes_ones: 0,
};

const NIBBLE: u32 = 0x0F;
const HOURS_TENS_MASK: u32 = 0x03;

#[inline]
fn field(word: u32, offset: u8, mask: u32) -> u8 {
    ((word >> offset) & mask) as u8
}

/// Extract `(hours, minutes)` from a packed word
///
/// No range check is done; a corrupt word decodes to out-of-range values.
pub fn decode_bcd_time(word: u32, offsets: &FieldOffsets) -> (u8, u8) {
    let hours =
        field(word, offsets.hours_tens, HOURS_TENS_MASK) * 10 + field(word, offsets.hours_ones, NIBBLE);
    let minutes =
        field(word, offsets.minutes_tens, NIBBLE) * 10 + field(word, offsets.minutes_ones, NIBBLE);
    (hours, minutes)
}

/// Pack one two-digit value as a BCD byte (tens in bits 4-7)
#[inline]
pub const fn to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Unpack a BCD byte
#[inline]
pub const fn from_bcd(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

/// Encode `(hours, minutes)` as the two BCD bytes the RTC setters take
///
/// Callers keep hours in 0-23 and minutes in 0-59.
pub const fn encode_bcd_time(hours: u8, minutes: u8) -> (u8, u8) {
    (to_bcd(hours), to_bcd(minutes))
}

/// Build a packed word with the given digits at `offsets`; all other bits 0
pub fn encode_word(hours: u8, minutes: u8, offsets: &FieldOffsets) -> u32 {
    let digit = |value: u32, offset: u8| value << offset;
    digit((hours / 10) as u32 & HOURS_TENS_MASK, offsets.hours_tens)
        | digit((hours % 10) as u32, offsets.hours_ones)
        | digit((minutes / 10) as u32, offsets.minutes_tens)
        | digit((minutes % 10) as u32, offsets.minutes_ones)
}
