//! Time and alarm word codec
//!
//! Converts between the RTC's packed BCD words and plain `(hours, minutes)`
//! pairs, and decides when the alarm fires.

pub mod bcd;
pub mod word;

pub use bcd::{
    decode_bcd_time, encode_bcd_time, encode_word, from_bcd, to_bcd, FieldOffsets, ALARM_OFFSETS,
    TIME_OFFSETS,
};
pub use word::{AlarmWord, TimeWord, ALARM_MATCH_MASK};
