//! 7-segment display drivers

pub mod shift595;

pub use shift595::{encode_digit, ShiftRegisterSegments, BLANK, SEGMENT_CODES};
