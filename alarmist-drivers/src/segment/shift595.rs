//! 74HC595 chain driving four common-anode 7-segment digits
//!
//! Bytes are shifted MSB first on the rising clock edge. The latch pin
//! copies the shift register to the outputs on its rising edge, so the
//! digits only change when a complete frame is in place.

use alarmist_core::traits::{SegmentDigit, SegmentDisplay};
use alarmist_hal::OutputPin;

/// Segment patterns for 0-9, bit order DP g f e d c b a, active low
pub const SEGMENT_CODES: [u8; 10] = [0xC0, 0xF9, 0xA4, 0xB0, 0x99, 0x92, 0x82, 0xF8, 0x80, 0x90];

/// All segments off
pub const BLANK: u8 = 0xFF;

/// Byte shifted out for one digit; values above 9 show blank
pub fn encode_digit(digit: SegmentDigit) -> u8 {
    match digit {
        SegmentDigit::Digit(n) => SEGMENT_CODES.get(n as usize).copied().unwrap_or(BLANK),
        SegmentDigit::Blank => BLANK,
    }
}

/// Bit-banged shift register chain
pub struct ShiftRegisterSegments<C, D, L> {
    clock: C,
    data: D,
    latch: L,
}

impl<C, D, L> ShiftRegisterSegments<C, D, L>
where
    C: OutputPin,
    D: OutputPin,
    L: OutputPin,
{
    /// Take the three pins and park them low
    pub fn new(mut clock: C, mut data: D, mut latch: L) -> Self {
        clock.set_low();
        data.set_low();
        latch.set_low();
        Self { clock, data, latch }
    }

    /// Shift one raw byte, MSB first
    pub fn shift_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.data.set_level(byte & (1 << bit) != 0);
            self.clock.strobe();
        }
    }

    pub fn free(self) -> (C, D, L) {
        (self.clock, self.data, self.latch)
    }
}

impl<C, D, L> SegmentDisplay for ShiftRegisterSegments<C, D, L>
where
    C: OutputPin,
    D: OutputPin,
    L: OutputPin,
{
    fn latch_low(&mut self) {
        self.latch.set_low();
    }

    fn digit_out(&mut self, digit: SegmentDigit) {
        self.shift_byte(encode_digit(digit));
    }

    fn latch_high(&mut self) {
        self.latch.set_high();
    }
}
