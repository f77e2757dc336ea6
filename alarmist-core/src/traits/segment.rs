//! Four-digit 7-segment output trait

/// One digit position on the segment display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentDigit {
    /// Decimal digit 0-9
    Digit(u8),
    /// All segments off
    Blank,
}

/// Trait for the shift-register segment chain
///
/// A frame is `latch_low`, four `digit_out` calls (minutes ones first,
/// hours tens last), then `latch_high`.
pub trait SegmentDisplay {
    /// Start shifting a new frame
    fn latch_low(&mut self);

    /// Shift one digit into the chain
    fn digit_out(&mut self, digit: SegmentDigit);

    /// Present the shifted frame
    fn latch_high(&mut self);

    /// Shift a full frame in output order
    fn show(&mut self, digits: [SegmentDigit; 4]) {
        self.latch_low();
        for digit in digits {
            self.digit_out(digit);
        }
        self.latch_high();
    }
}

impl<T: SegmentDisplay + ?Sized> SegmentDisplay for &mut T {
    fn latch_low(&mut self) {
        (**self).latch_low()
    }

    fn digit_out(&mut self, digit: SegmentDigit) {
        (**self).digit_out(digit)
    }

    fn latch_high(&mut self) {
        (**self).latch_high()
    }
}
