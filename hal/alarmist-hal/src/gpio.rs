//! GPIO pin abstractions
//!
//! The clock only needs push-pull outputs (shift register, buzzer) and
//! pulled-up inputs (buttons). Pin access on the STM32F0 cannot fail, so
//! neither trait returns a `Result`.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high
    fn set_high(&mut self);

    /// Drive the pin low
    fn set_low(&mut self);

    /// Drive the pin to `high`
    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Pulse the pin high then low
    ///
    /// Used as a shift-register clock strobe. No delay is inserted; the
    /// 74HC595 accepts clock edges far faster than the MCU can bit-bang.
    fn strobe(&mut self) {
        self.set_high();
        self.set_low();
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high
    fn is_high(&self) -> bool;

    /// Check if the pin reads low
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}
