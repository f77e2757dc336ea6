//! Piezo buzzer on a plain GPIO
//!
//! The tone is bit-banged with busy-wait delays, so `pulse` blocks for
//! `2 * half_period_us * count` microseconds.

use alarmist_core::traits::Buzzer;
use alarmist_hal::OutputPin;
use embedded_hal::delay::DelayNs;

/// Square-wave buzzer
pub struct PinBuzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> PinBuzzer<P, D> {
    pub fn new(mut pin: P, delay: D) -> Self {
        pin.set_low();
        Self { pin, delay }
    }

    pub fn free(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P: OutputPin, D: DelayNs> Buzzer for PinBuzzer<P, D> {
    fn pulse(&mut self, half_period_us: u32, count: u32) {
        for _ in 0..count {
            self.pin.set_high();
            self.delay.delay_us(half_period_us);
            self.pin.set_low();
            self.delay.delay_us(half_period_us);
        }
    }
}
