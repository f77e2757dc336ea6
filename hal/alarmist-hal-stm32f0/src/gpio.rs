//! GPIO adapters for STM32F0

use alarmist_hal::{InputPin, OutputPin};
use embassy_stm32::gpio::{Input, Output};

/// Push-pull output
pub struct Stm32Output<'d>(pub Output<'d>);

impl OutputPin for Stm32Output<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Digital input
pub struct Stm32Input<'d>(pub Input<'d>);

impl InputPin for Stm32Input<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
