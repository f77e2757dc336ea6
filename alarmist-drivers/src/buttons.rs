//! Front-panel buttons
//!
//! Three momentary switches to ground with the MCU's pull-ups enabled, so
//! a pressed button reads low.

use alarmist_core::input::Buttons;
use alarmist_core::traits::ButtonSource;
use alarmist_hal::InputPin;

/// Up / Select / Down on active-low inputs
pub struct ActiveLowButtons<U, S, D> {
    up: U,
    select: S,
    down: D,
}

impl<U, S, D> ActiveLowButtons<U, S, D>
where
    U: InputPin,
    S: InputPin,
    D: InputPin,
{
    pub fn new(up: U, select: S, down: D) -> Self {
        Self { up, select, down }
    }
}

impl<U, S, D> ButtonSource for ActiveLowButtons<U, S, D>
where
    U: InputPin,
    S: InputPin,
    D: InputPin,
{
    fn read_raw(&mut self) -> Buttons {
        let mut pressed = Buttons::NONE;
        if self.up.is_low() {
            pressed = pressed | Buttons::UP;
        }
        if self.select.is_low() {
            pressed = pressed | Buttons::SELECT;
        }
        if self.down.is_low() {
            pressed = pressed | Buttons::DOWN;
        }
        pressed
    }
}
