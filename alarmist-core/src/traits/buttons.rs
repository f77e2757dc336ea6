//! Button input trait

use crate::input::Buttons;

/// Trait for reading the three front-panel buttons
pub trait ButtonSource {
    /// Currently pressed buttons (set bit = pressed)
    fn read_raw(&mut self) -> Buttons;
}

impl<T: ButtonSource + ?Sized> ButtonSource for &mut T {
    fn read_raw(&mut self) -> Buttons {
        (**self).read_raw()
    }
}
