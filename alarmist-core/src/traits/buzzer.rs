//! Buzzer trait

/// Trait for a piezo buzzer driven by a square wave
pub trait Buzzer {
    /// Blocking square wave: `count` periods of `2 * half_period_us`
    fn pulse(&mut self, half_period_us: u32, count: u32);
}

impl<T: Buzzer + ?Sized> Buzzer for &mut T {
    fn pulse(&mut self, half_period_us: u32, count: u32) {
        (**self).pulse(half_period_us, count)
    }
}
