//! Button sampling and edge detection

use core::ops::BitOr;

/// Set of pressed buttons, one bit per button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(1 << 0);
    pub const SELECT: Self = Self(1 << 1);
    pub const DOWN: Self = Self(1 << 2);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Buttons down now that were up in `previous`
    pub const fn just_pressed(self, previous: Self) -> Self {
        Self(self.0 & !previous.0)
    }
}

impl BitOr for Buttons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Pressed-edge detection: `raw & !previous`
#[inline]
pub const fn just_pressed(raw: Buttons, previous: Buttons) -> Buttons {
    raw.just_pressed(previous)
}
