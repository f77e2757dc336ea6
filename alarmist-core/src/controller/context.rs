//! Mutable clock state threaded through every handler

use crate::input::Buttons;
use crate::state::UiState;
use crate::time::{encode_bcd_time, AlarmWord, TimeWord};

/// Field selected by the cursor in the editing states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditField {
    Hours,
    Minutes,
}

impl EditField {
    /// Cursor 0 edits hours, anything else minutes
    pub fn from_cursor(cursor: u8) -> Self {
        if cursor == 0 {
            EditField::Hours
        } else {
            EditField::Minutes
        }
    }
}

/// Hours and minutes being edited, always in range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EditBuffer {
    pub hours: u8,
    pub minutes: u8,
}

impl EditBuffer {
    pub const fn new(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    pub fn from_time(time: TimeWord) -> Self {
        let (hours, minutes) = time.hours_minutes();
        Self { hours, minutes }
    }

    pub fn from_alarm(alarm: AlarmWord) -> Self {
        let (hours, minutes) = alarm.hours_minutes();
        Self { hours, minutes }
    }

    /// Step one field up, wrapping 23 -> 0 and 59 -> 0
    pub fn increment(&mut self, field: EditField) {
        match field {
            EditField::Hours => self.hours = if self.hours >= 23 { 0 } else { self.hours + 1 },
            EditField::Minutes => {
                self.minutes = if self.minutes >= 59 { 0 } else { self.minutes + 1 }
            }
        }
    }

    /// Step one field down, wrapping 0 -> 23 and 0 -> 59
    pub fn decrement(&mut self, field: EditField) {
        match field {
            EditField::Hours => self.hours = if self.hours == 0 { 23 } else { self.hours - 1 },
            EditField::Minutes => {
                self.minutes = if self.minutes == 0 { 59 } else { self.minutes - 1 }
            }
        }
    }

    /// `(hours_bcd, minutes_bcd)` for the RTC setters
    pub fn to_bcd(&self) -> (u8, u8) {
        encode_bcd_time(self.hours, self.minutes)
    }

    /// Digits in segment shift order, like [`TimeWord::segment_digits`]
    pub fn segment_digits(&self) -> [u8; 4] {
        [
            self.minutes % 10,
            self.minutes / 10,
            self.hours % 10,
            self.hours / 10,
        ]
    }
}

/// Everything the UI remembers between cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockContext {
    /// Active UI state
    pub state: UiState,
    /// Menu row or edit field, range depends on `state`
    pub cursor: u8,
    /// Time read at the start of this cycle
    pub time: TimeWord,
    /// Alarm time in time-word layout
    pub alarm: AlarmWord,
    /// Values under edit in SetTime / SetAlarm
    pub edit: EditBuffer,
    /// Set when a firing alarm was dismissed during its minute
    pub snoozed: bool,
    /// Buttons held during the previous cycle
    pub previous: Buttons,
}

impl ClockContext {
    /// Fresh context with a known alarm
    pub fn new(alarm: AlarmWord) -> Self {
        Self {
            alarm,
            ..Self::default()
        }
    }

    /// Switch state and reset the cursor
    pub fn enter(&mut self, state: UiState) {
        self.state = state;
        self.cursor = 0;
    }
}
