//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in alarmist-core and alarmist-display for the clock's parts:
//!
//! - DS3231 real-time clock (I2C)
//! - SSD1306 128x64 OLED (I2C)
//! - 74HC595 shift registers driving the 7-segment digits
//! - GPIO piezo buzzer
//! - Active-low push buttons
//!
//! Every driver is written against `alarmist-hal` traits and tested on the
//! host with fake pins and buses.

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod buzzer;
pub mod display;
pub mod rtc;
pub mod segment;

pub use buttons::ActiveLowButtons;
pub use buzzer::PinBuzzer;
pub use display::Ssd1306;
pub use rtc::Ds3231;
pub use segment::ShiftRegisterSegments;
