//! STM32F0-specific HAL for the Alarmist firmware
//!
//! Wraps embassy-stm32 blocking peripherals so they implement the
//! `alarmist-hal` traits the drivers are written against.
//!
//! # Features
//!
//! - `stm32f042k6` - STM32F042K6 (reference board)
//! - `stm32f030f4` - STM32F030F4 (20-pin variant)
//! - `defmt` - Enable debug formatting support
//!
//! # Pin map (GPIOA)
//!
//! | Pin  | Function                 |
//! |------|--------------------------|
//! | PA0  | 74HC595 shift clock      |
//! | PA1  | 74HC595 serial data      |
//! | PA2  | 74HC595 latch            |
//! | PA3  | Buzzer                   |
//! | PA5  | Up button (pull-up)      |
//! | PA6  | Select button (pull-up)  |
//! | PA7  | Down button (pull-up)    |
//! | PA9  | I2C1 SCL                 |
//! | PA10 | I2C1 SDA                 |

#![no_std]

pub mod gpio;
pub mod i2c;

pub use gpio::{Stm32Input, Stm32Output};
pub use i2c::{shared, BlockingI2c, SharedI2c};
