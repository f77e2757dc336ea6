//! Alarmist Hardware Abstraction Layer
//!
//! This crate defines the pin and bus traits that the clock drivers are
//! written against. Chip-specific crates implement them for real
//! peripherals; the driver test suites implement them with in-memory fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  alarmist-drivers (DS3231, SSD1306 ...) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  alarmist-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ alarmist-hal- │
//!             │   stm32f0     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::I2cBus`] - Blocking I2C master operations
//!
//! [`i2c::HalI2c`] adapts any `embedded-hal` I2C master (including an
//! `embedded-hal-bus` shared device) to [`i2c::I2cBus`].

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

pub use gpio::{InputPin, OutputPin};
pub use i2c::{HalI2c, I2cBus, I2cSpeed};
