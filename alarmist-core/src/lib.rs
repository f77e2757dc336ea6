//! Board-agnostic logic for the alarm clock
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - BCD time and alarm word codec
//! - Button edge detection
//! - UI states and the per-cycle controller
//! - Traits for the RTC, segment display, buzzer and buttons
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod input;
pub mod state;
pub mod time;
pub mod traits;
