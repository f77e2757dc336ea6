//! Framebuffer, glyph renderer and display backend trait for Alarmist
//!
//! This crate provides:
//! - [`Framebuffer`], a 128x64 monochrome bitmap in SSD1306 page layout
//! - Two fixed glyph sets (small 5x8 and big 9x13) built from line and
//!   rectangle strokes, drawn with [`draw_text`]
//! - [`DisplayBackend`], the trait a physical display implements to receive
//!   a finished frame
//!
//! # Architecture
//!
//! The clock controller clears and redraws the whole framebuffer every
//! cycle, then hands it to a `DisplayBackend` in one blocking flush. There
//! is no dirty tracking and no partial update.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod font;
pub mod framebuffer;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use font::{draw_char, draw_text, FontSize, Stroke};
pub use framebuffer::{Framebuffer, FB_SIZE, HEIGHT, WIDTH};
