//! Stroke-based bitmap fonts
//!
//! Glyphs are short lists of primitive strokes relative to the glyph's top
//! left corner, replayed onto a [`Framebuffer`]. Only the characters used by
//! the clock's screens exist; anything else draws nothing.

mod big;
mod small;

use crate::framebuffer::Framebuffer;

/// Glyph set selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// 5x8 glyphs on a 6 px advance
    Small,
    /// 9x13 glyphs on an 11 px advance
    Big,
}

impl FontSize {
    /// Horizontal distance between consecutive glyph origins
    pub const fn advance(self) -> u16 {
        match self {
            FontSize::Small => 6,
            FontSize::Big => 11,
        }
    }

    /// Nominal glyph cell (width, height)
    pub const fn cell(self) -> (u16, u16) {
        match self {
            FontSize::Small => (5, 8),
            FontSize::Big => (9, 13),
        }
    }
}

/// One drawing primitive of a glyph, offsets relative to the glyph origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// Single pixel at (dx, dy)
    Pixel(u8, u8),
    /// Horizontal line at (dx, dy) of the given width
    HLine(u8, u8, u8),
    /// Vertical line at (dx, dy) of the given height
    VLine(u8, u8, u8),
    /// Filled rectangle at (dx, dy) with (width, height)
    Rect(u8, u8, u8, u8),
}

impl Stroke {
    fn draw(self, fb: &mut Framebuffer, x: u16, y: u16, on: bool) {
        match self {
            Stroke::Pixel(dx, dy) => fb.write_pixel(x + dx as u16, y + dy as u16, on),
            Stroke::HLine(dx, dy, w) => fb.draw_h_line(x + dx as u16, y + dy as u16, w as u16, on),
            Stroke::VLine(dx, dy, h) => fb.draw_v_line(x + dx as u16, y + dy as u16, h as u16, on),
            Stroke::Rect(dx, dy, w, h) => {
                fb.draw_rect(x + dx as u16, y + dy as u16, w as u16, h as u16, 0, on)
            }
        }
    }
}

/// Look up the strokes for `c`, or `None` if the glyph set lacks it
pub fn glyph(c: char, size: FontSize) -> Option<&'static [Stroke]> {
    match size {
        FontSize::Small => small::glyph(c),
        FontSize::Big => big::glyph(c),
    }
}

/// Draw one character with its top left corner at `(x, y)`
pub fn draw_char(fb: &mut Framebuffer, x: u16, y: u16, c: char, size: FontSize, on: bool) {
    if let Some(strokes) = glyph(c, size) {
        for stroke in strokes {
            stroke.draw(fb, x, y, on);
        }
    }
}

/// Draw a string left to right starting at `(x, y)`
///
/// Every character, including unsupported ones, consumes one advance.
/// There is no wrapping; the caller keeps the text on screen.
pub fn draw_text(fb: &mut Framebuffer, x: u16, y: u16, text: &str, size: FontSize, on: bool) {
    let mut cursor = x;
    for c in text.chars() {
        draw_char(fb, cursor, y, c, size, on);
        cursor += size.advance();
    }
}
