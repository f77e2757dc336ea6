//! Page-addressed monochrome framebuffer
//!
//! Each byte is a vertical strip of 8 pixels in one column. Bytes are laid
//! out as 8 pages of 128 columns, so pixel `(x, y)` lives in byte
//! `x + (y / 8) * WIDTH` at bit `y % 8`. This is the native memory layout of
//! the SSD1306, so the buffer can be streamed to the panel unchanged.
//!
//! There is no clipping. Coordinates outside `[0, WIDTH) x [0, HEIGHT)` are
//! a caller bug: they trip a debug assertion, and an index past the end of
//! the buffer panics in any build.

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Framebuffer size in bytes
pub const FB_SIZE: usize = (WIDTH * HEIGHT) / 8;

/// 128x64 monochrome framebuffer
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    buf: [u8; FB_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Framebuffer({}x{}, {} px on)", WIDTH, HEIGHT, self.lit_pixels())
    }
}

#[inline]
fn locate(x: u16, y: u16) -> (usize, u8) {
    debug_assert!(
        (x as usize) < WIDTH && (y as usize) < HEIGHT,
        "pixel out of range"
    );
    let offset = x as usize + (y as usize / 8) * WIDTH;
    (offset, 1 << (y & 0x07))
}

/// One line of a filled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Row { x: u16, y: u16, w: u16 },
    Column { x: u16, y: u16, h: u16 },
}

/// Lines that fill a rectangle, scanning along the shorter side
fn fill_lines(x: u16, y: u16, w: u16, h: u16) -> impl Iterator<Item = Line> {
    let rows = w > h;
    let count = if rows { h } else { w };
    (0..count).map(move |i| {
        if rows {
            Line::Row { x, y: y + i, w }
        } else {
            Line::Column { x: x + i, y, h }
        }
    })
}

impl Framebuffer {
    /// Create a cleared framebuffer
    pub const fn new() -> Self {
        Self { buf: [0; FB_SIZE] }
    }

    /// Fill every byte with `color`
    ///
    /// `0x00` is all off and `0xFF` all on. Other values give a pattern of
    /// horizontal stripes repeating every 8 rows.
    pub fn clear(&mut self, color: u8) {
        self.buf.fill(color);
    }

    /// Set (`on`) or clear a single pixel
    pub fn write_pixel(&mut self, x: u16, y: u16, on: bool) {
        let (offset, mask) = locate(x, y);
        if on {
            self.buf[offset] |= mask;
        } else {
            self.buf[offset] &= !mask;
        }
    }

    /// Read back a single pixel
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        let (offset, mask) = locate(x, y);
        self.buf[offset] & mask != 0
    }

    /// Draw a horizontal run of `w` pixels starting at `(x, y)`
    pub fn draw_h_line(&mut self, x: u16, y: u16, w: u16, on: bool) {
        if w == 0 {
            return;
        }
        // The whole run shares one page and one bit
        let (start, mask) = locate(x, y);
        debug_assert!(x as usize + w as usize <= WIDTH, "h-line out of range");
        let row = &mut self.buf[start..start + w as usize];
        if on {
            row.iter_mut().for_each(|b| *b |= mask);
        } else {
            row.iter_mut().for_each(|b| *b &= !mask);
        }
    }

    /// Draw a vertical run of `h` pixels starting at `(x, y)`
    pub fn draw_v_line(&mut self, x: u16, y: u16, h: u16, on: bool) {
        for y_pos in y..y + h {
            self.write_pixel(x, y_pos, on);
        }
    }

    /// Draw a rectangle
    ///
    /// With `outline > 0`, four bands of that thickness are drawn inside the
    /// rectangle (top, bottom, left, right), overlapping at the corners.
    /// With `outline == 0` the rectangle is filled.
    pub fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, outline: u16, on: bool) {
        if w == 0 || h == 0 {
            return;
        }

        if outline > 0 {
            let bottom = y + h - 1;
            let right = x + w - 1;
            for i in 0..outline {
                self.draw_h_line(x, y + i, w, on);
            }
            for i in 0..outline {
                self.draw_h_line(x, bottom - i, w, on);
            }
            for i in 0..outline {
                self.draw_v_line(x + i, y, h, on);
            }
            for i in 0..outline {
                self.draw_v_line(right - i, y, h, on);
            }
        } else {
            for line in fill_lines(x, y, w, h) {
                match line {
                    Line::Row { x, y, w } => self.draw_h_line(x, y, w, on),
                    Line::Column { x, y, h } => self.draw_v_line(x, y, h, on),
                }
            }
        }
    }

    /// Raw page buffer, in display RAM order
    pub fn as_bytes(&self) -> &[u8; FB_SIZE] {
        &self.buf
    }

    /// Number of pixels currently on
    pub fn lit_pixels(&self) -> u32 {
        self.buf.iter().map(|b| b.count_ones()).sum()
    }
}
