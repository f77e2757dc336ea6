//! Big 9x13 glyphs (screen titles)
//!
//! Built almost entirely from 2 px wide filled rectangles so strokes stay
//! bold on the OLED.

use super::Stroke::{self, Rect as R, VLine as V};

pub(super) fn glyph(c: char) -> Option<&'static [Stroke]> {
    let strokes: &'static [Stroke] = match c {
        'A' => &[
            R(0, 11, 2, 2),
            R(7, 11, 2, 2),
            R(1, 8, 2, 3),
            R(1, 8, 7, 2),
            R(6, 8, 2, 3),
            R(2, 4, 2, 4),
            R(5, 4, 2, 4),
            R(3, 0, 3, 4),
        ],
        'D' => &[
            R(0, 0, 2, 13),
            R(2, 0, 4, 2),
            R(2, 11, 4, 2),
            R(5, 1, 2, 2),
            R(6, 2, 2, 2),
            R(7, 3, 2, 7),
            R(5, 10, 2, 2),
            R(6, 9, 2, 2),
        ],
        'E' => &[R(0, 0, 2, 13), R(2, 0, 7, 2), R(2, 5, 7, 2), R(2, 11, 7, 2)],
        'I' => &[R(0, 0, 8, 2), R(3, 2, 2, 9), R(0, 11, 8, 2)],
        'L' => &[R(0, 0, 2, 13), R(2, 11, 7, 2)],
        'M' => &[
            R(0, 0, 2, 13),
            R(2, 0, 1, 4),
            R(6, 0, 1, 4),
            R(3, 3, 1, 4),
            R(5, 3, 1, 4),
            R(4, 5, 1, 3),
            R(7, 0, 2, 13),
        ],
        // Diagonal is a staircase of single-pixel columns
        'N' => &[
            R(0, 0, 2, 13),
            R(7, 0, 2, 13),
            V(2, 0, 3),
            V(3, 2, 4),
            V(4, 5, 3),
            V(5, 7, 4),
            V(6, 10, 3),
        ],
        'O' => &[
            R(0, 3, 2, 7),
            R(7, 3, 2, 7),
            R(2, 0, 5, 2),
            R(2, 11, 5, 2),
            R(1, 1, 2, 2),
            R(1, 10, 2, 2),
            R(6, 1, 2, 2),
            R(6, 10, 2, 2),
        ],
        'R' => &[
            R(0, 0, 2, 13),
            R(2, 0, 5, 2),
            R(6, 1, 2, 2),
            R(6, 5, 2, 2),
            R(6, 8, 2, 2),
            R(2, 6, 5, 2),
            R(7, 2, 2, 4),
            R(7, 9, 2, 4),
        ],
        'S' => &[
            R(2, 0, 6, 2),
            R(1, 1, 2, 2),
            R(1, 4, 2, 2),
            R(0, 2, 2, 3),
            R(2, 5, 5, 2),
            R(6, 6, 2, 2),
            R(6, 10, 2, 2),
            R(7, 7, 2, 4),
            R(0, 11, 7, 2),
        ],
        'T' => &[R(0, 0, 9, 2), R(4, 2, 2, 11)],
        'U' => &[
            R(0, 0, 2, 11),
            R(7, 0, 2, 11),
            R(1, 10, 2, 2),
            R(6, 10, 2, 2),
            R(2, 11, 5, 2),
        ],
        'Y' => &[
            R(0, 0, 2, 3),
            R(6, 0, 2, 3),
            R(1, 2, 2, 2),
            R(5, 2, 2, 2),
            R(2, 4, 4, 2),
            R(3, 6, 2, 7),
        ],
        ':' => &[R(0, 2, 3, 3), R(0, 8, 3, 3)],
        '?' => &[
            R(1, 0, 6, 2),
            R(6, 1, 2, 4),
            R(5, 4, 2, 2),
            R(4, 5, 2, 2),
            R(3, 6, 2, 4),
            R(3, 11, 2, 2),
        ],
        '!' => &[R(4, 0, 2, 9), R(4, 11, 2, 2)],
        ' ' => &[],
        _ => return None,
    };
    Some(strokes)
}
