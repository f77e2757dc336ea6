//! Small 5x8 glyphs (menu entries and the cursor chevron)

use super::Stroke::{self, HLine as H, Pixel as P, VLine as V};

pub(super) fn glyph(c: char) -> Option<&'static [Stroke]> {
    let strokes: &'static [Stroke] = match c {
        'A' => &[V(0, 3, 5), V(4, 3, 5), V(1, 1, 2), V(3, 1, 2), P(2, 0), H(1, 4, 3)],
        'D' => &[V(0, 0, 8), V(4, 1, 6), H(1, 0, 3), H(1, 7, 3)],
        'E' => &[V(0, 0, 8), H(1, 0, 4), H(1, 7, 4), H(1, 4, 3)],
        'M' => &[V(0, 0, 8), V(4, 0, 8), V(2, 2, 2), P(1, 1), P(3, 1)],
        'O' => &[V(0, 1, 6), V(4, 1, 6), H(1, 0, 3), H(1, 7, 3)],
        'S' => &[
            V(0, 1, 2),
            V(0, 5, 2),
            V(4, 1, 2),
            V(4, 5, 2),
            H(1, 0, 3),
            H(1, 7, 3),
            H(1, 3, 2),
            H(2, 4, 2),
        ],
        'T' => &[H(0, 0, 5), V(2, 0, 8)],
        'a' => &[H(1, 2, 3), H(1, 4, 3), H(1, 7, 3), V(0, 5, 2), V(4, 3, 4)],
        'e' => &[H(1, 1, 3), H(1, 4, 3), H(1, 7, 3), P(4, 6), V(0, 2, 5), V(4, 2, 3)],
        'f' => &[H(2, 0, 2), H(0, 4, 4), V(1, 1, 7), V(4, 1, 2)],
        'i' => &[P(2, 1), V(2, 3, 5)],
        'l' => &[V(2, 0, 8)],
        'm' => &[H(1, 3, 3), V(0, 2, 6), V(2, 3, 5), V(4, 3, 5)],
        'n' => &[H(1, 3, 2), V(0, 2, 6), V(3, 4, 4)],
        'o' => &[H(1, 3, 3), H(1, 7, 3), V(0, 4, 3), V(4, 4, 3)],
        'r' => &[H(2, 3, 2), P(4, 4), V(1, 2, 6)],
        's' => &[
            H(2, 1, 2),
            H(2, 4, 2),
            H(2, 7, 2),
            P(1, 6),
            P(4, 2),
            V(1, 2, 2),
            V(4, 5, 2),
        ],
        't' => &[H(0, 2, 4), H(2, 7, 2), P(4, 6), V(1, 0, 7)],
        'u' => &[H(1, 6, 4), P(4, 7), V(0, 2, 4), V(3, 2, 4)],
        'x' => &[
            P(0, 3),
            P(0, 7),
            P(1, 4),
            P(1, 6),
            P(2, 5),
            P(3, 4),
            P(3, 6),
            P(4, 3),
            P(4, 7),
        ],
        'y' => &[H(1, 4, 2), H(1, 7, 2), P(0, 6), V(0, 2, 2), V(3, 2, 5)],
        ':' => &[P(2, 2), P(2, 5)],
        '/' => &[V(1, 5, 2), V(2, 3, 2), V(3, 1, 2)],
        '>' => &[P(1, 1), P(2, 2), P(3, 3), P(2, 4), P(1, 5)],
        ' ' => &[],
        _ => return None,
    };
    Some(strokes)
}
