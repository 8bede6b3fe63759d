//! Die face geometry: box outline and pip positions.
//!
//! Each die is a `DIE_WIDTH` x `DIE_HEIGHT` box:
//!
//! ```text
//! ---------
//! ! ¤   ¤ !
//! ! ¤   ¤ !
//! ! ¤   ¤ !
//! ---------
//! ```
//!
//! Pips sit on a 3x3 grid of interior cells, columns 2/4/6 and rows 1/2/3.

use crate::types::{DIE_HEIGHT, DIE_WIDTH};

pub const PIP: char = '¤';
pub const EDGE_H: char = '-';
pub const EDGE_V: char = '!';

const LEFT: u16 = 2;
const MID: u16 = 4;
const RIGHT: u16 = 6;
const TOP: u16 = 1;
const CENTER: u16 = 2;
const BOTTOM: u16 = 3;

const ONE: &[(u16, u16)] = &[(MID, CENTER)];
const TWO: &[(u16, u16)] = &[(LEFT, TOP), (RIGHT, BOTTOM)];
const THREE: &[(u16, u16)] = &[(LEFT, TOP), (MID, CENTER), (RIGHT, BOTTOM)];
const FOUR: &[(u16, u16)] = &[(LEFT, TOP), (RIGHT, TOP), (LEFT, BOTTOM), (RIGHT, BOTTOM)];
const FIVE: &[(u16, u16)] = &[
    (LEFT, TOP),
    (RIGHT, TOP),
    (MID, CENTER),
    (LEFT, BOTTOM),
    (RIGHT, BOTTOM),
];
const SIX: &[(u16, u16)] = &[
    (LEFT, TOP),
    (LEFT, CENTER),
    (LEFT, BOTTOM),
    (RIGHT, TOP),
    (RIGHT, CENTER),
    (RIGHT, BOTTOM),
];

/// Pip offsets `(dx, dy)` inside a die box for a face value.
///
/// Values outside 1..=6 have no pips.
pub fn pip_offsets(value: u8) -> &'static [(u16, u16)] {
    match value {
        1 => ONE,
        2 => TWO,
        3 => THREE,
        4 => FOUR,
        5 => FIVE,
        6 => SIX,
        _ => &[],
    }
}

/// Outline glyph at `(dx, dy)` in a die box, `' '` for the interior.
pub fn outline_glyph(dx: u16, dy: u16) -> char {
    if dy == 0 || dy == DIE_HEIGHT - 1 {
        EDGE_H
    } else if dx == 0 || dx == DIE_WIDTH - 1 {
        EDGE_V
    } else {
        ' '
    }
}
