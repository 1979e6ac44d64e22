//! # Character Glyphs
//!
//! Immutable 5x5 bitmap masks for every printable ASCII character, stored in
//! the strip's physical wiring order: five groups of five, one group per
//! display column, rightmost column first (see [`crate::surface`]). Storing
//! glyphs pre-remapped lets the scroll engine shift whole columns as
//! contiguous slices.
//!
//! Characters without a table entry render as `'?'`. A blank padding column
//! follows every glyph so adjacent characters never touch while scrolling.

use crate::{color, Pixel};
use crate::surface::{CELLS, SIDE};

/// Cells in one colored glyph strip: the 5x5 glyph plus its padding column.
pub const STRIP_CELLS: usize = CELLS + SIDE;

/// Compose a character into a colored strip: mask bits become `color`,
/// everything else (including the trailing padding column) stays off.
///
/// Pure lookup; the only "failure" mode is the documented `'?'` fallback.
pub fn glyph_for(c: char, color: Pixel) -> [Pixel; STRIP_CELLS] {
    let mask = mask_for(c);
    let mut strip = [color::OFF; STRIP_CELLS];
    for (cell, &bit) in strip.iter_mut().zip(mask.iter()) {
        if bit == 1 {
            *cell = color;
        }
    }
    strip
}

/// The 25-bit mask for a character, `'?'` when unmapped.
pub fn mask_for(c: char) -> &'static [u8; CELLS] {
    match c {
        '!' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  1, 1, 1, 0, 1,  0, 0, 0, 0, 0,  0, 0, 0, 0, 0],
        '"' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  1, 1, 0, 0, 0,  0, 0, 0, 0, 0,  1, 1, 0, 0, 0],
        '#' => &[0, 1, 0, 1, 0,  1, 1, 1, 1, 1,  0, 1, 0, 1, 0,  1, 1, 1, 1, 1,  0, 1, 0, 1, 0],
        '$' => &[0, 1, 0, 1, 0,  1, 0, 1, 1, 1,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  0, 1, 0, 1, 0],
        '%' => &[1, 0, 0, 1, 1,  0, 1, 0, 0, 1,  0, 0, 1, 0, 0,  1, 0, 0, 1, 0,  1, 1, 0, 0, 1],
        '&' => &[0, 0, 0, 0, 1,  0, 1, 0, 1, 0,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  0, 1, 0, 1, 0],
        '\'' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  1, 1, 0, 0, 0,  0, 0, 0, 0, 0],
        '(' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  1, 0, 0, 0, 1,  0, 1, 1, 1, 0,  0, 0, 0, 0, 0],
        '@' => &[0, 1, 1, 1, 0,  1, 0, 0, 1, 0,  1, 0, 1, 0, 1,  1, 0, 0, 0, 1,  0, 1, 1, 1, 0],
        ')' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 1, 1, 1, 0,  1, 0, 0, 0, 1,  0, 0, 0, 0, 0],
        '*' => &[0, 0, 0, 0, 0,  0, 1, 0, 1, 0,  0, 0, 1, 0, 0,  0, 1, 0, 1, 0,  0, 0, 0, 0, 0],
        '+' => &[0, 0, 0, 0, 0,  0, 0, 1, 0, 0,  0, 1, 1, 1, 0,  0, 0, 1, 0, 0,  0, 0, 0, 0, 0],
        ',' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 0, 1, 0,  0, 0, 0, 0, 1,  0, 0, 0, 0, 0],
        '-' => &[0, 0, 0, 0, 0,  0, 0, 1, 0, 0,  0, 0, 1, 0, 0,  0, 0, 1, 0, 0,  0, 0, 0, 0, 0],
        '.' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 0, 1, 0,  0, 0, 0, 0, 0],
        '/' => &[1, 0, 0, 0, 0,  0, 1, 0, 0, 0,  0, 0, 1, 0, 0,  0, 0, 0, 1, 0,  0, 0, 0, 0, 1],
        '0' => &[0, 0, 0, 0, 0,  0, 1, 1, 1, 0,  1, 0, 0, 0, 1,  1, 0, 0, 0, 1,  0, 1, 1, 1, 0],
        '1' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 1,  1, 1, 1, 1, 1,  0, 1, 0, 0, 1,  0, 0, 0, 0, 0],
        '2' => &[0, 0, 0, 0, 0,  0, 1, 0, 0, 1,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  1, 0, 0, 1, 1],
        '3' => &[0, 0, 0, 0, 0,  1, 1, 0, 1, 0,  1, 0, 1, 0, 1,  1, 0, 0, 0, 1,  1, 0, 0, 1, 0],
        '4' => &[0, 0, 0, 1, 0,  1, 1, 1, 1, 1,  1, 0, 0, 1, 0,  0, 1, 0, 1, 0,  0, 0, 1, 1, 0],
        '5' => &[1, 0, 0, 1, 0,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  1, 1, 1, 0, 1],
        '6' => &[0, 0, 0, 1, 0,  1, 0, 1, 0, 1,  0, 1, 1, 0, 1,  0, 0, 1, 0, 1,  0, 0, 0, 1, 0],
        '7' => &[1, 0, 0, 0, 0,  1, 1, 0, 0, 0,  1, 0, 1, 0, 0,  1, 0, 0, 1, 0,  1, 0, 0, 0, 1],
        '8' => &[0, 1, 0, 1, 0,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  0, 1, 0, 1, 0],
        '9' => &[0, 1, 0, 0, 0,  1, 0, 1, 0, 0,  1, 0, 1, 1, 0,  1, 0, 1, 0, 1,  0, 1, 0, 0, 0],
        ':' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 1, 0, 1, 0,  0, 0, 0, 0, 0],
        ';' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 1, 0, 1, 0,  0, 0, 0, 0, 1,  0, 0, 0, 0, 0],
        '<' => &[0, 0, 0, 0, 0,  1, 0, 0, 0, 1,  0, 1, 0, 1, 0,  0, 0, 1, 0, 0,  0, 0, 0, 0, 0],
        '=' => &[0, 0, 0, 0, 0,  0, 1, 0, 1, 0,  0, 1, 0, 1, 0,  0, 1, 0, 1, 0,  0, 0, 0, 0, 0],
        '>' => &[0, 0, 0, 0, 0,  0, 0, 1, 0, 0,  0, 1, 0, 1, 0,  1, 0, 0, 0, 1,  0, 0, 0, 0, 0],
        '?' => &[0, 1, 0, 0, 0,  1, 0, 1, 0, 0,  1, 0, 1, 0, 1,  1, 0, 0, 0, 0,  0, 1, 0, 0, 0],
        'A' => &[0, 0, 0, 0, 0,  0, 1, 1, 1, 1,  1, 0, 1, 0, 0,  1, 0, 1, 0, 0,  0, 1, 1, 1, 1],
        'B' => &[0, 0, 0, 0, 0,  0, 1, 0, 1, 0,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  1, 1, 1, 1, 1],
        'C' => &[0, 0, 0, 0, 0,  1, 0, 0, 0, 1,  1, 0, 0, 0, 1,  1, 0, 0, 0, 1,  0, 1, 1, 1, 0],
        'D' => &[0, 0, 0, 0, 0,  0, 1, 1, 1, 0,  1, 0, 0, 0, 1,  1, 0, 0, 0, 1,  1, 1, 1, 1, 1],
        'E' => &[0, 0, 0, 0, 0,  1, 0, 0, 0, 1,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  1, 1, 1, 1, 1],
        'F' => &[0, 0, 0, 0, 0,  1, 0, 0, 0, 0,  1, 0, 1, 0, 0,  1, 0, 1, 0, 0,  1, 1, 1, 1, 1],
        'G' => &[0, 0, 1, 1, 0,  1, 0, 1, 0, 1,  1, 0, 0, 0, 1,  1, 0, 0, 0, 1,  0, 1, 1, 1, 0],
        'H' => &[0, 0, 0, 0, 0,  1, 1, 1, 1, 1,  0, 0, 1, 0, 0,  0, 0, 1, 0, 0,  1, 1, 1, 1, 1],
        'I' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  1, 0, 0, 0, 1,  1, 1, 1, 1, 1,  1, 0, 0, 0, 1],
        'J' => &[1, 0, 0, 0, 0,  1, 1, 1, 1, 0,  1, 0, 0, 0, 1,  1, 0, 0, 0, 1,  1, 0, 0, 1, 0],
        'K' => &[0, 0, 0, 0, 0,  1, 0, 0, 0, 1,  0, 1, 0, 1, 0,  0, 0, 1, 0, 0,  1, 1, 1, 1, 1],
        'L' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 1,  0, 0, 0, 0, 1,  0, 0, 0, 0, 1,  1, 1, 1, 1, 1],
        'M' => &[1, 1, 1, 1, 1,  0, 1, 0, 0, 0,  0, 0, 1, 0, 0,  0, 1, 0, 0, 0,  1, 1, 1, 1, 1],
        'N' => &[1, 1, 1, 1, 1,  0, 0, 0, 1, 0,  0, 0, 1, 0, 0,  0, 1, 0, 0, 0,  1, 1, 1, 1, 1],
        'O' => &[0, 0, 0, 0, 0,  0, 1, 1, 1, 0,  1, 0, 0, 0, 1,  1, 0, 0, 0, 1,  0, 1, 1, 1, 0],
        'P' => &[0, 0, 0, 0, 0,  0, 1, 0, 0, 0,  1, 0, 1, 0, 0,  1, 0, 1, 0, 0,  1, 1, 1, 1, 1],
        'Q' => &[0, 0, 0, 0, 0,  0, 1, 1, 0, 1,  1, 0, 0, 1, 1,  1, 0, 0, 1, 0,  0, 1, 1, 0, 0],
        'R' => &[0, 0, 0, 0, 1,  0, 1, 0, 1, 0,  1, 0, 1, 0, 0,  1, 0, 1, 0, 0,  1, 1, 1, 1, 1],
        'S' => &[0, 0, 0, 0, 0,  1, 0, 0, 1, 0,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  0, 1, 0, 0, 1],
        'T' => &[1, 0, 0, 0, 0,  1, 0, 0, 0, 0,  1, 1, 1, 1, 1,  1, 0, 0, 0, 0,  1, 0, 0, 0, 0],
        'U' => &[0, 0, 0, 0, 0,  1, 1, 1, 1, 0,  0, 0, 0, 0, 1,  0, 0, 0, 0, 1,  1, 1, 1, 1, 0],
        'V' => &[1, 1, 1, 0, 0,  0, 0, 0, 1, 0,  0, 0, 0, 0, 1,  0, 0, 0, 1, 0,  1, 1, 1, 0, 0],
        'W' => &[1, 1, 1, 1, 1,  0, 0, 0, 1, 0,  0, 0, 1, 0, 0,  0, 0, 0, 1, 0,  1, 1, 1, 1, 1],
        'X' => &[0, 0, 0, 0, 0,  1, 1, 0, 1, 1,  0, 0, 1, 0, 0,  0, 0, 1, 0, 0,  1, 1, 0, 1, 1],
        'Y' => &[1, 0, 0, 0, 0,  0, 1, 0, 0, 0,  0, 0, 1, 1, 1,  0, 1, 0, 0, 0,  1, 0, 0, 0, 0],
        'Z' => &[0, 0, 0, 0, 0,  1, 0, 0, 0, 1,  1, 1, 0, 0, 1,  1, 0, 1, 0, 1,  1, 0, 0, 1, 1],
        '[' => &[0, 0, 0, 0, 0,  1, 0, 0, 0, 1,  1, 0, 0, 0, 1,  1, 1, 1, 1, 1,  0, 0, 0, 0, 0],
        '\\' => &[0, 0, 0, 0, 1,  0, 0, 0, 1, 0,  0, 0, 1, 0, 0,  0, 1, 0, 0, 0,  1, 0, 0, 0, 0],
        ']' => &[0, 0, 0, 0, 0,  1, 1, 1, 1, 1,  1, 0, 0, 0, 1,  1, 0, 0, 0, 1,  0, 0, 0, 0, 0],
        '^' => &[0, 0, 0, 0, 0,  0, 1, 0, 0, 0,  1, 0, 0, 0, 0,  0, 1, 0, 0, 0,  0, 0, 0, 0, 0],
        '_' => &[0, 0, 0, 0, 1,  0, 0, 0, 0, 1,  0, 0, 0, 0, 1,  0, 0, 0, 0, 1,  0, 0, 0, 0, 1],
        '`' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 1, 0, 0, 0,  1, 0, 0, 0, 0,  0, 0, 0, 0, 0],
        'a' => &[0, 0, 0, 0, 1,  0, 1, 1, 1, 1,  0, 1, 0, 0, 1,  0, 1, 0, 0, 1,  0, 0, 1, 1, 0],
        'b' => &[0, 0, 0, 0, 0,  0, 0, 0, 1, 0,  0, 0, 1, 0, 1,  0, 0, 1, 0, 1,  1, 1, 1, 1, 1],
        'c' => &[0, 0, 0, 0, 0,  0, 1, 0, 0, 1,  0, 1, 0, 0, 1,  0, 1, 0, 0, 1,  0, 0, 1, 1, 0],
        'd' => &[0, 0, 0, 0, 0,  1, 1, 1, 1, 1,  0, 0, 1, 0, 1,  0, 0, 1, 0, 1,  0, 0, 0, 1, 0],
        'e' => &[0, 0, 0, 0, 0,  0, 1, 0, 0, 1,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  0, 1, 1, 1, 0],
        'f' => &[0, 0, 0, 0, 0,  1, 0, 0, 0, 0,  1, 0, 1, 0, 0,  0, 1, 1, 1, 1,  0, 0, 1, 0, 0],
        'g' => &[0, 0, 0, 0, 0,  1, 1, 1, 1, 0,  1, 0, 1, 0, 1,  1, 0, 1, 0, 1,  0, 1, 0, 0, 0],
        'h' => &[0, 0, 0, 0, 0,  0, 0, 0, 1, 1,  0, 0, 1, 0, 0,  0, 0, 1, 0, 0,  1, 1, 1, 1, 1],
        'i' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  1, 0, 1, 1, 1,  0, 0, 0, 0, 0],
        'j' => &[0, 0, 0, 0, 0,  1, 0, 1, 1, 0,  0, 0, 0, 0, 1,  0, 0, 0, 0, 1,  0, 0, 0, 0, 0],
        'k' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 1,  0, 1, 0, 1, 0,  0, 0, 1, 0, 0,  1, 1, 1, 1, 1],
        'l' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 1,  0, 0, 0, 0, 1,  1, 1, 1, 1, 0,  0, 0, 0, 0, 0],
        'm' => &[0, 1, 1, 1, 1,  0, 1, 0, 0, 0,  0, 0, 1, 0, 0,  0, 1, 0, 0, 0,  0, 1, 1, 1, 1],
        'n' => &[0, 0, 0, 0, 0,  0, 0, 1, 1, 1,  0, 1, 0, 0, 0,  0, 1, 0, 0, 0,  0, 1, 1, 1, 1],
        'o' => &[0, 0, 0, 0, 0,  0, 0, 1, 1, 0,  0, 1, 0, 0, 1,  0, 1, 0, 0, 1,  0, 0, 1, 1, 0],
        'p' => &[0, 0, 0, 0, 0,  0, 0, 1, 0, 0,  0, 1, 0, 1, 0,  0, 1, 0, 1, 0,  0, 1, 1, 1, 1],
        'q' => &[0, 0, 0, 0, 0,  0, 1, 1, 1, 1,  0, 1, 0, 1, 0,  0, 1, 0, 1, 0,  0, 0, 1, 0, 0],
        'r' => &[0, 0, 0, 0, 0,  0, 1, 0, 0, 0,  0, 1, 0, 0, 0,  0, 1, 0, 0, 0,  0, 0, 1, 1, 1],
        's' => &[0, 0, 0, 0, 0,  0, 1, 0, 0, 0,  0, 1, 0, 1, 0,  0, 0, 1, 0, 1,  0, 0, 0, 0, 1],
        't' => &[0, 0, 0, 0, 1,  0, 0, 1, 0, 1,  0, 0, 1, 0, 1,  1, 1, 1, 1, 0,  0, 0, 0, 0, 0],
        'u' => &[0, 0, 0, 0, 1,  0, 1, 1, 1, 1,  0, 0, 0, 0, 1,  0, 0, 0, 0, 1,  0, 1, 1, 1, 0],
        'v' => &[0, 1, 1, 0, 0,  0, 0, 0, 1, 0,  0, 0, 0, 0, 1,  0, 0, 0, 1, 0,  0, 1, 1, 0, 0],
        'w' => &[0, 1, 1, 1, 1,  0, 0, 0, 0, 1,  0, 0, 0, 1, 0,  0, 0, 0, 0, 1,  0, 1, 1, 1, 1],
        'x' => &[0, 0, 0, 0, 0,  0, 1, 0, 0, 1,  0, 0, 1, 1, 0,  0, 0, 1, 1, 0,  0, 1, 0, 0, 1],
        'y' => &[0, 1, 0, 0, 0,  0, 0, 1, 0, 0,  0, 0, 0, 1, 0,  0, 0, 1, 0, 1,  0, 1, 0, 0, 1],
        'z' => &[0, 0, 0, 0, 0,  0, 1, 0, 0, 1,  0, 1, 1, 0, 1,  0, 1, 0, 1, 1,  0, 1, 0, 0, 1],
        '{' => &[0, 0, 0, 0, 0,  1, 0, 0, 0, 1,  1, 1, 1, 1, 1,  0, 0, 1, 0, 0,  0, 0, 0, 0, 0],
        '|' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  1, 1, 1, 1, 1,  0, 0, 0, 0, 0],
        '}' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 1, 0, 0,  1, 1, 1, 1, 1,  1, 0, 0, 0, 1],
        '~' => &[0, 0, 0, 1, 0,  0, 0, 0, 1, 0,  0, 0, 1, 0, 0,  0, 0, 1, 0, 0,  0, 0, 0, 0, 0],
        ' ' => &[0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 0, 0, 0,  0, 0, 0, 0, 0],
        _ => mask_for('?'),
    }
}
