//! Glyphs of the built-in 7x13 face
//!
//! Every glyph covers rows 2 to 10 of the 13 pixel cell (the baseline is below
//! row 10). A byte is one row, the most significant bit is the left-most pixel.

pub(super) const CELL_WIDTH: u32 = 7;
pub(super) const CELL_HEIGHT: u32 = 13;
pub(super) const ASCENT: u32 = 11;
pub(super) const GLYPH_TOP: u32 = 2;
pub(super) const GLYPH_ROWS: usize = 9;

type Glyph = [u8; GLYPH_ROWS];

const DIGITS: [Glyph; 10] = [
    [0x38, 0x44, 0x44, 0x4C, 0x54, 0x64, 0x44, 0x44, 0x38],
    [0x10, 0x30, 0x50, 0x10, 0x10, 0x10, 0x10, 0x10, 0x7C],
    [0x38, 0x44, 0x04, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7C],
    [0x7C, 0x04, 0x08, 0x10, 0x38, 0x04, 0x04, 0x44, 0x38],
    [0x08, 0x18, 0x28, 0x48, 0x48, 0x7C, 0x08, 0x08, 0x08],
    [0x7C, 0x40, 0x40, 0x78, 0x04, 0x04, 0x04, 0x44, 0x38],
    [0x38, 0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x44, 0x38],
    [0x7C, 0x04, 0x08, 0x08, 0x10, 0x10, 0x20, 0x20, 0x20],
    [0x38, 0x44, 0x44, 0x44, 0x38, 0x44, 0x44, 0x44, 0x38],
    [0x38, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x04, 0x04, 0x38],
];

const SPACE: Glyph = [0x00; GLYPH_ROWS];
const MINUS: Glyph = [0x00, 0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00];
const PERIOD: Glyph = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30];
const HASH: Glyph = [0x00, 0x28, 0x28, 0x7C, 0x28, 0x7C, 0x28, 0x28, 0x00];
const UNKNOWN: Glyph = [0x7C, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x7C];

pub(super) fn glyph(ch: char) -> &'static Glyph {
    match ch {
        '0'..='9' => &DIGITS[ch as usize - '0' as usize],
        ' ' => &SPACE,
        '-' => &MINUS,
        '.' => &PERIOD,
        '#' => &HASH,
        _ => &UNKNOWN,
    }
}
