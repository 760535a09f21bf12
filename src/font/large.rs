//! 11x15 digits. The glyph order is the digits 0-9, an unused blank, `+`, `-` and space.

pub(super) const GLYPHS: usize = 14;

#[cfg_attr(rustfmt, rustfmt_skip)]
pub static LARGE: [u8; GLYPHS * 11 * 2] = [
    // Rows 0-7.
    0x00, 0xFC, 0xFE, 0x07, 0x83, 0xC3, 0x63, 0x37, 0xFE, 0xFC, 0x00, // 0
    0x00, 0x00, 0x08, 0x0C, 0x06, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, // 1
    0x00, 0x0C, 0x0E, 0x07, 0x03, 0x83, 0xC3, 0xE7, 0x7E, 0x3C, 0x00, // 2
    0x00, 0x0C, 0x0E, 0x07, 0xC3, 0xC3, 0xC3, 0xE7, 0xFE, 0x3C, 0x00, // 3
    0x00, 0xC0, 0xE0, 0xB0, 0x98, 0x8C, 0x86, 0xFF, 0xFF, 0x80, 0x00, // 4
    0x00, 0x7F, 0x7F, 0x63, 0x33, 0x33, 0x33, 0x73, 0xE3, 0xE3, 0x00, // 5
    0x00, 0xFC, 0xFE, 0xC7, 0x63, 0x63, 0x63, 0xE7, 0xC6, 0xC4, 0x00, // 6
    0x00, 0x03, 0x03, 0x03, 0x03, 0xC3, 0xF3, 0x7B, 0x1F, 0x0F, 0x00, // 7
    0x00, 0x3C, 0xFE, 0xE7, 0xC3, 0xC3, 0xC3, 0xE7, 0xFE, 0x3C, 0x00, // 8
    0x00, 0x7C, 0xFE, 0xC7, 0x83, 0x83, 0x83, 0xC7, 0xFE, 0xFC, 0x00, // 9
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // unused
    0x00, 0x80, 0x80, 0x80, 0x80, 0xF8, 0xF8, 0x80, 0x80, 0x80, 0x00, // +
    0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, // -
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // space
    // Rows 8-15.
    0x00, 0x0F, 0x1F, 0x3B, 0x31, 0x30, 0x30, 0x38, 0x1F, 0x0F, 0x00, // 0
    0x00, 0x00, 0x30, 0x30, 0x30, 0x3F, 0x3F, 0x30, 0x30, 0x30, 0x00, // 1
    0x00, 0x38, 0x3C, 0x3E, 0x37, 0x33, 0x31, 0x30, 0x30, 0x30, 0x00, // 2
    0x00, 0x0C, 0x1C, 0x38, 0x30, 0x30, 0x30, 0x39, 0x1F, 0x0F, 0x00, // 3
    0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x3F, 0x3F, 0x01, 0x00, // 4
    0x00, 0x0C, 0x1C, 0x38, 0x30, 0x30, 0x30, 0x38, 0x1F, 0x0F, 0x00, // 5
    0x00, 0x0F, 0x1F, 0x38, 0x30, 0x30, 0x30, 0x38, 0x1F, 0x0F, 0x00, // 6
    0x00, 0x00, 0x00, 0x00, 0x3F, 0x3F, 0x01, 0x00, 0x00, 0x00, 0x00, // 7
    0x00, 0x0F, 0x1F, 0x39, 0x30, 0x30, 0x30, 0x39, 0x1F, 0x0F, 0x00, // 8
    0x00, 0x08, 0x18, 0x39, 0x31, 0x31, 0x31, 0x38, 0x1F, 0x0F, 0x00, // 9
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // unused
    0x00, 0x01, 0x01, 0x01, 0x01, 0x1F, 0x1F, 0x01, 0x01, 0x01, 0x00, // +
    0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, // -
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // space
];
