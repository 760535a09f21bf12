//! The two fixed-pitch bitmap fonts.
//!
//! Both tables share one layout: glyphs are stored column by column, each byte holding eight
//! vertically adjacent pixels with the least significant bit at the top, exactly as the frame
//! buffer stores them. Glyphs taller than eight pixels continue in a second byte-row, which
//! begins one row stride after the first. So the byte for column `x` of byte-row `r` of glyph `g`
//! lives at `g * char_width + x + r * stride`.

mod large;
mod medium;

pub use self::large::LARGE;
pub use self::medium::MEDIUM;

/// The character size, which also selects the font.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharSize {
    /// 5x7 glyphs covering the character codes 0-254, indexed directly by code.
    Normal,
    /// 11x15 glyphs for the digits, space, `+` and `-` only. Anything else is dropped when
    /// written.
    Large,
}

impl Default for CharSize {
    fn default() -> Self {
        CharSize::Normal
    }
}

impl CharSize {
    /// Glyph width in pixels, not counting the spacing column.
    pub fn char_width(self) -> u8 {
        match self {
            CharSize::Normal => 5,
            CharSize::Large => 11,
        }
    }

    /// Glyph height in pixels, not counting the spacing row. Glyphs are rendered one row taller
    /// than this, the extra row coming from the font table.
    pub fn char_height(self) -> u8 {
        match self {
            CharSize::Normal => 7,
            CharSize::Large => 15,
        }
    }

    /// Distance in bytes between consecutive byte-rows of the table.
    pub fn stride(self) -> usize {
        match self {
            CharSize::Normal => medium::GLYPHS * 5,
            CharSize::Large => large::GLYPHS * 11,
        }
    }

    fn table(self) -> &'static [u8] {
        match self {
            CharSize::Normal => &MEDIUM[..],
            CharSize::Large => &LARGE[..],
        }
    }

    /// Map a character code to its glyph, or `None` if the font cannot render it.
    pub fn glyph_index(self, c: u8) -> Option<u8> {
        match self {
            CharSize::Normal if (c as usize) < medium::GLYPHS => Some(c),
            CharSize::Normal => None,
            CharSize::Large => match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'+' => Some(11),
                b'-' => Some(12),
                b' ' => Some(13),
                _ => None,
            },
        }
    }

    /// The byte holding pixel rows `8 * row` to `8 * row + 7` of column `col` of `glyph`.
    pub fn column_byte(self, glyph: u8, col: u8, row: u8) -> u8 {
        let index = glyph as usize * self.char_width() as usize
            + col as usize
            + row as usize * self.stride();
        self.table()[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes_match_geometry() {
        assert_eq!(MEDIUM.len(), CharSize::Normal.stride());
        assert_eq!(LARGE.len(), CharSize::Large.stride() * 2);
    }

    #[test]
    fn large_font_mapping() {
        let f = CharSize::Large;
        assert_eq!(f.glyph_index(b'0'), Some(0));
        assert_eq!(f.glyph_index(b'7'), Some(7));
        assert_eq!(f.glyph_index(b' '), Some(13));
        assert_eq!(f.glyph_index(b'-'), Some(12));
        assert_eq!(f.glyph_index(b'+'), Some(11));
        assert_eq!(f.glyph_index(b'A'), None);
        assert_eq!(f.glyph_index(b'.'), None);
    }

    #[test]
    fn normal_font_mapping() {
        let f = CharSize::Normal;
        assert_eq!(f.glyph_index(b'A'), Some(b'A'));
        assert_eq!(f.glyph_index(0), Some(0));
        assert_eq!(f.glyph_index(254), Some(254));
        assert_eq!(f.glyph_index(255), None);
    }

    #[test]
    fn glyph_columns() {
        // '0' in the 5x7 font.
        let cols: Vec<u8> = (0..5)
            .map(|x| CharSize::Normal.column_byte(b'0', x, 0))
            .collect();
        assert_eq!(cols, [0x3E, 0x51, 0x49, 0x45, 0x3E]);
        // The horizontal bar of the large '-' sits across both byte-rows' boundary.
        assert_eq!(CharSize::Large.column_byte(12, 5, 0), 0x80);
        assert_eq!(CharSize::Large.column_byte(12, 5, 1), 0x01);
        assert_eq!(CharSize::Large.column_byte(12, 0, 0), 0x00);
        // Space is blank in both fonts.
        assert!((0..5).all(|x| CharSize::Normal.column_byte(b' ', x, 0) == 0));
        assert!((0..11).all(|x| CharSize::Large.column_byte(13, x, 0) == 0
            && CharSize::Large.column_byte(13, x, 1) == 0));
    }
}
