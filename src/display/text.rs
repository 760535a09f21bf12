//! Cursor-based text rendering.
//!
//! Glyphs are always drawn with a solid background: the cell is painted in the requested colour
//! where the font has ink and in the opposite colour elsewhere, followed by one spacing column of
//! background. Passing `on = false` therefore draws highlighted (inverted) text.

use crate::command::consts::*;
use crate::display::canvas::Canvas;
use crate::font::CharSize;

/// Where the next glyph goes and which font it comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) size: CharSize,
}

impl Cursor {
    /// Whether a glyph of the current size at `(x, y)` lies inside the panel, leaving its spacing
    /// column on the glass.
    fn fits(&self, x: u8, y: u8) -> bool {
        (y as u16 + self.size.char_height() as u16) < HEIGHT as u16
            && (x as u16 + self.size.char_width() as u16) < WIDTH as u16
    }
}

impl Canvas {
    /// Move the cursor to pixel `(x, y)`, the top left corner of the next glyph. Ignored if a
    /// glyph of the current size would not fit there.
    pub fn set_cursor(&mut self, x: u8, y: u8) {
        if !self.cursor.fits(x, y) {
            #[cfg(feature = "defmt")]
            defmt::trace!("cursor ({}, {}) rejected", x, y);
            return;
        }
        self.cursor.x = x;
        self.cursor.y = y;
    }

    /// The cursor position as `(x, y)`. After text has run off the panel this can lie outside
    /// it.
    pub fn cursor(&self) -> (u8, u8) {
        (self.cursor.x, self.cursor.y)
    }

    /// Select the font for subsequent text. Already drawn text is not affected, and the cursor
    /// stays where it is.
    pub fn set_char_size(&mut self, size: CharSize) {
        self.cursor.size = size;
    }

    /// The font used by subsequent text.
    pub fn char_size(&self) -> CharSize {
        self.cursor.size
    }

    /// Draw one character at the cursor and advance it.
    ///
    /// Nothing happens if the glyph would not fit at the cursor, or if the font has no glyph for
    /// `c`. Advancing past the right edge moves the cursor down a line but not back to the left,
    /// so further characters are dropped until the cursor is set again.
    pub fn write_char(&mut self, c: u8, on: bool) {
        let Cursor { x, y, size } = self.cursor;
        if !self.cursor.fits(x, y) {
            return;
        }
        let glyph = match size.glyph_index(c) {
            Some(glyph) => glyph,
            None => return,
        };
        let (width, height) = (size.char_width(), size.char_height());

        for col in 0..width {
            for row in 0..=height {
                let ink = size.column_byte(glyph, col, row / 8) & (1 << (row % 8)) != 0;
                self.set_pixel(x + col, y + row, if ink { on } else { !on });
            }
        }
        for row in 0..=height {
            self.set_pixel(x + width, y + row, !on);
        }

        self.cursor.x = x + width + 1;
        if self.cursor.x >= WIDTH {
            self.cursor.y = y + height + 1;
        }
    }

    /// Draw each byte of `s` with `write_char`. There is no wrapping; see `draw_message`.
    pub fn write_string(&mut self, s: &str, on: bool) {
        for c in s.bytes() {
            self.write_char(c, on);
        }
    }

    /// Draw a decimal integer, clamped to [-99999, 99999].
    ///
    /// Negative values get a `-`, and non-negative ones a `+` when `show_sign` is set. Leading
    /// zeros are suppressed down to the units digit. Unless `show_sign` is set, a value with a
    /// single significant digit gets one blank cell in place of the tens digit, after the `-` of
    /// a negative value.
    pub fn write_int(&mut self, value: i32, on: bool, show_sign: bool) {
        let value = value.max(-99_999).min(99_999);
        let magnitude = value.abs() as u32;
        let sign = if value < 0 {
            Some(b'-')
        } else if show_sign {
            Some(b'+')
        } else {
            None
        };
        if let Some(sign) = sign {
            self.write_char(sign, on);
        }

        let digits = [
            magnitude / 10_000,
            magnitude / 1_000 % 10,
            magnitude / 100 % 10,
            magnitude / 10 % 10,
        ];
        match digits.iter().position(|&d| d != 0) {
            Some(first) => {
                for &d in digits[first..].iter() {
                    self.write_char(b'0' + d as u8, on);
                }
            }
            None if !show_sign => self.write_char(b' ', on),
            None => {}
        }
        self.write_char(b'0' + (magnitude % 10) as u8, on);
    }

    /// Draw a number with one decimal place, clamped to [-9999.9, 9999.9] and rounded half away
    /// from zero.
    ///
    /// The sign follows the same rules as `write_int`. The integer part has its leading zeros
    /// suppressed but always shows at least one digit. The large font has no `.`, so there the
    /// point is dropped and the digits run together.
    pub fn write_float(&mut self, value: f32, on: bool, show_sign: bool) {
        let negative = value < 0.0;
        let magnitude = if negative { -value } else { value };
        // Float to int casts saturate, and NaN becomes 0.
        let tenths = ((magnitude * 10.0 + 0.5) as u32).min(99_999);

        if negative && tenths != 0 {
            self.write_char(b'-', on);
        } else if show_sign {
            self.write_char(b'+', on);
        }

        let whole = tenths / 10;
        let digits = [whole / 1_000, whole / 100 % 10, whole / 10 % 10];
        if let Some(first) = digits.iter().position(|&d| d != 0) {
            for &d in digits[first..].iter() {
                self.write_char(b'0' + d as u8, on);
            }
        }
        self.write_char(b'0' + (whole % 10) as u8, on);
        self.write_char(b'.', on);
        self.write_char(b'0' + (tenths % 10) as u8, on);
    }

    /// Draw `text` word-wrapped into centred lines, starting at the cursor.
    ///
    /// The cursor's x position is used as a margin on both sides, giving a budget of
    /// `(WIDTH - 2 * x) / (char_width + 1)` characters per line. Each line takes as many
    /// space-separated words as keep it shorter than the budget, drops the space it broke at, and
    /// is centred within the budget. A single word too long for the budget is split at the budget
    /// width. Each line moves the cursor down one text line; lines below the bottom of the panel
    /// are dropped.
    pub fn draw_message(&mut self, text: &str, on: bool) {
        let size = self.cursor.size;
        let pitch = size.char_width() as usize + 1;
        let margin = self.cursor.x as usize;
        let budget = match (WIDTH as usize).checked_sub(2 * margin) {
            Some(room) if room / pitch > 0 => room / pitch,
            _ => return,
        };

        let bytes = text.as_bytes();
        let mut start = 0;
        while start < bytes.len() {
            let mut end = start;
            loop {
                match bytes[end..].iter().position(|&b| b == b' ') {
                    Some(offset) if end + offset - start < budget => end += offset + 1,
                    Some(_) => break,
                    None => {
                        if bytes.len() - start < budget {
                            end = bytes.len();
                        }
                        break;
                    }
                }
            }
            if end == start {
                end = bytes.len().min(start + budget);
            }

            let mut len = end - start;
            if bytes[end - 1] == b' ' {
                len -= 1;
            }
            self.cursor.x = (margin + (budget - len) * pitch / 2) as u8;
            for &c in bytes[start..start + len].iter() {
                self.write_char(c, on);
            }
            self.cursor.y = self.cursor.y.saturating_add(size.char_height() + 1);

            start = end;
        }
    }
}
