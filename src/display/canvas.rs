//! The frame buffer and the drawing surface wrapped around it.

use crate::command::consts::*;
use crate::display::text::Cursor;

/// An in-memory copy of the panel contents.
///
/// The layout matches the controller's display RAM: one byte per column per 8-row page, pages
/// stored top to bottom, each `WIDTH` bytes long. Bit `y % 8` of byte `x + (y / 8) * WIDTH` is the
/// pixel at `(x, y)`, so a page can be sent to the controller without any conversion.
#[derive(Clone)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl FrameBuffer {
    /// Create a blank frame buffer.
    pub const fn new() -> Self {
        FrameBuffer {
            bytes: [0; BUFFER_SIZE],
        }
    }

    fn index(x: u8, y: u8) -> usize {
        x as usize + (y as usize / 8) * WIDTH as usize
    }

    /// Set or clear one pixel.
    ///
    /// Coordinates are not checked against the panel size. An `x` past the right edge lands in
    /// the next page and writes beyond the end of the buffer are dropped.
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) {
        if let Some(byte) = self.bytes.get_mut(Self::index(x, y)) {
            if on {
                *byte |= 1 << (y % 8);
            } else {
                *byte &= !(1 << (y % 8));
            }
        }
    }

    /// Read one pixel. Anything outside the panel reads as off.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        x < WIDTH && y < HEIGHT && self.bytes[Self::index(x, y)] & (1 << (y % 8)) != 0
    }

    /// The `WIDTH` bytes of one page, leftmost column first, or `None` past the last page.
    pub fn page(&self, page: u8) -> Option<&[u8]> {
        let start = page as usize * WIDTH as usize;
        self.bytes.get(start..start + WIDTH as usize)
    }

    /// Iterate over the pages from top to bottom.
    pub fn pages(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks(WIDTH as usize)
    }

    /// The raw buffer in controller layout.
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Replace the whole contents with `image`, which must be in frame buffer layout.
    pub fn load(&mut self, image: &[u8; BUFFER_SIZE]) {
        self.bytes.copy_from_slice(image);
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.bytes = [0; BUFFER_SIZE];
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        FrameBuffer::new()
    }
}

/// A frame buffer together with the text cursor. All drawing happens here; nothing reaches the
/// panel until `Display::update` is called.
#[derive(Clone, Default)]
pub struct Canvas {
    pub(crate) buffer: FrameBuffer,
    pub(crate) cursor: Cursor,
}

impl Canvas {
    /// A blank canvas with the cursor at the origin and the normal font selected.
    pub fn new() -> Self {
        Canvas::default()
    }

    /// Set or clear one pixel. This is the single point through which all drawing goes, and like
    /// `FrameBuffer::set_pixel` it does not check its coordinates.
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) {
        self.buffer.set_pixel(x, y, on);
    }

    /// Read one pixel. Anything outside the panel reads as off.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        self.buffer.pixel(x, y)
    }

    /// The frame buffer, as `Display::update` will send it.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Copy a full-screen bitmap, e.g. `logo::LOGO`, into the frame buffer.
    pub fn load_image(&mut self, image: &[u8; BUFFER_SIZE]) {
        self.buffer.load(image);
    }

    /// Blank the frame buffer. The cursor is left where it is.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn packing() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, true);
        fb.set_pixel(3, 9, true);
        fb.set_pixel(127, 63, true);
        assert_eq!(fb.as_bytes()[0], 0x01);
        assert_eq!(fb.as_bytes()[3 + 128], 0x02);
        assert_eq!(fb.as_bytes()[BUFFER_SIZE - 1], 0x80);
        assert_eq!(fb.page(1).unwrap()[3], 0x02);
        assert_eq!(fb.as_bytes().iter().filter(|&&b| b != 0).count(), 3);
    }

    #[test]
    fn clearing_leaves_neighbours() {
        let mut fb = FrameBuffer::new();
        for y in 0..8 {
            fb.set_pixel(10, y, true);
        }
        fb.set_pixel(10, 4, false);
        assert_eq!(fb.page(0).unwrap()[10], 0xEF);
    }

    #[test]
    fn page_access() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 63, true);
        assert_eq!(fb.page(PAGE_MAX).unwrap()[0], 0x80);
        assert_eq!(fb.page(PAGES), None);
        assert_eq!(fb.page(u8::MAX), None);

        assert_eq!(fb.pages().count(), PAGES as usize);
        assert!(fb.pages().all(|page| page.len() == WIDTH as usize));
        assert_eq!(fb.pages().last(), fb.page(PAGE_MAX));
    }

    #[test]
    fn unchecked_writes() {
        let mut fb = FrameBuffer::new();
        // Past the right edge of page 0 is the left edge of page 1.
        fb.set_pixel(130, 0, true);
        assert!(fb.pixel(2, 8));
        assert!(!fb.pixel(130, 0));
        // Past the end of the buffer is dropped.
        fb.set_pixel(200, 63, true);
        assert_eq!(fb.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>(), 1);
    }

    #[test]
    fn load_and_clear() {
        let mut canvas = Canvas::new();
        canvas.load_image(&crate::logo::LOGO);
        assert_eq!(canvas.buffer().as_bytes()[..], crate::logo::LOGO[..]);
        canvas.clear();
        assert!(canvas.buffer().as_bytes().iter().all(|&b| b == 0));
    }

    proptest! {
        #[test]
        fn last_write_wins(x in 0..WIDTH, y in 0..HEIGHT, first: bool, second: bool) {
            let mut fb = FrameBuffer::new();
            fb.set_pixel(x, y, first);
            prop_assert_eq!(fb.pixel(x, y), first);
            fb.set_pixel(x, y, second);
            prop_assert_eq!(fb.pixel(x, y), second);
            let lit = fb.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>();
            prop_assert_eq!(lit, second as u32);
        }
    }
}
