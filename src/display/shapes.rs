//! Line and rectangle drawing.

use itertools::iproduct;

use crate::display::canvas::Canvas;

bitflags::bitflags! {
    /// How `Canvas::draw_rect` draws. With no flags only the border is drawn.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RectFlags: u8 {
        /// Paint the interior as well as the border.
        const FILL = 0x01;
        /// Leave the four corner pixels untouched.
        const ROUNDED = 0x02;
    }
}

impl Canvas {
    /// Draw a line from `(x1, y1)` to `(x2, y2)`. Only lines running right and/or down are
    /// supported: anything with `x1 > x2` or `y1 > y2` is ignored.
    ///
    /// This is a cheap stepping approximation, not Bresenham. The longer axis advances every
    /// step; the shorter axis advances every `max(dx, dy) / d` steps, with integer division. When
    /// that interval does not divide evenly the line overshoots its end point on the shorter
    /// axis, e.g. (0, 0) to (3, 5) ends at (5, 5). The end point is not clipped.
    pub fn draw_line(&mut self, x1: u8, y1: u8, x2: u8, y2: u8, on: bool) {
        if x1 > x2 || y1 > y2 {
            return;
        }
        let (dx, dy) = (x2 - x1, y2 - y1);
        let steps = dx.max(dy);
        let x_interval = if dx == 0 { 0 } else { steps / dx };
        let y_interval = if dy == 0 { 0 } else { steps / dy };

        let (mut x, mut y) = (x1, y1);
        for step in 0..=steps {
            if step > 0 {
                if x_interval > 0 && step % x_interval == 0 {
                    x = x.wrapping_add(1);
                }
                if y_interval > 0 && step % y_interval == 0 {
                    y = y.wrapping_add(1);
                }
            }
            self.set_pixel(x, y, on);
        }
    }

    /// Draw the rectangle with corners `(x1, y1)` and `(x2, y2)`, both inclusive. Ignored unless
    /// `x1 <= x2` and `y1 <= y2`.
    pub fn draw_rect(&mut self, x1: u8, y1: u8, x2: u8, y2: u8, on: bool, flags: RectFlags) {
        if x1 > x2 || y1 > y2 {
            return;
        }
        for (y, x) in iproduct!(y1..=y2, x1..=x2) {
            let left_or_right = x == x1 || x == x2;
            let top_or_bottom = y == y1 || y == y2;
            if !flags.contains(RectFlags::FILL) && !(left_or_right || top_or_bottom) {
                continue;
            }
            if flags.contains(RectFlags::ROUNDED) && left_or_right && top_or_bottom {
                continue;
            }
            self.set_pixel(x, y, on);
        }
    }
}
