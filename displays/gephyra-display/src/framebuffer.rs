//! Page-organized monochrome framebuffer and drawing primitives
//!
//! 128x64, 1 bit per pixel, eight 8-row pages with one byte per column
//! (bit 0 is the top row of a page). Drawing clips silently: geometry
//! off the panel is dropped pixel by pixel, never indexed.

/// Panel width in pixels.
pub const WIDTH: usize = 128;

/// Panel height in pixels.
pub const HEIGHT: usize = 64;

/// Number of 8-row pages.
pub const PAGES: usize = HEIGHT / 8;

/// Bytes in one full frame.
pub const BUF_LEN: usize = WIDTH * PAGES;

/// Binary pixel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel cleared
    Black,
    /// Pixel set
    White,
}

impl Color {
    /// The other color.
    pub fn inverse(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// In-memory mirror of the panel contents.
pub struct Framebuffer {
    buf: [u8; BUF_LEN],
}

impl Framebuffer {
    /// All-black buffer.
    pub const fn new() -> Self {
        Self { buf: [0; BUF_LEN] }
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let byte = match color {
            Color::Black => 0x00,
            Color::White => 0xFF,
        };
        self.buf = [byte; BUF_LEN];
    }

    /// Bytes of one page, top to bottom.
    pub fn page(&self, index: usize) -> &[u8] {
        &self.buf[index * WIDTH..(index + 1) * WIDTH]
    }

    /// The whole underlying byte buffer.
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// Set or clear one pixel; coordinates off the panel are ignored.
    pub fn draw_pixel(&mut self, x: i16, y: i16, color: Color) {
        self.plot(x as i32, y as i32, color);
    }

    /// Read one pixel back, `None` off the panel.
    pub fn pixel(&self, x: i16, y: i16) -> Option<Color> {
        if x < 0 || y < 0 || x >= WIDTH as i16 || y >= HEIGHT as i16 {
            return None;
        }
        let index = x as usize + (y as usize / 8) * WIDTH;
        let mask = 1 << (y as usize % 8);
        Some(if self.buf[index] & mask != 0 {
            Color::White
        } else {
            Color::Black
        })
    }

    // Clipping happens here in full precision so composite shapes can
    // run their arithmetic without worrying about the panel edge.
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let index = x as usize + (y as usize / 8) * WIDTH;
        let mask = 1 << (y as usize % 8);
        match color {
            Color::White => self.buf[index] |= mask,
            Color::Black => self.buf[index] &= !mask,
        }
    }

    /// Bresenham line between two points, inclusive of both.
    pub fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) {
        self.line(x0 as i32, y0 as i32, x1 as i32, y1 as i32, color);
    }

    fn line(&mut self, mut x: i32, mut y: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Rectangle outline with top-left corner (x, y).
    pub fn draw_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x, y) = (x as i32, y as i32);
        let x1 = x + w as i32 - 1;
        let y1 = y + h as i32 - 1;
        self.line(x, y, x1, y, color);
        self.line(x, y1, x1, y1, color);
        self.line(x, y, x, y1, color);
        self.line(x1, y, x1, y1, color);
    }

    /// Filled rectangle, one horizontal span per row.
    pub fn draw_filled_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x, y) = (x as i32, y as i32);
        let x1 = x + w as i32 - 1;
        for row in y..y + h as i32 {
            self.line(x, row, x1, row, color);
        }
    }

    /// Triangle outline through three points.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        x3: i16,
        y3: i16,
        color: Color,
    ) {
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x3, y3, color);
        self.draw_line(x3, y3, x1, y1, color);
    }

    /// Midpoint circle outline.
    ///
    /// A negative radius is ignored; radius zero is the center pixel.
    pub fn draw_circle(&mut self, x0: i16, y0: i16, r: i16, color: Color) {
        if r < 0 {
            return;
        }
        let (x0, y0, r) = (x0 as i32, y0 as i32, r as i32);
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        self.plot(x0, y0 + r, color);
        self.plot(x0, y0 - r, color);
        self.plot(x0 + r, y0, color);
        self.plot(x0 - r, y0, color);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.plot(x0 + x, y0 + y, color);
            self.plot(x0 - x, y0 + y, color);
            self.plot(x0 + x, y0 - y, color);
            self.plot(x0 - x, y0 - y, color);
            self.plot(x0 + y, y0 + x, color);
            self.plot(x0 - y, y0 + x, color);
            self.plot(x0 + y, y0 - x, color);
            self.plot(x0 - y, y0 - x, color);
        }
    }

    /// Filled midpoint circle: a horizontal span between the symmetric
    /// x-offsets at each step.
    pub fn draw_filled_circle(&mut self, x0: i16, y0: i16, r: i16, color: Color) {
        if r < 0 {
            return;
        }
        let (x0, y0, r) = (x0 as i32, y0 as i32, r as i32);
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        self.line(x0 - r, y0, x0 + r, y0, color);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.line(x0 - x, y0 + y, x0 + x, y0 + y, color);
            self.line(x0 - x, y0 - y, x0 + x, y0 - y, color);
            self.line(x0 - y, y0 + x, x0 + y, y0 + x, color);
            self.line(x0 - y, y0 - x, x0 + y, y0 - x, color);
        }
    }

    /// Blit a packed monochrome bitmap: row-major, MSB-first, rows
    /// padded to whole bytes. Set source bits draw `color`, clear bits
    /// leave the buffer untouched.
    pub fn draw_bitmap(&mut self, x: i16, y: i16, data: &[u8], w: i16, h: i16, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let bytes_per_row = (w as usize + 7) / 8;
        if data.len() < bytes_per_row * h as usize {
            return;
        }
        for j in 0..h as usize {
            let row = &data[j * bytes_per_row..(j + 1) * bytes_per_row];
            for i in 0..w as usize {
                if row[i / 8] & (0x80 >> (i % 8)) != 0 {
                    self.plot(x as i32 + i as i32, y as i32 + j as i32, color);
                }
            }
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(fb: &Framebuffer) -> usize {
        fb.data().iter().map(|b| b.count_ones() as usize).sum()
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut fb = Framebuffer::new();
        fb.draw_pixel(5, 9, Color::White);
        assert_eq!(fb.pixel(5, 9), Some(Color::White));

        fb.draw_pixel(5, 9, Color::Black);
        assert_eq!(fb.pixel(5, 9), Some(Color::Black));
    }

    #[test]
    fn test_pixel_byte_layout() {
        let mut fb = Framebuffer::new();
        // Row 9 lives in page 1, bit 1
        fb.draw_pixel(5, 9, Color::White);
        assert_eq!(fb.data()[5 + WIDTH], 0x02);
        assert_eq!(lit(&fb), 1);
    }

    #[test]
    fn test_out_of_bounds_pixel_is_noop() {
        let mut fb = Framebuffer::new();
        for (x, y) in [(-1, 0), (0, -1), (128, 0), (0, 64), (-300, 700)] {
            fb.draw_pixel(x, y, Color::White);
            assert_eq!(fb.pixel(x, y), None);
        }
        assert_eq!(lit(&fb), 0);
    }

    #[test]
    fn test_fill_and_refill() {
        let mut fb = Framebuffer::new();
        fb.fill(Color::White);
        assert!(fb.data().iter().all(|&b| b == 0xFF));

        fb.fill(Color::Black);
        assert!(fb.data().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_degenerate_line_is_one_pixel() {
        let mut fb = Framebuffer::new();
        fb.draw_line(40, 20, 40, 20, Color::White);
        assert_eq!(lit(&fb), 1);
        assert_eq!(fb.pixel(40, 20), Some(Color::White));
    }

    #[test]
    fn test_line_hits_both_endpoints() {
        let mut fb = Framebuffer::new();
        fb.draw_line(3, 60, 120, 7, Color::White);
        assert_eq!(fb.pixel(3, 60), Some(Color::White));
        assert_eq!(fb.pixel(120, 7), Some(Color::White));
    }

    #[test]
    fn test_horizontal_line_span() {
        let mut fb = Framebuffer::new();
        fb.draw_line(10, 4, 20, 4, Color::White);
        assert_eq!(lit(&fb), 11);
        for x in 10..=20 {
            assert_eq!(fb.pixel(x, 4), Some(Color::White));
        }
    }

    #[test]
    fn test_line_erases_in_black() {
        let mut fb = Framebuffer::new();
        fb.fill(Color::White);
        fb.draw_line(0, 0, 127, 0, Color::Black);
        for x in 0..128 {
            assert_eq!(fb.pixel(x, 0), Some(Color::Black));
        }
    }

    #[test]
    fn test_rect_perimeter() {
        let mut fb = Framebuffer::new();
        fb.draw_rect(10, 10, 5, 4, Color::White);
        // 2*(5 + 4) - 4 corner overlaps
        assert_eq!(lit(&fb), 14);
        assert_eq!(fb.pixel(10, 10), Some(Color::White));
        assert_eq!(fb.pixel(14, 13), Some(Color::White));
        assert_eq!(fb.pixel(11, 11), Some(Color::Black));
    }

    #[test]
    fn test_filled_rect() {
        let mut fb = Framebuffer::new();
        fb.draw_filled_rect(0, 0, 8, 3, Color::White);
        assert_eq!(lit(&fb), 24);
    }

    #[test]
    fn test_empty_rect_is_noop() {
        let mut fb = Framebuffer::new();
        fb.draw_rect(10, 10, 0, 5, Color::White);
        fb.draw_filled_rect(10, 10, 5, -2, Color::White);
        assert_eq!(lit(&fb), 0);
    }

    #[test]
    fn test_triangle_vertices() {
        let mut fb = Framebuffer::new();
        fb.draw_triangle(10, 10, 30, 10, 20, 30, Color::White);
        assert_eq!(fb.pixel(10, 10), Some(Color::White));
        assert_eq!(fb.pixel(30, 10), Some(Color::White));
        assert_eq!(fb.pixel(20, 30), Some(Color::White));
    }

    #[test]
    fn test_zero_radius_circle_is_center_pixel() {
        let mut fb = Framebuffer::new();
        fb.draw_circle(64, 32, 0, Color::White);
        assert_eq!(lit(&fb), 1);
        assert_eq!(fb.pixel(64, 32), Some(Color::White));
    }

    #[test]
    fn test_negative_radius_is_noop() {
        let mut fb = Framebuffer::new();
        fb.draw_circle(64, 32, -3, Color::White);
        fb.draw_filled_circle(64, 32, -3, Color::White);
        assert_eq!(lit(&fb), 0);
    }

    #[test]
    fn test_circle_cardinal_points() {
        let mut fb = Framebuffer::new();
        fb.draw_circle(64, 32, 10, Color::White);
        assert_eq!(fb.pixel(74, 32), Some(Color::White));
        assert_eq!(fb.pixel(54, 32), Some(Color::White));
        assert_eq!(fb.pixel(64, 42), Some(Color::White));
        assert_eq!(fb.pixel(64, 22), Some(Color::White));
        // Center stays clear on the outline variant
        assert_eq!(fb.pixel(64, 32), Some(Color::Black));
    }

    #[test]
    fn test_filled_circle_covers_outline() {
        let mut outline = Framebuffer::new();
        let mut filled = Framebuffer::new();
        outline.draw_circle(64, 32, 9, Color::White);
        filled.draw_filled_circle(64, 32, 9, Color::White);

        for y in 0..HEIGHT as i16 {
            for x in 0..WIDTH as i16 {
                if outline.pixel(x, y) == Some(Color::White) {
                    assert_eq!(filled.pixel(x, y), Some(Color::White));
                }
            }
        }
        assert_eq!(filled.pixel(64, 32), Some(Color::White));
    }

    #[test]
    fn test_bitmap_blit() {
        let mut fb = Framebuffer::new();
        // 10x2, rows padded to 2 bytes
        let data = [0b1000_0000, 0b0100_0000, 0b0000_0001, 0b1000_0000];
        fb.draw_bitmap(4, 4, &data, 10, 2, Color::White);

        assert_eq!(fb.pixel(4, 4), Some(Color::White));
        assert_eq!(fb.pixel(13, 4), Some(Color::White));
        assert_eq!(fb.pixel(11, 5), Some(Color::White));
        assert_eq!(fb.pixel(12, 5), Some(Color::White));
        assert_eq!(lit(&fb), 4);
    }

    #[test]
    fn test_bitmap_erases_with_black() {
        let mut fb = Framebuffer::new();
        fb.fill(Color::White);
        let data = [0b1100_0000];
        fb.draw_bitmap(0, 0, &data, 2, 1, Color::Black);

        assert_eq!(fb.pixel(0, 0), Some(Color::Black));
        assert_eq!(fb.pixel(1, 0), Some(Color::Black));
        // Clear source bits never erase
        assert_eq!(fb.pixel(2, 0), Some(Color::White));
    }

    #[test]
    fn test_bitmap_short_data_is_noop() {
        let mut fb = Framebuffer::new();
        let data = [0xFF];
        fb.draw_bitmap(0, 0, &data, 16, 2, Color::White);
        assert_eq!(lit(&fb), 0);
    }

    #[test]
    fn test_bitmap_clips_at_edge() {
        let mut fb = Framebuffer::new();
        let data = [0xFF];
        fb.draw_bitmap(125, 0, &data, 8, 1, Color::White);
        assert_eq!(lit(&fb), 3);
    }

    #[test]
    fn test_page_slices() {
        let mut fb = Framebuffer::new();
        fb.draw_pixel(0, 8, Color::White);
        assert_eq!(fb.page(1)[0], 0x01);
        assert_eq!(fb.page(0)[0], 0x00);
        assert_eq!(fb.page(7).len(), WIDTH);
    }
}
