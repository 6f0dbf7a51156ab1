//! Property-based tests for the framebuffer drawing primitives.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

use gephyra_display::framebuffer::{Color, Framebuffer, HEIGHT, WIDTH};

proptest::proptest! {
    /// Any on-panel pixel reads back the color it was drawn with.
    #[test]
    fn pixel_roundtrip(x in 0i16..WIDTH as i16, y in 0i16..HEIGHT as i16) {
        let mut fb = Framebuffer::new();

        fb.draw_pixel(x, y, Color::White);
        assert_eq!(fb.pixel(x, y), Some(Color::White));

        fb.draw_pixel(x, y, Color::Black);
        assert_eq!(fb.pixel(x, y), Some(Color::Black));
    }

    /// Drawing one pixel never disturbs any other pixel.
    #[test]
    fn pixel_is_isolated(x in 0i16..WIDTH as i16, y in 0i16..HEIGHT as i16) {
        let mut fb = Framebuffer::new();
        fb.draw_pixel(x, y, Color::White);

        let set: usize = fb.data().iter().map(|b| b.count_ones() as usize).sum();
        assert_eq!(set, 1);
    }

    /// Off-panel coordinates are ignored for any x/y, in any direction.
    #[test]
    fn out_of_bounds_draw_is_noop(x in -300i16..300, y in -300i16..300) {
        proptest::prop_assume!(
            x < 0 || y < 0 || x >= WIDTH as i16 || y >= HEIGHT as i16
        );

        let mut fb = Framebuffer::new();
        fb.draw_pixel(x, y, Color::White);

        assert_eq!(fb.pixel(x, y), None);
        assert!(fb.data().iter().all(|&b| b == 0));
    }

    /// A line always lights both of its endpoints.
    #[test]
    fn line_hits_endpoints(
        x0 in 0i16..WIDTH as i16, y0 in 0i16..HEIGHT as i16,
        x1 in 0i16..WIDTH as i16, y1 in 0i16..HEIGHT as i16,
    ) {
        let mut fb = Framebuffer::new();
        fb.draw_line(x0, y0, x1, y1, Color::White);

        assert_eq!(fb.pixel(x0, y0), Some(Color::White));
        assert_eq!(fb.pixel(x1, y1), Some(Color::White));
    }

    /// A circle drawn fully on the panel is symmetric under all eight
    /// reflections about its center.
    #[test]
    fn circle_octant_symmetry(x0 in 30i16..98, y0 in 30i16..34, r in 0i16..=29) {
        let mut fb = Framebuffer::new();
        fb.draw_circle(x0, y0, r, Color::White);

        for y in 0..HEIGHT as i16 {
            for x in 0..WIDTH as i16 {
                if fb.pixel(x, y) != Some(Color::White) {
                    continue;
                }
                let dx = x - x0;
                let dy = y - y0;
                for (rx, ry) in [
                    (dx, -dy), (-dx, dy), (-dx, -dy),
                    (dy, dx), (dy, -dx), (-dy, dx), (-dy, -dx),
                ] {
                    assert_eq!(
                        fb.pixel(x0 + rx, y0 + ry),
                        Some(Color::White),
                        "pixel {},{} lit but reflection {},{} dark",
                        x, y, x0 + rx, y0 + ry,
                    );
                }
            }
        }
    }

    /// Filled rectangles light exactly width * height pixels when fully
    /// on the panel.
    #[test]
    fn filled_rect_pixel_count(
        x in 0i16..100, y in 0i16..50, w in 1i16..=28, h in 1i16..=14,
    ) {
        let mut fb = Framebuffer::new();
        fb.draw_filled_rect(x, y, w, h, Color::White);

        let set: usize = fb.data().iter().map(|b| b.count_ones() as usize).sum();
        assert_eq!(set, w as usize * h as usize);
    }
}
