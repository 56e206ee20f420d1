//! Drawing front-end over a streaming display
//!
//! Every operation lowers to one `set_window` followed by exactly as many
//! `write_pixel` calls as the window holds. Nothing is buffered between
//! operations; pixels go straight to the display.
//!
//! # Stroke geometry
//!
//! A line of thickness `t` is a filled rectangle grown by `t / 2` on the
//! leading side and `t + 1` across, so a default 1-pixel hline of width
//! `w` covers `w + 2` pixels. The origin shift saturates at zero: a stroke
//! near the top-left edge is pinned to the edge instead of wrapping to the
//! far end of the coordinate range.

mod text;

use crate::constants::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_THICKNESS};
use crate::display::Display;
use crate::font::Font;
use crate::utils::Rgb565;

pub use text::Align;

pub struct Canvas<'a, D: Display> {
    display: &'a mut D,
    font: &'a Font,
    foreground: Rgb565,
    background: Rgb565,
    thickness: u8,
}

impl<'a, D: Display> Canvas<'a, D> {
    /// Attach to a display with white-on-black colors and 1-pixel strokes.
    pub fn new(display: &'a mut D, font: &'a Font) -> Self {
        Self {
            display,
            font,
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
            thickness: DEFAULT_THICKNESS,
        }
    }

    pub fn set_font(&mut self, font: &'a Font) {
        self.font = font;
    }

    pub fn set_foreground(&mut self, color: Rgb565) {
        self.foreground = color;
    }

    pub fn set_background(&mut self, color: Rgb565) {
        self.background = color;
    }

    /// Any value is accepted; see the module docs for edge behavior.
    pub fn set_thickness(&mut self, thickness: u8) {
        self.thickness = thickness;
    }

    pub fn font(&self) -> &'a Font {
        self.font
    }

    pub fn foreground(&self) -> Rgb565 {
        self.foreground
    }

    pub fn background(&self) -> Rgb565 {
        self.background
    }

    pub fn thickness(&self) -> u8 {
        self.thickness
    }

    pub fn display(&self) -> &D {
        &*self.display
    }

    /// Character grid extents of the display for the active font.
    pub fn columns(&self) -> u16 {
        self.display.width() / self.font.glyph_width() as u16
    }

    pub fn rows(&self) -> u16 {
        self.display.height() / self.font.glyph_height() as u16
    }

    /// Fill `w × h` pixels at `(x, y)` with `color`.
    pub fn fill_rectangle(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565) {
        self.display.set_window(x, y, w, h);
        self.display.write_pixels(color, w as u32 * h as u32);
    }

    /// Fill the whole display.
    pub fn clear(&mut self, color: Rgb565) {
        let w = self.display.width();
        let h = self.display.height();
        self.fill_rectangle(0, 0, w, h, color);
    }

    /// Horizontal stroke of nominal length `w` in the foreground color.
    pub fn draw_hline(&mut self, x: u16, y: u16, w: u16) {
        let (x, y, span, across) = self.stroke(x, y, w);
        self.fill_rectangle(x, y, span, across, self.foreground);
    }

    /// Vertical stroke of nominal length `h` in the foreground color.
    pub fn draw_vline(&mut self, x: u16, y: u16, h: u16) {
        let (x, y, span, across) = self.stroke(x, y, h);
        self.fill_rectangle(x, y, across, span, self.foreground);
    }

    /// Outline of a `w × h` box using the current stroke.
    pub fn draw_rectangle(&mut self, x: u16, y: u16, w: u16, h: u16) {
        self.draw_hline(x, y, w);
        self.draw_hline(x, y.saturating_add(h), w);
        self.draw_vline(x, y, h);
        self.draw_vline(x.saturating_add(w), y, h);
    }

    /// Origin and extents of a stroke: `(x, y, length extent, cross extent)`.
    fn stroke(&self, x: u16, y: u16, length: u16) -> (u16, u16, u16, u16) {
        let t = self.thickness as u16;
        let half = t / 2;
        (
            x.saturating_sub(half),
            y.saturating_sub(half),
            length.saturating_add(t + 1),
            t + 1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DisplayOp, RecordingDisplay, Window};
    use crate::font::MONO_6X8;

    #[test]
    fn test_new_defaults() {
        let mut disp = RecordingDisplay::new(160, 128);
        let canvas = Canvas::new(&mut disp, &MONO_6X8);
        assert_eq!(canvas.foreground(), Rgb565::WHITE);
        assert_eq!(canvas.background(), Rgb565::BLACK);
        assert_eq!(canvas.thickness(), 1);
        assert_eq!(canvas.columns(), 26);
        assert_eq!(canvas.rows(), 16);
        assert!(canvas.display().ops().is_empty());
    }

    #[test]
    fn test_setters_do_not_touch_display() {
        let mut disp = RecordingDisplay::new(160, 128);
        let mut canvas = Canvas::new(&mut disp, &MONO_6X8);
        canvas.set_foreground(Rgb565::RED);
        canvas.set_background(Rgb565::DARKGREY);
        canvas.set_thickness(200);
        canvas.set_font(&MONO_6X8);
        assert_eq!(canvas.foreground(), Rgb565::RED);
        assert_eq!(canvas.background(), Rgb565::DARKGREY);
        assert_eq!(canvas.thickness(), 200);
        assert!(canvas.display().ops().is_empty());
    }

    #[test]
    fn test_fill_rectangle() {
        let mut disp = RecordingDisplay::new(160, 128);
        Canvas::new(&mut disp, &MONO_6X8).fill_rectangle(3, 4, 5, 2, Rgb565::RED);

        let ops = disp.ops();
        assert_eq!(ops.len(), 11);
        assert_eq!(ops[0], DisplayOp::SetWindow(Window::new(3, 4, 5, 2)));
        assert!(ops[1..].iter().all(|op| *op == DisplayOp::Pixel(Rgb565::RED)));
    }

    #[test]
    fn test_fill_empty_rectangle_only_sets_window() {
        let mut disp = RecordingDisplay::new(160, 128);
        Canvas::new(&mut disp, &MONO_6X8).fill_rectangle(3, 4, 0, 9, Rgb565::RED);
        assert_eq!(disp.ops(), &[DisplayOp::SetWindow(Window::new(3, 4, 0, 9))]);
    }

    #[test]
    fn test_clear_covers_display() {
        let mut disp = RecordingDisplay::new(16, 8);
        Canvas::new(&mut disp, &MONO_6X8).clear(Rgb565::DARKGREY);
        assert_eq!(disp.windows(), vec![Window::new(0, 0, 16, 8)]);
        assert_eq!(disp.pixels().len(), 128);
    }

    #[test]
    fn test_line_geometry() {
        // (thickness, hline window at (10, 20) length 7)
        let cases = [
            (0, Window::new(10, 20, 8, 1)),
            (1, Window::new(10, 20, 9, 2)),
            (2, Window::new(9, 19, 10, 3)),
            (3, Window::new(9, 19, 11, 4)),
            (5, Window::new(8, 18, 13, 6)),
        ];
        for (t, expected) in cases {
            let mut disp = RecordingDisplay::new(160, 128);
            let mut canvas = Canvas::new(&mut disp, &MONO_6X8);
            canvas.set_thickness(t);
            canvas.draw_hline(10, 20, 7);
            canvas.draw_vline(10, 20, 7);
            let windows = disp.windows();
            assert_eq!(windows[0], expected, "hline thickness {}", t);
            assert_eq!(
                windows[1],
                Window::new(expected.x, expected.y, expected.h, expected.w),
                "vline thickness {}",
                t
            );
        }
    }

    #[test]
    fn test_line_uses_foreground() {
        let mut disp = RecordingDisplay::new(160, 128);
        let mut canvas = Canvas::new(&mut disp, &MONO_6X8);
        canvas.set_foreground(Rgb565::RED);
        canvas.draw_vline(0, 0, 3);
        assert!(disp.pixels().iter().all(|&p| p == Rgb565::RED));
        assert_eq!(disp.pixels().len(), 2 * 5);
    }

    #[test]
    fn test_line_origin_clamps_at_zero() {
        let mut disp = RecordingDisplay::new(160, 128);
        let mut canvas = Canvas::new(&mut disp, &MONO_6X8);
        canvas.set_thickness(4);
        canvas.draw_hline(0, 0, 10);
        canvas.draw_hline(1, 5, 10);
        assert_eq!(
            disp.windows(),
            vec![Window::new(0, 0, 15, 5), Window::new(0, 3, 15, 5)]
        );
    }

    #[test]
    fn test_line_extent_saturates() {
        let mut disp = RecordingDisplay::new(160, 128);
        let mut canvas = Canvas::new(&mut disp, &MONO_6X8);
        canvas.set_thickness(255);
        // Nominal length is taken as-is; only the extent is capped
        let (x, y, span, across) = canvas.stroke(200, 300, u16::MAX - 10);
        assert_eq!((x, y, span, across), (73, 173, u16::MAX, 256));
    }

    #[test]
    fn test_draw_rectangle_outline() {
        let mut disp = RecordingDisplay::new(160, 128);
        let mut canvas = Canvas::new(&mut disp, &MONO_6X8);
        canvas.set_thickness(0);
        canvas.draw_rectangle(2, 3, 10, 5);
        assert_eq!(
            disp.windows(),
            vec![
                Window::new(2, 3, 11, 1),
                Window::new(2, 8, 11, 1),
                Window::new(2, 3, 1, 6),
                Window::new(12, 3, 1, 6),
            ]
        );
    }
}
