//! Text rendering
//!
//! Text is streamed one glyph column at a time: each column is
//! `glyph_height` pixels, top row first, matching the display's
//! column-major cursor.

use log::debug;

use super::Canvas;
use crate::constants::MAX_GLYPH_PIXELS;
use crate::display::Display;
use crate::font::FontError;
use crate::utils::Rgb565;

/// Horizontal placement of text inside its window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// Decode a raw alignment code (0 = left, 1 = center, 2 = right).
    ///
    /// # Panics
    /// Panics on any other value: an unknown alignment is a caller bug.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Align::Left,
            1 => Align::Center,
            2 => Align::Right,
            _ => panic!("invalid text alignment {}", raw),
        }
    }

    /// Blank columns before the text. Text that does not fit is left aligned.
    pub fn left_padding(self, text_width: usize, window_width: usize) -> usize {
        if text_width >= window_width {
            return 0;
        }
        match self {
            Align::Left => 0,
            Align::Center => (window_width - text_width) / 2,
            Align::Right => window_width - text_width,
        }
    }
}

impl<D: Display> Canvas<'_, D> {
    /// Draw `text` in a `w × glyph_height` window at `(x, y)`.
    ///
    /// Exactly `w * glyph_height` pixels are streamed whatever the text
    /// length: padding and clipped glyph columns make up the difference.
    /// Every character is checked against the font before the window is
    /// declared, so an unsupported character leaves the display untouched.
    pub fn draw_text(&mut self, x: u16, y: u16, w: u16, align: Align, text: &str) -> Result<(), FontError> {
        let font = self.font;
        font.check_text(text)?;

        let height = font.glyph_height();
        let window_width = w as usize;
        let text_width = text.chars().count() * font.glyph_width() as usize;

        self.display.set_window(x, y, w, height as u16);

        let left_padding = align.left_padding(text_width, window_width);
        self.write_blank_columns(left_padding, height);
        let mut current = left_padding;

        'text: for c in text.chars() {
            // Checked above
            let glyph = font.glyph(c as u32)?;
            for &mask in glyph.columns() {
                if current >= window_width {
                    break 'text;
                }
                self.write_column(mask, height);
                current += 1;
            }
        }

        if text_width > window_width {
            debug!(
                "text {:?} clipped to {} of {} columns",
                text, window_width, text_width
            );
        }
        self.write_blank_columns(window_width - current, height);
        Ok(())
    }

    /// Draw one character in grid cell `(col, row)` of the active font.
    ///
    /// The glyph is expanded into a stack buffer first, then streamed
    /// into a window exactly one glyph in size.
    pub fn draw_char_cell(&mut self, col: u16, row: u16, ch: char) -> Result<(), FontError> {
        let font = self.font;
        let glyph = font.glyph(ch as u32)?;
        let width = font.glyph_width() as usize;
        let height = font.glyph_height() as usize;

        let mut pixels = [self.background; MAX_GLYPH_PIXELS];
        for (i, &mask) in glyph.columns().iter().enumerate() {
            for k in 0..height {
                if mask & (1 << k) != 0 {
                    pixels[i * height + k] = self.foreground;
                }
            }
        }

        self.display.set_window(
            col.saturating_mul(width as u16),
            row.saturating_mul(height as u16),
            width as u16,
            height as u16,
        );
        for &color in &pixels[..width * height] {
            self.display.write_pixel(color);
        }
        Ok(())
    }

    fn write_column(&mut self, mut mask: u8, height: u8) {
        for _ in 0..height {
            let color: Rgb565 = if mask & 0x01 != 0 {
                self.foreground
            } else {
                self.background
            };
            mask >>= 1;
            self.display.write_pixel(color);
        }
    }

    fn write_blank_columns(&mut self, columns: usize, height: u8) {
        self.display
            .write_pixels(self.background, columns as u32 * height as u32);
    }
}
