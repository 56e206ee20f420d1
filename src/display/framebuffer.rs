//! In-memory display controller
//!
//! Simulates the window/cursor protocol of a streaming TFT controller on
//! top of a plain pixel buffer, so canvas output can be inspected or
//! exported without hardware.

use log::{debug, trace};

use super::{Display, Window};
use crate::utils::Rgb565;

pub struct FrameBufferDisplay {
    width: u16,
    height: u16,
    pixels: Vec<Rgb565>,
    window: Option<Window>,
    /// Pixels already streamed into the current window
    written: u32,
    /// Writes that landed outside the panel since the last window
    discarded: u32,
}

impl FrameBufferDisplay {
    /// Create a panel of `width × height` pixels, initially black.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width as usize * height as usize],
            window: None,
            written: 0,
            discarded: 0,
        }
    }

    /// Color at `(x, y)`, or `None` outside the panel.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    pub fn window(&self) -> Option<Window> {
        self.window
    }

    /// Pixels the current window still expects.
    pub fn remaining(&self) -> u32 {
        self.window
            .map(|win| win.area() - self.written)
            .unwrap_or(0)
    }

    /// Expand to RGBA8 rows, each panel pixel scaled to a `scale × scale` block.
    pub fn to_rgba8(&self, scale: u32) -> Vec<u8> {
        let scale = scale.max(1) as usize;
        let out_w = self.width as usize * scale;
        let out_h = self.height as usize * scale;
        let mut out = vec![0u8; out_w * out_h * 4];
        for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
            let x = (i % out_w) / scale;
            let y = (i / out_w) / scale;
            let (r, g, b) = self.pixels[y * self.width as usize + x].to_rgb888();
            chunk.copy_from_slice(&[r, g, b, 0xFF]);
        }
        out
    }
}

impl Display for FrameBufferDisplay {
    fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) {
        if self.remaining() > 0 {
            debug!(
                "window {:?} replaced with {} pixels unwritten",
                self.window,
                self.remaining()
            );
        }
        if self.discarded > 0 {
            trace!("{} pixels fell outside the panel", self.discarded);
        }
        self.window = Some(Window::new(x, y, w, h));
        self.written = 0;
        self.discarded = 0;
    }

    /// # Panics
    /// Panics when no window is declared or the window is already full;
    /// a real controller would desynchronize at this point.
    fn write_pixel(&mut self, color: Rgb565) {
        let win = match self.window {
            Some(win) => win,
            None => panic!("pixel written before any window was declared"),
        };
        if self.written >= win.area() {
            panic!("pixel write past the end of window {:?}", win);
        }
        let (x, y) = win.position(self.written);
        self.written += 1;

        if x < self.width as u32 && y < self.height as u32 {
            self.pixels[y as usize * self.width as usize + x as usize] = color;
        } else {
            self.discarded += 1;
        }
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_is_column_major() {
        let mut disp = FrameBufferDisplay::new(4, 4);
        disp.set_window(1, 1, 2, 2);
        disp.write_pixel(Rgb565::RED);
        disp.write_pixel(Rgb565::WHITE);
        assert_eq!(disp.remaining(), 2);
        disp.write_pixel(Rgb565::DARKGREY);
        disp.write_pixel(Rgb565::WHITE);
        assert_eq!(disp.remaining(), 0);

        assert_eq!(disp.pixel(1, 1), Some(Rgb565::RED));
        assert_eq!(disp.pixel(1, 2), Some(Rgb565::WHITE));
        assert_eq!(disp.pixel(2, 1), Some(Rgb565::DARKGREY));
        assert_eq!(disp.pixel(2, 2), Some(Rgb565::WHITE));
        assert_eq!(disp.pixel(0, 0), Some(Rgb565::BLACK));
        assert_eq!(disp.pixel(4, 0), None);
    }

    #[test]
    fn test_offscreen_pixels_are_discarded() {
        let mut disp = FrameBufferDisplay::new(2, 2);
        disp.set_window(1, 1, 2, 2);
        disp.write_pixels(Rgb565::WHITE, 4);
        assert_eq!(disp.pixel(1, 1), Some(Rgb565::WHITE));
        assert_eq!(disp.pixels().iter().filter(|&&p| p == Rgb565::WHITE).count(), 1);
    }

    #[test]
    #[should_panic(expected = "past the end of window")]
    fn test_overflowing_window_panics() {
        let mut disp = FrameBufferDisplay::new(4, 4);
        disp.set_window(0, 0, 1, 2);
        disp.write_pixels(Rgb565::WHITE, 3);
    }

    #[test]
    #[should_panic(expected = "before any window")]
    fn test_write_without_window_panics() {
        let mut disp = FrameBufferDisplay::new(4, 4);
        disp.write_pixel(Rgb565::WHITE);
    }

    #[test]
    fn test_to_rgba8_scales() {
        let mut disp = FrameBufferDisplay::new(2, 1);
        disp.set_window(1, 0, 1, 1);
        disp.write_pixel(Rgb565::WHITE);
        let rgba = disp.to_rgba8(2);
        // 4x2 output, row 0: black black white white
        assert_eq!(rgba.len(), 4 * 2 * 4);
        assert_eq!(&rgba[0..4], &[0, 0, 0, 0xFF]);
        assert_eq!(&rgba[8..12], &[255, 255, 255, 0xFF]);
        assert_eq!(&rgba[28..32], &[255, 255, 255, 0xFF]);
    }
}
