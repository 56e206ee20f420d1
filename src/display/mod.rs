//! Streaming display capability
//!
//! Display controllers on a narrow bus are driven in two steps: declare a
//! rectangular window, then stream exactly as many pixels as it holds.
//! The controller keeps an internal cursor that starts at the window's
//! top-left corner and runs down each column before moving one column
//! right (column-major).
//!
//! Only one caller may be mid-stream against a display at a time; the
//! `&mut` receiver on every method enforces that.

pub mod framebuffer;
pub mod recording;

use crate::utils::Rgb565;

pub use framebuffer::FrameBufferDisplay;
pub use recording::{DisplayOp, RecordingDisplay};

/// Axis-aligned write window in display coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Window {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Window {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Number of pixel writes the window accepts.
    pub const fn area(&self) -> u32 {
        self.w as u32 * self.h as u32
    }

    /// Display coordinates of the `index`-th pixel in scan order.
    ///
    /// Computed in `u32` so windows reaching past `u16::MAX` do not wrap.
    pub fn position(&self, index: u32) -> (u32, u32) {
        let h = self.h.max(1) as u32;
        (self.x as u32 + index / h, self.y as u32 + index % h)
    }
}

/// Pixel sink with a settable write window
pub trait Display {
    /// Declare the window for the following writes and reset the cursor
    /// to its top-left corner.
    fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16);

    /// Write one pixel at the cursor and advance it.
    ///
    /// Writing more pixels than the window holds is a protocol violation.
    fn write_pixel(&mut self, color: Rgb565);

    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Stream `count` copies of `color`.
    fn write_pixels(&mut self, color: Rgb565, count: u32) {
        for _ in 0..count {
            self.write_pixel(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_area() {
        assert_eq!(Window::new(0, 0, 20, 8).area(), 160);
        assert_eq!(Window::new(5, 5, 0, 8).area(), 0);
        assert_eq!(Window::new(0, 0, u16::MAX, u16::MAX).area(), 65535 * 65535);
    }

    #[test]
    fn test_window_position_is_column_major() {
        let win = Window::new(10, 20, 3, 2);
        assert_eq!(win.position(0), (10, 20));
        assert_eq!(win.position(1), (10, 21));
        assert_eq!(win.position(2), (11, 20));
        assert_eq!(win.position(5), (12, 21));
    }
}
