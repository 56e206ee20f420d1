//! Display fake that records every bus call
//!
//! Tests drive a `Canvas` against this and compare the exact sequence of
//! window declarations and pixel writes.

use super::{Display, Window};
use crate::utils::Rgb565;

/// One call made against the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOp {
    SetWindow(Window),
    Pixel(Rgb565),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    width: u16,
    height: u16,
    ops: Vec<DisplayOp>,
}

impl RecordingDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<DisplayOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn windows(&self) -> Vec<Window> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DisplayOp::SetWindow(win) => Some(*win),
                DisplayOp::Pixel(_) => None,
            })
            .collect()
    }

    pub fn pixels(&self) -> Vec<Rgb565> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DisplayOp::Pixel(color) => Some(*color),
                DisplayOp::SetWindow(_) => None,
            })
            .collect()
    }

    /// Pixel writes grouped under the window they were streamed into.
    pub fn runs(&self) -> Vec<(Window, Vec<Rgb565>)> {
        let mut runs: Vec<(Window, Vec<Rgb565>)> = Vec::new();
        for op in &self.ops {
            match op {
                DisplayOp::SetWindow(win) => runs.push((*win, Vec::new())),
                DisplayOp::Pixel(color) => {
                    if let Some((_, pixels)) = runs.last_mut() {
                        pixels.push(*color);
                    }
                }
            }
        }
        runs
    }
}

impl Display for RecordingDisplay {
    fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) {
        self.ops.push(DisplayOp::SetWindow(Window::new(x, y, w, h)));
    }

    fn write_pixel(&mut self, color: Rgb565) {
        self.ops.push(DisplayOp::Pixel(color));
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}
