//! Global constants for tftcanvas
//!
//! Display, font and stroke defaults shared by the library and the simulator.

use crate::utils::Rgb565;

// ============================================================================
// Display
// ============================================================================

/// Default panel width in pixels (ST7735-class panel, landscape)
pub const DEFAULT_DISPLAY_WIDTH: u16 = 160;

/// Default panel height in pixels
pub const DEFAULT_DISPLAY_HEIGHT: u16 = 128;

// ============================================================================
// Canvas
// ============================================================================

/// Foreground color after `Canvas::new`
pub const DEFAULT_FOREGROUND: Rgb565 = Rgb565::WHITE;

/// Background color after `Canvas::new`
pub const DEFAULT_BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Stroke thickness after `Canvas::new`
pub const DEFAULT_THICKNESS: u8 = 1;

// ============================================================================
// Fonts
// ============================================================================

/// Widest glyph a `Font` may describe
pub const MAX_GLYPH_WIDTH: usize = 16;

/// Tallest glyph a `Font` may describe (one column mask is a byte)
pub const MAX_GLYPH_HEIGHT: usize = 8;

/// Capacity of the per-glyph pixel buffer used by cell rendering
pub const MAX_GLYPH_PIXELS: usize = MAX_GLYPH_WIDTH * MAX_GLYPH_HEIGHT;

// ============================================================================
// Simulator output
// ============================================================================

/// Default upscale factor for PNG export
pub const DEFAULT_OUTPUT_SCALE: u32 = 4;

/// Largest accepted upscale factor
pub const MAX_OUTPUT_SCALE: u32 = 16;
