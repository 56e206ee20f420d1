//! Utility functions shared across tftcanvas
//!
//! Common helpers that don't fit in specialized modules.

pub mod color;

pub use color::{parse_hex_color, Rgb565};
