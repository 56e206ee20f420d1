//! tftcanvas - streaming 2D canvas for small TFT panels
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Canvas (fill / line / text / state)     │
//! │        ↓                    ↓            │
//! │  Display (window + pixel stream)   Font  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The canvas keeps no frame buffer: each drawing call declares a window
//! on the display and streams exactly the pixels that window holds.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod display;
pub mod font;
pub mod utils;

pub use canvas::{Align, Canvas};
pub use display::{Display, FrameBufferDisplay, RecordingDisplay, Window};
pub use font::{Font, FontError, MONO_6X8};
pub use utils::Rgb565;
