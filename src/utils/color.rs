//! Color parsing and RGB565 packing
//!
//! The display controller takes 16-bit RGB565 words. Configuration and
//! image export work in RGB888, so conversions in both directions live here.

/// Packed 16-bit color in the display's native encoding (5-6-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565::from_rgb888(0x000000);
    pub const WHITE: Rgb565 = Rgb565::from_rgb888(0xFFFFFF);
    pub const DARKGREY: Rgb565 = Rgb565::from_rgb888(0xA9A9A9);
    pub const RED: Rgb565 = Rgb565::from_rgb888(0xFF0000);

    /// Pack a 0xRRGGBB value, dropping the low bits of each channel.
    pub const fn from_rgb888(rgb: u32) -> Self {
        let r = ((rgb >> 16) & 0xFF) as u16;
        let g = ((rgb >> 8) & 0xFF) as u16;
        let b = (rgb & 0xFF) as u16;
        Rgb565(((r & 0xF8) << 8) | ((g & 0xFC) << 3) | (b >> 3))
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb888(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Expand back to 8-bit channels.
    ///
    /// The high bits are replicated into the low bits so that full-scale
    /// channels map back to 255.
    pub fn to_rgb888(self) -> (u8, u8, u8) {
        let r5 = ((self.0 >> 11) & 0x1F) as u8;
        let g6 = ((self.0 >> 5) & 0x3F) as u8;
        let b5 = (self.0 & 0x1F) as u8;
        ((r5 << 3) | (r5 >> 2), (g6 << 2) | (g6 >> 4), (b5 << 3) | (b5 >> 2))
    }

    /// Parse "RRGGBB", "#RRGGBB" or the short "RGB" form.
    pub fn from_hex(hex: &str) -> Option<Self> {
        parse_hex_color(hex).map(|(r, g, b)| Self::from_rgb(r, g, b))
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Parse 6-digit hex color (e.g., "ff0000" -> (255, 0, 0))
/// Also supports 3-digit short format (e.g., "f00" -> (255, 0, 0))
/// Returns None on invalid input.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            // Short format: expand F -> FF
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some((r, g, b))
        }
        _ => None,
    }
}
