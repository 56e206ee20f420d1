//! Monospaced bitmap fonts
//!
//! A font is a static table of glyph columns. Each column is one byte:
//! bit 0 is the top row, bit `height - 1` the bottom row. Glyphs are stored
//! back to back starting at `first_char`, `width` bytes per glyph.

mod mono6x8;

use thiserror::Error;

use crate::constants::{MAX_GLYPH_HEIGHT, MAX_GLYPH_WIDTH};

pub use mono6x8::MONO_6X8;

/// Font lookup and construction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("character {code:#x} is not in the font table")]
    UnsupportedCharacter { code: u32 },
    #[error("column {column} out of range for glyph width {width}")]
    ColumnOutOfRange { column: u8, width: u8 },
    #[error("invalid glyph size {width}x{height}")]
    InvalidGlyphSize { width: u8, height: u8 },
    #[error("glyph table of {len} bytes is not a whole number of {width}-column glyphs")]
    InvalidTableLength { len: usize, width: u8 },
    #[error("glyph table overruns the character range")]
    TableTooLarge,
}

/// Immutable monospaced glyph table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    width: u8,
    height: u8,
    first_char: u8,
    char_count: u16,
    data: &'static [u8],
}

impl Font {
    /// Build a font over a static glyph table.
    pub fn new(width: u8, height: u8, first_char: u8, data: &'static [u8]) -> Result<Self, FontError> {
        if width == 0
            || height == 0
            || width as usize > MAX_GLYPH_WIDTH
            || height as usize > MAX_GLYPH_HEIGHT
        {
            return Err(FontError::InvalidGlyphSize { width, height });
        }
        if data.is_empty() || data.len() % width as usize != 0 {
            return Err(FontError::InvalidTableLength {
                len: data.len(),
                width,
            });
        }
        let char_count = data.len() / width as usize;
        if first_char as usize + char_count > 256 {
            return Err(FontError::TableTooLarge);
        }
        Ok(Self {
            width,
            height,
            first_char,
            char_count: char_count as u16,
            data,
        })
    }

    /// Constructor for tables known to be well formed at compile time.
    const fn from_static(width: u8, height: u8, first_char: u8, data: &'static [u8]) -> Self {
        Self {
            width,
            height,
            first_char,
            char_count: (data.len() / width as usize) as u16,
            data,
        }
    }

    #[inline]
    pub fn glyph_width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn glyph_height(&self) -> u8 {
        self.height
    }

    pub fn first_char(&self) -> u8 {
        self.first_char
    }

    pub fn last_char(&self) -> u8 {
        (self.first_char as u16 + self.char_count - 1) as u8
    }

    /// True if `code` has a glyph in this table.
    pub fn contains(&self, code: u32) -> bool {
        let first = self.first_char as u32;
        code >= first && code - first < self.char_count as u32
    }

    /// Look up the glyph for a character code.
    pub fn glyph(&self, code: u32) -> Result<Glyph<'_>, FontError> {
        if !self.contains(code) {
            return Err(FontError::UnsupportedCharacter { code });
        }
        let start = (code - self.first_char as u32) as usize * self.width as usize;
        Ok(Glyph {
            columns: &self.data[start..start + self.width as usize],
        })
    }

    /// Column mask of one glyph column; bit 0 is the top row.
    pub fn read_column(&self, code: u8, column: u8) -> Result<u8, FontError> {
        if column >= self.width {
            return Err(FontError::ColumnOutOfRange {
                column,
                width: self.width,
            });
        }
        Ok(self.glyph(code as u32)?.column(column))
    }

    /// Check that every character of `text` has a glyph.
    pub fn check_text(&self, text: &str) -> Result<(), FontError> {
        text.chars().try_for_each(|c| self.glyph(c as u32).map(|_| ()))
    }
}

/// Borrowed view of one glyph's columns
#[derive(Debug, Clone, Copy)]
pub struct Glyph<'a> {
    columns: &'a [u8],
}

impl Glyph<'_> {
    /// # Panics
    /// Panics if `index` is not below the glyph width.
    #[inline]
    pub fn column(&self, index: u8) -> u8 {
        self.columns[index as usize]
    }

    pub fn columns(&self) -> &[u8] {
        self.columns
    }
}
