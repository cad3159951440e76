//! Layout calculation for the monospace text grid
//!
//! Every glyph occupies one cell of `char_width` x `line_height`, so a caret
//! position maps to pixels by plain multiplication.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use crate::text::CursorPosition;

/// Default monospace cell width in px
pub const DEFAULT_CHAR_WIDTH: f64 = 9.6;

/// Default line height in px
pub const DEFAULT_LINE_HEIGHT: f64 = 24.0;

/// Fixed per-widget font metrics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontMetrics {
    /// Width of one character cell (W)
    pub char_width: f64,
    /// Height of one line (H)
    pub line_height: f64,
}

impl FontMetrics {
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_WIDTH, DEFAULT_LINE_HEIGHT)
    }
}

/// Top-left corner in px, relative to the text grid origin
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPosition {
    pub top: f64,
    pub left: f64,
}

/// Pixel position of a caret: `(H * line, W * column)`, unrounded
pub fn to_pixels(pos: CursorPosition, metrics: FontMetrics) -> PixelPosition {
    PixelPosition {
        top: metrics.line_height * pos.line as f64,
        left: metrics.char_width * pos.column as f64,
    }
}

/// Display lines of `content`, in document order.
///
/// Derived fresh on every call; joining the result with `\n` gives back
/// `content` exactly.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// 1-based line numbers for the gutter
pub fn line_numbers(line_count: usize) -> RangeInclusive<usize> {
    1..=line_count
}
