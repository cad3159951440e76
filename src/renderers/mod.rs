//! Rendering for the editor overlay
//!
//! - `layout`: monospace grid math (caret → pixels, line splitting)
//! - `display_list`: the paint-ready structure handed to JavaScript

pub mod display_list;
pub mod layout;

pub use display_list::{CaretIndicator, DisplayList, RenderLine, ACTIVE_OPACITY, DIMMED_OPACITY};
pub use layout::{line_numbers, split_lines, to_pixels, FontMetrics, PixelPosition};
