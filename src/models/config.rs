//! Widget configuration
//!
//! Accepted once at construction from a plain JS object. Nothing here is
//! validated: odd dimensions are handed to the host renderer as-is.

use serde::{Deserialize, Serialize};
use crate::renderers::layout::{FontMetrics, DEFAULT_CHAR_WIDTH, DEFAULT_LINE_HEIGHT};

/// Default caret border color
pub const DEFAULT_CARET_COLOR: &str = "orange";

/// Construction options for the editor widget
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Outer container width in px (None = host auto-sizing)
    pub width: Option<f64>,

    /// Outer container height in px (None = host auto-sizing)
    pub height: Option<f64>,

    /// Caret border color (any CSS color)
    pub caret_color: String,

    /// Monospace cell width in px
    pub char_width: f64,

    /// Line height in px
    pub line_height: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            caret_color: DEFAULT_CARET_COLOR.to_string(),
            char_width: DEFAULT_CHAR_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

impl EditorConfig {
    pub fn metrics(&self) -> FontMetrics {
        FontMetrics::new(self.char_width, self.line_height)
    }

    /// CSS size for the outer scroll container
    pub fn container_style(&self) -> ContainerStyle {
        ContainerStyle {
            width: self.width.map(px),
            height: self.height.map(px),
        }
    }
}

/// Inline style values for the outer container; `None` leaves the property unset
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContainerStyle {
    pub width: Option<String>,
    pub height: Option<String>,
}

fn px(value: f64) -> String {
    format!("{}px", value)
}
