//! Display List for the editor overlay
//!
//! This module defines the output structure returned to JavaScript. The
//! DisplayList carries every pre-calculated position, size and class the
//! host needs to paint the gutter, the text grid, the caret and to anchor
//! the hidden textarea, without doing any layout itself.

use serde::{Deserialize, Serialize};
use crate::models::{ContainerStyle, EditorConfig, EditorState, FocusState};
use super::layout::{line_numbers, split_lines, to_pixels, FontMetrics, PixelPosition};

/// Caret opacity while the native input has focus
pub const ACTIVE_OPACITY: f64 = 1.0;

/// Caret opacity while unfocused
pub const DIMMED_OPACITY: f64 = 0.3;

/// Top-level display list for one render pass
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    /// Outer container size
    pub container: ContainerStyle,

    /// Text rows in document order
    pub lines: Vec<RenderLine>,

    /// Gutter numbers, one per line, starting at 1
    pub line_numbers: Vec<usize>,

    /// Row height shared by gutter and text rows
    pub line_height: f64,

    /// Visible caret marker
    pub caret: CaretIndicator,

    /// Where the hidden textarea sits; always equal to the caret position
    pub input_anchor: PixelPosition,
}

/// A single text row
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderLine {
    /// Line index for identification
    pub line_index: usize,

    /// Line text without the trailing newline
    pub text: String,

    /// Y position (top edge)
    pub top: f64,
}

/// Caret marker derived from the cursor position and focus
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaretIndicator {
    pub top: f64,
    pub left: f64,

    /// One character cell high
    pub height: f64,

    pub border_color: String,

    /// ACTIVE_OPACITY when focused, DIMMED_OPACITY otherwise
    pub opacity: f64,

    /// Pulse animation runs in both focus states
    pub pulsing: bool,

    /// CSS class names to apply
    pub classes: Vec<String>,
}

impl CaretIndicator {
    pub fn new(position: PixelPosition, metrics: FontMetrics, color: &str, focus: FocusState) -> Self {
        let (opacity, emphasis) = if focus.is_focused() {
            (ACTIVE_OPACITY, "caret-active")
        } else {
            (DIMMED_OPACITY, "caret-dimmed")
        };

        Self {
            top: position.top,
            left: position.left,
            height: metrics.line_height,
            border_color: color.to_string(),
            opacity,
            pulsing: true,
            classes: vec!["caret".to_string(), emphasis.to_string(), "caret-pulse".to_string()],
        }
    }

    pub fn position(&self) -> PixelPosition {
        PixelPosition {
            top: self.top,
            left: self.left,
        }
    }
}

impl DisplayList {
    /// Derive a full display list from the current state.
    ///
    /// Lines and the caret position are recomputed from content and offset on
    /// every call; nothing is carried over from the previous render.
    pub fn build(state: &EditorState, config: &EditorConfig) -> Self {
        let metrics = config.metrics();
        let lines: Vec<RenderLine> = split_lines(state.content())
            .into_iter()
            .enumerate()
            .map(|(line_index, text)| RenderLine {
                line_index,
                text: text.to_string(),
                top: metrics.line_height * line_index as f64,
            })
            .collect();

        let cursor = state.cursor();
        let position = to_pixels(cursor, metrics);
        log::trace!("caret at {:?} -> {:?}", cursor, position);

        Self {
            container: config.container_style(),
            line_numbers: line_numbers(lines.len()).collect(),
            lines,
            line_height: metrics.line_height,
            caret: CaretIndicator::new(position, metrics, &config.caret_color, state.focus),
            input_anchor: position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::BufferUpdate;

    fn state_with(text: &str, offset: usize) -> EditorState {
        let mut state = EditorState::new();
        state.apply(BufferUpdate::Content {
            text: text.to_string(),
            offset,
        });
        state
    }

    #[test]
    fn test_empty_state_renders_one_line() {
        let list = DisplayList::build(&EditorState::new(), &EditorConfig::default());
        assert_eq!(list.lines.len(), 1);
        assert_eq!(list.lines[0].text, "");
        assert_eq!(list.line_numbers, vec![1]);
        assert_eq!(list.caret.position(), PixelPosition::default());
    }

    #[test]
    fn test_caret_and_anchor_follow_cursor() {
        let list = DisplayList::build(&state_with("ab\ncd", 5), &EditorConfig::default());
        assert_eq!(list.caret.top, 24.0);
        assert_eq!(list.caret.left, 19.2);
        assert_eq!(list.input_anchor, list.caret.position());
        assert_eq!(list.caret.height, 24.0);
    }

    #[test]
    fn test_rows_and_gutter() {
        let list = DisplayList::build(&state_with("a\nb\n", 0), &EditorConfig::default());
        let texts: Vec<&str> = list.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", ""]);
        assert_eq!(list.line_numbers, vec![1, 2, 3]);
        assert_eq!(list.lines[2].top, 48.0);
    }

    #[test]
    fn test_caret_opacity_tracks_focus() {
        let config = EditorConfig::default();
        let mut state = state_with("x", 1);

        let dimmed = DisplayList::build(&state, &config).caret;
        assert_eq!(dimmed.opacity, DIMMED_OPACITY);
        assert!(dimmed.pulsing);
        assert!(dimmed.classes.contains(&"caret-dimmed".to_string()));

        state.set_focus(FocusState::Focused);
        let active = DisplayList::build(&state, &config).caret;
        assert_eq!(active.opacity, ACTIVE_OPACITY);
        assert!(active.pulsing);
        assert_eq!(active.position(), dimmed.position());
    }

    #[test]
    fn test_caret_color_from_config() {
        let config = EditorConfig {
            caret_color: "#0af".to_string(),
            ..Default::default()
        };
        let list = DisplayList::build(&EditorState::new(), &config);
        assert_eq!(list.caret.border_color, "#0af");
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let list = DisplayList::build(&state_with("hi", 1), &EditorConfig::default());
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.get("inputAnchor").is_some());
        assert!(json["caret"].get("borderColor").is_some());
        assert_eq!(json["lines"][0]["lineIndex"], 0);
    }
}
