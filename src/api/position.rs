//! Position conversion functions
//!
//! Stateless exports for hosts that keep their own text and only need the
//! caret math: selection start → (line, column) → pixels.

use wasm_bindgen::prelude::*;
use js_sys::Array;
use crate::renderers::layout::{split_lines, to_pixels, FontMetrics};
use crate::text::{map_offset, utf16_to_char_offset, CursorPosition};
use super::helpers::serialize;

/// Map a DOM selection start (UTF-16 units) to `{ line, column }`
#[wasm_bindgen(js_name = mapSelection)]
pub fn map_selection(content: &str, selection_start: u32) -> Result<JsValue, JsValue> {
    let offset = utf16_to_char_offset(content, selection_start as usize);
    serialize(&map_offset(content, offset), "Failed to serialize cursor position")
}

/// Pixel position `{ top, left }` of a (line, column) caret
#[wasm_bindgen(js_name = cursorToPixels)]
pub fn cursor_to_pixels(
    line: usize,
    column: usize,
    char_width: f64,
    line_height: f64,
) -> Result<JsValue, JsValue> {
    let pixels = to_pixels(
        CursorPosition::new(line, column),
        FontMetrics::new(char_width, line_height),
    );
    serialize(&pixels, "Failed to serialize pixel position")
}

/// Display lines of `content` as a JS string array
#[wasm_bindgen(js_name = splitLines)]
pub fn split_lines_js(content: &str) -> Array {
    split_lines(content)
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}
