//! Overlay Textarea WASM Module
//!
//! Core of a plain-text editing widget that paints its own line grid and
//! caret over a hidden native `<textarea>`. The textarea does the real
//! editing; this crate keeps the painted caret, the text rows and the
//! textarea's position in agreement.

pub mod error;
pub mod text;
pub mod models;
pub mod renderers;
pub mod host;
pub mod widget;
pub mod api;

// Re-export commonly used types
pub use error::EditorError;
pub use models::{EditorConfig, EditorState, FocusState};
pub use renderers::{DisplayList, FontMetrics, PixelPosition};
pub use text::{map_offset, CursorPosition, TextBuffer};
pub use widget::TextEditorWidget;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Err only when a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Overlay textarea WASM module initialized");
}
