//! Editor WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and serde-wasm-bindgen wrappers
//! - `editor`: the stateful `TextEditor` handle driven by textarea events
//! - `position`: stateless caret math exports

pub mod helpers;
pub mod editor;
pub mod position;

pub use editor::{BoundSurface, TextEditor};
pub use position::{cursor_to_pixels, map_selection, split_lines_js};
