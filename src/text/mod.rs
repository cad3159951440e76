//! Text core
//!
//! Pure text state with no knowledge of pixels or the DOM.
//!
//! ## Modules
//!
//! - `buffer`: Content + caret offset, updated only by native input reports
//! - `cursor`: Offset ↔ (line, column) mapping and UTF-16 conversion

pub mod buffer;
pub mod cursor;

// Re-exports for convenience
pub use buffer::{BufferUpdate, TextBuffer};
pub use cursor::{
    char_len, char_to_utf16_offset, map_offset, position_to_offset, utf16_to_char_offset,
    CursorPosition,
};
