//! Cursor position mapping
//!
//! Converts the linear caret offset reported by the native input into a
//! (line, column) pair and back. Offsets and columns count `char`s, never
//! bytes. The DOM reports `selectionStart` in UTF-16 code units, so the
//! conversion helpers for that live here too.

use serde::{Deserialize, Serialize};

/// A caret position in text (line, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Create a position at the start of a line
    pub fn line_start(line: usize) -> Self {
        Self { line, column: 0 }
    }

    /// Create a position at (0, 0)
    pub fn zero() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Check the position addresses an existing line and a column inside it
    pub fn is_valid_for(&self, lines: &[&str]) -> bool {
        lines
            .get(self.line)
            .map(|text| self.column <= char_len(text))
            .unwrap_or(false)
    }
}

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Map a linear caret offset to a (line, column) pair.
///
/// Lines are walked in order with a running remainder. The first line whose
/// length is `>=` the remainder holds the caret, so an offset sitting right
/// before a newline reports the end of that line rather than the start of
/// the next one.
///
/// `offset` must be in `0..=char_len(content)`. Larger values resolve to the
/// end of the last line.
pub fn map_offset(content: &str, offset: usize) -> CursorPosition {
    let mut remaining = offset;
    let mut last = CursorPosition::zero();

    for (line, text) in content.split('\n').enumerate() {
        let len = char_len(text);
        if remaining <= len {
            return CursorPosition::new(line, remaining);
        }
        // The line's characters plus the newline that ends it
        remaining -= len + 1;
        last = CursorPosition::new(line, len);
    }

    log::warn!("offset {} past end of content, pinned to {:?}", offset, last);
    last
}

/// Inverse of [`map_offset`]: the linear offset of a (line, column) pair.
///
/// Lines past the end clamp to the content length; columns past the end of
/// their line clamp to the line end.
pub fn position_to_offset(content: &str, pos: CursorPosition) -> usize {
    let mut offset = 0;

    for (line, text) in content.split('\n').enumerate() {
        let len = char_len(text);
        if line == pos.line {
            return offset + pos.column.min(len);
        }
        offset += len + 1;
    }

    char_len(content)
}

/// Convert a UTF-16 code unit offset (DOM `selectionStart`) to a char offset.
///
/// An offset that lands inside a surrogate pair rounds down to the start of
/// that character.
pub fn utf16_to_char_offset(content: &str, utf16_offset: usize) -> usize {
    let mut units = 0;

    for (index, ch) in content.chars().enumerate() {
        units += ch.len_utf16();
        if units > utf16_offset {
            return index;
        }
    }

    char_len(content)
}

/// Convert a char offset to a UTF-16 code unit offset
pub fn char_to_utf16_offset(content: &str, char_offset: usize) -> usize {
    content
        .chars()
        .take(char_offset)
        .map(char::len_utf16)
        .sum()
}
