//! Text buffer implementation
//!
//! Flat string storage plus the linear caret offset. The native input is
//! the only writer; everything else reads.

use super::cursor::{char_len, map_offset, CursorPosition};
use serde::{Deserialize, Serialize};

/// A single write reported by the native input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BufferUpdate {
    /// The text changed; carries the full new text and the caret after the edit
    Content { text: String, offset: usize },
    /// The caret moved without a text change
    Selection(usize),
}

/// Content and caret offset of the widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBuffer {
    content: String,
    offset: usize,
}

impl TextBuffer {
    /// Create a new empty buffer with the caret at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from a string, caret at the end
    pub fn from_text(text: &str) -> Self {
        Self {
            content: text.to_string(),
            offset: char_len(text),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the content in chars
    pub fn len(&self) -> usize {
        char_len(&self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Lines of the content, split on `\n`
    pub fn lines(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }

    /// Current caret as (line, column), derived on every call
    pub fn cursor_position(&self) -> CursorPosition {
        map_offset(&self.content, self.offset)
    }

    /// Apply one update as a single state transition.
    ///
    /// Text and offset are assigned together so readers never see a new text
    /// with a stale offset. Returns `true` when anything changed.
    pub fn apply(&mut self, update: BufferUpdate) -> bool {
        match update {
            BufferUpdate::Content { text, offset } => {
                let offset = clamp_offset(&text, offset);
                let changed = self.content != text || self.offset != offset;
                self.content = text;
                self.offset = offset;
                changed
            }
            BufferUpdate::Selection(offset) => {
                let offset = clamp_offset(&self.content, offset);
                if self.offset == offset {
                    return false;
                }
                self.offset = offset;
                true
            }
        }
    }
}

/// Keep `0 <= offset <= len` even if a host misreports the selection
fn clamp_offset(text: &str, offset: usize) -> usize {
    let len = char_len(text);
    if offset > len {
        log::warn!("selection {} beyond content length {}, clamping", offset, len);
        len
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.offset(), 0);
        assert_eq!(buffer.lines(), vec![""]);
        assert_eq!(buffer.cursor_position(), CursorPosition::zero());
    }

    #[test]
    fn test_from_text_places_caret_at_end() {
        let buffer = TextBuffer::from_text("ab\ncd");
        assert_eq!(buffer.offset(), 5);
        assert_eq!(buffer.cursor_position(), CursorPosition::new(1, 2));
    }

    #[test]
    fn test_content_update_sets_text_and_offset_together() {
        let mut buffer = TextBuffer::new();
        assert!(buffer.apply(BufferUpdate::Content {
            text: "hello\nworld".to_string(),
            offset: 7,
        }));
        assert_eq!(buffer.content(), "hello\nworld");
        assert_eq!(buffer.offset(), 7);
        assert_eq!(buffer.cursor_position(), CursorPosition::new(1, 1));
    }

    #[test]
    fn test_selection_update_only_moves_caret() {
        let mut buffer = TextBuffer::from_text("abc");
        assert!(buffer.apply(BufferUpdate::Selection(1)));
        assert_eq!(buffer.content(), "abc");
        assert_eq!(buffer.offset(), 1);

        // Same offset again is not a change
        assert!(!buffer.apply(BufferUpdate::Selection(1)));
    }

    #[test]
    fn test_out_of_range_offset_is_clamped() {
        let mut buffer = TextBuffer::new();
        buffer.apply(BufferUpdate::Content {
            text: "ab".to_string(),
            offset: 10,
        });
        assert_eq!(buffer.offset(), 2);

        buffer.apply(BufferUpdate::Selection(99));
        assert_eq!(buffer.offset(), 2);
    }

    #[test]
    fn test_lines_join_back_to_content() {
        let buffer = TextBuffer::from_text("a\n\nb\n");
        assert_eq!(buffer.lines(), vec!["a", "", "b", ""]);
        assert_eq!(buffer.lines().join("\n"), buffer.content());
    }
}
