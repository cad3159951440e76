//! Editor state management
//!
//! This module contains the EditorState struct: the widget-owned record of
//! content, caret offset and focus. Handlers in `widget` are its only
//! writers. Line/column and pixel positions are never stored here.

use serde::{Deserialize, Serialize};
use crate::text::{BufferUpdate, CursorPosition, TextBuffer};

/// Whether the hidden native input currently has keyboard focus
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused,
}

impl FocusState {
    pub fn is_focused(self) -> bool {
        self == FocusState::Focused
    }
}

/// Complete widget state (single source of truth)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    /// Content and caret offset
    pub buffer: TextBuffer,

    /// Presentation-only focus flag
    pub focus: FocusState,
}

impl EditorState {
    /// Create an empty, unfocused state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    pub fn offset(&self) -> usize {
        self.buffer.offset()
    }

    /// Caret as (line, column), recomputed from content and offset
    pub fn cursor(&self) -> CursorPosition {
        self.buffer.cursor_position()
    }

    /// Apply a native input report; returns `true` when content or offset changed
    pub fn apply(&mut self, update: BufferUpdate) -> bool {
        self.buffer.apply(update)
    }

    /// Set the focus flag; returns `true` on a transition
    pub fn set_focus(&mut self, focus: FocusState) -> bool {
        if self.focus == focus {
            return false;
        }
        self.focus = focus;
        true
    }
}
