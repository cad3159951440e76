//! Editor widget: event handlers over the widget-owned state
//!
//! Host events are the only writers of content and offset. Each handler
//! applies its update as one transition, then the caret line/column and
//! pixel position are derived again from scratch when asked for.
//!
//! All offsets taken by the `on_*` handlers are char offsets. Raw DOM
//! `selectionStart` values (UTF-16) go through [`TextEditorWidget::sync_selection`]
//! or are converted by the API layer first.

use crate::host::HostSurface;
use crate::models::{EditorConfig, EditorState, FocusState};
use crate::renderers::{to_pixels, DisplayList, PixelPosition};
use crate::text::{utf16_to_char_offset, BufferUpdate, CursorPosition};

pub struct TextEditorWidget<S: HostSurface> {
    state: EditorState,
    config: EditorConfig,
    surface: S,
}

impl<S: HostSurface> TextEditorWidget<S> {
    /// Mount a widget with empty content and the caret at 0
    pub fn new(config: EditorConfig, surface: S) -> Self {
        Self {
            state: EditorState::new(),
            config,
            surface,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The native input changed its text; `offset` is the caret after the edit
    pub fn on_content_change(&mut self, content: String, offset: usize) -> bool {
        let changed = self.state.apply(BufferUpdate::Content {
            text: content,
            offset,
        });
        log::debug!(
            "content change: {} chars, offset {}",
            self.state.buffer.len(),
            self.state.offset()
        );
        self.surface.scroll_caret_into_view();
        changed
    }

    /// The caret moved without a text change (key up / key down)
    pub fn on_selection_move(&mut self, offset: usize) -> bool {
        let changed = self.state.apply(BufferUpdate::Selection(offset));
        if changed {
            log::debug!("selection moved to {}", self.state.offset());
        }
        self.surface.scroll_caret_into_view();
        changed
    }

    /// Read the selection from the host surface and apply it as a caret move
    pub fn sync_selection(&mut self) -> bool {
        match self.surface.report_selection() {
            Some(units) => {
                let offset = utf16_to_char_offset(self.state.content(), units);
                self.on_selection_move(offset)
            }
            None => {
                log::trace!("host reported no selection");
                false
            }
        }
    }

    pub fn on_focus(&mut self) -> bool {
        self.state.set_focus(FocusState::Focused)
    }

    pub fn on_blur(&mut self) -> bool {
        self.state.set_focus(FocusState::Unfocused)
    }

    /// A click on the rendered grid hands focus to the native input
    pub fn on_surface_click(&mut self) {
        self.surface.focus();
    }

    pub fn cursor_position(&self) -> CursorPosition {
        self.state.cursor()
    }

    pub fn caret_pixels(&self) -> PixelPosition {
        to_pixels(self.state.cursor(), self.config.metrics())
    }

    pub fn render(&self) -> DisplayList {
        DisplayList::build(&self.state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        focus_calls: usize,
        scroll_calls: usize,
        selection: Option<usize>,
    }

    impl HostSurface for RecordingSurface {
        fn focus(&mut self) {
            self.focus_calls += 1;
        }

        fn report_selection(&self) -> Option<usize> {
            self.selection
        }

        fn scroll_caret_into_view(&mut self) {
            self.scroll_calls += 1;
        }
    }

    fn widget() -> TextEditorWidget<RecordingSurface> {
        TextEditorWidget::new(EditorConfig::default(), RecordingSurface::default())
    }

    #[test]
    fn test_content_change_updates_cursor_and_scrolls() {
        let mut editor = widget();
        assert!(editor.on_content_change("ab\ncd".to_string(), 3));
        assert_eq!(editor.cursor_position(), CursorPosition::new(1, 0));
        assert_eq!(editor.caret_pixels(), PixelPosition { top: 24.0, left: 0.0 });
        assert_eq!(editor.surface().scroll_calls, 1);
    }

    #[test]
    fn test_unchanged_selection_still_requests_scroll() {
        let mut editor = widget();
        editor.on_content_change("abc".to_string(), 3);
        assert!(!editor.on_selection_move(3));
        assert_eq!(editor.surface().scroll_calls, 2);
        assert!(editor.on_selection_move(0));
        assert_eq!(editor.cursor_position(), CursorPosition::zero());
    }

    #[test]
    fn test_sync_selection_converts_utf16() {
        let mut editor = widget();
        editor.on_content_change("😀\nx".to_string(), 0);

        // After the emoji and the newline: 3 UTF-16 units, 2 chars
        editor.surface_mut().selection = Some(3);
        assert!(editor.sync_selection());
        assert_eq!(editor.state().offset(), 2);
        assert_eq!(editor.cursor_position(), CursorPosition::new(1, 0));
    }

    #[test]
    fn test_sync_selection_without_host_value() {
        let mut editor = widget();
        editor.on_content_change("abc".to_string(), 1);
        assert!(!editor.sync_selection());
        assert_eq!(editor.state().offset(), 1);
    }

    #[test]
    fn test_focus_blur_leave_text_alone() {
        let mut editor = widget();
        editor.on_content_change("ab\ncd".to_string(), 4);
        let before = editor.cursor_position();

        assert!(editor.on_focus());
        assert!(editor.render().caret.opacity > 0.9);
        assert!(editor.on_blur());

        assert_eq!(editor.cursor_position(), before);
        assert_eq!(editor.state().content(), "ab\ncd");
        assert_eq!(editor.state().offset(), 4);
        assert_eq!(editor.surface().scroll_calls, 1);
    }

    #[test]
    fn test_click_focuses_native_input() {
        let mut editor = widget();
        editor.on_surface_click();
        assert_eq!(editor.surface().focus_calls, 1);
        // Focus state only changes when the host reports the focus event
        assert!(!editor.state().focus.is_focused());
    }
}
