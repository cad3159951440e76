//! TextEditor WASM API
//!
//! JavaScript owns a `TextEditor` handle per mounted widget and forwards the
//! textarea events to it. Every event takes the raw `selectionStart`
//! (UTF-16 code units); conversion to char offsets happens here before the
//! widget sees it. After an event, call `render()` and paint the display list.

use wasm_bindgen::prelude::*;
use crate::host::{CallbackSurface, DomSurface, HostSurface, NullSurface};
use crate::models::EditorConfig;
use crate::text::{char_to_utf16_offset, position_to_offset, utf16_to_char_offset, CursorPosition};
use crate::widget::TextEditorWidget;
use crate::{wasm_info, wasm_log};
use super::helpers::{deserialize, js_error, serialize, to_json};

/// Whatever the widget is currently attached to
pub enum BoundSurface {
    Detached(NullSurface),
    Dom(DomSurface),
    Callbacks(CallbackSurface),
}

impl HostSurface for BoundSurface {
    fn focus(&mut self) {
        match self {
            BoundSurface::Detached(s) => s.focus(),
            BoundSurface::Dom(s) => s.focus(),
            BoundSurface::Callbacks(s) => s.focus(),
        }
    }

    fn report_selection(&self) -> Option<usize> {
        match self {
            BoundSurface::Detached(s) => s.report_selection(),
            BoundSurface::Dom(s) => s.report_selection(),
            BoundSurface::Callbacks(s) => s.report_selection(),
        }
    }

    fn scroll_caret_into_view(&mut self) {
        match self {
            BoundSurface::Detached(s) => s.scroll_caret_into_view(),
            BoundSurface::Dom(s) => s.scroll_caret_into_view(),
            BoundSurface::Callbacks(s) => s.scroll_caret_into_view(),
        }
    }
}

#[wasm_bindgen]
pub struct TextEditor {
    widget: TextEditorWidget<BoundSurface>,
}

#[wasm_bindgen]
impl TextEditor {
    /// Create an editor; `config` may be `undefined` for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TextEditor, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            deserialize(config, "Invalid editor config")?
        };
        wasm_info!("TextEditor created (caret color {})", config.caret_color);

        Ok(TextEditor {
            widget: TextEditorWidget::new(config, BoundSurface::Detached(NullSurface)),
        })
    }

    /// Bind to a textarea and caret element in the page
    #[wasm_bindgen(js_name = attachDom)]
    pub fn attach_dom(&mut self, input_id: &str, caret_id: &str) -> Result<(), JsValue> {
        let surface = DomSurface::from_ids(input_id, caret_id).map_err(js_error)?;
        *self.widget.surface_mut() = BoundSurface::Dom(surface);
        wasm_info!("attached to #{} / #{}", input_id, caret_id);
        Ok(())
    }

    /// Bind to `{ focus, reportSelection, scrollCaretIntoView }` callbacks
    #[wasm_bindgen(js_name = attachCallbacks)]
    pub fn attach_callbacks(&mut self, callbacks: JsValue) {
        *self.widget.surface_mut() = BoundSurface::Callbacks(CallbackSurface::from_object(&callbacks));
    }

    /// textarea `input` event
    #[wasm_bindgen(js_name = onInput)]
    pub fn on_input(&mut self, value: String, selection_start: u32) -> bool {
        let offset = utf16_to_char_offset(&value, selection_start as usize);
        wasm_log!("onInput: {} units -> offset {}", selection_start, offset);
        self.widget.on_content_change(value, offset)
    }

    /// textarea `keyup` event
    #[wasm_bindgen(js_name = onKeyUp)]
    pub fn on_key_up(&mut self, selection_start: u32) -> bool {
        self.move_selection(selection_start)
    }

    /// textarea `keydown` event
    #[wasm_bindgen(js_name = onKeyDown)]
    pub fn on_key_down(&mut self, selection_start: u32) -> bool {
        self.move_selection(selection_start)
    }

    #[wasm_bindgen(js_name = onFocus)]
    pub fn on_focus(&mut self) -> bool {
        self.widget.on_focus()
    }

    #[wasm_bindgen(js_name = onBlur)]
    pub fn on_blur(&mut self) -> bool {
        self.widget.on_blur()
    }

    /// Click on the rendered text grid
    #[wasm_bindgen(js_name = onClick)]
    pub fn on_click(&mut self) {
        self.widget.on_surface_click();
    }

    /// Read value and selection straight from the attached textarea
    #[wasm_bindgen(js_name = syncFromInput)]
    pub fn sync_from_input(&mut self) -> Result<bool, JsValue> {
        let (value, units) = match self.widget.surface() {
            BoundSurface::Dom(dom) => (dom.value(), dom.report_selection().unwrap_or(0)),
            _ => return Err(JsValue::from_str("syncFromInput requires attachDom")),
        };
        let offset = utf16_to_char_offset(&value, units);
        Ok(self.widget.on_content_change(value, offset))
    }

    /// Ask the attached surface for its selection and move the caret there
    #[wasm_bindgen(js_name = syncSelection)]
    pub fn sync_selection(&mut self) -> bool {
        self.widget.sync_selection()
    }

    /// Display list for the current state
    pub fn render(&self) -> Result<JsValue, JsValue> {
        serialize(&self.widget.render(), "Failed to serialize display list")
    }

    /// Display list as a JSON string
    #[wasm_bindgen(js_name = renderJson)]
    pub fn render_json(&self) -> Result<String, JsValue> {
        to_json(&self.widget.render(), "Failed to serialize display list")
    }

    /// Current caret as `{ line, column }`
    #[wasm_bindgen(js_name = cursorPosition)]
    pub fn cursor_position(&self) -> Result<JsValue, JsValue> {
        serialize(&self.widget.cursor_position(), "Failed to serialize cursor position")
    }

    /// `{ width, height }` CSS strings for the outer container
    #[wasm_bindgen(js_name = containerStyle)]
    pub fn container_style(&self) -> Result<JsValue, JsValue> {
        serialize(&self.widget.config().container_style(), "Failed to serialize container style")
    }

    pub fn content(&self) -> String {
        self.widget.state().content().to_string()
    }

    /// Caret offset in chars
    pub fn offset(&self) -> usize {
        self.widget.state().offset()
    }

    /// UTF-16 `selectionStart` that puts the textarea caret at (line, column),
    /// for placing the native selection after a click on the grid
    #[wasm_bindgen(js_name = selectionStartFor)]
    pub fn selection_start_for(&self, line: usize, column: usize) -> u32 {
        let content = self.widget.state().content();
        let offset = position_to_offset(content, CursorPosition::new(line, column));
        char_to_utf16_offset(content, offset) as u32
    }

    #[wasm_bindgen(js_name = isFocused)]
    pub fn is_focused(&self) -> bool {
        self.widget.state().focus.is_focused()
    }
}

impl TextEditor {
    fn move_selection(&mut self, selection_start: u32) -> bool {
        let offset = utf16_to_char_offset(self.widget.state().content(), selection_start as usize);
        self.widget.on_selection_move(offset)
    }
}
