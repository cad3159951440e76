//! Browser DOM host surface
//!
//! Wraps the hidden `<textarea>` and the caret element rendered by the host.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlTextAreaElement};
use crate::error::EditorError;
use super::HostSurface;

pub struct DomSurface {
    input: HtmlTextAreaElement,
    caret: Element,
}

impl DomSurface {
    pub fn new(input: HtmlTextAreaElement, caret: Element) -> Self {
        Self { input, caret }
    }

    /// Look up the textarea and the caret element by id
    pub fn from_ids(input_id: &str, caret_id: &str) -> Result<Self, EditorError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| EditorError::Dom("no window.document".to_string()))?;

        let input = document
            .get_element_by_id(input_id)
            .ok_or_else(|| EditorError::ElementNotFound(input_id.to_string()))?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| EditorError::WrongElementType {
                id: input_id.to_string(),
                expected: "textarea",
            })?;

        let caret = document
            .get_element_by_id(caret_id)
            .ok_or_else(|| EditorError::ElementNotFound(caret_id.to_string()))?;

        Ok(Self::new(input, caret))
    }

    /// Current textarea value
    pub fn value(&self) -> String {
        self.input.value()
    }
}

impl HostSurface for DomSurface {
    fn focus(&mut self) {
        if let Err(e) = self.input.focus() {
            log::warn!("textarea focus failed: {:?}", e);
        }
    }

    fn report_selection(&self) -> Option<usize> {
        match self.input.selection_start() {
            Ok(start) => start.map(|units| units as usize),
            Err(e) => {
                log::warn!("selectionStart unavailable: {:?}", e);
                None
            }
        }
    }

    fn scroll_caret_into_view(&mut self) {
        self.caret.scroll_into_view();
    }
}
