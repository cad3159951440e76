//! Host surface backed by JavaScript callbacks
//!
//! For hosts that manage their own input element (component frameworks),
//! pass an object with optional `focus`, `reportSelection` and
//! `scrollCaretIntoView` functions.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use super::HostSurface;

#[derive(Debug, Clone, Default)]
pub struct CallbackSurface {
    focus: Option<Function>,
    report_selection: Option<Function>,
    scroll_caret_into_view: Option<Function>,
}

impl CallbackSurface {
    /// Read the callbacks from a JS object; missing or non-function entries are skipped
    pub fn from_object(callbacks: &JsValue) -> Self {
        Self {
            focus: function_prop(callbacks, "focus"),
            report_selection: function_prop(callbacks, "reportSelection"),
            scroll_caret_into_view: function_prop(callbacks, "scrollCaretIntoView"),
        }
    }
}

fn function_prop(target: &JsValue, name: &str) -> Option<Function> {
    if !target.is_object() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn call(callback: &Option<Function>, name: &str) -> Option<JsValue> {
    let callback = callback.as_ref()?;
    match callback.call0(&JsValue::NULL) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("host callback {} threw: {:?}", name, e);
            None
        }
    }
}

impl HostSurface for CallbackSurface {
    fn focus(&mut self) {
        call(&self.focus, "focus");
    }

    fn report_selection(&self) -> Option<usize> {
        call(&self.report_selection, "reportSelection")?
            .as_f64()
            .filter(|units| *units >= 0.0)
            .map(|units| units as usize)
    }

    fn scroll_caret_into_view(&mut self) {
        call(&self.scroll_caret_into_view, "scrollCaretIntoView");
    }
}
