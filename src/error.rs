//! Error types for the JavaScript boundary
//!
//! The text and layout core is total and never fails. Only DOM lookups and
//! (de)serialization across the WASM boundary can go wrong.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum EditorError {
    /// No element with the given id in the document
    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    /// Element exists but is not the expected kind
    #[error("Element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    /// No `window` / `document` (not running in a browser)
    #[error("DOM unavailable: {0}")]
    Dom(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<EditorError> for JsValue {
    fn from(err: EditorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
