//! Data models for the editor widget

pub mod config;
pub mod editor_state;

pub use config::{ContainerStyle, EditorConfig, DEFAULT_CARET_COLOR};
pub use editor_state::{EditorState, FocusState};
