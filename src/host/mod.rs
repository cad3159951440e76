//! Host surface abstraction
//!
//! The widget never touches the native text input directly. It talks to a
//! `HostSurface`, which is the DOM textarea in the browser, a set of JS
//! callbacks for framework hosts, or nothing at all in headless use.

pub mod callback;
pub mod dom;

pub use callback::CallbackSurface;
pub use dom::DomSurface;

/// Operations the widget needs from the native text-entry surface
pub trait HostSurface {
    /// Give keyboard focus to the native input
    fn focus(&mut self);

    /// Current selection start as the host reports it, in UTF-16 code units.
    ///
    /// `None` when the host cannot tell (detached element, missing callback).
    fn report_selection(&self) -> Option<usize>;

    /// Fire-and-forget request to scroll the caret into view
    fn scroll_caret_into_view(&mut self);
}

/// Surface that ignores every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl HostSurface for NullSurface {
    fn focus(&mut self) {}

    fn report_selection(&self) -> Option<usize> {
        None
    }

    fn scroll_caret_into_view(&mut self) {}
}
