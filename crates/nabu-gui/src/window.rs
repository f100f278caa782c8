//! Window placement records.
//!
//! There is no layout here: the host supplies each window's rectangle when
//! it begins the window, every frame, and the context records it so queries
//! can read it back. Records do not survive `end_frame`.

use crate::coords::Rect;

/// One begun window in the current frame.
#[derive(Debug, Clone)]
pub struct Window {
    /// Diagnostic label; not an identity (windows retain no state).
    pub name: String,
    /// Placement supplied by the host for this frame.
    pub rect: Rect,
}

impl Window {
    pub(crate) fn new(name: &str, rect: Rect) -> Self {
        Self {
            name: name.to_owned(),
            rect,
        }
    }
}
