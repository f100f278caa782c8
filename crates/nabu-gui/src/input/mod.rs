//! Pointer input: event types, held-state tracking, per-frame transitions.
//!
//! The context folds [`InputEvent`]s into an [`InputState`] (what is held
//! right now, and how far each button has been dragged) and an
//! [`InputFrame`] (what changed this frame). Keyboard, wheel and text input
//! are out of scope for a query core.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::{DragTrack, InputState};
pub use types::{InputEvent, MouseButton, MouseButtonState};
