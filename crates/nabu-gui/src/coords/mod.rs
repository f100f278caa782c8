//! Coordinate types.
//!
//! All values are in GUI-local logical pixels with a top-left origin.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
