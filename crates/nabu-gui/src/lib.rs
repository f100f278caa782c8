//! Nabu GUI core — immediate-mode query state behind an explicit [`Context`].
//!
//! The context owns pointer and drag tracking plus the per-frame window
//! placements a host reports. It renders nothing and lays nothing out;
//! hosts ask it questions (window position, window size, drag delta) and
//! draw however they like.
//!
//! # Quick start
//!
//! ```
//! use nabu_gui::coords::{Rect, Vec2};
//! use nabu_gui::input::InputEvent;
//! use nabu_gui::Context;
//!
//! let mut ctx = Context::new();
//! ctx.handle_event(InputEvent::PointerMoved(Vec2::new(40.0, 30.0)));
//!
//! ctx.begin_frame();
//! ctx.begin_window("status", Rect::new(10.0, 20.0, 300.0, 150.0));
//! assert_eq!(ctx.window_pos(), Vec2::new(10.0, 20.0));
//! assert_eq!(ctx.window_size(), Vec2::new(300.0, 150.0));
//! ctx.end_window();
//! ctx.end_frame();
//! ```

pub mod context;
pub mod coords;
pub mod input;
pub mod logging;
pub mod window;

// Top-level re-exports for the common entry point.
pub use context::{Context, DEFAULT_MOUSE_DRAG_THRESHOLD};
