//! The GUI context: frame lifecycle, window stack, and the queries.

use crate::coords::{Rect, Vec2};
use crate::input::{InputEvent, InputFrame, InputState, MouseButton};
use crate::window::Window;

/// Drag lock threshold used when a query passes a negative threshold, in
/// logical pixels.
pub const DEFAULT_MOUSE_DRAG_THRESHOLD: f32 = 6.0;

/// An immediate-mode GUI context.
///
/// The context is an explicit value, not process state: create one per GUI
/// surface and thread it through calls. A host drives it in a strict cycle,
///
/// 1. feed input with [`handle_event`](Context::handle_event),
/// 2. bracket a frame with [`begin_frame`](Context::begin_frame) /
///    [`end_frame`](Context::end_frame),
/// 3. inside the frame, bracket windows with
///    [`begin_window`](Context::begin_window) /
///    [`end_window`](Context::end_window) and issue queries.
///
/// Queries are only meaningful between `begin_frame` and `end_frame`, with
/// a window begun where the query concerns one. Violations are programming
/// errors: they trip a `debug_assert!` and yield [`Vec2::zero`] (or `false`)
/// in release builds.
#[derive(Debug)]
pub struct Context {
    display_size: Vec2,
    mouse_drag_threshold: f32,
    input: InputState,
    input_frame: InputFrame,
    frame_index: u64,
    in_frame: bool,
    windows: Vec<Window>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Self {
        Self {
            display_size: Vec2::zero(),
            mouse_drag_threshold: DEFAULT_MOUSE_DRAG_THRESHOLD,
            input: InputState::default(),
            input_frame: InputFrame::default(),
            frame_index: 0,
            in_frame: false,
            windows: Vec::new(),
        }
    }

    // ── configuration ─────────────────────────────────────────────────────

    /// Reports the host surface size. Purely informational for queries; the
    /// host typically refreshes it when its surface resizes.
    pub fn set_display_size(&mut self, size: Vec2) {
        debug_assert!(size.is_finite(), "display size must be finite");
        self.display_size = size;
    }

    pub fn display_size(&self) -> Vec2 {
        self.display_size
    }

    /// Sets the default drag lock threshold, used whenever a drag query
    /// passes a negative threshold.
    pub fn set_mouse_drag_threshold(&mut self, threshold: f32) {
        debug_assert!(
            threshold >= 0.0,
            "the default drag threshold cannot itself be a sentinel"
        );
        self.mouse_drag_threshold = threshold;
    }

    pub fn mouse_drag_threshold(&self) -> f32 {
        self.mouse_drag_threshold
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Applies one host input event.
    ///
    /// Events are normally fed between frames; an event applied mid-frame
    /// takes effect immediately for subsequent queries in that frame.
    pub fn handle_event(&mut self, ev: InputEvent) {
        self.input.apply_event(&mut self.input_frame, ev);
    }

    /// Whether the host surface is focused. Queryable at any time; losing
    /// focus cancels in-flight drags.
    pub fn is_focused(&self) -> bool {
        self.input.focused
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    /// Opens a frame. Queries become valid until [`end_frame`](Context::end_frame).
    pub fn begin_frame(&mut self) {
        debug_assert!(!self.in_frame, "begin_frame while a frame is active");
        self.in_frame = true;
        self.frame_index += 1;
        log::trace!("frame {} begun", self.frame_index);
    }

    /// Closes the frame, discards this frame's window records, and clears
    /// per-frame button transitions.
    pub fn end_frame(&mut self) {
        debug_assert!(self.in_frame, "end_frame without begin_frame");
        debug_assert!(
            self.windows.is_empty(),
            "end_frame with {} window(s) still begun",
            self.windows.len()
        );
        self.windows.clear();
        self.input_frame.clear();
        self.in_frame = false;
    }

    pub fn is_frame_active(&self) -> bool {
        self.in_frame
    }

    /// Monotonic frame counter; 0 before the first frame.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    // ── windows ───────────────────────────────────────────────────────────

    /// Begins a window at the placement the host chose for this frame.
    /// Windows nest; queries address the innermost begun window.
    pub fn begin_window(&mut self, name: &str, rect: Rect) {
        debug_assert!(self.in_frame, "begin_window outside a frame");
        debug_assert!(rect.is_finite(), "window rect must be finite");
        debug_assert!(
            rect.size.x >= 0.0 && rect.size.y >= 0.0,
            "window size must be non-negative"
        );
        log::trace!("window {name:?} begun at {rect:?}");
        self.windows.push(Window::new(name, rect));
    }

    pub fn end_window(&mut self) {
        debug_assert!(self.in_frame, "end_window outside a frame");
        let popped = self.windows.pop();
        debug_assert!(popped.is_some(), "end_window without begin_window");
        if let Some(w) = popped {
            log::trace!("window {:?} ended", w.name);
        }
    }

    /// The innermost begun window, if any.
    pub fn current_window(&self) -> Option<&Window> {
        self.windows.last()
    }

    // ── queries ───────────────────────────────────────────────────────────
    //
    // Each of these produces a fresh value computed from context state; the
    // hot path neither logs nor allocates.

    /// Top-left position of the current window.
    pub fn window_pos(&self) -> Vec2 {
        debug_assert!(self.in_frame, "window_pos outside a frame");
        debug_assert!(!self.windows.is_empty(), "window_pos without a window");
        self.windows.last().map_or(Vec2::zero(), |w| w.rect.origin)
    }

    /// Width and height of the current window.
    pub fn window_size(&self) -> Vec2 {
        debug_assert!(self.in_frame, "window_size outside a frame");
        debug_assert!(!self.windows.is_empty(), "window_size without a window");
        self.windows.last().map_or(Vec2::zero(), |w| w.rect.size)
    }

    /// Accumulated drag delta for `button`: pointer position minus the click
    /// origin, once the drag has travelled at least `lock_threshold` pixels
    /// from the origin.
    ///
    /// A negative `lock_threshold` selects the context default
    /// ([`mouse_drag_threshold`](Context::mouse_drag_threshold)). The delta
    /// is reported while the button is held and for the remainder of the
    /// frame in which it was released; it reads [`Vec2::zero`] before the
    /// threshold is reached, while the pointer position or click origin is
    /// unknown, and from the frame after the release on.
    pub fn mouse_drag_delta(&self, button: MouseButton, lock_threshold: f32) -> Vec2 {
        debug_assert!(self.in_frame, "mouse_drag_delta outside a frame");
        let track = self.input.button(button);
        if !track.down && !self.input_frame.released(button) {
            return Vec2::zero();
        }
        if !self.drag_past_threshold(button, lock_threshold) {
            return Vec2::zero();
        }
        match (self.input.pointer_pos, track.origin) {
            (Some(pos), Some(origin)) => pos - origin,
            _ => Vec2::zero(),
        }
    }

    /// Whether `button` is currently held.
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        debug_assert!(self.in_frame, "is_mouse_down outside a frame");
        self.input.button_down(button)
    }

    /// Whether `button` went down this frame.
    pub fn is_mouse_clicked(&self, button: MouseButton) -> bool {
        debug_assert!(self.in_frame, "is_mouse_clicked outside a frame");
        self.input_frame.pressed(button)
    }

    /// Whether `button` is held and its drag has travelled at least
    /// `lock_threshold` pixels. Unlike [`mouse_drag_delta`](Context::mouse_drag_delta)
    /// this reads `false` from the moment of release.
    pub fn is_mouse_dragging(&self, button: MouseButton, lock_threshold: f32) -> bool {
        debug_assert!(self.in_frame, "is_mouse_dragging outside a frame");
        self.input.button_down(button) && self.drag_past_threshold(button, lock_threshold)
    }

    /// Whether the pointer is inside the current window's rectangle.
    pub fn is_window_hovered(&self) -> bool {
        debug_assert!(self.in_frame, "is_window_hovered outside a frame");
        debug_assert!(!self.windows.is_empty(), "is_window_hovered without a window");
        match (self.windows.last(), self.input.pointer_pos) {
            (Some(w), Some(pos)) => w.rect.contains(pos),
            _ => false,
        }
    }

    fn drag_past_threshold(&self, button: MouseButton, lock_threshold: f32) -> bool {
        let threshold = if lock_threshold < 0.0 {
            self.mouse_drag_threshold
        } else {
            lock_threshold
        };
        self.input.button(button).travel_sq >= threshold * threshold
    }
}
