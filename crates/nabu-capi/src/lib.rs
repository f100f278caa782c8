//! C ABI for the Nabu GUI core.
//!
//! Some embedders reach this library through a binding layer whose calling
//! convention cannot receive a small aggregate returned by value: a
//! two-float vector fits in registers for a native call, but not every
//! binding generator models that. For those callers the `Vec2` queries of
//! [`Context`] are re-exposed in out-parameter form — the caller passes a
//! pointer to a `Vec2` it owns, and the entry point writes the result
//! through it. Only the delivery channel changes: each entry point invokes
//! the underlying query once and writes its result once, unmodified, so the
//! slot ends up bit-identical to what the by-value call returns.
//!
//! Queries with scalar results keep the ordinary return channel.
//!
//! Entry points validate nothing. A dangling handle, a bad slot pointer, or
//! an out-of-range button value is undefined behavior, the same as against
//! a C library; the per-function `# Safety` contracts state what callers
//! must uphold. Frame lifecycle misuse surfaces as the core's own debug
//! assertions in debug builds and as zeroed results in release builds.

use std::borrow::Cow;
use std::ffi::{CStr, c_char};

use nabu_gui::coords::Rect;
use nabu_gui::input::{InputEvent, MouseButtonState};
use nabu_gui::logging::{LoggingConfig, init_logging};

pub use nabu_gui::Context;
pub use nabu_gui::coords::Vec2;
pub use nabu_gui::input::MouseButton;

// ── context lifetime ──────────────────────────────────────────────────────

/// Allocates a context and returns an owning handle.
///
/// Every other entry point borrows the handle; it stays valid until
/// [`nabu_context_free`].
#[unsafe(no_mangle)]
pub extern "C" fn nabu_context_new() -> *mut Context {
    let ctx = Box::new(Context::new());
    log::debug!("context allocated");
    Box::into_raw(ctx)
}

/// Frees a context handle. A null handle is a no-op, as with `free`.
///
/// # Safety
///
/// `ctx` must be null or a handle from [`nabu_context_new`] that has not
/// already been freed; no entry point may use it afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_context_free(ctx: *mut Context) {
    if ctx.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(ctx) });
    log::debug!("context freed");
}

/// Installs the default `env_logger` backend. Idempotent. Embedders that
/// already route the `log` facade elsewhere skip this.
#[unsafe(no_mangle)]
pub extern "C" fn nabu_init_logging() {
    init_logging(LoggingConfig::default());
}

// ── input plumbing ────────────────────────────────────────────────────────
//
// Thin event forwarders. Each one borrows the handle, builds the matching
// `InputEvent`, and hands it to the core.

/// Reports the host surface size in logical pixels.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_io_set_display_size(ctx: *mut Context, width: f32, height: f32) {
    let ctx = unsafe { &mut *ctx };
    ctx.set_display_size(Vec2::new(width, height));
}

/// Sets the drag lock threshold substituted when a drag query passes a
/// negative threshold.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_io_set_drag_threshold(ctx: *mut Context, threshold: f32) {
    let ctx = unsafe { &mut *ctx };
    ctx.set_mouse_drag_threshold(threshold);
}

/// Feeds a pointer movement.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_io_add_pointer_pos(ctx: *mut Context, x: f32, y: f32) {
    let ctx = unsafe { &mut *ctx };
    ctx.handle_event(InputEvent::PointerMoved(Vec2::new(x, y)));
}

/// Feeds a button press (`down` true) or release (`down` false).
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`]; `button` must
/// hold one of the declared [`MouseButton`] values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_io_add_pointer_button(
    ctx: *mut Context,
    button: MouseButton,
    down: bool,
) {
    let ctx = unsafe { &mut *ctx };
    let state = if down {
        MouseButtonState::Pressed
    } else {
        MouseButtonState::Released
    };
    ctx.handle_event(InputEvent::PointerButton { button, state });
}

/// Reports that the pointer left the host surface.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_io_add_pointer_left(ctx: *mut Context) {
    let ctx = unsafe { &mut *ctx };
    ctx.handle_event(InputEvent::PointerLeft);
}

/// Reports a host focus change. Losing focus cancels in-flight drags.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_io_add_focus(ctx: *mut Context, focused: bool) {
    let ctx = unsafe { &mut *ctx };
    ctx.handle_event(InputEvent::Focused(focused));
}

// ── frame and window lifecycle ────────────────────────────────────────────

/// Opens a frame; queries are valid until [`nabu_end_frame`].
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_begin_frame(ctx: *mut Context) {
    let ctx = unsafe { &mut *ctx };
    ctx.begin_frame();
}

/// Closes the frame opened by [`nabu_begin_frame`].
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_end_frame(ctx: *mut Context) {
    let ctx = unsafe { &mut *ctx };
    ctx.end_frame();
}

/// Begins a window at the placement the host chose for this frame.
///
/// `name` is a diagnostic label. A null `name` reads as empty; a non-UTF-8
/// one is transcoded lossily.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`]; `name` must be
/// null or a NUL-terminated string valid for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_begin_window(
    ctx: *mut Context,
    name: *const c_char,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) {
    let ctx = unsafe { &mut *ctx };
    let name = if name.is_null() {
        Cow::Borrowed("")
    } else {
        unsafe { CStr::from_ptr(name) }.to_string_lossy()
    };
    ctx.begin_window(&name, Rect::new(x, y, width, height));
}

/// Ends the innermost window begun by [`nabu_begin_window`].
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_end_window(ctx: *mut Context) {
    let ctx = unsafe { &mut *ctx };
    ctx.end_window();
}

// ── out-parameter queries ─────────────────────────────────────────────────
//
// The reason this crate exists. One forward, one write, no checks and no
// reshaping, so the slot holds exactly the value the by-value query
// returns.

/// Writes the current window's top-left position into `out`.
///
/// Valid between [`nabu_begin_frame`] and [`nabu_end_frame`] with a window
/// begun, like the query it forwards to.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`]; `out` must be
/// valid for writing a [`Vec2`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_get_window_pos(ctx: *const Context, out: *mut Vec2) {
    let ctx = unsafe { &*ctx };
    unsafe { out.write(ctx.window_pos()) }
}

/// Writes the current window's width and height into `out`.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`]; `out` must be
/// valid for writing a [`Vec2`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_get_window_size(ctx: *const Context, out: *mut Vec2) {
    let ctx = unsafe { &*ctx };
    unsafe { out.write(ctx.window_size()) }
}

/// Writes the accumulated drag delta for `button` into `out`. A negative
/// `lock_threshold` selects the context default.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`]; `out` must be
/// valid for writing a [`Vec2`]; `button` must hold one of the declared
/// [`MouseButton`] values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_get_mouse_drag_delta(
    ctx: *const Context,
    button: MouseButton,
    lock_threshold: f32,
    out: *mut Vec2,
) {
    let ctx = unsafe { &*ctx };
    unsafe { out.write(ctx.mouse_drag_delta(button, lock_threshold)) }
}

// ── return-channel queries ────────────────────────────────────────────────
//
// Scalar results cross the boundary fine, so these stay passthroughs.

/// Whether `button` is currently held.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`]; `button` must
/// hold one of the declared [`MouseButton`] values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_is_mouse_down(ctx: *const Context, button: MouseButton) -> bool {
    let ctx = unsafe { &*ctx };
    ctx.is_mouse_down(button)
}

/// Whether `button` went down this frame.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`]; `button` must
/// hold one of the declared [`MouseButton`] values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_is_mouse_clicked(ctx: *const Context, button: MouseButton) -> bool {
    let ctx = unsafe { &*ctx };
    ctx.is_mouse_clicked(button)
}

/// Whether `button` is held with its drag past `lock_threshold` (negative
/// selects the context default).
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`]; `button` must
/// hold one of the declared [`MouseButton`] values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_is_mouse_dragging(
    ctx: *const Context,
    button: MouseButton,
    lock_threshold: f32,
) -> bool {
    let ctx = unsafe { &*ctx };
    ctx.is_mouse_dragging(button, lock_threshold)
}

/// Whether the pointer is inside the current window's rectangle.
///
/// # Safety
///
/// `ctx` must be a live handle from [`nabu_context_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nabu_is_window_hovered(ctx: *const Context) -> bool {
    let ctx = unsafe { &*ctx };
    ctx.is_window_hovered()
}
