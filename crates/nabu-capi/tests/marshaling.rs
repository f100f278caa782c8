//! Drives the C surface end to end. The core property: every out-parameter
//! query leaves the slot bit-identical to what the by-value Rust query
//! returns for the same context and arguments.

use std::ffi::CStr;

use nabu_capi::{
    Context, MouseButton, Vec2, nabu_begin_frame, nabu_begin_window, nabu_context_free,
    nabu_context_new, nabu_end_frame, nabu_end_window, nabu_get_mouse_drag_delta,
    nabu_get_window_pos, nabu_get_window_size, nabu_init_logging, nabu_io_add_focus,
    nabu_io_add_pointer_button, nabu_io_add_pointer_left, nabu_io_add_pointer_pos,
    nabu_io_set_display_size, nabu_io_set_drag_threshold, nabu_is_mouse_clicked,
    nabu_is_mouse_down, nabu_is_mouse_dragging, nabu_is_window_hovered,
};

/// Owns a context handle for one test and frees it on drop, so a failing
/// assertion cannot leak it.
struct Shim {
    ctx: *mut Context,
}

impl Shim {
    fn new() -> Self {
        Self {
            ctx: nabu_context_new(),
        }
    }

    fn pointer(&self, x: f32, y: f32) {
        unsafe { nabu_io_add_pointer_pos(self.ctx, x, y) }
    }

    fn button(&self, button: MouseButton, down: bool) {
        unsafe { nabu_io_add_pointer_button(self.ctx, button, down) }
    }

    fn begin_frame(&self) {
        unsafe { nabu_begin_frame(self.ctx) }
    }

    fn end_frame(&self) {
        unsafe { nabu_end_frame(self.ctx) }
    }

    fn begin_window(&self, name: &CStr, x: f32, y: f32, w: f32, h: f32) {
        unsafe { nabu_begin_window(self.ctx, name.as_ptr(), x, y, w, h) }
    }

    fn end_window(&self) {
        unsafe { nabu_end_window(self.ctx) }
    }

    fn window_pos(&self) -> Vec2 {
        let mut out = Vec2::new(f32::NAN, f32::NAN);
        unsafe { nabu_get_window_pos(self.ctx, &mut out) };
        out
    }

    fn window_size(&self) -> Vec2 {
        let mut out = Vec2::new(f32::NAN, f32::NAN);
        unsafe { nabu_get_window_size(self.ctx, &mut out) };
        out
    }

    fn drag_delta(&self, button: MouseButton, lock_threshold: f32) -> Vec2 {
        let mut out = Vec2::new(f32::NAN, f32::NAN);
        unsafe { nabu_get_mouse_drag_delta(self.ctx, button, lock_threshold, &mut out) };
        out
    }

    /// Rust-side view of the same context, for slot-versus-direct checks.
    fn direct(&self) -> &Context {
        unsafe { &*self.ctx }
    }
}

impl Drop for Shim {
    fn drop(&mut self) {
        unsafe { nabu_context_free(self.ctx) }
    }
}

// ── concrete scenarios ────────────────────────────────────────────────────

#[test]
fn window_pos_slot_holds_the_host_placement() {
    let shim = Shim::new();
    shim.begin_frame();
    shim.begin_window(c"status", 10.0, 20.0, 300.0, 150.0);

    assert_eq!(shim.window_pos(), Vec2::new(10.0, 20.0));

    shim.end_window();
    shim.end_frame();
}

#[test]
fn window_size_slot_holds_the_host_placement() {
    let shim = Shim::new();
    shim.begin_frame();
    shim.begin_window(c"status", 10.0, 20.0, 300.0, 150.0);

    assert_eq!(shim.window_size(), Vec2::new(300.0, 150.0));

    shim.end_window();
    shim.end_frame();
}

#[test]
fn drag_delta_slot_holds_the_unlocked_drag() {
    let shim = Shim::new();
    shim.pointer(100.0, 50.0);
    shim.button(MouseButton::Left, true);
    shim.pointer(105.0, 50.0);
    shim.begin_frame();

    assert_eq!(shim.drag_delta(MouseButton::Left, 0.0), Vec2::new(5.0, 0.0));

    shim.end_frame();
}

// ── slot-versus-direct equivalence ────────────────────────────────────────

#[test]
fn slot_writes_match_the_by_value_queries() {
    let shim = Shim::new();
    shim.pointer(0.0, 0.0);
    shim.button(MouseButton::Left, true);
    shim.button(MouseButton::Right, true);
    shim.pointer(12.0, -3.0);
    shim.begin_frame();
    shim.begin_window(c"inspector", 42.5, 17.25, 640.0, 480.0);

    assert_eq!(shim.window_pos(), shim.direct().window_pos());
    assert_eq!(shim.window_size(), shim.direct().window_size());

    for button in MouseButton::ALL {
        for threshold in [0.0, 1.5, 100.0, -1.0] {
            assert_eq!(
                shim.drag_delta(button, threshold),
                shim.direct().mouse_drag_delta(button, threshold),
                "slot diverged for {button:?} at threshold {threshold}"
            );
        }
    }

    shim.end_window();
    shim.end_frame();
}

#[test]
fn sentinel_threshold_matches_the_configured_default() {
    let shim = Shim::new();
    unsafe { nabu_io_set_drag_threshold(shim.ctx, 4.0) };
    shim.pointer(0.0, 0.0);
    shim.button(MouseButton::Right, true);
    shim.pointer(5.0, 0.0);
    shim.begin_frame();

    let via_sentinel = shim.drag_delta(MouseButton::Right, -1.0);
    let via_explicit = shim.drag_delta(MouseButton::Right, 4.0);
    assert_eq!(via_sentinel, Vec2::new(5.0, 0.0));
    assert_eq!(via_sentinel, via_explicit);
    assert_eq!(
        via_sentinel,
        shim.direct().mouse_drag_delta(MouseButton::Right, -1.0)
    );

    shim.end_frame();
}

#[test]
fn repeated_queries_agree_within_a_frame() {
    let shim = Shim::new();
    shim.pointer(3.0, 4.0);
    shim.begin_frame();
    shim.begin_window(c"status", 10.0, 20.0, 300.0, 150.0);

    assert_eq!(shim.window_pos(), shim.window_pos());
    assert_eq!(shim.window_size(), shim.window_size());
    assert_eq!(
        shim.drag_delta(MouseButton::Left, 0.0),
        shim.drag_delta(MouseButton::Left, 0.0)
    );

    shim.end_window();
    shim.end_frame();
}

// ── slot discipline ───────────────────────────────────────────────────────

#[test]
fn poisoned_slot_is_fully_overwritten() {
    let shim = Shim::new();
    shim.begin_frame();
    shim.begin_window(c"status", 10.0, 20.0, 300.0, 150.0);

    // The helpers seed every slot with NaN, so a component the entry point
    // failed to write would fail these exact comparisons.
    assert_eq!(shim.window_pos(), Vec2::new(10.0, 20.0));
    assert_eq!(shim.window_size(), Vec2::new(300.0, 150.0));
    assert_eq!(shim.drag_delta(MouseButton::Left, 0.0), Vec2::zero());

    shim.end_window();
    shim.end_frame();
}

// ── plumbing ──────────────────────────────────────────────────────────────

#[test]
fn drag_slot_zeroes_after_the_pointer_leaves() {
    let shim = Shim::new();
    shim.pointer(0.0, 0.0);
    shim.button(MouseButton::Left, true);
    shim.pointer(9.0, 0.0);
    unsafe { nabu_io_add_pointer_left(shim.ctx) };
    shim.begin_frame();

    assert_eq!(shim.drag_delta(MouseButton::Left, 0.0), Vec2::zero());

    shim.end_frame();
}

#[test]
fn focus_loss_cancels_the_drag() {
    let shim = Shim::new();
    shim.pointer(0.0, 0.0);
    shim.button(MouseButton::Left, true);
    shim.pointer(9.0, 0.0);
    unsafe { nabu_io_add_focus(shim.ctx, false) };
    shim.begin_frame();

    assert!(!unsafe { nabu_is_mouse_down(shim.ctx, MouseButton::Left) });
    assert_eq!(shim.drag_delta(MouseButton::Left, 0.0), Vec2::zero());

    shim.end_frame();
}

#[test]
fn scalar_passthroughs_agree_with_the_core() {
    let shim = Shim::new();
    shim.pointer(50.0, 60.0);
    shim.button(MouseButton::Middle, true);
    shim.pointer(58.0, 60.0);
    shim.begin_frame();
    shim.begin_window(c"status", 10.0, 20.0, 300.0, 150.0);

    unsafe {
        assert!(nabu_is_mouse_down(shim.ctx, MouseButton::Middle));
        assert!(nabu_is_mouse_clicked(shim.ctx, MouseButton::Middle));
        assert!(nabu_is_mouse_dragging(shim.ctx, MouseButton::Middle, 0.0));
        assert!(!nabu_is_mouse_dragging(shim.ctx, MouseButton::Middle, 20.0));
        assert!(nabu_is_window_hovered(shim.ctx));

        assert_eq!(
            nabu_is_mouse_dragging(shim.ctx, MouseButton::Middle, -1.0),
            shim.direct().is_mouse_dragging(MouseButton::Middle, -1.0)
        );
    }

    shim.end_window();
    shim.end_frame();
}

#[test]
fn context_lifetime_is_explicit() {
    nabu_init_logging();

    let ctx = nabu_context_new();
    assert!(!ctx.is_null());
    unsafe {
        nabu_io_set_display_size(ctx, 1280.0, 720.0);
        assert_eq!((*ctx).display_size(), Vec2::new(1280.0, 720.0));
        nabu_context_free(ctx);
    }

    // Freeing a null handle is a defined no-op.
    unsafe { nabu_context_free(std::ptr::null_mut()) };
}
