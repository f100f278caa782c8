//! Demo host: drives a context through a scripted drag and prints what the
//! queries report each frame. The window follows committed drags, the way a
//! host would move a panel by its title bar; a second drag is interrupted by
//! focus loss to show cancellation.

use anyhow::{Context as _, Result};

use nabu_gui::Context;
use nabu_gui::coords::{Rect, Vec2};
use nabu_gui::input::{InputEvent, MouseButton, MouseButtonState};
use nabu_gui::logging::{LoggingConfig, init_logging};

const WINDOW_SIZE: Vec2 = Vec2::new(300.0, 150.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Placement is host state; the context only reports it back.
    let mut placement = Vec2::new(10.0, 20.0);

    let script = drag_script(placement + WINDOW_SIZE * 0.5);
    let frames: usize = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frame count {arg:?}"))?,
        None => script.len(),
    };

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║   NABU QUERY HOST — scripted pointer   ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut ctx = Context::new();
    ctx.set_display_size(Vec2::new(1280.0, 720.0));

    for frame in 0..frames {
        for ev in script.get(frame).into_iter().flatten() {
            ctx.handle_event(*ev);
        }

        ctx.begin_frame();

        let delta = ctx.mouse_drag_delta(MouseButton::Left, -1.0);
        let dragging = ctx.is_mouse_dragging(MouseButton::Left, -1.0);

        // A non-zero delta without the button down means the drag ended
        // this frame; fold it into the placement.
        if !ctx.is_mouse_down(MouseButton::Left) && delta != Vec2::zero() {
            placement = placement + delta;
            log::info!("drag committed: {delta:?}");
        }

        ctx.begin_window("telemetry", Rect::from_origin_size(placement, WINDOW_SIZE));
        let pos = ctx.window_pos();
        let size = ctx.window_size();
        let hovered = ctx.is_window_hovered();
        ctx.end_window();

        ctx.end_frame();

        println!(
            "  frame {frame:02}  pos ({:6.1},{:6.1})  size ({:5.1},{:5.1})  drag ({:+5.1},{:+5.1})  {}{}{}",
            pos.x,
            pos.y,
            size.x,
            size.y,
            delta.x,
            delta.y,
            if dragging { "dragging " } else { "         " },
            if hovered { "hovered " } else { "        " },
            if ctx.is_focused() { "" } else { "unfocused" },
        );
    }

    println!();
    Ok(())
}

/// Pointer choreography in two acts: grab the window at `grab` (its
/// center), pull it down-right past the default lock threshold, release to
/// commit; then start a second drag that focus loss cancels.
fn drag_script(grab: Vec2) -> Vec<Vec<InputEvent>> {
    let moved = |v| InputEvent::PointerMoved(v);
    let left = |state| InputEvent::PointerButton {
        button: MouseButton::Left,
        state,
    };

    vec![
        // Act one: drag and commit.
        vec![moved(Vec2::new(500.0, 400.0))],
        vec![moved(grab)],
        vec![left(MouseButtonState::Pressed)],
        vec![moved(grab + Vec2::new(3.0, 2.0))],
        vec![moved(grab + Vec2::new(12.0, 11.0))],
        vec![moved(grab + Vec2::new(25.0, 20.0))],
        vec![left(MouseButtonState::Released)],
        // Act two: grab again, then lose focus mid-drag.
        vec![left(MouseButtonState::Pressed)],
        vec![moved(grab + Vec2::new(45.0, 20.0))],
        vec![InputEvent::Focused(false)],
        vec![],
        vec![InputEvent::Focused(true), left(MouseButtonState::Released)],
        vec![moved(Vec2::new(500.0, 400.0))],
    ]
}
