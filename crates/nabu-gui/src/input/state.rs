use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{InputEvent, MouseButton, MouseButtonState};

/// Per-button drag bookkeeping.
///
/// `origin` is the pointer position at the most recent press (unknown if the
/// button was pressed before any pointer position was reported). `travel_sq`
/// is the largest squared distance the pointer has reached from the origin
/// while the button stayed held; drag queries compare it against a squared
/// lock threshold.
#[derive(Debug, Default, Copy, Clone)]
pub struct DragTrack {
    pub down: bool,
    pub origin: Option<Vec2>,
    pub travel_sq: f32,
}

/// Current pointer and button state for one context.
///
/// Events are applied one at a time; per-frame transitions are recorded into
/// an [`InputFrame`] on the side.
#[derive(Debug)]
pub struct InputState {
    /// Whether the host surface is focused. Contexts start focused; the
    /// host reports changes via [`InputEvent::Focused`].
    pub focused: bool,

    /// Pointer position in logical pixels, `None` while the pointer is off
    /// the surface or has never been reported.
    pub pointer_pos: Option<Vec2>,

    buttons: [DragTrack; MouseButton::COUNT],
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            focused: true,
            pointer_pos: None,
            buttons: [DragTrack::default(); MouseButton::COUNT],
        }
    }
}

impl InputState {
    /// Applies one event to the current state, recording transitions into
    /// `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::PointerMoved(pos) => {
                if !pos.is_finite() {
                    log::warn!("ignoring non-finite pointer position {pos:?}");
                    return;
                }
                self.pointer_pos = Some(pos);
                self.accumulate_travel(pos);
            }

            InputEvent::PointerButton { button, state } => match state {
                MouseButtonState::Pressed => {
                    let track = &mut self.buttons[button.index()];
                    // Repeated press events while already held are dropped,
                    // so the drag origin survives them.
                    if !track.down {
                        track.down = true;
                        track.origin = self.pointer_pos;
                        track.travel_sq = 0.0;
                        frame.note_pressed(button);
                    }
                }
                MouseButtonState::Released => {
                    let track = &mut self.buttons[button.index()];
                    if track.down {
                        track.down = false;
                        frame.note_released(button);
                    }
                }
            },

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Held buttons are dropped without release transitions:
                    // an unfocused drag cancels rather than commits, and no
                    // button can stay stuck across the unfocused stretch.
                    for track in &mut self.buttons {
                        track.down = false;
                    }
                }
            }
        }
    }

    /// Copy of the drag record for `button`.
    #[inline]
    pub fn button(&self, button: MouseButton) -> DragTrack {
        self.buttons[button.index()]
    }

    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons[button.index()].down
    }

    fn accumulate_travel(&mut self, pos: Vec2) {
        for track in &mut self.buttons {
            if track.down
                && let Some(origin) = track.origin
            {
                track.travel_sq = track.travel_sq.max((pos - origin).length_sq());
            }
        }
    }
}
