use super::types::MouseButton;

/// Per-frame button transitions.
///
/// [`InputState`](super::InputState) answers "is this button held"; this
/// answers "did it go down or up this frame". The context clears it at
/// `end_frame`, so a release stays visible for exactly the frame it landed
/// in, which is what lets a drag be committed on release.
#[derive(Debug, Default)]
pub struct InputFrame {
    pressed: [bool; MouseButton::COUNT],
    released: [bool; MouseButton::COUNT],
}

impl InputFrame {
    #[inline]
    pub fn pressed(&self, button: MouseButton) -> bool {
        self.pressed[button.index()]
    }

    #[inline]
    pub fn released(&self, button: MouseButton) -> bool {
        self.released[button.index()]
    }

    pub fn clear(&mut self) {
        self.pressed = [false; MouseButton::COUNT];
        self.released = [false; MouseButton::COUNT];
    }

    pub(crate) fn note_pressed(&mut self, button: MouseButton) {
        self.pressed[button.index()] = true;
    }

    pub(crate) fn note_released(&mut self, button: MouseButton) {
        self.released[button.index()] = true;
    }
}
