use crate::coords::Vec2;

/// Mouse button identifier.
///
/// The discriminants are the integer button indices foreign callers use
/// (0/1/2 for left/right/middle, 3/4 for the side buttons), and the enum is
/// `#[repr(i32)]` so it crosses the C ABI unboxed. A foreign value outside
/// this set is not a `MouseButton`; checked conversion goes through
/// [`MouseButton::from_index`].
#[repr(i32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

impl MouseButton {
    /// Number of tracked buttons.
    pub const COUNT: usize = 5;

    /// All buttons, in index order.
    pub const ALL: [MouseButton; Self::COUNT] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::Back,
        MouseButton::Forward,
    ];

    /// Array index for per-button bookkeeping.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: i32) -> Option<MouseButton> {
        match index {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Right),
            2 => Some(MouseButton::Middle),
            3 => Some(MouseButton::Back),
            4 => Some(MouseButton::Forward),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Host-reported input events.
///
/// The host translates its windowing system's events into these and feeds
/// them to [`Context::handle_event`](crate::Context::handle_event), normally
/// between frames.
///
/// Button events carry no position of their own; the click origin of a press
/// is the pointer position reported by the most recent `PointerMoved`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to a new position.
    PointerMoved(Vec2),

    /// A mouse button changed state.
    PointerButton {
        button: MouseButton,
        state: MouseButtonState,
    },

    /// Pointer left the host surface; its position becomes unknown.
    PointerLeft,

    /// Host focus change. Losing focus releases all held buttons so a drag
    /// cannot stay stuck across an unfocused stretch.
    Focused(bool),
}
