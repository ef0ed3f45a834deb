//! Input event types for keyboard, mouse, and text entry

/// Input events delivered by the host
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse event
    Mouse(MouseEvent),
    /// Keyboard event
    Keyboard(KeyboardEvent),
    /// Committed text (paste or IME commit), delivered as one discrete edit
    Text {
        /// The committed text
        text: String,
    },
    /// Scroll/wheel event
    Scroll {
        /// Horizontal scroll delta in wheel notches
        delta_x: f32,
        /// Vertical scroll delta in wheel notches (positive = away from the user)
        delta_y: f32,
    },
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse events
#[derive(Clone, Debug, PartialEq)]
pub enum MouseEvent {
    /// Mouse moved to position
    Moved {
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// Mouse button pressed
    ButtonPressed {
        /// Which button was pressed
        button: MouseButton,
        /// X position when pressed
        x: f32,
        /// Y position when pressed
        y: f32,
    },
    /// Mouse button released
    ButtonReleased {
        /// Which button was released
        button: MouseButton,
        /// X position when released
        x: f32,
        /// Y position when released
        y: f32,
    },
    /// Mouse left the window
    Left,
}

impl MouseEvent {
    /// Position carried by the event, if any
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            MouseEvent::Moved { x, y }
            | MouseEvent::ButtonPressed { x, y, .. }
            | MouseEvent::ButtonReleased { x, y, .. } => Some((*x, *y)),
            MouseEvent::Left => None,
        }
    }
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

// ============================================================================
// Keyboard Events
// ============================================================================

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed or released
    pub key: Key,
    /// Whether the key was pressed or released
    pub state: KeyState,
    /// Modifier keys held during this event
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    /// A key press with no modifiers
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
        }
    }
}

/// Key press/release state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key was pressed
    Pressed,
    /// Key was released
    Released,
}

/// Modifier key state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key is held
    pub shift: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Alt key is held (Option on macOS)
    pub alt: bool,
    /// Meta key is held (Command on macOS, Windows key on Windows)
    pub meta: bool,
}

impl Modifiers {
    /// Check if no modifiers are held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Platform "command" modifier: ctrl, or meta on macOS keyboards
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Key codes
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    // Special keys
    Enter,
    Escape,
    Backspace,
    Tab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    // Arrow keys
    Left,
    Right,
    Up,
    Down,

    // Character input (for text input)
    Char(char),

    // Unknown key
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_position() {
        let moved = MouseEvent::Moved { x: 3.0, y: 4.0 };
        assert_eq!(moved.position(), Some((3.0, 4.0)));
        assert_eq!(MouseEvent::Left.position(), None);
    }

    #[test]
    fn test_command_modifier() {
        let mods = Modifiers {
            meta: true,
            ..Default::default()
        };
        assert!(mods.command());
        assert!(!mods.is_empty());
        assert!(Modifiers::default().is_empty());
    }
}
