//! UI events routed through the widget tree
//!
//! The host delivers [`InputEvent`]s in window coordinates. Screens convert
//! them into [`UiEvent`]s, and every container translates pointer
//! positions into its children's coordinate space before forwarding.

use panelkit_core::Point;
use panelkit_platform::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseEvent};

/// An input event in widget space
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    PointerMoved {
        pos: Point,
    },
    PointerPressed {
        button: MouseButton,
        pos: Point,
    },
    PointerReleased {
        button: MouseButton,
        pos: Point,
    },
    /// Wheel rotation at `pos`; positive notches scroll toward the top
    Wheel {
        pos: Point,
        notches: i32,
    },
    /// A non-character key press
    Key {
        key: Key,
        modifiers: Modifiers,
    },
    /// A single typed character
    Char(char),
    /// Committed text (paste), one discrete edit
    Text(String),
}

impl UiEvent {
    /// Convert a host event. `cursor` is the last known pointer position,
    /// used for wheel events that carry none of their own.
    pub fn from_input(input: &InputEvent, cursor: Point) -> Option<UiEvent> {
        match input {
            InputEvent::Mouse(mouse) => match mouse {
                MouseEvent::Moved { x, y } => Some(UiEvent::PointerMoved {
                    pos: to_point(*x, *y),
                }),
                MouseEvent::ButtonPressed { button, x, y } => Some(UiEvent::PointerPressed {
                    button: *button,
                    pos: to_point(*x, *y),
                }),
                MouseEvent::ButtonReleased { button, x, y } => Some(UiEvent::PointerReleased {
                    button: *button,
                    pos: to_point(*x, *y),
                }),
                MouseEvent::Left => None,
            },
            InputEvent::Keyboard(keyboard) => {
                if keyboard.state != KeyState::Pressed {
                    return None;
                }
                match &keyboard.key {
                    Key::Char(c) if !keyboard.modifiers.command() => Some(UiEvent::Char(*c)),
                    key => Some(UiEvent::Key {
                        key: key.clone(),
                        modifiers: keyboard.modifiers,
                    }),
                }
            }
            InputEvent::Text { text } => Some(UiEvent::Text(text.clone())),
            InputEvent::Scroll { delta_y, .. } => {
                let notches = wheel_notches(*delta_y);
                (notches != 0).then_some(UiEvent::Wheel {
                    pos: cursor,
                    notches,
                })
            }
        }
    }

    /// Pointer position carried by the event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            UiEvent::PointerMoved { pos }
            | UiEvent::PointerPressed { pos, .. }
            | UiEvent::PointerReleased { pos, .. }
            | UiEvent::Wheel { pos, .. } => Some(*pos),
            _ => None,
        }
    }

    /// Re-express the event relative to a child space whose origin is at
    /// `(origin_x, origin_y)` in the current space
    pub fn translated(&self, origin_x: i32, origin_y: i32) -> UiEvent {
        let shift = |pos: &Point| pos.offset(-origin_x, -origin_y);
        match self {
            UiEvent::PointerMoved { pos } => UiEvent::PointerMoved { pos: shift(pos) },
            UiEvent::PointerPressed { button, pos } => UiEvent::PointerPressed {
                button: *button,
                pos: shift(pos),
            },
            UiEvent::PointerReleased { button, pos } => UiEvent::PointerReleased {
                button: *button,
                pos: shift(pos),
            },
            UiEvent::Wheel { pos, notches } => UiEvent::Wheel {
                pos: shift(pos),
                notches: *notches,
            },
            other => other.clone(),
        }
    }
}

fn to_point(x: f32, y: f32) -> Point {
    Point::new(x.floor() as i32, y.floor() as i32)
}

/// Largest notch count a single wheel event can carry
pub const MAX_WHEEL_NOTCHES: i32 = 1000;

/// Round a wheel delta to whole notches, never losing a non-zero delta
fn wheel_notches(delta: f32) -> i32 {
    let rounded = (delta.round() as i32).clamp(-MAX_WHEEL_NOTCHES, MAX_WHEEL_NOTCHES);
    if rounded == 0 && delta != 0.0 {
        delta.signum() as i32
    } else {
        rounded
    }
}
