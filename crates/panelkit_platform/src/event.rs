//! Host events and loop control

use crate::input::InputEvent;

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Continue running the event loop
    #[default]
    Continue,
    /// Exit the event loop
    Exit,
}

/// Events the host delivers to the active screen
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Window-related event
    Window(WindowEvent),
    /// Input event (mouse, keyboard, text)
    Input(InputEvent),
    /// Frame tick - time to render
    ///
    /// Input received since the previous frame is handled before drawing.
    Frame,
}

/// Window events
#[derive(Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// Window was resized
    Resized {
        /// New width in GUI pixels
        width: u32,
        /// New height in GUI pixels
        height: u32,
    },
    /// Window close was requested (e.g., close button clicked)
    CloseRequested,
    /// Window gained or lost focus
    Focused(bool),
}
