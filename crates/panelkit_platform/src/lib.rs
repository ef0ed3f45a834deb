//! panelkit Platform Event Model
//!
//! The host engine owns the window and the input devices. This crate
//! describes what it hands to panelkit each frame:
//!
//! - [`Event`] - window, input, and frame-tick events
//! - [`InputEvent`] - mouse, keyboard, committed text, and wheel input
//! - [`ControlFlow`] - whether the host should keep the screen open
//!
//! [`parse_script`] turns a line-oriented text script into events so that
//! screens can be driven without a host.
//!
//! # Example
//!
//! ```
//! use panelkit_platform::{parse_script, Event};
//!
//! let events = parse_script("resize 300 200\nframe").unwrap();
//! assert_eq!(events.last(), Some(&Event::Frame));
//! ```

mod error;
mod event;
mod input;
mod script;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{ControlFlow, Event, WindowEvent};
pub use input::{InputEvent, Key, KeyState, KeyboardEvent, Modifiers, MouseButton, MouseEvent};
pub use script::parse_script;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{ControlFlow, Event, WindowEvent};
    pub use crate::input::{
        InputEvent, Key, KeyState, KeyboardEvent, Modifiers, MouseButton, MouseEvent,
    };
}
