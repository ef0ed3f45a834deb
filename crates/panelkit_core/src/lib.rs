//! panelkit Core
//!
//! Foundational types shared by every panelkit crate:
//!
//! - **Geometry**: integer [`Point`], [`Size`] and [`Rect`] on the host pixel grid
//! - **Color**: RGBA [`Color`] values
//! - **Draw Context**: the [`DrawContext`] / [`TextMetrics`] traits the host
//!   engine implements, plus [`RecordingContext`] for headless use
//!
//! # Example
//!
//! ```rust
//! use panelkit_core::{Point, Rect};
//!
//! let bounds = Rect::new(6, 6, 260, 188);
//! assert!(bounds.contains(Point::new(10, 10)));
//! assert_eq!(bounds.right(), 266);
//! ```

pub mod draw;
pub mod geometry;

pub use draw::{
    DrawCommand, DrawContext, DrawContextExt, FixedMetrics, RecordingContext, TextMetrics,
    TextStyle,
};
pub use geometry::{Color, Point, Rect, Size};
