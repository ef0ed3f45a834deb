//! Draw Context - the host rendering boundary
//!
//! Widgets never talk to a graphics API directly. The host engine implements
//! [`DrawContext`] (quads, text, clipping) and [`TextMetrics`] (string width
//! and line height), and widgets issue calls against it while drawing.
//!
//! [`RecordingContext`] is a host-less implementation that records every call
//! as a [`DrawCommand`]; it backs the test suites and the preview tool.
//!
//! # Example
//!
//! ```
//! use panelkit_core::{Color, DrawContext, Point, RecordingContext, Rect, TextStyle};
//!
//! let mut ctx = RecordingContext::new();
//! ctx.push_clip(Rect::new(0, 0, 100, 20));
//! ctx.fill_rect(Rect::new(0, 0, 100, 20), Color::DARK_GRAY);
//! ctx.draw_text("Hello", Point::new(2, 2), &TextStyle::default());
//! ctx.pop_clip();
//!
//! assert_eq!(ctx.texts(), vec!["Hello"]);
//! ```

use smallvec::SmallVec;

use crate::geometry::{Color, Point, Rect};

// ─────────────────────────────────────────────────────────────────────────────
// Text Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Text style configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Text color
    pub color: Color,
    /// Draw with a one-pixel drop shadow
    pub shadow: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            shadow: false,
        }
    }
}

impl TextStyle {
    /// Style with the given color and no shadow
    pub fn new(color: Color) -> Self {
        Self {
            color,
            shadow: false,
        }
    }

    /// Set text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Enable the drop shadow
    pub fn with_shadow(mut self) -> Self {
        self.shadow = true;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Host Traits
// ─────────────────────────────────────────────────────────────────────────────

/// Font measurements supplied by the host
pub trait TextMetrics {
    /// Width of `text` in pixels when drawn with the host font
    fn string_width(&self, text: &str) -> i32;

    /// Height of one line of text in pixels
    fn font_height(&self) -> i32;
}

/// Rendering API supplied by the host
///
/// All coordinates are absolute screen pixels.
pub trait DrawContext: TextMetrics {
    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a single line of text with its top-left corner at `origin`
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Restrict subsequent drawing to `rect` (intersected with any active clip)
    fn push_clip(&mut self, rect: Rect);

    /// Remove the most recent clip
    fn pop_clip(&mut self);

    /// The currently active clip, if any
    fn current_clip(&self) -> Option<Rect>;
}

/// Convenience helpers layered over [`DrawContext`]
pub trait DrawContextExt: DrawContext {
    /// Draw a one-pixel outline inside `rect`
    fn outline_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - 1, rect.width, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.y, 1, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.height), color);
    }

    /// Draw text horizontally centered within `[x, x + width)`
    fn draw_text_centered(&mut self, text: &str, x: i32, width: i32, y: i32, style: &TextStyle) {
        let text_x = x + (width - self.string_width(text)) / 2;
        self.draw_text(text, Point::new(text_x, y), style);
    }
}

// Blanket implementation for all DrawContext implementers
impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw call captured by [`RecordingContext`]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushClip(Rect),
    PopClip,
    FillRect {
        rect: Rect,
        color: Color,
    },
    DrawText {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

/// Monospace metrics used when no host font is available
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedMetrics {
    /// Advance per character
    pub char_width: i32,
    /// Line height
    pub line_height: i32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            char_width: 6,
            line_height: 9,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn string_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.char_width
    }

    fn font_height(&self) -> i32 {
        self.line_height
    }
}

/// A draw context that records commands instead of rendering them
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    clip_stack: SmallVec<[Rect; 4]>,
    metrics: FixedMetrics,
}

impl RecordingContext {
    /// Create a recording context with default monospace metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording context with custom metrics
    pub fn with_metrics(metrics: FixedMetrics) -> Self {
        Self {
            metrics,
            ..Default::default()
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands and clips
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// All recorded text, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Find the first draw of `text`
    pub fn find_text(&self, text: &str) -> Option<(Point, TextStyle)> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::DrawText {
                text: t,
                origin,
                style,
            } if t == text => Some((*origin, *style)),
            _ => None,
        })
    }

    /// Depth of the clip stack (zero once every push has been popped)
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }
}

impl TextMetrics for RecordingContext {
    fn string_width(&self, text: &str) -> i32 {
        self.metrics.string_width(text)
    }

    fn font_height(&self) -> i32 {
        self.metrics.font_height()
    }
}

impl DrawContext for RecordingContext {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            origin,
            style: *style,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        let clip = match self.clip_stack.last() {
            Some(parent) => parent.intersection(&rect).unwrap_or(Rect::new(rect.x, rect.y, 0, 0)),
            None => rect,
        };
        self.clip_stack.push(clip);
        self.commands.push(DrawCommand::PushClip(clip));
    }

    fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            tracing::warn!("pop_clip called with an empty clip stack");
            return;
        }
        self.commands.push(DrawCommand::PopClip);
    }

    fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_clips_intersect() {
        let mut ctx = RecordingContext::new();
        ctx.push_clip(Rect::new(0, 0, 100, 100));
        ctx.push_clip(Rect::new(50, 50, 100, 100));
        assert_eq!(ctx.current_clip(), Some(Rect::new(50, 50, 50, 50)));
        ctx.pop_clip();
        ctx.pop_clip();
        assert_eq!(ctx.clip_depth(), 0);
        assert_eq!(ctx.current_clip(), None);
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut ctx = RecordingContext::new();
        ctx.pop_clip();
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_centered_text() {
        let mut ctx = RecordingContext::new();
        // "abcd" is 24px wide with the default 6px advance
        ctx.draw_text_centered("abcd", 10, 100, 5, &TextStyle::default());
        let (origin, _) = ctx.find_text("abcd").unwrap();
        assert_eq!(origin, Point::new(48, 5));
    }

    #[test]
    fn test_outline_draws_four_edges() {
        let mut ctx = RecordingContext::new();
        ctx.outline_rect(Rect::new(0, 0, 10, 10), Color::WHITE);
        assert_eq!(ctx.commands().len(), 4);
    }
}
