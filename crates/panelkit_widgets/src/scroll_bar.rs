//! Scroll bar bound to a scrollable panel
//!
//! The bar owns the viewport offset and pulls the content and viewport
//! extents from its target on demand via [`ScrollBar::sync`]; it never holds
//! a reference to the panel. The owner copies [`ScrollBar::offset`] back into
//! the panel after routing input.
//!
//! # States
//!
//! - **Idle**: wheel notches move the offset by the step size; pressing the
//!   thumb starts a drag, pressing the track pages toward the pointer
//! - **Dragging**: pointer motion maps to offset motion scaled by
//!   `content / viewport`; releasing returns to idle
//!
//! The offset always stays within `[0, max(0, content − viewport)]`.

use panelkit_core::{DrawContext, Point, Rect};
use panelkit_platform::MouseButton;

use crate::event::UiEvent;
use crate::style;
use crate::widget::{Widget, WidgetBase};

/// Smallest thumb length in pixels
pub const MIN_THUMB_SIZE: i32 = 8;

/// Default offset change per wheel notch
pub const DEFAULT_SCROLL_STEP: i32 = 20;

/// Clamp a requested offset into the scrollable range
pub fn clamp_offset(offset: i32, content_extent: i32, viewport_extent: i32) -> i32 {
    offset.clamp(0, (content_extent - viewport_extent).max(0))
}

/// Something a scroll bar can scroll
pub trait Scrollable {
    /// Total extent of the content
    fn content_extent(&self) -> i32;

    /// Extent of the visible window onto the content
    fn viewport_extent(&self) -> i32;
}

/// Interaction state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBarState {
    #[default]
    Idle,
    Dragging {
        /// Pointer y when the drag started
        grab_y: i32,
        /// Offset when the drag started
        start_offset: i32,
    },
}

/// Vertical scroll bar widget
pub struct ScrollBar {
    base: WidgetBase,
    offset: i32,
    step: i32,
    can_always_scroll: bool,
    content_extent: i32,
    viewport_extent: i32,
    state: ScrollBarState,
}

impl Default for ScrollBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollBar {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::default(),
            offset: 0,
            step: DEFAULT_SCROLL_STEP,
            can_always_scroll: false,
            content_extent: 0,
            viewport_extent: 0,
            state: ScrollBarState::Idle,
        }
    }

    /// Set the offset change per wheel notch
    pub fn with_scroll_step(mut self, step: i32) -> Self {
        self.set_scroll_step(step);
        self
    }

    /// Keep the bar visible and interactive even when content fits
    pub fn with_can_always_scroll(mut self, always: bool) -> Self {
        self.can_always_scroll = always;
        self
    }

    pub fn set_scroll_step(&mut self, step: i32) {
        self.step = step.max(1);
    }

    pub fn scroll_step(&self) -> i32 {
        self.step
    }

    pub fn set_can_always_scroll(&mut self, always: bool) {
        self.can_always_scroll = always;
    }

    pub fn can_always_scroll(&self) -> bool {
        self.can_always_scroll
    }

    /// Pull extents from the target and re-clamp the offset
    pub fn sync(&mut self, target: &dyn Scrollable) {
        self.content_extent = target.content_extent();
        self.viewport_extent = target.viewport_extent();
        self.offset = self.clamp(self.offset);
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Largest reachable offset
    pub fn max_offset(&self) -> i32 {
        (self.content_extent - self.viewport_extent).max(0)
    }

    /// Set the offset, clamped; returns the stored value
    pub fn set_offset(&mut self, offset: i32) -> i32 {
        self.offset = self.clamp(offset);
        self.offset
    }

    pub fn scroll_by(&mut self, delta: i32) -> i32 {
        self.set_offset(self.offset.saturating_add(delta))
    }

    /// Apply wheel notches (positive scrolls toward the top).
    /// Returns false when the bar is inactive.
    pub fn scroll_wheel(&mut self, notches: i32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.scroll_by(notches.saturating_mul(self.step).saturating_neg());
        true
    }

    /// Whether the content overflows the viewport
    pub fn can_scroll(&self) -> bool {
        self.content_extent > self.viewport_extent
    }

    /// Whether the bar is drawn and accepts input
    pub fn is_active(&self) -> bool {
        self.can_scroll() || self.can_always_scroll
    }

    pub fn state(&self) -> ScrollBarState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ScrollBarState::Dragging { .. })
    }

    /// Thumb rectangle in the same space as the bar's bounds
    pub fn thumb_rect(&self) -> Rect {
        let bar = self.bounds();
        if !self.can_scroll() || self.content_extent <= 0 {
            return bar;
        }

        let length = ((bar.height as i64 * self.viewport_extent as i64 / self.content_extent as i64)
            as i32)
            .max(MIN_THUMB_SIZE)
            .min(bar.height);
        let travel = bar.height - length;
        let max_offset = self.max_offset();
        let position = if max_offset > 0 {
            (self.offset as i64 * travel as i64 / max_offset as i64) as i32
        } else {
            0
        };
        Rect::new(bar.x, bar.y + position, bar.width, length)
    }

    fn clamp(&self, offset: i32) -> i32 {
        clamp_offset(offset, self.content_extent, self.viewport_extent)
    }

    fn drag_to(&mut self, pointer_y: i32) {
        if let ScrollBarState::Dragging {
            grab_y,
            start_offset,
        } = self.state
        {
            if self.viewport_extent <= 0 {
                return;
            }
            let delta = (pointer_y - grab_y) as i64 * self.content_extent as i64
                / self.viewport_extent as i64;
            let target = (start_offset as i64 + delta).clamp(i32::MIN as i64, i32::MAX as i64);
            self.set_offset(target as i32);
        }
    }
}

impl Widget for ScrollBar {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw(&self, ctx: &mut dyn DrawContext, origin: Point) {
        if !self.is_visible() || !self.is_active() {
            return;
        }

        ctx.fill_rect(self.bounds().offset(origin.x, origin.y), style::SCROLL_TRACK);

        let thumb_color = if self.is_dragging() {
            style::SCROLL_THUMB.lighten(0.15)
        } else {
            style::SCROLL_THUMB
        };
        ctx.fill_rect(self.thumb_rect().offset(origin.x, origin.y), thumb_color);
    }

    fn handle_input(&mut self, event: &UiEvent) -> bool {
        if !self.is_active() {
            self.state = ScrollBarState::Idle;
            return false;
        }

        match event {
            UiEvent::Wheel { pos, notches } if self.bounds().contains(*pos) => {
                self.scroll_wheel(*notches)
            }
            UiEvent::PointerPressed {
                button: MouseButton::Left,
                pos,
            } if self.bounds().contains(*pos) => {
                let thumb = self.thumb_rect();
                if thumb.contains(*pos) {
                    self.state = ScrollBarState::Dragging {
                        grab_y: pos.y,
                        start_offset: self.offset,
                    };
                    tracing::trace!(offset = self.offset, "scroll bar drag started");
                } else if pos.y < thumb.y {
                    self.scroll_by(-self.viewport_extent);
                } else {
                    self.scroll_by(self.viewport_extent);
                }
                true
            }
            UiEvent::PointerMoved { pos } if self.is_dragging() => {
                self.drag_to(pos.y);
                true
            }
            UiEvent::PointerReleased { .. } if self.is_dragging() => {
                self.state = ScrollBarState::Idle;
                tracing::trace!(offset = self.offset, "scroll bar drag ended");
                true
            }
            _ => false,
        }
    }
}
