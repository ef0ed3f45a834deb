//! Base widget trait and types
//!
//! Every UI element implements [`Widget`]. Shared state (identity, bounds,
//! title, visibility, focus, enabled) lives in a [`WidgetBase`] that each
//! widget embeds, so the trait can provide most accessors as default
//! methods. Widgets that own children additionally expose the optional
//! [`Container`] capability.

use std::sync::atomic::{AtomicU64, Ordering};

use panelkit_core::{DrawContext, Point, Rect};

use crate::event::UiEvent;

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of a widget instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a fresh, never reused id
    pub fn next() -> Self {
        WidgetId(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value (for logging)
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// State common to every widget
#[derive(Clone, Debug)]
pub struct WidgetBase {
    id: WidgetId,
    /// Bounds relative to the parent's content origin
    pub bounds: Rect,
    /// Display title (also the default search key)
    pub title: String,
    pub visible: bool,
    pub focused: bool,
    pub enabled: bool,
}

impl WidgetBase {
    /// Create base state with a fresh id and empty bounds
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            bounds: Rect::ZERO,
            title: title.into(),
            visible: true,
            focused: false,
            enabled: true,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new("")
    }
}

/// Base trait for all widgets
///
/// Coordinates passed to and from a widget are relative to its parent's
/// content origin. `draw` receives the absolute position of that origin;
/// `handle_input` receives events already translated into parent space.
pub trait Widget {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Render the widget. Must not change layout.
    fn draw(&self, ctx: &mut dyn DrawContext, origin: Point);

    /// Offer an input event to the widget; returns true if it was consumed
    fn handle_input(&mut self, _event: &UiEvent) -> bool {
        false
    }

    fn id(&self) -> WidgetId {
        self.base().id()
    }

    fn bounds(&self) -> Rect {
        self.base().bounds
    }

    fn set_pos_and_size(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.base_mut().bounds = Rect::new(x, y, width, height);
    }

    fn set_pos(&mut self, x: i32, y: i32) {
        let bounds = &mut self.base_mut().bounds;
        bounds.x = x;
        bounds.y = y;
    }

    fn set_size(&mut self, width: i32, height: i32) {
        let bounds = &mut self.base_mut().bounds;
        bounds.width = width;
        bounds.height = height;
    }

    fn set_x(&mut self, x: i32) {
        self.base_mut().bounds.x = x;
    }

    fn set_y(&mut self, y: i32) {
        self.base_mut().bounds.y = y;
    }

    fn set_width(&mut self, width: i32) {
        self.base_mut().bounds.width = width;
    }

    fn set_height(&mut self, height: i32) {
        self.base_mut().bounds.height = height;
    }

    fn title(&self) -> &str {
        &self.base().title
    }

    fn set_title(&mut self, title: String) {
        self.base_mut().title = title;
    }

    fn is_visible(&self) -> bool {
        self.base().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.base_mut().visible = visible;
    }

    fn is_focused(&self) -> bool {
        self.base().focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base_mut().focused = focused;
    }

    fn is_enabled(&self) -> bool {
        self.base().enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.base_mut().enabled = enabled;
    }

    /// Container capability, for widgets that own children
    fn as_container(&self) -> Option<&dyn Container> {
        None
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        None
    }
}

/// Capability of widgets that own an ordered list of children
pub trait Container {
    /// Children in insertion (draw and tab) order
    fn widgets(&self) -> &[Box<dyn Widget>];

    fn widgets_mut(&mut self) -> &mut [Box<dyn Widget>];
}

/// Depth-first search for a widget by id, starting at (and including) `root`
pub fn find_widget(root: &dyn Widget, id: WidgetId) -> Option<&dyn Widget> {
    if root.id() == id {
        return Some(root);
    }
    root.as_container()?
        .widgets()
        .iter()
        .find_map(|child| find_widget(child.as_ref(), id))
}
