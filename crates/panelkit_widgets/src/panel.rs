//! Panel - an ordered container of child widgets
//!
//! The panel provides:
//! - Ordered children (insertion order is draw and input order)
//! - Optional add-filtering (see [`ChildFilter`])
//! - Pluggable layout (see [`WidgetLayout`]), [`Vertical`] by default
//! - A vertical viewport offset, consumed while drawing and routing input
//!
//! # Example
//!
//! ```
//! use panelkit_widgets::prelude::*;
//!
//! let mut panel = Panel::new()
//!     .with_layout(Vertical::new(2, 3, 2))
//!     .with_child_border(4);
//! panel.set_pos_and_size(0, 0, 100, 40);
//!
//! panel.add(Button::new("One"));
//! panel.add(Button::new("Two"));
//! panel.align_widgets();
//!
//! assert_eq!(panel.widgets()[1].bounds().y, 25);
//! assert_eq!(panel.widgets()[1].bounds().width, 92);
//! ```

use panelkit_core::{Color, DrawContext, Point, Rect};

use crate::event::UiEvent;
use crate::filter::ChildFilter;
use crate::layout::{Vertical, WidgetLayout};
use crate::scroll_bar::{clamp_offset, Scrollable};
use crate::widget::{Container, Widget, WidgetBase};

/// A container widget that lays out its children with a [`WidgetLayout`]
pub struct Panel {
    base: WidgetBase,
    widgets: Vec<Box<dyn Widget>>,
    filter: Option<Box<dyn ChildFilter>>,
    layout: Box<dyn WidgetLayout>,
    /// Symmetric horizontal border; when set, children are stretched to fill
    child_border: Option<i32>,
    background: Option<Color>,
    content_height: i32,
    scroll_offset: i32,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    /// Create an empty panel with a gapless vertical layout
    pub fn new() -> Self {
        Self {
            base: WidgetBase::default(),
            widgets: Vec::new(),
            filter: None,
            layout: Box::new(Vertical::default()),
            child_border: None,
            background: None,
            content_height: 0,
            scroll_offset: 0,
        }
    }

    /// Set the layout strategy
    pub fn with_layout(mut self, layout: impl WidgetLayout + 'static) -> Self {
        self.set_layout(layout);
        self
    }

    /// Stretch children to the panel width minus `border` on each side
    pub fn with_child_border(mut self, border: i32) -> Self {
        self.child_border = Some(border);
        self
    }

    /// Fill the panel's bounds before drawing children
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn set_layout(&mut self, layout: impl WidgetLayout + 'static) {
        self.layout = Box::new(layout);
    }

    pub fn set_child_border(&mut self, border: Option<i32>) {
        self.child_border = border;
    }

    /// Install or remove the add-filter. Existing children are untouched;
    /// call [`Panel::refresh_widgets`] to re-apply it.
    pub fn set_filter(&mut self, filter: Option<Box<dyn ChildFilter>>) {
        self.filter = filter;
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Append a widget. Returns false if the installed filter rejected it.
    ///
    /// Adding a widget whose identity is already a child is a programming
    /// error.
    pub fn add(&mut self, widget: impl Widget + 'static) -> bool {
        self.add_boxed(Box::new(widget))
    }

    pub fn add_boxed(&mut self, widget: Box<dyn Widget>) -> bool {
        if let Some(filter) = &self.filter {
            if !filter.accepts(widget.as_ref()) {
                tracing::trace!(title = widget.title(), "panel filter rejected widget");
                return false;
            }
        }

        let duplicate = self.widgets.iter().any(|w| w.id() == widget.id());
        debug_assert!(
            !duplicate,
            "widget {:?} added to the same panel twice",
            widget.id()
        );
        if duplicate {
            tracing::warn!(id = widget.id().as_u64(), "ignoring duplicate widget add");
            return false;
        }

        self.widgets.push(widget);
        true
    }

    /// Remove every child
    pub fn clear(&mut self) {
        self.widgets.clear();
    }

    pub fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Re-run the layout over the current children
    pub fn align_widgets(&mut self) {
        self.content_height = self.layout.align(&mut self.widgets);

        if let Some(border) = self.child_border {
            let width = self.base.bounds.width - border * 2;
            for widget in &mut self.widgets {
                widget.set_x(border);
                widget.set_width(width);
            }
        }

        self.scroll_offset = clamp_offset(
            self.scroll_offset,
            self.content_height,
            self.base.bounds.height,
        );

        tracing::trace!(
            children = self.widgets.len(),
            content_height = self.content_height,
            "panel aligned"
        );
    }

    /// Clear, repopulate through `producer` (subject to the filter), re-align
    pub fn refresh_widgets<F>(&mut self, producer: F)
    where
        F: FnOnce(&mut Panel),
    {
        self.clear();
        producer(self);
        self.align_widgets();
    }

    /// Height required by the children as of the last alignment
    pub fn content_height(&self) -> i32 {
        self.content_height
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Set the viewport offset, clamped to the scrollable range
    pub fn set_scroll_offset(&mut self, offset: i32) -> i32 {
        self.scroll_offset = clamp_offset(offset, self.content_height, self.base.bounds.height);
        self.scroll_offset
    }

    /// The visible part of the content, in content coordinates
    pub fn viewport(&self) -> Rect {
        Rect::new(
            0,
            self.scroll_offset,
            self.base.bounds.width,
            self.base.bounds.height,
        )
    }
}

impl Widget for Panel {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw(&self, ctx: &mut dyn DrawContext, origin: Point) {
        if !self.is_visible() {
            return;
        }

        let area = self.bounds().offset(origin.x, origin.y);
        if let Some(color) = self.background {
            ctx.fill_rect(area, color);
        }

        ctx.push_clip(area);
        let child_origin = Point::new(area.x, area.y - self.scroll_offset);
        let viewport = self.viewport();
        for widget in &self.widgets {
            if widget.is_visible() && widget.bounds().intersects(&viewport) {
                widget.draw(ctx, child_origin);
            }
        }
        ctx.pop_clip();
    }

    fn handle_input(&mut self, event: &UiEvent) -> bool {
        if !self.is_visible() || !self.is_enabled() {
            return false;
        }

        let bounds = self.bounds();
        let pointer_targeted = matches!(
            event,
            UiEvent::PointerPressed { .. } | UiEvent::Wheel { .. }
        );
        if pointer_targeted {
            match event.position() {
                Some(pos) if bounds.contains(pos) => {}
                _ => return false,
            }
        }

        let local = event.translated(bounds.x, bounds.y - self.scroll_offset);
        if local.position().is_some() {
            // topmost (last drawn) first
            for widget in self.widgets.iter_mut().rev() {
                if widget.is_enabled() && widget.handle_input(&local) {
                    return true;
                }
            }
        } else {
            for widget in self.widgets.iter_mut() {
                if widget.is_enabled() && widget.handle_input(&local) {
                    return true;
                }
            }
        }
        false
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        Some(self)
    }
}

impl Container for Panel {
    fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    fn widgets_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.widgets
    }
}

impl Scrollable for Panel {
    fn content_extent(&self) -> i32 {
        self.content_height
    }

    fn viewport_extent(&self) -> i32 {
        self.base.bounds.height
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::button::Button;
    use crate::filter::SearchFilter;
    use crate::widget::find_widget;
    use panelkit_core::{DrawCommand, RecordingContext};
    use panelkit_platform::MouseButton;

    fn button(title: &str, height: i32) -> Button {
        let mut button = Button::new(title);
        button.set_height(height);
        button
    }

    fn list_panel() -> Panel {
        let mut panel = Panel::new()
            .with_layout(Vertical::new(2, 3, 2))
            .with_child_border(5);
        panel.set_pos_and_size(10, 20, 100, 50);
        panel
    }

    #[test]
    fn test_align_positions_and_stretches() {
        let mut panel = list_panel();
        panel.add(button("a", 10));
        panel.add(button("b", 20));
        panel.add(button("c", 15));
        panel.align_widgets();

        let bounds: Vec<Rect> = panel.widgets().iter().map(|w| w.bounds()).collect();
        assert_eq!(
            bounds,
            vec![
                Rect::new(5, 2, 90, 10),
                Rect::new(5, 15, 90, 20),
                Rect::new(5, 38, 90, 15),
            ]
        );
        assert_eq!(panel.content_height(), 55);
    }

    #[test]
    fn test_align_twice_is_stable() {
        let mut panel = list_panel();
        for i in 0..6 {
            panel.add(button(&format!("item {i}"), 12 + i));
        }
        panel.align_widgets();
        let first: Vec<Rect> = panel.widgets().iter().map(|w| w.bounds()).collect();
        panel.align_widgets();
        let second: Vec<Rect> = panel.widgets().iter().map(|w| w.bounds()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_panel_operations_are_noops() {
        let mut panel = list_panel();
        panel.align_widgets();
        assert_eq!(panel.content_height(), 0);
        assert_eq!(panel.set_scroll_offset(40), 0);

        let mut ctx = RecordingContext::new();
        panel.draw(&mut ctx, Point::ZERO);
        assert_eq!(ctx.clip_depth(), 0);
        assert!(ctx.texts().is_empty());
    }

    #[test]
    fn test_filter_rejects_on_add() {
        let mut panel = list_panel();
        panel.set_filter(Some(Box::new(SearchFilter::by_title("ing"))));

        assert!(panel.add(Button::new("Iron Ingot")));
        assert!(!panel.add(Button::new("Stick")));
        assert_eq!(panel.len(), 1);
    }

    #[test]
    fn test_filter_rejecting_everything_leaves_panel_usable() {
        let mut panel = list_panel();
        panel.set_filter(Some(Box::new(|_: &dyn Widget| false)));
        panel.refresh_widgets(|p| {
            p.add(Button::new("a"));
            p.add(Button::new("b"));
        });

        assert!(panel.is_empty());
        assert_eq!(panel.content_height(), 0);
        let mut ctx = RecordingContext::new();
        panel.draw(&mut ctx, Point::ZERO);
        assert_eq!(ctx.clip_depth(), 0);
    }

    #[test]
    fn test_refresh_replaces_children() {
        let mut panel = list_panel();
        panel.add(Button::new("old"));
        panel.refresh_widgets(|p| {
            p.add(button("new 1", 10));
            p.add(button("new 2", 10));
        });

        let titles: Vec<&str> = panel.widgets().iter().map(|w| w.title()).collect();
        assert_eq!(titles, vec!["new 1", "new 2"]);
        assert_eq!(panel.widgets()[1].bounds().y, 15);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "added to the same panel twice")]
    fn test_duplicate_add_is_a_programming_error() {
        struct Shared(WidgetBase);
        impl Widget for Shared {
            fn base(&self) -> &WidgetBase {
                &self.0
            }
            fn base_mut(&mut self) -> &mut WidgetBase {
                &mut self.0
            }
            fn draw(&self, _ctx: &mut dyn DrawContext, _origin: Point) {}
        }

        let base = WidgetBase::new("twin");
        let mut panel = Panel::new();
        panel.add(Shared(base.clone()));
        panel.add(Shared(base));
    }

    #[test]
    fn test_scroll_offset_clamps() {
        let mut panel = list_panel();
        for _ in 0..5 {
            panel.add(button("row", 20));
        }
        panel.align_widgets();
        // 2 + 5*20 + 4*3 + 2 = 116 content in a 50px viewport
        assert_eq!(panel.content_height(), 116);
        assert_eq!(panel.set_scroll_offset(-10), 0);
        assert_eq!(panel.set_scroll_offset(30), 30);
        assert_eq!(panel.set_scroll_offset(500), 66);
    }

    #[test]
    fn test_draw_clips_and_culls() {
        let mut panel = list_panel();
        for i in 0..5 {
            panel.add(button(&format!("row {i}"), 20));
        }
        panel.align_widgets();
        panel.set_scroll_offset(40);

        let mut ctx = RecordingContext::new();
        panel.draw(&mut ctx, Point::new(1, 1));

        assert_eq!(
            ctx.commands().first(),
            Some(&DrawCommand::PushClip(Rect::new(11, 21, 100, 50)))
        );
        assert_eq!(ctx.commands().last(), Some(&DrawCommand::PopClip));
        // rows start at 2, 25, 48, 71, 94; viewport covers 40..90
        assert_eq!(ctx.texts(), vec!["row 1", "row 2", "row 3"]);
    }

    #[test]
    fn test_input_translated_through_scroll() {
        let clicked = Rc::new(Cell::new(0));
        let mut panel = list_panel();
        for i in 0..5 {
            let clicked = clicked.clone();
            panel.add(button(&format!("row {i}"), 20).on_click(move || clicked.set(i)));
        }
        panel.align_widgets();
        panel.set_scroll_offset(40);

        // panel-local y 35 + offset 40 = content y 75, inside row 3 (71..91)
        let press = UiEvent::PointerPressed {
            button: MouseButton::Left,
            pos: Point::new(20, 20 + 35),
        };
        assert!(panel.handle_input(&press));
        assert_eq!(clicked.get(), 3);

        let outside = UiEvent::PointerPressed {
            button: MouseButton::Left,
            pos: Point::new(200, 30),
        };
        assert!(!panel.handle_input(&outside));
    }

    #[test]
    fn test_container_capability() {
        let mut panel = list_panel();
        let target = Button::new("needle");
        let id = target.id();
        panel.add(Button::new("hay"));
        panel.add(target);

        let found = find_widget(&panel, id).map(|w| w.title().to_string());
        assert_eq!(found.as_deref(), Some("needle"));
        assert_eq!(panel.as_container().map(|c| c.widgets().len()), Some(2));
    }
}
