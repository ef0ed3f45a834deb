//! Clickable button
//!
//! Buttons are the usual children of a button list. A left press inside the
//! button's bounds fires its click handler; pointer motion only updates the
//! hover highlight and is never consumed.

use panelkit_core::{DrawContext, DrawContextExt, Point, TextStyle};
use panelkit_platform::MouseButton;

use crate::event::UiEvent;
use crate::framework::{self, ButtonCreated};
use crate::style;
use crate::widget::{Widget, WidgetBase};

/// Height a button gets when none is set
pub const DEFAULT_BUTTON_HEIGHT: i32 = 20;

/// Button widget
pub struct Button {
    base: WidgetBase,
    hovered: bool,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(title: impl Into<String>) -> Self {
        let mut base = WidgetBase::new(title);
        base.bounds.height = DEFAULT_BUTTON_HEIGHT;
        Self {
            base,
            hovered: false,
            on_click: None,
        }
    }

    /// Set the click handler
    pub fn on_click<F: FnMut() + 'static>(mut self, handler: F) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn set_on_click<F: FnMut() + 'static>(&mut self, handler: F) {
        self.on_click = Some(Box::new(handler));
    }

    /// Tell registered button observers about this button
    pub fn announce(self) -> Self {
        framework::notify_button_created(&ButtonCreated {
            id: self.id(),
            title: self.title().to_string(),
        });
        self
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Fire the click handler as if the button had been pressed
    pub fn click(&mut self) {
        if let Some(handler) = self.on_click.as_mut() {
            handler();
        }
    }
}

impl Widget for Button {
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
        let (background, text) = if !self.is_enabled() {
            (style::BUTTON_DISABLED, style::TEXT_DISABLED)
        } else if self.hovered {
            (style::BUTTON_BACKGROUND.lighten(0.1), style::TEXT)
        } else {
            (style::BUTTON_BACKGROUND, style::TEXT)
        };
        ctx.fill_rect(area, background);

        let text_y = area.y + (area.height - ctx.font_height()) / 2;
        ctx.draw_text_centered(
            self.title(),
            area.x,
            area.width,
            text_y,
            &TextStyle::new(text).with_shadow(),
        );
    }

    fn handle_input(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::PointerMoved { pos } => {
                self.hovered = self.bounds().contains(*pos);
                false
            }
            UiEvent::PointerPressed {
                button: MouseButton::Left,
                pos,
            } if self.bounds().contains(*pos) => {
                tracing::debug!(title = self.title(), "button clicked");
                self.click();
                true
            }
            _ => false,
        }
    }
}
