//! Scrollable button list with an optional search box
//!
//! [`ButtonListScreen`] composes a [`Panel`], a [`ScrollBar`] and a
//! [`TextBox`]. Buttons come from a [`ButtonSource`], which is asked to
//! re-add everything whenever the list refreshes; while the search box holds
//! text, the panel only keeps buttons whose filter text contains the query.
//!
//! # Layout
//!
//! For a screen of `W × H` with gutter `G`, scroll bar width `S` and font
//! height `F`:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ G                                    │
//! │  ┌ search (W−2G × F+2) ────────────┐ │
//! │  └─────────────────────────────────┘ │
//! │ G                                    │
//! │  ┌ panel (W−3G−S) ───────────┐ G ┌S┐ │
//! │  │                           │   │ │ │
//! │  └───────────────────────────┘   └─┘ │
//! │ G                                    │
//! └──────────────────────────────────────┘
//! ```
//!
//! Without a search box the panel starts at `G` and is `H − 2G` tall.

use std::rc::Rc;

use panelkit_core::{DrawContext, DrawContextExt, Point, Rect, TextStyle};

use crate::config::{BorderConfig, ListScreenConfig};
use crate::event::UiEvent;
use crate::filter::{default_filter_text, ChildFilter, FilterTextFn, SearchFilter};
use crate::layout::Vertical;
use crate::localization::{Localizer, Translations, SEARCH_BOX_KEY};
use crate::panel::Panel;
use crate::screen::{LayoutContext, Screen};
use crate::scroll_bar::ScrollBar;
use crate::style;
use crate::text_box::TextBox;
use crate::widget::Widget;

/// Supplies the buttons of a [`ButtonListScreen`]
///
/// `add_buttons` is called on every refresh with an emptied panel. Just add
/// the buttons; the panel positions them.
pub trait ButtonSource {
    fn add_buttons(&mut self, panel: &mut Panel);
}

impl<F> ButtonSource for F
where
    F: FnMut(&mut Panel),
{
    fn add_buttons(&mut self, panel: &mut Panel) {
        self(panel)
    }
}

/// A screen showing a scrollable, optionally searchable list of buttons
pub struct ButtonListScreen<B: ButtonSource> {
    source: B,
    panel: Panel,
    scroll_bar: ScrollBar,
    search_box: TextBox,
    has_search_box: bool,
    title: String,
    border: BorderConfig,
    filter_text: FilterTextFn,
    gutter: i32,
    scrollbar_width: i32,
    /// Screen area and font height from the last alignment; `None` until
    /// first laid out
    laid_out_area: Option<(Rect, i32)>,
}

impl<B: ButtonSource> ButtonListScreen<B> {
    pub fn new(source: B) -> Self {
        Self::from_config(source, &ListScreenConfig::default())
    }

    pub fn from_config(source: B, config: &ListScreenConfig) -> Self {
        Self::localized(source, config, &Translations::english())
    }

    /// Like [`from_config`](Self::from_config), with user-visible strings
    /// resolved through `localizer`
    pub fn localized(source: B, config: &ListScreenConfig, localizer: &dyn Localizer) -> Self {
        let border = config.border;
        let panel = Panel::new()
            .with_layout(Vertical::new(border.vertical, border.spacing, border.vertical))
            .with_child_border(border.horizontal)
            .with_background(style::PANEL_BACKGROUND);
        let scroll_bar = ScrollBar::new()
            .with_scroll_step(config.scroll_step)
            .with_can_always_scroll(config.can_always_scroll);
        let search_box = TextBox::new().with_ghost_text(localizer.get(SEARCH_BOX_KEY));

        Self {
            source,
            panel,
            scroll_bar,
            search_box,
            has_search_box: config.search_box,
            title: config.title.clone(),
            border,
            filter_text: Rc::new(default_filter_text),
            gutter: config.gutter,
            scrollbar_width: config.scrollbar_width,
            laid_out_area: None,
        }
    }

    /// Resolve user-visible strings through `localizer`
    pub fn with_localizer(mut self, localizer: &dyn Localizer) -> Self {
        self.search_box.set_ghost_text(localizer.get(SEARCH_BOX_KEY));
        self
    }

    /// Search buttons by something other than their lowercased title
    pub fn with_filter_text<F>(mut self, filter_text: F) -> Self
    where
        F: Fn(&dyn Widget) -> String + 'static,
    {
        self.filter_text = Rc::new(filter_text);
        self
    }

    pub fn source(&self) -> &B {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut B {
        &mut self.source
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn scroll_bar(&self) -> &ScrollBar {
        &self.scroll_bar
    }

    pub fn search_box(&self) -> &TextBox {
        &self.search_box
    }

    /// Edits made here are picked up by the next routed input event or the
    /// next frame, whichever comes first
    pub fn search_box_mut(&mut self) -> &mut TextBox {
        &mut self.search_box
    }

    pub fn has_search_box(&self) -> bool {
        self.has_search_box
    }

    /// Show or hide the search box; rebuilds the list only on change
    pub fn set_has_search_box(&mut self, has_search_box: bool) {
        if self.has_search_box == has_search_box {
            return;
        }
        self.has_search_box = has_search_box;
        if !has_search_box {
            self.search_box.set_focused(false);
        }
        tracing::debug!(has_search_box, "search box toggled");

        self.refresh_widgets();
        self.realign();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the horizontal inset, vertical padding and spacing of buttons.
    /// Takes effect at the next alignment.
    pub fn set_border(&mut self, horizontal: i32, vertical: i32, spacing: i32) {
        self.border = BorderConfig {
            horizontal,
            vertical,
            spacing,
        };
        self.panel
            .set_layout(Vertical::new(vertical, spacing, vertical));
        self.panel.set_child_border(Some(horizontal));
    }

    pub fn border(&self) -> BorderConfig {
        self.border
    }

    /// Replace the search query and rebuild the list right away
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_box.set_text(text);
        self.refresh_if_edited();
    }

    pub fn clear_search(&mut self) {
        self.search_box.clear();
        self.refresh_if_edited();
    }

    /// Give the search box keyboard focus
    pub fn focus(&mut self) {
        self.search_box.set_focused(true);
    }

    /// The active search query, if filtering applies
    pub fn query(&self) -> Option<&str> {
        let text = self.search_box.text();
        (self.has_search_box && !text.is_empty()).then_some(text)
    }

    /// Rebuild the button list from the source, applying the current query
    pub fn refresh_widgets(&mut self) {
        // the rebuild below covers any pending edit
        self.search_box.take_changed();

        let filter = self.query().map(|query| {
            Box::new(SearchFilter::new(query, self.filter_text.clone())) as Box<dyn ChildFilter>
        });
        self.panel.set_filter(filter);

        let source = &mut self.source;
        self.panel.refresh_widgets(|panel| source.add_buttons(panel));
        self.sync_scroll();

        tracing::debug!(
            query = self.query().unwrap_or_default(),
            buttons = self.panel.len(),
            "button list refreshed"
        );
    }

    /// One rebuild per discrete edit of a shown search box
    fn refresh_if_edited(&mut self) {
        if self.has_search_box && self.search_box.take_changed() {
            self.refresh_widgets();
        }
    }

    fn realign(&mut self) {
        if let Some((bounds, font_height)) = self.laid_out_area {
            self.apply_layout(bounds, font_height);
        }
    }

    fn apply_layout(&mut self, bounds: Rect, font_height: i32) {
        self.laid_out_area = Some((bounds, font_height));

        let gutter = self.gutter;
        let bar_width = self.scrollbar_width;
        let (x, y) = (bounds.x, bounds.y);
        let panel_width = (bounds.width - gutter * 3 - bar_width).max(0);

        if self.has_search_box {
            self.search_box.set_pos_and_size(
                x + gutter,
                y + gutter,
                (bounds.width - gutter * 2).max(0),
                font_height + 2,
            );
            let search_height = self.search_box.bounds().height;
            self.panel.set_pos_and_size(
                x + gutter,
                y + gutter * 2 + search_height,
                panel_width,
                (bounds.height - search_height - gutter * 3).max(0),
            );
        } else {
            self.panel.set_pos_and_size(
                x + gutter,
                y + gutter,
                panel_width,
                (bounds.height - gutter * 2).max(0),
            );
        }

        self.panel.align_widgets();

        let panel = self.panel.bounds();
        self.scroll_bar.set_pos_and_size(
            x + bounds.width - gutter - bar_width,
            panel.y,
            bar_width,
            panel.height,
        );
        self.sync_scroll();
    }

    fn sync_scroll(&mut self) {
        self.scroll_bar.sync(&self.panel);
        self.panel.set_scroll_offset(self.scroll_bar.offset());
    }
}

impl<B: ButtonSource> Screen for ButtonListScreen<B> {
    fn title(&self) -> &str {
        &self.title
    }

    fn add_widgets(&mut self) {
        self.refresh_widgets();
    }

    fn align_widgets(&mut self, layout: &LayoutContext<'_>) {
        self.apply_layout(layout.bounds, layout.font_height());
    }

    fn handle_input(&mut self, event: &UiEvent) -> bool {
        if self.has_search_box {
            let consumed = self.search_box.handle_input(event);
            self.refresh_if_edited();
            if consumed {
                return true;
            }
        }

        if self.scroll_bar.handle_input(event) {
            self.sync_scroll();
            return true;
        }

        if let UiEvent::Wheel { pos, notches } = event {
            if self.panel.bounds().contains(*pos) && self.scroll_bar.scroll_wheel(*notches) {
                self.sync_scroll();
                return true;
            }
        }

        self.panel.handle_input(event)
    }

    fn update(&mut self) {
        self.refresh_if_edited();
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        let Some((bounds, _)) = self.laid_out_area else {
            return;
        };

        ctx.fill_rect(bounds, style::SCREEN_BACKGROUND);
        if !self.title.is_empty() {
            ctx.draw_text_centered(
                &self.title,
                bounds.x,
                bounds.width,
                bounds.y - ctx.font_height() - 2,
                &TextStyle::new(style::TEXT).with_shadow(),
            );
        }

        self.panel.draw(ctx, Point::ZERO);
        self.scroll_bar.draw(ctx, Point::ZERO);
        if self.has_search_box {
            self.search_box.draw(ctx, Point::ZERO);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Button;
    use panelkit_core::{FixedMetrics, RecordingContext};
    use panelkit_platform::MouseButton;

    fn fruit(panel: &mut Panel) {
        for name in ["Apple", "Apricot", "Banana", "Cherry"] {
            panel.add(Button::new(name));
        }
    }

    fn titles<B: ButtonSource>(screen: &ButtonListScreen<B>) -> Vec<String> {
        screen
            .panel()
            .widgets()
            .iter()
            .map(|w| w.title().to_string())
            .collect()
    }

    fn opened<B: ButtonSource>(mut screen: ButtonListScreen<B>) -> ButtonListScreen<B> {
        let metrics = FixedMetrics::default();
        screen.add_widgets();
        screen.align_widgets(&LayoutContext {
            bounds: Rect::new(0, 0, 300, 200),
            metrics: &metrics,
        });
        screen
    }

    #[test]
    fn test_query_filters_buttons() {
        let mut screen = opened(ButtonListScreen::new(fruit));
        screen.set_has_search_box(true);
        screen.focus();

        screen.handle_input(&UiEvent::Char('A'));
        screen.handle_input(&UiEvent::Char('p'));
        assert_eq!(titles(&screen), vec!["Apple", "Apricot"]);

        screen.handle_input(&UiEvent::Char('r'));
        assert_eq!(titles(&screen), vec!["Apricot"]);
    }

    #[test]
    fn test_query_ignored_without_search_box() {
        let mut screen = opened(ButtonListScreen::new(fruit));
        screen.search_box_mut().set_text("zzz");
        screen.refresh_widgets();
        assert_eq!(screen.query(), None);
        assert_eq!(screen.panel().len(), 4);
    }

    #[test]
    fn test_custom_filter_text() {
        let mut screen =
            opened(ButtonListScreen::new(fruit).with_filter_text(|w| w.title().chars().rev().collect()));
        screen.set_has_search_box(true);
        screen.search_box_mut().set_text("ELPPA");
        screen.refresh_widgets();
        assert_eq!(titles(&screen), vec!["Apple"]);
    }

    #[test]
    fn test_set_search_text_refreshes_immediately() {
        let mut screen = opened(ButtonListScreen::new(fruit));
        screen.set_has_search_box(true);

        screen.set_search_text("an");
        assert_eq!(titles(&screen), vec!["Banana"]);

        screen.clear_search();
        assert_eq!(screen.panel().len(), 4);
    }

    #[test]
    fn test_localized_ghost_text() {
        let german = Translations::new().with(SEARCH_BOX_KEY, "Suchen...");
        let screen = ButtonListScreen::localized(fruit, &ListScreenConfig::default(), &german);
        assert_eq!(screen.search_box().ghost_text(), "Suchen...");
    }

    #[test]
    fn test_toggle_search_box_realigns() {
        let mut screen = opened(ButtonListScreen::new(fruit));
        assert_eq!(screen.panel().bounds(), Rect::new(6, 6, 266, 188));

        screen.set_has_search_box(true);
        assert_eq!(screen.search_box().bounds(), Rect::new(6, 6, 288, 11));
        assert_eq!(screen.panel().bounds(), Rect::new(6, 23, 266, 171));
        assert_eq!(screen.scroll_bar().bounds(), Rect::new(278, 23, 16, 171));
    }

    #[test]
    fn test_unfocused_search_box_passes_clicks_through() {
        let clicked = Rc::new(std::cell::Cell::new(false));
        let flag = clicked.clone();
        let mut screen = opened(ButtonListScreen::new(move |panel: &mut Panel| {
            let flag = flag.clone();
            panel.add(Button::new("Only").on_click(move || flag.set(true)));
        }));
        screen.set_has_search_box(true);

        // first button sits at panel-local y 0, panel starts at y 23
        let press = UiEvent::PointerPressed {
            button: MouseButton::Left,
            pos: Point::new(20, 30),
        };
        assert!(screen.handle_input(&press));
        assert!(clicked.get());
        assert!(!screen.search_box().is_focused());
    }

    #[test]
    fn test_wheel_over_panel_scrolls() {
        let mut screen = opened(ButtonListScreen::new(|panel: &mut Panel| {
            for i in 0..20 {
                panel.add(Button::new(format!("item {i}")));
            }
        }));
        // 20 buttons of 20px = 400 content in a 188px viewport
        assert_eq!(screen.panel().content_height(), 400);

        let wheel = UiEvent::Wheel {
            pos: Point::new(50, 50),
            notches: -3,
        };
        assert!(screen.handle_input(&wheel));
        assert_eq!(screen.scroll_bar().offset(), 60);
        assert_eq!(screen.panel().scroll_offset(), 60);
    }

    #[test]
    fn test_title_drawn_above_screen() {
        let mut screen = opened(ButtonListScreen::new(fruit));
        let mut ctx = RecordingContext::new();
        screen.draw(&mut ctx);
        assert!(ctx.find_text("").is_none());

        screen.set_title("Fruit");
        ctx.clear();
        screen.draw(&mut ctx);
        let (origin, style) = ctx.find_text("Fruit").expect("title drawn");
        assert_eq!(origin, Point::new((300 - 30) / 2, -9 - 2));
        assert!(style.shadow);
    }
}
