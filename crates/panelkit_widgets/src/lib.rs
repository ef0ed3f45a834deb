//! panelkit Widget Library
//!
//! Retained-mode widgets for in-game GUI screens, plus the composite
//! [`ButtonListScreen`]: a scrollable list of buttons with an optional
//! search box.
//!
//! # Architecture
//!
//! - **Widgets** are trait objects ([`Widget`]) with integer bounds relative
//!   to their parent. [`Panel`] owns children and exposes the optional
//!   [`Container`] capability.
//! - **Layouts** ([`WidgetLayout`]) position a panel's children; [`Vertical`]
//!   stacks them.
//! - **Screens** ([`Screen`]) own a widget tree and are driven by a
//!   [`ScreenHost`] from host events: all input of a frame is handled before
//!   the frame is drawn.
//!
//! Everything runs on the host's UI thread. The only process-wide state is
//! the [`framework`] observer registry.
//!
//! # Example
//!
//! ```
//! use panelkit_core::{FixedMetrics, RecordingContext, Size};
//! use panelkit_widgets::prelude::*;
//!
//! let screen = ButtonListScreen::new(|panel: &mut Panel| {
//!     for name in ["Iron Ingot", "Gold Ingot", "Stick"] {
//!         panel.add(Button::new(name));
//!     }
//! });
//!
//! let mut host = ScreenHost::new(screen, FixedMetrics::default());
//! host.open(Size::new(300, 200));
//! host.screen_mut().set_has_search_box(true);
//!
//! let mut ctx = RecordingContext::new();
//! host.frame(&mut ctx);
//! assert!(ctx.texts().contains(&"Stick"));
//! ```

pub mod button;
pub mod button_list;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod framework;
pub mod layout;
pub mod localization;
pub mod panel;
pub mod screen;
pub mod scroll_bar;
pub mod style;
pub mod text_box;
pub mod widget;

pub use button::Button;
pub use button_list::{ButtonListScreen, ButtonSource};
pub use config::{BorderConfig, ListScreenConfig};
pub use error::{ConfigError, FrameworkError};
pub use event::UiEvent;
pub use filter::{ChildFilter, FilterTextFn, SearchFilter};
pub use layout::{Vertical, WidgetLayout};
pub use localization::{Localizer, Translations};
pub use panel::Panel;
pub use screen::{LayoutContext, Screen, ScreenHost, ScreenStage};
pub use scroll_bar::{ScrollBar, ScrollBarState, Scrollable};
pub use text_box::TextBox;
pub use widget::{Container, Widget, WidgetBase, WidgetId};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::button::Button;
    pub use crate::button_list::{ButtonListScreen, ButtonSource};
    pub use crate::config::ListScreenConfig;
    pub use crate::event::UiEvent;
    pub use crate::layout::{Vertical, WidgetLayout};
    pub use crate::panel::Panel;
    pub use crate::screen::{Screen, ScreenHost};
    pub use crate::scroll_bar::ScrollBar;
    pub use crate::text_box::TextBox;
    pub use crate::widget::{Container, Widget, WidgetId};
}
