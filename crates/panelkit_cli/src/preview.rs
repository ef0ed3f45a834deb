//! Headless rendering of a button list screen

use std::fmt;

use panelkit_core::{DrawCommand, FixedMetrics, Rect, RecordingContext, Size};
use panelkit_platform::{ControlFlow, Event, InputEvent};
use panelkit_widgets::prelude::*;

/// What to render
pub struct PreviewOptions {
    pub items: Vec<String>,
    pub size: Size,
    pub config: ListScreenConfig,
    /// Typed into the search box before the first frame
    pub search: Option<String>,
    /// Host events replayed after opening, before the final frame
    pub script: Vec<Event>,
}

/// Where everything ended up after the final frame
pub struct LayoutReport {
    pub panel: Rect,
    pub scroll_bar: Rect,
    pub search_box: Option<Rect>,
    pub query: Option<String>,
    pub content_height: i32,
    pub scroll_offset: i32,
    pub buttons: Vec<(String, Rect)>,
    pub closed: bool,
}

pub struct Preview {
    pub layout: LayoutReport,
    pub commands: Vec<DrawCommand>,
}

pub fn render(options: PreviewOptions) -> Preview {
    let items = options.items;
    let source = move |panel: &mut Panel| {
        for item in &items {
            panel.add(Button::new(item.as_str()));
        }
    };

    let mut config = options.config;
    config.search_box |= options.search.is_some();
    let screen = ButtonListScreen::from_config(source, &config);
    let mut host = ScreenHost::new(screen, FixedMetrics::default());
    host.open(options.size);

    let mut ctx = RecordingContext::new();
    let mut events = Vec::new();
    if let Some(query) = options.search {
        host.screen_mut().focus();
        events.push(Event::Input(InputEvent::Text { text: query }));
    }
    events.extend(options.script);

    let mut flow = ControlFlow::Continue;
    for event in events {
        flow = host.handle_event(event, &mut ctx);
        if flow == ControlFlow::Exit {
            tracing::info!("screen closed by script");
            break;
        }
    }

    // only the final frame is reported
    ctx.clear();
    if flow == ControlFlow::Continue {
        host.frame(&mut ctx);
    }

    let screen = host.screen();
    let panel = screen.panel();
    let buttons = panel
        .widgets()
        .iter()
        .map(|w| (w.title().to_string(), w.bounds()))
        .collect();
    let layout = LayoutReport {
        panel: panel.bounds(),
        scroll_bar: screen.scroll_bar().bounds(),
        search_box: screen.has_search_box().then(|| screen.search_box().bounds()),
        query: screen.query().map(str::to_string),
        content_height: panel.content_height(),
        scroll_offset: panel.scroll_offset(),
        buttons,
        closed: flow == ControlFlow::Exit,
    };

    Preview {
        layout,
        commands: ctx.take_commands(),
    }
}

struct Bounds(Rect);

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        write!(f, "({}, {}) {}x{}", r.x, r.y, r.width, r.height)
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(search) = self.search_box {
            writeln!(f, "search box  {}", Bounds(search))?;
        }
        if let Some(query) = &self.query {
            writeln!(f, "query       {query:?}")?;
        }
        writeln!(f, "panel       {}", Bounds(self.panel))?;
        writeln!(f, "scroll bar  {}", Bounds(self.scroll_bar))?;
        writeln!(
            f,
            "content     {}px, offset {}",
            self.content_height, self.scroll_offset
        )?;
        writeln!(f, "buttons     {}", self.buttons.len())?;
        for (title, bounds) in &self.buttons {
            writeln!(f, "  {title:<24} {}", Bounds(*bounds))?;
        }
        if self.closed {
            writeln!(f, "(screen closed)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit_platform::parse_script;

    fn options(items: &[&str]) -> PreviewOptions {
        PreviewOptions {
            items: items.iter().map(|s| s.to_string()).collect(),
            size: Size::new(300, 200),
            config: ListScreenConfig::default(),
            search: None,
            script: Vec::new(),
        }
    }

    #[test]
    fn test_plain_preview() {
        let preview = render(options(&["Iron Ingot", "Stick"]));
        let layout = &preview.layout;

        assert_eq!(layout.panel, Rect::new(6, 6, 266, 188));
        assert_eq!(layout.search_box, None);
        assert_eq!(layout.buttons.len(), 2);
        assert!(!preview.commands.is_empty());

        let text = layout.to_string();
        assert!(text.contains("panel       (6, 6) 266x188"));
        assert!(text.contains("Stick"));
    }

    #[test]
    fn test_search_enables_box_and_filters() {
        let mut opts = options(&["Iron Ingot", "Gold Ingot", "Stick"]);
        opts.search = Some("INGOT".to_string());
        let preview = render(opts);

        assert_eq!(preview.layout.search_box, Some(Rect::new(6, 6, 288, 11)));
        assert_eq!(preview.layout.query.as_deref(), Some("INGOT"));
        let titles: Vec<&str> = preview.layout.buttons.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, vec!["Iron Ingot", "Gold Ingot"]);
    }

    #[test]
    fn test_script_can_close_the_screen() {
        let mut opts = options(&["a"]);
        opts.script = parse_script("frame\nclose").unwrap();
        let preview = render(opts);

        assert!(preview.layout.closed);
        assert!(preview.commands.is_empty());
    }
}
