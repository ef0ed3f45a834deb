//! Screens and the host adapter that drives them
//!
//! A [`Screen`] is the root of a widget tree. It moves through a fixed
//! lifecycle:
//!
//! ```text
//! Constructed ──open──▶ Populated ──align──▶ LaidOut ──▶ Active ──close──▶ Closed
//!                                              ▲            │
//!                                              └──resize────┘
//! ```
//!
//! [`ScreenHost`] adapts host [`Event`]s to that lifecycle. Input is buffered
//! as it arrives and dispatched at the next [`Event::Frame`], before the
//! screen draws, so a frame always renders the state after all of its input.

use panelkit_core::{DrawContext, Point, Rect, Size, TextMetrics};
use panelkit_platform::{ControlFlow, Event, InputEvent, Key, WindowEvent};

use crate::event::UiEvent;

/// Geometry handed to [`Screen::align_widgets`]
pub struct LayoutContext<'a> {
    /// Area the screen occupies, in window coordinates
    pub bounds: Rect,
    /// Font measurements of the host
    pub metrics: &'a dyn TextMetrics,
}

impl LayoutContext<'_> {
    pub fn font_height(&self) -> i32 {
        self.metrics.font_height()
    }
}

/// Root of a widget tree
pub trait Screen {
    fn title(&self) -> &str;

    /// Create the screen's widgets. Called once when the screen opens.
    fn add_widgets(&mut self);

    /// Position every widget for the given area. Called on open and on
    /// every resize.
    fn align_widgets(&mut self, layout: &LayoutContext<'_>);

    /// Route an event in window coordinates; returns true if consumed
    fn handle_input(&mut self, event: &UiEvent) -> bool;

    /// Bring derived state up to date. Called every frame after input is
    /// dispatched and before [`draw`](Self::draw).
    fn update(&mut self) {}

    fn draw(&self, ctx: &mut dyn DrawContext);

    /// Whether an unconsumed Escape closes the screen
    fn closes_on_escape(&self) -> bool {
        true
    }

    fn on_closed(&mut self) {}
}

/// Lifecycle stage of a hosted screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScreenStage {
    Constructed,
    Populated,
    LaidOut,
    Active,
    Closed,
}

/// Drives a [`Screen`] from host events
pub struct ScreenHost<S: Screen> {
    screen: S,
    stage: ScreenStage,
    metrics: Box<dyn TextMetrics>,
    window_size: Size,
    /// Fixed screen size centered in the window; `None` fills the window
    gui_size: Option<Size>,
    cursor: Point,
    pending: Vec<UiEvent>,
}

impl<S: Screen> ScreenHost<S> {
    pub fn new(screen: S, metrics: impl TextMetrics + 'static) -> Self {
        Self {
            screen,
            stage: ScreenStage::Constructed,
            metrics: Box::new(metrics),
            window_size: Size::ZERO,
            gui_size: None,
            cursor: Point::ZERO,
            pending: Vec::new(),
        }
    }

    /// Give the screen a fixed size, centered in the window
    pub fn with_gui_size(mut self, size: Size) -> Self {
        self.gui_size = Some(size);
        self
    }

    pub fn stage(&self) -> ScreenStage {
        self.stage
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Last known pointer position in window coordinates
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Area the screen occupies within the window
    pub fn screen_bounds(&self) -> Rect {
        let window = self.window_size;
        match self.gui_size {
            Some(gui) => {
                let width = gui.width.min(window.width);
                let height = gui.height.min(window.height);
                Rect::new(
                    (window.width - width) / 2,
                    (window.height - height) / 2,
                    width,
                    height,
                )
            }
            None => window.to_rect(),
        }
    }

    /// Populate and lay out the screen for a window of `size`
    pub fn open(&mut self, size: Size) {
        if self.stage != ScreenStage::Constructed {
            tracing::warn!(stage = ?self.stage, "screen is already open");
            return;
        }

        self.screen.add_widgets();
        self.stage = ScreenStage::Populated;
        self.resize(size);
        self.stage = ScreenStage::Active;
        tracing::debug!(title = self.screen.title(), "screen opened");
    }

    /// Re-align for a new window size
    pub fn resize(&mut self, size: Size) {
        if matches!(self.stage, ScreenStage::Constructed | ScreenStage::Closed) {
            return;
        }

        self.window_size = size;
        let layout = LayoutContext {
            bounds: self.screen_bounds(),
            metrics: self.metrics.as_ref(),
        };
        self.screen.align_widgets(&layout);
        if self.stage == ScreenStage::Populated {
            self.stage = ScreenStage::LaidOut;
        }
        tracing::debug!(width = size.width, height = size.height, "screen aligned");
    }

    /// Handle one host event
    pub fn handle_event(&mut self, event: Event, ctx: &mut dyn DrawContext) -> ControlFlow {
        if self.stage == ScreenStage::Closed {
            return ControlFlow::Exit;
        }

        match event {
            Event::Window(WindowEvent::Resized { width, height }) => {
                let size = Size::new(to_i32(width), to_i32(height));
                if self.stage == ScreenStage::Constructed {
                    self.open(size);
                } else {
                    self.resize(size);
                }
                ControlFlow::Continue
            }
            Event::Window(WindowEvent::CloseRequested) => {
                self.close();
                ControlFlow::Exit
            }
            Event::Window(WindowEvent::Focused(_)) => ControlFlow::Continue,
            Event::Input(input) => {
                self.queue_input(&input);
                ControlFlow::Continue
            }
            Event::Frame => self.frame(ctx),
        }
    }

    /// Buffer a host input event for the next frame
    pub fn queue_input(&mut self, input: &InputEvent) {
        if let InputEvent::Mouse(mouse) = input {
            if let Some((x, y)) = mouse.position() {
                self.cursor = Point::new(x.floor() as i32, y.floor() as i32);
            }
        }
        if let Some(event) = UiEvent::from_input(input, self.cursor) {
            self.pending.push(event);
        }
    }

    /// Dispatch buffered input, then draw
    pub fn frame(&mut self, ctx: &mut dyn DrawContext) -> ControlFlow {
        if self.stage != ScreenStage::Active {
            self.pending.clear();
            return if self.stage == ScreenStage::Closed {
                ControlFlow::Exit
            } else {
                ControlFlow::Continue
            };
        }

        for event in std::mem::take(&mut self.pending) {
            let consumed = self.screen.handle_input(&event);
            tracing::trace!(?event, consumed, "dispatched");

            let escape = matches!(event, UiEvent::Key { key: Key::Escape, .. });
            if escape && !consumed && self.screen.closes_on_escape() {
                self.close();
                return ControlFlow::Exit;
            }
        }

        self.screen.update();
        self.screen.draw(ctx);
        ControlFlow::Continue
    }

    pub fn close(&mut self) {
        if self.stage == ScreenStage::Closed {
            return;
        }
        self.pending.clear();
        self.screen.on_closed();
        self.stage = ScreenStage::Closed;
        tracing::debug!(title = self.screen.title(), "screen closed");
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit_core::{FixedMetrics, RecordingContext};
    use panelkit_platform::{KeyboardEvent, MouseButton, MouseEvent};

    #[derive(Default)]
    struct Recorder {
        populated: usize,
        aligned: Vec<Rect>,
        font_height: i32,
        seen: Vec<UiEvent>,
        /// Events seen when each update ran
        updates: Vec<usize>,
        closed: bool,
    }

    impl Screen for Recorder {
        fn title(&self) -> &str {
            "recorder"
        }

        fn add_widgets(&mut self) {
            self.populated += 1;
        }

        fn align_widgets(&mut self, layout: &LayoutContext<'_>) {
            self.aligned.push(layout.bounds);
            self.font_height = layout.font_height();
        }

        fn handle_input(&mut self, event: &UiEvent) -> bool {
            self.seen.push(event.clone());
            // consume everything except Escape
            !matches!(event, UiEvent::Key { key: Key::Escape, .. })
        }

        fn update(&mut self) {
            self.updates.push(self.seen.len());
        }

        fn draw(&self, _ctx: &mut dyn DrawContext) {}

        fn on_closed(&mut self) {
            self.closed = true;
        }
    }

    fn resized(width: u32, height: u32) -> Event {
        Event::Window(WindowEvent::Resized { width, height })
    }

    #[test]
    fn test_lifecycle() {
        let mut host = ScreenHost::new(Recorder::default(), FixedMetrics::default());
        let mut ctx = RecordingContext::new();
        assert_eq!(host.stage(), ScreenStage::Constructed);

        assert_eq!(host.handle_event(resized(300, 200), &mut ctx), ControlFlow::Continue);
        assert_eq!(host.stage(), ScreenStage::Active);
        assert_eq!(host.screen().populated, 1);
        assert_eq!(host.screen().aligned, vec![Rect::new(0, 0, 300, 200)]);
        assert_eq!(host.screen().font_height, 9);

        host.handle_event(resized(400, 300), &mut ctx);
        assert_eq!(host.screen().populated, 1);
        assert_eq!(host.screen().aligned.len(), 2);

        assert_eq!(
            host.handle_event(Event::Window(WindowEvent::CloseRequested), &mut ctx),
            ControlFlow::Exit
        );
        assert!(host.screen().closed);
        assert_eq!(host.handle_event(Event::Frame, &mut ctx), ControlFlow::Exit);
    }

    #[test]
    fn test_input_waits_for_frame() {
        let mut host = ScreenHost::new(Recorder::default(), FixedMetrics::default());
        let mut ctx = RecordingContext::new();
        host.open(Size::new(100, 100));

        host.handle_event(
            Event::Input(InputEvent::Mouse(MouseEvent::Moved { x: 12.5, y: 40.0 })),
            &mut ctx,
        );
        host.handle_event(
            Event::Input(InputEvent::Scroll {
                delta_x: 0.0,
                delta_y: 1.0,
            }),
            &mut ctx,
        );
        assert!(host.screen().seen.is_empty());
        assert!(host.screen().updates.is_empty());

        host.handle_event(Event::Frame, &mut ctx);
        assert_eq!(
            host.screen().seen,
            vec![
                UiEvent::PointerMoved {
                    pos: Point::new(12, 40)
                },
                UiEvent::Wheel {
                    pos: Point::new(12, 40),
                    notches: 1
                },
            ]
        );
        assert_eq!(host.cursor(), Point::new(12, 40));
        // update runs once, after both events
        assert_eq!(host.screen().updates, vec![2]);
    }

    #[test]
    fn test_unconsumed_escape_closes() {
        let mut host = ScreenHost::new(Recorder::default(), FixedMetrics::default());
        let mut ctx = RecordingContext::new();
        host.open(Size::new(100, 100));

        host.queue_input(&InputEvent::Keyboard(KeyboardEvent::pressed(Key::Escape)));
        assert_eq!(host.frame(&mut ctx), ControlFlow::Exit);
        assert_eq!(host.stage(), ScreenStage::Closed);
    }

    #[test]
    fn test_gui_size_is_centered() {
        let mut host = ScreenHost::new(Recorder::default(), FixedMetrics::default())
            .with_gui_size(Size::new(176, 166));
        host.open(Size::new(400, 300));
        assert_eq!(host.screen_bounds(), Rect::new(112, 67, 176, 166));

        // a window smaller than the gui clamps to the window
        host.resize(Size::new(100, 100));
        assert_eq!(host.screen_bounds(), Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn test_events_before_open_are_dropped() {
        let mut host = ScreenHost::new(Recorder::default(), FixedMetrics::default());
        let mut ctx = RecordingContext::new();
        host.queue_input(&InputEvent::Mouse(MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x: 1.0,
            y: 1.0,
        }));
        assert_eq!(host.frame(&mut ctx), ControlFlow::Continue);

        assert!(host.screen().updates.is_empty());

        host.open(Size::new(50, 50));
        host.frame(&mut ctx);
        assert!(host.screen().seen.is_empty());
        assert_eq!(host.screen().updates, vec![0]);
    }
}
