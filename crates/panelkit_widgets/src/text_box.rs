//! Single-line text box
//!
//! The TextBox widget provides:
//! - Editable text with a character cursor
//! - Ghost (placeholder) text, drawn whenever the text is empty
//! - A change hook invoked exactly once per discrete edit
//! - Click-to-focus; clicking elsewhere drops focus
//!
//! A paste arrives as one [`UiEvent::Text`] and counts as a single edit no
//! matter how many characters it inserts. Edits that leave the text
//! unchanged (backspace at the start, a paste filtered down to nothing)
//! do not notify.

use panelkit_core::{DrawContext, DrawContextExt, Point, Rect, TextStyle};
use panelkit_platform::{Key, MouseButton};

use crate::event::UiEvent;
use crate::style;
use crate::widget::{Widget, WidgetBase};

/// Text box widget
pub struct TextBox {
    base: WidgetBase,
    text: String,
    ghost_text: String,
    /// Cursor position in characters
    cursor: usize,
    /// Maximum length in characters (0 = unlimited)
    max_length: usize,
    on_text_changed: Option<Box<dyn FnMut(&str)>>,
    /// Set on every edit, cleared by `take_changed`
    changed: bool,
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBox {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::default(),
            text: String::new(),
            ghost_text: String::new(),
            cursor: 0,
            max_length: 0,
            on_text_changed: None,
            changed: false,
        }
    }

    /// Set the placeholder shown while the text is empty
    pub fn with_ghost_text(mut self, ghost: impl Into<String>) -> Self {
        self.ghost_text = ghost.into();
        self
    }

    /// Limit the text to `max` characters (0 = unlimited)
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Set the change hook
    pub fn on_text_changed<F: FnMut(&str) + 'static>(mut self, callback: F) -> Self {
        self.on_text_changed = Some(Box::new(callback));
        self
    }

    pub fn set_on_text_changed<F: FnMut(&str) + 'static>(&mut self, callback: F) {
        self.on_text_changed = Some(Box::new(callback));
    }

    pub fn ghost_text(&self) -> &str {
        &self.ghost_text
    }

    pub fn set_ghost_text(&mut self, ghost: impl Into<String>) {
        self.ghost_text = ghost.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text (one edit if it differs)
    pub fn set_text(&mut self, text: impl Into<String>) {
        let mut text: String = text.into();
        if self.max_length > 0 {
            text = text.chars().take(self.max_length).collect();
        }
        if text == self.text {
            return;
        }
        self.text = text;
        self.cursor = self.char_count();
        self.commit_edit();
    }

    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether an edit happened since the last call (and clear the flag)
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Whether the ghost text is drawn instead of the value
    pub fn shows_ghost_text(&self) -> bool {
        self.text.is_empty() && !self.ghost_text.is_empty()
    }

    /// Insert at the cursor as a single edit. Returns true if anything changed.
    pub fn insert(&mut self, input: &str) -> bool {
        let mut filtered: String = input.chars().filter(|c| !c.is_control()).collect();

        if self.max_length > 0 {
            let allowed = self.max_length.saturating_sub(self.char_count());
            filtered = filtered.chars().take(allowed).collect();
        }
        if filtered.is_empty() {
            return false;
        }

        let byte_pos = self.byte_pos(self.cursor);
        self.text.insert_str(byte_pos, &filtered);
        self.cursor += filtered.chars().count();
        self.commit_edit();
        true
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_pos(self.cursor - 1);
        let end = self.byte_pos(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        self.commit_edit();
        true
    }

    /// Delete the character after the cursor (delete key)
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let start = self.byte_pos(self.cursor);
        let end = self.byte_pos(self.cursor + 1);
        self.text.replace_range(start..end, "");
        self.commit_edit();
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn commit_edit(&mut self) {
        self.changed = true;
        if let Some(callback) = self.on_text_changed.as_mut() {
            callback(&self.text);
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Convert character index to byte index
    fn byte_pos(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn handle_key(&mut self, key: &Key, command: bool) -> bool {
        match key {
            Key::Backspace if command => {
                self.clear();
            }
            Key::Backspace => {
                self.delete_backward();
            }
            Key::Delete => {
                self.delete_forward();
            }
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Home => self.move_to_start(),
            Key::End => self.move_to_end(),
            Key::Escape | Key::Enter => self.set_focused(false),
            _ => return false,
        }
        true
    }
}

impl Widget for TextBox {
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
        ctx.fill_rect(area, style::TEXT_BOX_BACKGROUND);
        let border = if self.is_focused() {
            style::TEXT_BOX_BORDER_FOCUSED
        } else {
            style::TEXT_BOX_BORDER
        };
        ctx.outline_rect(area, border);

        let text_x = area.x + style::TEXT_PADDING;
        let text_y = area.y + (area.height - ctx.font_height()) / 2 + 1;

        ctx.push_clip(area.inset(1, 1));
        if self.shows_ghost_text() {
            ctx.draw_text(
                &self.ghost_text,
                Point::new(text_x, text_y),
                &TextStyle::new(style::GHOST_TEXT),
            );
        } else if !self.text.is_empty() {
            ctx.draw_text(&self.text, Point::new(text_x, text_y), &TextStyle::new(style::TEXT));
        }

        if self.is_focused() {
            let prefix: String = self.text.chars().take(self.cursor).collect();
            let cursor_x = text_x + ctx.string_width(&prefix);
            ctx.fill_rect(
                Rect::new(cursor_x, text_y - 1, 1, ctx.font_height() + 1),
                style::TEXT,
            );
        }
        ctx.pop_clip();
    }

    fn handle_input(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::PointerPressed { button, pos } => {
                let inside = self.bounds().contains(*pos);
                if inside && *button == MouseButton::Right {
                    self.clear();
                }
                self.set_focused(inside);
                if inside {
                    self.move_to_end();
                }
                inside
            }
            _ if !self.is_focused() => false,
            UiEvent::Char(c) => {
                self.insert(c.encode_utf8(&mut [0; 4]));
                true
            }
            UiEvent::Text(text) => {
                self.insert(text);
                true
            }
            UiEvent::Key { key, modifiers } => self.handle_key(key, modifiers.command()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use panelkit_core::RecordingContext;
    use panelkit_platform::Modifiers;

    fn focused_box() -> (TextBox, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let mut text_box = TextBox::new()
            .with_ghost_text("Search...")
            .on_text_changed(move |text| sink.borrow_mut().push(text.to_string()));
        text_box.set_pos_and_size(0, 0, 100, 11);
        text_box.set_focused(true);
        (text_box, log)
    }

    fn key(key: Key) -> UiEvent {
        UiEvent::Key {
            key,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_each_char_is_an_edit() {
        let (mut text_box, log) = focused_box();
        for c in "abc".chars() {
            assert!(text_box.handle_input(&UiEvent::Char(c)));
        }
        assert_eq!(text_box.text(), "abc");
        assert_eq!(*log.borrow(), vec!["a", "ab", "abc"]);
    }

    #[test]
    fn test_paste_is_one_edit() {
        let (mut text_box, log) = focused_box();
        assert!(text_box.handle_input(&UiEvent::Text("xyz".to_string())));
        assert_eq!(log.borrow().len(), 1);
        assert!(text_box.take_changed());
        assert!(!text_box.take_changed());
    }

    #[test]
    fn test_noop_edits_do_not_notify() {
        let (mut text_box, log) = focused_box();
        text_box.handle_input(&key(Key::Backspace));
        text_box.handle_input(&key(Key::Delete));
        text_box.handle_input(&UiEvent::Text("\n\t".to_string()));
        text_box.set_text("");
        assert!(log.borrow().is_empty());
        assert!(!text_box.take_changed());
    }

    #[test]
    fn test_cursor_editing() {
        let (mut text_box, _) = focused_box();
        text_box.insert("héllo");
        text_box.move_left();
        text_box.move_left();
        text_box.delete_backward();
        assert_eq!(text_box.text(), "hélo");
        assert_eq!(text_box.cursor(), 2);

        text_box.move_to_start();
        text_box.delete_forward();
        assert_eq!(text_box.text(), "élo");

        text_box.move_to_end();
        text_box.insert("!");
        assert_eq!(text_box.text(), "élo!");
    }

    #[test]
    fn test_max_length_truncates_paste() {
        let (text_box, log) = focused_box();
        let mut text_box = text_box.with_max_length(4);
        text_box.insert("ab");
        text_box.insert("cdef");
        assert_eq!(text_box.text(), "abcd");
        assert!(!text_box.insert("g"));
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_unfocused_box_ignores_typing() {
        let (mut text_box, log) = focused_box();
        text_box.set_focused(false);
        assert!(!text_box.handle_input(&UiEvent::Char('a')));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_click_focus() {
        let (mut text_box, _) = focused_box();
        let outside = UiEvent::PointerPressed {
            button: MouseButton::Left,
            pos: Point::new(150, 5),
        };
        assert!(!text_box.handle_input(&outside));
        assert!(!text_box.is_focused());

        let inside = UiEvent::PointerPressed {
            button: MouseButton::Left,
            pos: Point::new(50, 5),
        };
        assert!(text_box.handle_input(&inside));
        assert!(text_box.is_focused());
    }

    #[test]
    fn test_right_click_clears() {
        let (mut text_box, log) = focused_box();
        text_box.insert("abc");
        text_box.handle_input(&UiEvent::PointerPressed {
            button: MouseButton::Right,
            pos: Point::new(10, 5),
        });
        assert_eq!(text_box.text(), "");
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_ghost_text_when_empty_even_if_focused() {
        let (mut text_box, log) = focused_box();
        let mut ctx = RecordingContext::new();
        text_box.draw(&mut ctx, Point::ZERO);
        assert_eq!(ctx.texts(), vec!["Search..."]);

        text_box.set_focused(false);
        ctx.clear();
        text_box.draw(&mut ctx, Point::ZERO);
        assert_eq!(ctx.texts(), vec!["Search..."]);

        text_box.insert("a");
        ctx.clear();
        text_box.draw(&mut ctx, Point::ZERO);
        assert_eq!(ctx.texts(), vec!["a"]);

        // drawing never counts as an edit
        assert_eq!(log.borrow().len(), 1);
    }
}
