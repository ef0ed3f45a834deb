//! Plain-text event scripts
//!
//! Headless tools replay host input from a small line-oriented script.
//! One command per line; blank lines and comments are ignored. A `#` opens
//! a comment at the start of a line or after whitespace, so `type c#` types
//! `c#`; write `\#` for a literal `#` anywhere.
//!
//! ```text
//! resize 300 200
//! move 20 30
//! press 20 30          # left button
//! release 20 30
//! wheel -1             # one notch toward the user
//! type abc             # one key press per character
//! paste abc            # a single committed-text edit
//! key backspace
//! frame
//! close
//! ```

use crate::error::{PlatformError, Result};
use crate::event::{Event, WindowEvent};
use crate::input::{InputEvent, Key, KeyboardEvent, MouseButton, MouseEvent};

/// Parse a whole script into events
pub fn parse_script(source: &str) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = strip_comment(raw);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        parse_line(line, &mut events).map_err(|message| PlatformError::InvalidScript {
            line: index + 1,
            message,
        })?;
    }
    Ok(events)
}

fn strip_comment(raw: &str) -> String {
    let mut line = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut after_space = true;
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'#') => {
                chars.next();
                line.push('#');
                after_space = false;
            }
            '#' if after_space => break,
            _ => {
                line.push(c);
                after_space = c.is_whitespace();
            }
        }
    }
    line
}

fn parse_line(line: &str, events: &mut Vec<Event>) -> std::result::Result<(), String> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "resize" => {
            let [width, height] = numbers::<u32, 2>(rest)?;
            events.push(Event::Window(WindowEvent::Resized { width, height }));
        }
        "move" => {
            let [x, y] = numbers::<f32, 2>(rest)?;
            events.push(mouse(MouseEvent::Moved { x, y }));
        }
        "press" => {
            let [x, y] = numbers::<f32, 2>(rest)?;
            events.push(mouse(MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            }));
        }
        "release" => {
            let [x, y] = numbers::<f32, 2>(rest)?;
            events.push(mouse(MouseEvent::ButtonReleased {
                button: MouseButton::Left,
                x,
                y,
            }));
        }
        "wheel" => {
            let [delta_y] = numbers::<f32, 1>(rest)?;
            events.push(Event::Input(InputEvent::Scroll {
                delta_x: 0.0,
                delta_y,
            }));
        }
        "type" => {
            if rest.is_empty() {
                return Err("`type` needs text".to_string());
            }
            events.extend(
                rest.chars()
                    .map(|c| Event::Input(InputEvent::Keyboard(KeyboardEvent::pressed(Key::Char(c))))),
            );
        }
        "paste" => {
            events.push(Event::Input(InputEvent::Text {
                text: rest.to_string(),
            }));
        }
        "key" => {
            let key = named_key(rest).ok_or_else(|| format!("unknown key `{rest}`"))?;
            events.push(Event::Input(InputEvent::Keyboard(KeyboardEvent::pressed(key))));
        }
        "frame" => events.push(Event::Frame),
        "close" => events.push(Event::Window(WindowEvent::CloseRequested)),
        other => return Err(format!("unknown command `{other}`")),
    }
    Ok(())
}

fn mouse(event: MouseEvent) -> Event {
    Event::Input(InputEvent::Mouse(event))
}

fn numbers<T: std::str::FromStr, const N: usize>(args: &str) -> std::result::Result<[T; N], String> {
    let parsed = args
        .split_whitespace()
        .map(|s| s.parse::<T>().map_err(|_| format!("`{s}` is not a number")))
        .collect::<std::result::Result<Vec<T>, String>>()?;
    let found = parsed.len();
    parsed
        .try_into()
        .map_err(|_| format!("expected {N} numbers, found {found}"))
}

fn named_key(name: &str) -> Option<Key> {
    let key = match name.to_ascii_lowercase().as_str() {
        "enter" => Key::Enter,
        "escape" | "esc" => Key::Escape,
        "backspace" => Key::Backspace,
        "tab" => Key::Tab,
        "delete" => Key::Delete,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "left" => Key::Left,
        "right" => Key::Right,
        "up" => Key::Up,
        "down" => Key::Down,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_script() {
        let events = parse_script(
            "# open\nresize 300 200\n\ntype ab\npaste xyz\nwheel -1\nframe\nclose\n",
        )
        .unwrap();

        assert_eq!(
            events[0],
            Event::Window(WindowEvent::Resized {
                width: 300,
                height: 200
            })
        );
        // two key presses for "ab"
        assert_eq!(
            events[1],
            Event::Input(InputEvent::Keyboard(KeyboardEvent::pressed(Key::Char('a'))))
        );
        assert_eq!(
            events[3],
            Event::Input(InputEvent::Text {
                text: "xyz".to_string()
            })
        );
        assert_eq!(events.len(), 7);
        assert_eq!(events[6], Event::Window(WindowEvent::CloseRequested));
    }

    #[test]
    fn test_hash_inside_text() {
        let events = parse_script("type c#  # trailing note\npaste \\# tag").unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            Event::Input(InputEvent::Keyboard(KeyboardEvent::pressed(Key::Char('#'))))
        );
        assert_eq!(
            events[2],
            Event::Input(InputEvent::Text {
                text: "# tag".to_string()
            })
        );
    }

    #[test]
    fn test_errors_report_line() {
        let err = parse_script("frame\nresize 10\n").unwrap_err();
        assert_eq!(
            err,
            PlatformError::InvalidScript {
                line: 2,
                message: "expected 2 numbers, found 1".to_string()
            }
        );

        let err = parse_script("key hyper").unwrap_err();
        assert!(err.to_string().contains("unknown key"));
    }
}
