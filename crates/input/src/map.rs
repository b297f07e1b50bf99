//! Key mapping from terminal events to raw keystrokes.
//!
//! crossterm already parses the byte stream into [`KeyEvent`]s. This maps them
//! back to the single raw code a raw-mode terminal would have delivered for the
//! key, so the rest of the tracker works on ordinals only.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{Keystroke, CODE_BACKSPACE, CODE_ENTER, CODE_ESCAPE, CODE_TAB};

/// Map a terminal event to a keystroke.
///
/// Returns `None` for anything that is not a single-code key press: releases,
/// navigation and function keys, resize, focus, mouse and paste events.
pub fn keystroke_from_event(event: &Event) -> Option<Keystroke> {
    match event {
        Event::Key(key) => keystroke_from_key(key),
        _ => None,
    }
}

/// Map a key event to a keystroke.
pub fn keystroke_from_key(key: &KeyEvent) -> Option<Keystroke> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Enter => Keystroke::from_code(CODE_ENTER),
        KeyCode::Esc => Keystroke::from_code(CODE_ESCAPE),
        KeyCode::Tab => Keystroke::from_code(CODE_TAB),
        // crossterm folds DEL (0x7F) into Backspace; it is reported as BS (8)
        // so it carries the Backspace name.
        KeyCode::Backspace => Keystroke::from_code(CODE_BACKSPACE),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let code = control_code(c).unwrap_or(c as u32);
            Keystroke::from_code(code)
        }
        KeyCode::Char(c) => Some(Keystroke::from_char(c)),
        _ => None,
    }
}

/// C0 control byte produced by Ctrl+`c`, if there is one.
///
/// Covers both the caret-notation keys (`@`, `[`, `\`, `]`, `^`, `_`) and the
/// digit aliases terminals use for them (`2`..`7`). crossterm reports NUL as
/// Ctrl+Space and 0x1C..0x1F as Ctrl+`4`..`7`.
fn control_code(c: char) -> Option<u32> {
    match c {
        'a'..='z' | 'A'..='Z' => Some((c.to_ascii_lowercase() as u32) - ('a' as u32) + 1),
        ' ' | '@' | '2' => Some(0),
        '[' | '3' => Some(27),
        '\\' | '4' => Some(28),
        ']' | '5' => Some(29),
        '^' | '6' => Some(30),
        '_' | '7' | '/' => Some(31),
        _ => None,
    }
}
