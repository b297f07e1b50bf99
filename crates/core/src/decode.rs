//! Key decoding - raw keystroke to human-readable name
//!
//! Known control keys get a fixed name; every other keystroke is shown as the
//! character itself. The mapping is total and has no side effects.

use std::fmt;

use crate::types::{Keystroke, CODE_BACKSPACE, CODE_ENTER, CODE_ESCAPE, CODE_SPACE, CODE_TAB};

/// Readable name of a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyName {
    Enter,
    Escape,
    Space,
    Tab,
    Backspace,
    /// Any other key, shown literally
    Char(char),
}

impl KeyName {
    /// Fixed name for the control keys, `None` for literal characters.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            KeyName::Enter => Some("Enter"),
            KeyName::Escape => Some("Escape"),
            KeyName::Space => Some("Space"),
            KeyName::Tab => Some("Tab"),
            KeyName::Backspace => Some("Backspace"),
            KeyName::Char(_) => None,
        }
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyName::Char(ch) => write!(f, "{}", ch),
            named => f.write_str(named.as_str().unwrap_or_default()),
        }
    }
}

/// Map a keystroke to its readable name.
pub fn decode(key: Keystroke) -> KeyName {
    match key.code() {
        CODE_ENTER => KeyName::Enter,
        CODE_ESCAPE => KeyName::Escape,
        CODE_SPACE => KeyName::Space,
        CODE_TAB => KeyName::Tab,
        CODE_BACKSPACE => KeyName::Backspace,
        _ => KeyName::Char(key.ch()),
    }
}
