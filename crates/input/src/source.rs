//! Keystroke sources.

use std::io;

use crossterm::event;

use crate::map::keystroke_from_event;
use crate::types::Keystroke;

/// Anything that yields keystrokes one at a time.
///
/// `Ok(None)` means the read produced nothing usable this time; callers treat
/// it as a no-op iteration, not an error.
pub trait KeySource {
    fn read_key(&mut self) -> io::Result<Option<Keystroke>>;
}

impl<S: KeySource + ?Sized> KeySource for &mut S {
    fn read_key(&mut self) -> io::Result<Option<Keystroke>> {
        (**self).read_key()
    }
}

/// Reads keystrokes from the controlling terminal.
///
/// Blocks until the next event arrives; there is no timeout. The terminal
/// should be in raw mode (see [`crate::RawModeGuard`]) or keys only show up
/// after Enter and are echoed.
#[derive(Debug, Default)]
pub struct TerminalKeySource {
    _private: (),
}

impl TerminalKeySource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for TerminalKeySource {
    fn read_key(&mut self) -> io::Result<Option<Keystroke>> {
        let ev = event::read()?;
        let key = keystroke_from_event(&ev);
        if key.is_none() {
            tracing::trace!(?ev, "ignored terminal event");
        }
        Ok(key)
    }
}
