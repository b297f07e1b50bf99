//! Exit-sequence detection over a sliding window of recent keystrokes
//!
//! The window keeps the last [`EXIT_WINDOW_LEN`] characters exactly as captured
//! (not their decoded names). Pushing into a full window evicts the oldest entry.
//! The session ends when the window equals the target sequence, in order.

use arrayvec::ArrayVec;

use crate::types::{EXIT_SEQUENCE, EXIT_WINDOW_LEN};

#[derive(Debug, Clone)]
pub struct ExitWindow {
    keys: ArrayVec<char, EXIT_WINDOW_LEN>,
    target: [char; EXIT_WINDOW_LEN],
}

impl Default for ExitWindow {
    fn default() -> Self {
        Self::new(EXIT_SEQUENCE)
    }
}

impl ExitWindow {
    pub fn new(target: [char; EXIT_WINDOW_LEN]) -> Self {
        Self {
            keys: ArrayVec::new(),
            target,
        }
    }

    pub fn target(&self) -> &[char; EXIT_WINDOW_LEN] {
        &self.target
    }

    /// Current window contents, oldest first.
    pub fn keys(&self) -> &[char] {
        &self.keys
    }

    /// Record a keystroke and report whether the window now matches the target.
    pub fn push_and_check(&mut self, ch: char) -> bool {
        if self.keys.is_full() {
            self.keys.remove(0);
        }
        self.keys.push(ch);
        self.keys.as_slice() == self.target.as_slice()
    }
}
