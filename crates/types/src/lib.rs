//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the tracker.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (decoding, exit detection, logging, the session loop).
//!
//! # Fixed Parameters
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOG_FILE_PATH` | `keyboard_events.log` | Session log, truncated on every start |
//! | `EXIT_SEQUENCE` | `['q', 'x']` | Two consecutive keys that end the session |
//! | `EXIT_WINDOW_LEN` | 2 | Size of the sliding window of recent keys |
//! | `TIMESTAMP_FORMAT` | `%Y-%m-%d %H:%M:%S` | Local time, second precision |
//! | `INTERRUPT_CODE` | 3 | Ctrl+C as delivered by a raw-mode terminal |
//!
//! # Examples
//!
//! ```
//! use keytrack_types::{Keystroke, EXIT_SEQUENCE};
//!
//! let key = Keystroke::from_char('q');
//! assert_eq!(key.code(), 113);
//! assert_eq!(key.ch(), EXIT_SEQUENCE[0]);
//! ```

/// Path of the session log, relative to the working directory.
pub const LOG_FILE_PATH: &str = "keyboard_events.log";

/// Number of keystrokes the exit detector remembers.
pub const EXIT_WINDOW_LEN: usize = 2;

/// Keys that must arrive consecutively, in order, to end the session.
pub const EXIT_SEQUENCE: [char; EXIT_WINDOW_LEN] = ['q', 'x'];

/// `chrono` format string for log entry timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw codes of the control keys that get a readable name.
pub const CODE_BACKSPACE: u32 = 8;
pub const CODE_TAB: u32 = 9;
pub const CODE_ENTER: u32 = 13;
pub const CODE_ESCAPE: u32 = 27;
pub const CODE_SPACE: u32 = 32;

/// ETX. Raw mode turns Ctrl+C into this byte instead of SIGINT.
pub const INTERRUPT_CODE: u32 = 3;

/// A single captured input unit.
///
/// Holds the character exactly as the terminal delivered it. The raw code is
/// the character's ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keystroke {
    ch: char,
}

impl Keystroke {
    pub const fn from_char(ch: char) -> Self {
        Self { ch }
    }

    /// Build a keystroke from a raw code. Returns `None` for values that are not
    /// Unicode scalar values.
    pub fn from_code(code: u32) -> Option<Self> {
        char::from_u32(code).map(Self::from_char)
    }

    #[inline]
    pub const fn ch(self) -> char {
        self.ch
    }

    #[inline]
    pub const fn code(self) -> u32 {
        self.ch as u32
    }

    pub const fn is_interrupt(self) -> bool {
        self.code() == INTERRUPT_CODE
    }
}

impl From<char> for Keystroke {
    fn from(ch: char) -> Self {
        Self::from_char(ch)
    }
}

/// User-facing texts written to the event log.
pub mod messages {
    use crate::EXIT_WINDOW_LEN;

    pub const SESSION_START: &str = "=== Новая сессия трекера ===";
    pub const SESSION_END: &str = "=== Сессия завершена ===";
    pub const INTERRUPTED: &str = "Получен сигнал прерывания (Ctrl+C)";

    pub fn instructions(sequence: &[char; EXIT_WINDOW_LEN]) -> String {
        format!(
            "Трекер запущен. Нажимайте клавиши. Для выхода нажмите '{}' затем '{}'",
            sequence[0], sequence[1]
        )
    }

    pub fn key_pressed(name: impl std::fmt::Display, code: u32) -> String {
        format!("Нажата клавиша: '{}' (код: {})", name, code)
    }

    pub fn exit_detected(sequence: &[char; EXIT_WINDOW_LEN]) -> String {
        format!(
            "Обнаружена комбинация для выхода ({} + {})",
            sequence[0], sequence[1]
        )
    }

    pub fn error(err: impl std::fmt::Display) -> String {
        format!("Ошибка: {}", err)
    }
}
