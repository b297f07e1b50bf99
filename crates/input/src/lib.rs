//! Terminal input module.
//!
//! Acquires one keystroke at a time from the controlling terminal. Keys are
//! delivered as soon as they are pressed and are not echoed, which requires the
//! terminal to be in raw mode for the whole session.
//!
//! - [`map`]: crossterm events to raw [`Keystroke`](crate::types::Keystroke) codes
//! - [`source`]: the [`KeySource`] seam and its terminal implementation
//! - [`raw`]: scoped raw-mode acquisition with guaranteed release
//! - [`replay`]: scripted key source for running a session headless

pub mod map;
pub mod raw;
pub mod replay;
pub mod source;

pub use keytrack_types as types;

pub use map::{keystroke_from_event, keystroke_from_key};
pub use raw::{install_panic_hook, RawModeGuard, TerminalMode};
pub use replay::{ReplayKeySource, ReplayStep};
pub use source::{KeySource, TerminalKeySource};
