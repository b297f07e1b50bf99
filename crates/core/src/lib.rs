//! Core tracker logic module - pure, deterministic, and testable
//!
//! This module contains the two pieces of logic the session loop depends on.
//! It has **zero dependencies** on the terminal, the file system, or the clock.
//!
//! # Module Structure
//!
//! - [`decode`]: keystroke to readable name (`Enter`, `Escape`, `Space`, `Tab`,
//!   `Backspace`, or the literal character)
//! - [`exit_window`]: sliding window of the last two keystrokes, matched against
//!   the exit sequence
//!
//! # Example
//!
//! ```
//! use keytrack_core::{decode, ExitWindow};
//! use keytrack_types::Keystroke;
//!
//! let mut window = ExitWindow::default();
//! for ch in ['a', 'q', 'x'] {
//!     let key = Keystroke::from_char(ch);
//!     println!("{} ({})", decode(key), key.code());
//!     if window.push_and_check(key.ch()) {
//!         break;
//!     }
//! }
//! assert_eq!(window.keys(), &['q', 'x']);
//! ```

pub mod decode;
pub mod exit_window;

pub use keytrack_types as types;

pub use decode::{decode, KeyName};
pub use exit_window::ExitWindow;
