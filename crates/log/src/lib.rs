//! Event log module.
//!
//! Every significant event (session start, each keystroke, errors, session end)
//! becomes one line `"<YYYY-MM-DD HH:MM:SS>: <message>"` in local time, written
//! to two sinks:
//!
//! - the console, mirrored in real time
//! - the session log file, truncated when the logger is created and synced to
//!   disk after every entry
//!
//! # Example
//!
//! ```no_run
//! use keytrack_log::EventLogger;
//!
//! let mut logger = EventLogger::create("keyboard_events.log", std::io::stdout())?;
//! logger.log("=== session ===")?;
//! logger.close().1?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod entry;
pub mod logger;

pub use keytrack_types as types;

pub use entry::{format_entry, format_entry_into, local_now, Clock};
pub use logger::{EventLogger, CONSOLE_LINE_END, FILE_LINE_END};
