//! Session module - the tracker's single control loop
//!
//! Ties the other crates together: reads a keystroke from a
//! [`KeySource`](keytrack_input::KeySource), names it with
//! [`decode`](keytrack_core::decode), writes it through the
//! [`EventLogger`](keytrack_log::EventLogger) and feeds it to the
//! [`ExitWindow`](keytrack_core::ExitWindow).
//!
//! Everything runs on the caller's thread. The only suspension point is the
//! blocking key read.
//!
//! # Example
//!
//! ```
//! use keytrack_input::ReplayKeySource;
//! use keytrack_session::{run, SessionOutcome, TrackerConfig};
//!
//! let dir = std::env::temp_dir().join("keytrack-doc");
//! std::fs::create_dir_all(&dir).unwrap();
//! let config = TrackerConfig::default().with_log_path(dir.join("events.log"));
//!
//! let outcome = run(&config, ReplayKeySource::from_keys("hqx"), std::io::sink()).unwrap();
//! assert_eq!(outcome, SessionOutcome::ExitSequence);
//! ```

pub mod config;
pub mod error;
pub mod session;

pub use keytrack_types as types;

pub use config::TrackerConfig;
pub use error::SessionError;
pub use session::{run, Session, SessionOutcome, SessionState};
