//! Session configuration.

use std::path::PathBuf;

use crate::types::{EXIT_SEQUENCE, EXIT_WINDOW_LEN, LOG_FILE_PATH};

/// Fixed parameters of a tracking session.
///
/// The binary always runs with [`TrackerConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub log_path: PathBuf,
    pub exit_sequence: [char; EXIT_WINDOW_LEN],
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(LOG_FILE_PATH),
            exit_sequence: EXIT_SEQUENCE,
        }
    }
}

impl TrackerConfig {
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.log_path, PathBuf::from("keyboard_events.log"));
        assert_eq!(config.exit_sequence, ['q', 'x']);
    }
}
