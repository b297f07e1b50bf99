use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The log file could not be truncated or opened; no session was started.
    #[error("cannot open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The terminal could not be switched to raw mode; no session was started.
    #[error("cannot enter raw terminal mode: {0}")]
    Terminal(#[source] io::Error),

    #[error("keyboard read failed: {0}")]
    Input(#[source] io::Error),

    #[error("log write failed: {0}")]
    Log(#[source] io::Error),

    #[error("session already finished")]
    Finished,
}
