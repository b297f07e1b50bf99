//! Terminal keystroke monitor (default binary).
//!
//! Puts the terminal into raw mode, logs every keystroke to the console and to
//! `keyboard_events.log`, and exits after `q` followed by `x` (or Ctrl+C).
//! Diagnostics go to stderr and are off unless `RUST_LOG` asks for them.

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use keytrack::input::{install_panic_hook, RawModeGuard, TerminalKeySource};
use keytrack::session::{Session, SessionOutcome, TrackerConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    install_panic_hook();

    let config = TrackerConfig::default();
    let outcome = Session::open_with_terminal(
        &config,
        TerminalKeySource::new(),
        io::stdout(),
        RawModeGuard::enable,
    )
    .context("failed to start keyboard tracker")?
    .run()?;

    match outcome {
        SessionOutcome::Failed(reason) => tracing::warn!(%reason, "session ended after an error"),
        other => tracing::info!(outcome = ?other, "session ended"),
    }
    Ok(())
}
