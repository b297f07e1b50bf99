//! The capture-log-detect loop.
//!
//! ```text
//! Starting --(log opened, banners written)--> Running
//! Running  --(key / no key)-----------------> Running
//! Running  --(exit sequence | Ctrl+C | error)-> Terminating
//! Terminating --(end banner, log closed, terminal restored)--> Terminated
//! ```
//!
//! Errors are never retried: the first failure of an iteration ends the session.

use std::io::{self, Write};

use keytrack_core::{decode, ExitWindow};
use keytrack_input::{KeySource, TerminalMode};
use keytrack_log::EventLogger;

use crate::config::TrackerConfig;
use crate::error::SessionError;
use crate::types::{messages, EXIT_WINDOW_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Starting,
    Running,
    Terminating,
    Terminated,
}

/// Why the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    ExitSequence,
    Interrupted,
    /// An iteration failed; holds the error text that was logged.
    Failed(String),
}

pub struct Session<S: KeySource, W: Write> {
    source: S,
    logger: Option<EventLogger<W>>,
    console: Option<W>,
    terminal: Option<Box<dyn TerminalMode>>,
    window: ExitWindow,
    state: SessionState,
}

impl<S: KeySource, W: Write> Session<S, W> {
    pub fn new(source: S, logger: EventLogger<W>, exit_sequence: [char; EXIT_WINDOW_LEN]) -> Self {
        Self {
            source,
            logger: Some(logger),
            console: None,
            terminal: None,
            window: ExitWindow::new(exit_sequence),
            state: SessionState::Starting,
        }
    }

    /// Truncate the configured log file and prepare a session over `source`.
    pub fn open(config: &TrackerConfig, source: S, console: W) -> Result<Self, SessionError> {
        let logger = EventLogger::create(&config.log_path, console).map_err(|e| SessionError::Open {
            path: config.log_path.clone(),
            source: e,
        })?;
        Ok(Self::new(source, logger, config.exit_sequence))
    }

    /// Enter the terminal mode with `enter`, then truncate the log and prepare
    /// the session. The log file is not touched if `enter` fails.
    pub fn open_with_terminal<T, F>(
        config: &TrackerConfig,
        source: S,
        console: W,
        enter: F,
    ) -> Result<Self, SessionError>
    where
        T: TerminalMode + 'static,
        F: FnOnce() -> io::Result<T>,
    {
        let mode = enter().map_err(SessionError::Terminal)?;
        Ok(Self::open(config, source, console)?.with_terminal(mode))
    }

    /// Hand over the terminal mode; it is restored on the terminating path,
    /// after the log is closed.
    pub fn with_terminal(mut self, mode: impl TerminalMode + 'static) -> Self {
        self.terminal = Some(Box::new(mode));
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The console sink, available once the session has terminated.
    pub fn into_console(self) -> Option<W> {
        self.console
    }

    /// Run the session to completion.
    ///
    /// Returns the reason the loop stopped. An `Err` means the log file could
    /// not be written on the terminating path; the terminal is restored either way.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        if self.state != SessionState::Starting {
            return Err(SessionError::Finished);
        }

        let outcome = match self.begin() {
            Ok(()) => self.run_loop(),
            Err(e) => self.fail(e),
        };

        self.finish(outcome)
    }

    fn begin(&mut self) -> Result<(), SessionError> {
        self.log(messages::SESSION_START)?;
        let instructions = messages::instructions(self.window.target());
        self.log(&instructions)?;
        self.state = SessionState::Running;
        tracing::debug!("session running");
        Ok(())
    }

    fn run_loop(&mut self) -> SessionOutcome {
        loop {
            match self.step() {
                Ok(None) => {}
                Ok(Some(outcome)) => return outcome,
                Err(e) => return self.fail(e),
            }
        }
    }

    /// One iteration: read, decode, log, update the window.
    fn step(&mut self) -> Result<Option<SessionOutcome>, SessionError> {
        let Some(key) = self.source.read_key().map_err(SessionError::Input)? else {
            return Ok(None);
        };

        let message = messages::key_pressed(decode(key), key.code());
        self.log(&message)?;

        if key.is_interrupt() {
            self.log(messages::INTERRUPTED)?;
            return Ok(Some(SessionOutcome::Interrupted));
        }

        if self.window.push_and_check(key.ch()) {
            let detected = messages::exit_detected(self.window.target());
            self.log(&detected)?;
            return Ok(Some(SessionOutcome::ExitSequence));
        }

        Ok(None)
    }

    fn fail(&mut self, err: SessionError) -> SessionOutcome {
        tracing::error!(error = %err, "session failed");
        let message = messages::error(&err);
        self.log_best_effort(&message);
        SessionOutcome::Failed(err.to_string())
    }

    fn finish(&mut self, outcome: SessionOutcome) -> Result<SessionOutcome, SessionError> {
        self.state = SessionState::Terminating;
        tracing::debug!(?outcome, "session terminating");

        let banner = self.log(messages::SESSION_END);

        let closed = match self.logger.take() {
            Some(logger) => {
                let (console, closed) = logger.close();
                self.console = Some(console);
                closed
            }
            None => Ok(()),
        };

        if let Some(mut mode) = self.terminal.take() {
            if let Err(e) = mode.restore() {
                tracing::warn!(error = %e, "failed to restore terminal mode");
            }
        }
        self.state = SessionState::Terminated;

        // A failed session already reported its error; don't mask the outcome.
        if matches!(outcome, SessionOutcome::Failed(_)) {
            if let Err(e) = &banner {
                tracing::warn!(error = %e, "end banner not written to log file");
            }
            if let Err(e) = &closed {
                tracing::warn!(error = %e, "log file not synced on close");
            }
            return Ok(outcome);
        }
        banner?;
        closed.map_err(SessionError::Log)?;
        Ok(outcome)
    }

    fn log(&mut self, message: &str) -> Result<(), SessionError> {
        match self.logger.as_mut() {
            Some(logger) => logger.log(message).map_err(SessionError::Log),
            None => Err(SessionError::Finished),
        }
    }

    /// The console always gets the entry; a file failure is only traced.
    fn log_best_effort(&mut self, message: &str) {
        if let Err(e) = self.log(message) {
            tracing::warn!(error = %e, "error entry not written to log file");
        }
    }
}

/// Run one session with `config`, reading keys from `source` and mirroring the
/// log to `console`.
pub fn run<S: KeySource, W: Write>(
    config: &TrackerConfig,
    source: S,
    console: W,
) -> Result<SessionOutcome, SessionError> {
    Session::open(config, source, console)?.run()
}
