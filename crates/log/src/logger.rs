//! EventLogger: writes each entry to the console and to the session log file.
//!
//! The file is written without a userspace buffer and synced after every entry,
//! so a crash loses at most the entry being written. Console write failures are
//! reported through `tracing` and otherwise ignored; file failures are returned.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::entry::{format_entry_into, local_now, Clock};

/// Raw mode turns off output post-processing, so the console needs an explicit CR.
pub const CONSOLE_LINE_END: &str = "\r\n";
pub const FILE_LINE_END: &str = "\n";

pub struct EventLogger<W: Write> {
    console: W,
    file: File,
    path: PathBuf,
    clock: Clock,
    line: String,
}

impl<W: Write> EventLogger<W> {
    /// Truncate the log at `path` and open it for appending.
    pub fn create(path: impl AsRef<Path>, console: W) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        File::create(&path)?;
        let file = OpenOptions::new().append(true).open(&path)?;
        tracing::debug!(path = %path.display(), "event log opened");

        Ok(Self {
            console,
            file,
            path,
            clock: local_now,
            line: String::with_capacity(256),
        })
    }

    /// Replace the clock used for timestamps.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    /// Write one timestamped entry to both sinks.
    ///
    /// The console is written first, so it still gets the entry when the file
    /// write fails.
    pub fn log(&mut self, message: &str) -> io::Result<()> {
        format_entry_into(&mut self.line, (self.clock)(), message);
        self.write_console();

        self.file.write_all(self.line.as_bytes())?;
        self.file.write_all(FILE_LINE_END.as_bytes())?;
        self.file.sync_data()?;
        Ok(())
    }

    /// Sync and close the log file. Consumes the logger, so it happens once.
    ///
    /// The console sink is handed back even if the final sync fails.
    pub fn close(mut self) -> (W, io::Result<()>) {
        let synced = self.file.flush().and_then(|_| self.file.sync_all());
        tracing::debug!(path = %self.path.display(), ok = synced.is_ok(), "event log closed");
        (self.console, synced)
    }

    fn write_console(&mut self) {
        let res = self
            .console
            .write_all(self.line.as_bytes())
            .and_then(|_| self.console.write_all(CONSOLE_LINE_END.as_bytes()))
            .and_then(|_| self.console.flush());
        if let Err(e) = res {
            tracing::warn!(error = %e, "console write failed");
        }
    }
}
