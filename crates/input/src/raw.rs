//! Raw-mode lifecycle.

use std::io;
use std::sync::Once;

use crossterm::terminal;

static PANIC_HOOK: Once = Once::new();

/// A terminal mode that has to be put back when the session ends.
pub trait TerminalMode {
    /// Return the terminal to its original mode. Later calls are no-ops.
    fn restore(&mut self) -> io::Result<()>;
}

/// Holds the terminal in raw mode; cooked mode is restored on drop.
///
/// Every exit path that unwinds through the guard (normal return, `?`, panic
/// with unwinding) restores the terminal. For `panic = "abort"` builds, pair it
/// with [`install_panic_hook`].
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("raw mode enabled");
        Ok(Self { active: true })
    }

}

impl TerminalMode for RawModeGuard {
    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        tracing::debug!("raw mode disabled");
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "failed to restore terminal mode");
        }
    }
}

/// Install (once) a panic hook that leaves raw mode before the previous hook
/// prints the panic message.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let prev_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = terminal::disable_raw_mode();
            prev_hook(info);
        }));
    });
}
