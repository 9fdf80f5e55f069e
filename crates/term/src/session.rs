//! Terminal session guard.
//!
//! Entering the session switches to the alternate screen and hides the cursor.
//! Leaving it restores both and prints the farewell text on the normal screen.
//! Restoration happens exactly once, whichever exit path gets there first:
//! dropping the guard, the panic hook, or a termination signal.

use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::renderer::{encode_enter_into, encode_restore_into};

/// State shared between the guard, the panic hook and the signal listener.
#[derive(Debug)]
pub struct SessionState {
    restored: AtomicBool,
    farewell: String,
}

impl SessionState {
    pub fn new(farewell: String) -> Self {
        Self {
            restored: AtomicBool::new(false),
            farewell,
        }
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }

    pub fn farewell(&self) -> &str {
        &self.farewell
    }

    /// Write the restore sequence and the farewell text to `out`.
    ///
    /// Returns false without writing when the session was already restored.
    pub fn restore_into<W: Write>(&self, out: &mut W) -> Result<bool> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }
        let mut buf = Vec::new();
        encode_restore_into(&mut buf)?;
        buf.extend_from_slice(self.farewell.as_bytes());
        buf.push(b'\n');
        out.write_all(&buf)?;
        out.flush()?;
        Ok(true)
    }

    /// Best-effort restore on stdout. Holds the stdout lock while writing.
    pub fn restore_stdout(&self) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let _ = self.restore_into(&mut lock);
    }
}

/// Scoped terminal session; restores the terminal when dropped.
pub struct TerminalSession {
    state: Arc<SessionState>,
}

impl TerminalSession {
    /// Enter the alternate screen. `farewell` is printed after leaving it.
    pub fn enter(farewell: String) -> Result<Self> {
        let mut buf = Vec::new();
        encode_enter_into(&mut buf)?;
        let mut stdout = io::stdout();
        stdout.write_all(&buf)?;
        stdout.flush()?;
        debug!("entered alternate screen");
        Ok(Self {
            state: Arc::new(SessionState::new(farewell)),
        })
    }

    pub fn state(&self) -> Arc<SessionState> {
        Arc::clone(&self.state)
    }

    /// Restore the terminal before the default panic message is printed.
    pub fn install_panic_hook(&self) {
        let state = self.state();
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            state.restore_stdout();
            prev(info);
        }));
    }

    /// Restore the terminal and exit on SIGINT, SIGTERM or SIGHUP.
    #[cfg(unix)]
    pub fn install_signal_handlers(&self) -> Result<()> {
        use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        let state = self.state();
        let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;
        std::thread::Builder::new()
            .name("signals".into())
            .spawn(move || {
                if let Some(sig) = signals.forever().next() {
                    info!(signal = sig, "terminating on signal");
                    state.restore_stdout();
                    std::process::exit(128 + sig);
                }
            })?;
        Ok(())
    }

    /// Restore the terminal and exit on Ctrl-C.
    #[cfg(windows)]
    pub fn install_signal_handlers(&self) -> Result<()> {
        let state = self.state();
        ctrlc::set_handler(move || {
            info!("terminating on Ctrl-C");
            state.restore_stdout();
            std::process::exit(130);
        })?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.state.restore_stdout();
        debug!("terminal restored");
    }
}
