//! Terminal mode control.
//!
//! Entering the editor switches the terminal to raw mode, the alternate
//! screen, a hidden cursor and button-event mouse tracking with SGR
//! encoding. [`TerminalGuard`] restores all of it when dropped, including
//! on early returns and panics that unwind.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::{cursor, execute, terminal};
use pixedit_common::error::{PixeditError, Result};

/// Enables or disables mouse reporting: clicks (1000), motion while a
/// button is held (1002), SGR encoding (1006) and urxvt encoding (1015).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrMouseTracking {
    /// `ESC [ ? 1000 ; 1002 ; 1006 ; 1015 h`
    Enable,
    /// `ESC [ ? 1000 ; 1002 ; 1006 ; 1015 l`
    Disable,
}

impl crossterm::Command for SgrMouseTracking {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        match self {
            Self::Enable => f.write_str("\x1b[?1000;1002;1006;1015h"),
            Self::Disable => f.write_str("\x1b[?1000;1002;1006;1015l"),
        }
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::other("SGR mouse tracking requires an ANSI terminal"))
    }
}

pub(crate) fn terminal_error(source: io::Error) -> PixeditError {
    PixeditError::Io {
        path: PathBuf::from("<terminal>"),
        source,
    }
}

/// Returns the terminal size as `(columns, rows)`.
///
/// # Errors
///
/// Returns an I/O error if the size cannot be queried.
pub fn size() -> Result<(u16, u16)> {
    terminal::size().map_err(terminal_error)
}

/// Holds the terminal in editor mode for as long as it lives.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Switches the terminal into editor mode.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if raw mode or any escape sequence fails. The
    /// terminal is restored before returning.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().map_err(terminal_error)?;
        // from here on, dropping the guard undoes whatever succeeded
        let guard = Self { _private: () };
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            SgrMouseTracking::Enable,
            terminal::Clear(terminal::ClearType::All)
        )
        .map_err(terminal_error)?;
        tracing::debug!("terminal switched to editor mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            SgrMouseTracking::Disable,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
        tracing::debug!("terminal restored");
    }
}
