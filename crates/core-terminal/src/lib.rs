//! Terminal backend abstraction and crossterm implementation.
//!
//! Entering puts the terminal in raw mode on the alternate screen; leaving
//! undoes both. `TerminalGuard` ties leaving to scope exit so early returns
//! and fatal startup errors still restore the user's terminal.

use anyhow::Result;
use crossterm::{
    cursor::Hide,
    cursor::Show,
    execute,
    terminal::{
        self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::stdout;

/// Lines reserved below the text area (status bar + message bar).
pub const RESERVED_ROWS: u16 = 2;

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("unable to determine terminal size")]
    SizeUnavailable(#[source] std::io::Error),
    #[error("terminal too small: {cols}x{rows}")]
    TooSmall { cols: u16, rows: u16 },
}

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub cols: u16,
    pub rows: u16,
}

impl WindowSize {
    /// Rows left for document text once the two bars are drawn.
    pub fn text_rows(&self) -> usize {
        self.rows.saturating_sub(RESERVED_ROWS) as usize
    }

    /// Validate a size reported by the terminal (or a resize event).
    pub fn checked(cols: u16, rows: u16) -> Result<Self, TerminalError> {
        if cols == 0 || rows <= RESERVED_ROWS {
            return Err(TerminalError::TooSmall { cols, rows });
        }
        Ok(Self { cols, rows })
    }
}

/// Query the current window size.
pub fn window_size() -> Result<WindowSize, TerminalError> {
    let (cols, rows) = terminal::size().map_err(TerminalError::SizeUnavailable)?;
    tracing::debug!(target: "terminal", cols, rows, "window_size");
    WindowSize::checked(cols, rows)
}

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard { backend: self })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
            self.entered = true;
            tracing::debug!(target: "terminal", "entered_raw_mode");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode()?;
            self.entered = false;
            tracing::debug!(target: "terminal", "left_raw_mode");
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }
}

impl TerminalGuard<'_> {
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.backend.set_title(title)
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        let _ = self.backend.leave();
    }
}
