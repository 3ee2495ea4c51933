//! Editor state: the open document, cursor, viewport and status message.
//!
//! `EditorState` is the single owning context threaded through dispatch and
//! rendering. It carries no terminal handles; the binary owns those and hands
//! the state to `core-render` once per cycle.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use core_text::{Document, Position};

pub mod viewport;
pub use viewport::Viewport;

/// Ctrl-Q presses needed to abandon unsaved changes.
pub const QUIT_TIMES: u32 = 3;
/// How long a status message stays visible.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Cursor in content coordinates plus the derived render column.
///
/// `pos.row` may equal `doc.num_rows()` (the virtual line after the last row).
/// `rx` is refreshed by `Viewport::scroll` each cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub pos: Position,
    pub rx: usize,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl StatusMessage {
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.set_at) < ttl
    }
}

#[derive(Debug)]
pub struct EditorState {
    pub doc: Document,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub file_name: Option<PathBuf>,
    pub status: Option<StatusMessage>,
    /// Configured confirmation count; `quit_times_left` resets to it.
    pub quit_times: u32,
    pub quit_times_left: u32,
    pub message_ttl: Duration,
}

impl EditorState {
    /// `rows` is the number of text rows (terminal height minus the two bars).
    pub fn new(doc: Document, rows: usize, cols: usize) -> Self {
        Self {
            doc,
            cursor: Cursor::default(),
            viewport: Viewport::new(rows, cols),
            file_name: None,
            status: None,
            quit_times: QUIT_TIMES,
            quit_times_left: QUIT_TIMES,
            message_ttl: MESSAGE_TIMEOUT,
        }
    }

    pub fn with_quit_times(mut self, times: u32) -> Self {
        self.quit_times = times;
        self.quit_times_left = times;
        self
    }

    pub fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }

    /// Bind the document to `path` and re-select the highlighting profile.
    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let syntax = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(core_syntax::select_for_filename);
        self.doc.set_syntax(syntax);
        self.file_name = Some(path);
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.set_status_at(msg, Instant::now());
    }

    pub fn set_status_at<S: Into<String>>(&mut self, msg: S, at: Instant) {
        let text = msg.into();
        tracing::debug!(target: "state.status", len = text.len(), "status_message");
        self.status = Some(StatusMessage { text, set_at: at });
    }

    /// The status text if it is still within its display window at `now`.
    pub fn visible_status(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| m.is_fresh(now, self.message_ttl))
            .map(|m| m.text.as_str())
    }

    pub fn reset_quit_confirmations(&mut self) {
        self.quit_times_left = self.quit_times;
    }

    /// Bring the cursor into view; run once per cycle before composing.
    pub fn scroll(&mut self) {
        self.viewport.scroll(&mut self.cursor, &self.doc);
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        tracing::debug!(target: "state.viewport", rows, cols, "resize");
        self.viewport.resize(rows, cols);
    }
}
