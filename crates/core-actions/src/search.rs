//! Incremental substring search over rendered rows.
//!
//! A `FindSession` lives inside the search prompt and sees every keystroke
//! after the prompt has applied it. At most one row carries the `Match`
//! overlay at a time; its original highlight is kept here and put back
//! before the next scan and when the session ends. Row content is never
//! touched.

use core_events::{KeyCode, KeyEvent};
use core_state::{Cursor, EditorState};
use core_syntax::Highlight;
use core_text::Position;

#[derive(Debug, Clone, Copy)]
struct Origin {
    cursor: Cursor,
    row_offset: usize,
    col_offset: usize,
}

#[derive(Debug)]
pub struct FindSession {
    last_match: Option<usize>,
    forward: bool,
    saved_hl: Option<(usize, Vec<Highlight>)>,
    origin: Origin,
}

impl FindSession {
    /// Start a session, remembering where the cursor and viewport were.
    pub fn begin(state: &EditorState) -> Self {
        Self {
            last_match: None,
            forward: true,
            saved_hl: None,
            origin: Origin {
                cursor: state.cursor,
                row_offset: state.viewport.row_offset,
                col_offset: state.viewport.col_offset,
            },
        }
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn has_overlay(&self) -> bool {
        self.saved_hl.is_some()
    }

    pub fn on_keystroke(&mut self, state: &mut EditorState, query: &str, key: &KeyEvent) {
        self.restore_overlay(state);

        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.last_match = None;
                self.forward = true;
                return;
            }
            KeyCode::Right | KeyCode::Down => self.forward = true,
            KeyCode::Left | KeyCode::Up => self.forward = false,
            _ => {
                self.last_match = None;
                self.forward = true;
            }
        }
        if query.is_empty() {
            return;
        }
        if self.last_match.is_none() {
            self.forward = true;
        }

        let num_rows = state.doc.num_rows();
        let needle = query.as_bytes();
        let mut current = self.last_match;
        for _ in 0..num_rows {
            let idx = match current {
                None => 0,
                Some(i) if self.forward => (i + 1) % num_rows,
                Some(0) => num_rows - 1,
                Some(i) => i - 1,
            };
            current = Some(idx);
            let Some(at) = state.doc.row(idx).and_then(|r| find_bytes(r.render(), needle)) else {
                continue;
            };
            self.last_match = Some(idx);
            let col = state.doc.rx_to_cx(idx, at);
            state.cursor.pos = Position::new(idx, col);
            // Past the end so the next scroll puts the match row on top.
            state.viewport.row_offset = num_rows;
            if let Some(saved) = state.doc.overlay_highlight(idx, at, needle.len(), Highlight::Match) {
                self.saved_hl = Some((idx, saved));
            }
            tracing::debug!(target: "actions.search", row = idx, col, query_len = needle.len(), "match");
            return;
        }
        tracing::debug!(target: "actions.search", query_len = needle.len(), "no_match");
    }

    /// End the session. Cancelling restores the cursor and viewport offsets
    /// captured by `begin`.
    pub fn finish(mut self, state: &mut EditorState, confirmed: bool) {
        self.restore_overlay(state);
        if !confirmed {
            state.cursor = self.origin.cursor;
            state.viewport.row_offset = self.origin.row_offset;
            state.viewport.col_offset = self.origin.col_offset;
        }
        tracing::debug!(target: "actions.search", confirmed, "session_end");
    }

    fn restore_overlay(&mut self, state: &mut EditorState) {
        if let Some((row, saved)) = self.saved_hl.take() {
            state.doc.restore_highlight(row, saved);
        }
    }
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
