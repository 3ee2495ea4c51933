//! Line-oriented document buffer.
//!
//! A `Document` owns an ordered list of `Row`s. Every content mutation goes
//! through the document so that each touched row's render projection and
//! highlight array are regenerated in place, and so that block-comment state
//! changes cascade to the rows below (iteratively, stopping at the first row
//! whose open-comment state is unchanged).
//!
//! Columns are byte offsets into a row's content; one byte is one cell. The
//! cursor may sit on the virtual row `num_rows()` (append position); edits that
//! need a real row there create it first.

use core_syntax::{Highlight, Syntax};

pub mod row;
pub use row::{Row, TAB_STOP, project};

/// A position expressed in content space: (row index, byte column within that row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    /// Number of mutations since load / last save. Zero means clean.
    dirty: usize,
    syntax: Option<&'static Syntax>,
    tab_stop: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_tab_stop(TAB_STOP)
    }

    pub fn with_tab_stop(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            syntax: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Build a clean document from lines (test and scratch helper).
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut doc = Self::new();
        doc.load_lines(lines);
        doc
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Content length of row `at`; zero for the virtual row past the end.
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::len)
    }

    pub fn dirty(&self) -> usize {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Record that the current contents match what is persisted.
    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn syntax(&self) -> Option<&'static Syntax> {
        self.syntax
    }

    /// Install a language profile and re-highlight every row.
    pub fn set_syntax(&mut self, syntax: Option<&'static Syntax>) {
        self.syntax = syntax;
        let mut open = false;
        for row in &mut self.rows {
            row.update_highlight(syntax, open);
            open = row.open_comment;
        }
        tracing::debug!(
            target: "text.document",
            filetype = syntax.map(|s| s.filetype),
            rows = self.rows.len(),
            "syntax_applied"
        );
    }

    /// Content column → render column for row `at` (identity on the virtual row).
    pub fn cx_to_rx(&self, at: usize, cx: usize) -> usize {
        self.rows
            .get(at)
            .map_or(0, |row| row.cx_to_rx(cx, self.tab_stop))
    }

    /// Render column → content column for row `at`.
    pub fn rx_to_cx(&self, at: usize, rx: usize) -> usize {
        self.rows
            .get(at)
            .map_or(0, |row| row.rx_to_cx(rx, self.tab_stop))
    }

    /// Insert a new row at `at` (`0..=num_rows`). Out-of-range positions are ignored.
    pub fn insert_row(&mut self, at: usize, text: impl Into<Vec<u8>>) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(at, text.into()));
        for row in &mut self.rows[at + 1..] {
            row.idx += 1;
        }
        self.update_row(at);
        // The row that used to follow `at` now has a new predecessor.
        if at + 1 < self.rows.len() {
            self.refresh_from(at + 1);
        }
        self.dirty += 1;
    }

    /// Remove row `at`. Out-of-range positions are ignored.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        for row in &mut self.rows[at..] {
            row.idx -= 1;
        }
        if at < self.rows.len() {
            self.refresh_from(at);
        }
        self.dirty += 1;
    }

    /// Insert `ch` at `pos`, creating the row first when `pos` is on the virtual
    /// last line. Advances `pos` past the inserted byte.
    pub fn insert_char(&mut self, pos: &mut Position, ch: u8) {
        if pos.row > self.rows.len() {
            return;
        }
        if pos.row == self.rows.len() {
            self.insert_row(self.rows.len(), Vec::new());
        }
        let at = self.rows[pos.row].insert_char(pos.col, ch);
        self.update_row(pos.row);
        self.dirty += 1;
        pos.col = at + 1;
    }

    /// Backspace semantics: remove the byte left of `pos`, or join the row onto
    /// its predecessor when `pos` is at column 0. No-op at the document start
    /// and on the virtual last line.
    pub fn delete_char(&mut self, pos: &mut Position) {
        if pos.row >= self.rows.len() {
            return;
        }
        if pos.col == 0 && pos.row == 0 {
            return;
        }
        if pos.col > 0 {
            let col = pos.col.min(self.rows[pos.row].len());
            if col > 0 && self.rows[pos.row].delete_char(col - 1) {
                self.update_row(pos.row);
                self.dirty += 1;
            }
            pos.col = col.saturating_sub(1);
        } else {
            let tail = std::mem::take(&mut self.rows[pos.row].chars);
            let prev = pos.row - 1;
            pos.col = self.rows[prev].len();
            self.rows[prev].chars.extend_from_slice(&tail);
            self.update_row(prev);
            self.dirty += 1;
            self.delete_row(pos.row);
            pos.row = prev;
        }
    }

    /// Split the row at `pos` (or open an empty row above when at column 0).
    /// Moves `pos` to the start of the following row.
    pub fn insert_newline(&mut self, pos: &mut Position) {
        if pos.row > self.rows.len() {
            return;
        }
        if pos.col == 0 || pos.row == self.rows.len() {
            self.insert_row(pos.row, Vec::new());
        } else {
            let row = &mut self.rows[pos.row];
            let at = pos.col.min(row.len());
            let tail = row.chars.split_off(at);
            self.update_row(pos.row);
            self.insert_row(pos.row + 1, tail);
        }
        pos.row += 1;
        pos.col = 0;
    }

    /// Serialize as rows joined by `\n` with a trailing `\n` after the last row.
    pub fn lines_to_text(&self) -> Vec<u8> {
        let total = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(&row.chars);
            out.push(b'\n');
        }
        out
    }

    /// Replace all rows with `lines` (already stripped of line terminators)
    /// and reset the dirty counter.
    pub fn load_lines<I, L>(&mut self, lines: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        self.rows.clear();
        for line in lines {
            self.insert_row(self.rows.len(), line);
        }
        self.dirty = 0;
    }

    /// Overwrite `[start, start + len)` of row `at`'s highlight with `class`,
    /// returning the original array so it can be restored later.
    pub fn overlay_highlight(
        &mut self,
        at: usize,
        start: usize,
        len: usize,
        class: Highlight,
    ) -> Option<Vec<Highlight>> {
        let row = self.rows.get_mut(at)?;
        let saved = row.hl.clone();
        let start = start.min(row.hl.len());
        let end = start.saturating_add(len).min(row.hl.len());
        row.hl[start..end].fill(class);
        Some(saved)
    }

    /// Put back a highlight array captured by `overlay_highlight`.
    pub fn restore_highlight(&mut self, at: usize, saved: Vec<Highlight>) {
        if let Some(row) = self.rows.get_mut(at)
            && saved.len() == row.hl.len()
        {
            row.hl = saved;
        }
    }

    fn update_row(&mut self, at: usize) {
        self.rows[at].update_render(self.tab_stop);
        self.refresh_from(at);
    }

    /// Re-highlight `at`, then each following row while the open-comment state
    /// keeps changing.
    fn refresh_from(&mut self, at: usize) {
        let mut i = at;
        while i < self.rows.len() {
            let starts_in_comment = i > 0 && self.rows[i - 1].open_comment;
            let changed = self.rows[i].update_highlight(self.syntax, starts_in_comment);
            if !changed {
                break;
            }
            i += 1;
        }
        if i > at {
            tracing::trace!(target: "text.document", from = at, to = i, "highlight_cascade");
        }
    }
}
