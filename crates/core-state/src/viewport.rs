//! Visible window into the document.
//!
//! `scroll` is invoked once per cycle before composing a frame. Vertically the
//! cursor row is always brought inside `[row_offset, row_offset + rows)`.
//! Horizontally the left clamp snaps to the cursor's *content* column while
//! the right clamp uses its render column; the right clamp runs second so the
//! render column still ends up inside the band.

use crate::Cursor;
use core_text::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    /// Text rows available (status and message bars excluded).
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
    }

    /// Refresh `cursor.rx` and adjust offsets so the cursor is visible.
    pub fn scroll(&mut self, cursor: &mut Cursor, doc: &Document) {
        cursor.rx = if cursor.pos.row < doc.num_rows() {
            doc.cx_to_rx(cursor.pos.row, cursor.pos.col)
        } else {
            0
        };

        if cursor.pos.row < self.row_offset {
            self.row_offset = cursor.pos.row;
        }
        if cursor.pos.row >= self.row_offset + self.rows {
            self.row_offset = cursor.pos.row + 1 - self.rows;
        }
        if cursor.rx < self.col_offset {
            self.col_offset = cursor.pos.col;
        }
        if cursor.rx >= self.col_offset + self.cols {
            self.col_offset = cursor.rx + 1 - self.cols;
        }
    }

    /// Whether (row, render column) lies inside the visible band.
    pub fn contains(&self, row: usize, rx: usize) -> bool {
        (self.row_offset..self.row_offset + self.rows).contains(&row)
            && (self.col_offset..self.col_offset + self.cols).contains(&rx)
    }
}
