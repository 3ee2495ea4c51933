//! A single document line plus its derived render and highlight arrays.
//!
//! Invariants (hold after every public mutation made through `Document`):
//! * `render` never contains a tab and is regenerated from `chars` only.
//! * `hl.len() == render.len()`.
//! * `idx` equals the row's position inside the owning document.

use core_syntax::{Highlight, Syntax, highlight_row};

/// Default render tab stop.
pub const TAB_STOP: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub(crate) idx: usize,
    pub(crate) chars: Vec<u8>,
    pub(crate) render: Vec<u8>,
    pub(crate) hl: Vec<Highlight>,
    pub(crate) open_comment: bool,
}

/// Expand tabs in `chars` to the next multiple of `tab_stop`, writing into `render`.
pub fn project(chars: &[u8], tab_stop: usize, render: &mut Vec<u8>) {
    let tab_stop = tab_stop.max(1);
    render.clear();
    let tabs = chars.iter().filter(|&&c| c == b'\t').count();
    render.reserve(chars.len() + tabs * (tab_stop - 1));
    for &c in chars {
        if c == b'\t' {
            render.push(b' ');
            while render.len() % tab_stop != 0 {
                render.push(b' ');
            }
        } else {
            render.push(c);
        }
    }
}

impl Row {
    pub(crate) fn new(idx: usize, chars: Vec<u8>) -> Self {
        Self {
            idx,
            chars,
            ..Self::default()
        }
    }

    pub fn index(&self) -> usize {
        self.idx
    }

    /// Raw content bytes (no line terminator).
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.hl
    }

    pub fn ends_open_comment(&self) -> bool {
        self.open_comment
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Map a content column to its render column.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut rx = 0;
        for &c in self.chars.iter().take(cx) {
            if c == b'\t' {
                rx += tab_stop - 1 - rx % tab_stop;
            }
            rx += 1;
        }
        rx
    }

    /// Map a render column back to the content column whose cell covers it.
    /// Returns the row length when `rx` lies past the end of the row.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut cur_rx = 0;
        for (cx, &c) in self.chars.iter().enumerate() {
            if c == b'\t' {
                cur_rx += tab_stop - 1 - cur_rx % tab_stop;
            }
            cur_rx += 1;
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }

    pub(crate) fn update_render(&mut self, tab_stop: usize) {
        project(&self.chars, tab_stop, &mut self.render);
    }

    /// Re-run the highlighter. Returns true when the open-comment state changed.
    pub(crate) fn update_highlight(
        &mut self,
        syntax: Option<&Syntax>,
        starts_in_comment: bool,
    ) -> bool {
        let open = highlight_row(&self.render, syntax, starts_in_comment, &mut self.hl);
        let changed = open != self.open_comment;
        self.open_comment = open;
        changed
    }

    pub(crate) fn insert_char(&mut self, at: usize, ch: u8) -> usize {
        let at = at.min(self.chars.len());
        self.chars.insert(at, ch);
        at
    }

    pub(crate) fn delete_char(&mut self, at: usize) -> bool {
        if at >= self.chars.len() {
            return false;
        }
        self.chars.remove(at);
        true
    }
}
