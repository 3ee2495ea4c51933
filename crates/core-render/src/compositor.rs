//! Frame composition.
//!
//! Layout top to bottom: `viewport.rows` text rows, one reverse-video status
//! bar, one message bar. Every text row is cleared to end of line after
//! drawing so stale cells never survive a shorter redraw. The cursor is
//! hidden for the whole frame and shown again at its final position.

use std::time::Instant;

use core_state::EditorState;
use core_syntax::Highlight;
use crossterm::style::Color;

use crate::status::{StatusContext, build_status};
use crate::style::{color_for, control_placeholder};
use crate::writer::Writer;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn welcome_message() -> String {
    format!("Kiln editor -- version {VERSION}")
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Build one full frame for `state` as seen at time `now`.
///
/// Expects `state.scroll()` to have run this cycle so the cursor lies in the
/// viewport.
pub fn compose_frame(state: &EditorState, now: Instant) -> Writer {
    let vp = &state.viewport;
    tracing::trace!(
        target: "render",
        rows = vp.rows,
        cols = vp.cols,
        row_offset = vp.row_offset,
        col_offset = vp.col_offset,
        "compose_frame"
    );
    let mut w = Writer::new();
    w.hide_cursor();
    draw_rows(state, &mut w);
    draw_status_bar(state, &mut w);
    draw_message_bar(state, now, &mut w);

    let y = state.cursor.pos.row.saturating_sub(vp.row_offset);
    let x = state.cursor.rx.saturating_sub(vp.col_offset);
    w.move_to(to_u16(x), to_u16(y));
    w.show_cursor();
    w
}

fn draw_rows(state: &EditorState, w: &mut Writer) {
    let vp = &state.viewport;
    let doc = &state.doc;
    for y in 0..vp.rows {
        w.move_to(0, to_u16(y));
        match doc.row(y + vp.row_offset) {
            Some(row) => draw_text(row.render(), row.highlight(), vp.col_offset, vp.cols, w),
            None if doc.num_rows() == 0 && y == vp.rows / 3 => draw_welcome(vp.cols, w),
            None => w.print("~"),
        }
        w.clear_to_eol();
    }
}

/// Emit the visible slice of one row, switching colour only between runs.
fn draw_text(render: &[u8], hl: &[Highlight], col_offset: usize, cols: usize, w: &mut Writer) {
    let start = col_offset.min(render.len());
    let end = col_offset.saturating_add(cols).min(render.len());
    let mut current: Option<Color> = None;
    for (&c, &h) in render[start..end].iter().zip(hl.iter().skip(start)) {
        if let Some(sym) = control_placeholder(c) {
            // reverse toggles leave the active colour untouched
            w.reverse(true);
            w.print(sym);
            w.reverse(false);
            continue;
        }
        let color = color_for(h);
        if color != current {
            w.fg(color);
            current = color;
        }
        w.bytes(&[c]);
    }
    if current.is_some() {
        w.fg(None);
    }
}

fn draw_welcome(cols: usize, w: &mut Writer) {
    let msg = welcome_message();
    let shown: String = msg.chars().take(cols).collect();
    let mut padding = (cols - shown.len()) / 2;
    if padding > 0 {
        w.print("~");
        padding -= 1;
    }
    w.print(" ".repeat(padding));
    w.print(shown);
}

fn draw_status_bar(state: &EditorState, w: &mut Writer) {
    let vp = &state.viewport;
    let ctx = StatusContext {
        file_name: state.file_name(),
        num_rows: state.doc.num_rows(),
        dirty: state.doc.is_dirty(),
        filetype: state.doc.syntax().map(|s| s.filetype),
        line: state.cursor.pos.row,
    };
    w.move_to(0, to_u16(vp.rows));
    w.reverse(true);
    w.print(build_status(&ctx, vp.cols));
    w.reverse(false);
}

fn draw_message_bar(state: &EditorState, now: Instant, w: &mut Writer) {
    let vp = &state.viewport;
    w.move_to(0, to_u16(vp.rows + 1));
    w.clear_to_eol();
    if let Some(msg) = state.visible_status(now) {
        w.print(msg.chars().take(vp.cols).collect::<String>());
    }
}
