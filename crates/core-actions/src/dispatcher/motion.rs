//! Cursor movement.
//!
//! Left at column 0 wraps to the end of the previous row; Right at a row end
//! wraps to the start of the next. Up/Down stop at the first row and at the
//! virtual row after the last. After every move the column is clamped to the
//! new row's length.

use super::DispatchResult;
use crate::MotionKind;
use core_state::EditorState;

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor.pos;
    match kind {
        MotionKind::PageUp | MotionKind::PageDown => page(kind, state),
        MotionKind::LineStart => state.cursor.pos.col = 0,
        MotionKind::LineEnd => {
            if state.cursor.pos.row < state.doc.num_rows() {
                state.cursor.pos.col = state.doc.row_len(state.cursor.pos.row);
            }
        }
        _ => step(kind, state),
    }
    tracing::trace!(target: "actions.dispatch", op = "motion", kind = ?kind, from_row = before.row, from_col = before.col, row = state.cursor.pos.row, col = state.cursor.pos.col);
    if before == state.cursor.pos {
        DispatchResult::clean()
    } else {
        DispatchResult::dirty()
    }
}

/// Single-cell arrow move.
pub(crate) fn step(kind: MotionKind, state: &mut EditorState) {
    let num_rows = state.doc.num_rows();
    let pos = &mut state.cursor.pos;
    let on_row = pos.row < num_rows;
    match kind {
        MotionKind::Left => {
            if pos.col != 0 {
                pos.col -= 1;
            } else if pos.row > 0 {
                pos.row -= 1;
                pos.col = state.doc.row_len(pos.row);
            }
        }
        MotionKind::Right => {
            if on_row {
                let len = state.doc.row_len(pos.row);
                if pos.col < len {
                    pos.col += 1;
                } else if pos.col == len {
                    pos.row += 1;
                    pos.col = 0;
                }
            }
        }
        MotionKind::Up => pos.row = pos.row.saturating_sub(1),
        MotionKind::Down => {
            if pos.row < num_rows {
                pos.row += 1;
            }
        }
        _ => {}
    }
    let len = if pos.row < num_rows {
        state.doc.row_len(pos.row)
    } else {
        0
    };
    pos.col = pos.col.min(len);
}

/// Snap to the top (or bottom) visible row, then move a full screen.
fn page(kind: MotionKind, state: &mut EditorState) {
    let rows = state.viewport.rows;
    let (dir, target) = if kind == MotionKind::PageUp {
        (MotionKind::Up, state.viewport.row_offset)
    } else {
        let bottom = state.viewport.row_offset + rows - 1;
        (MotionKind::Down, bottom.min(state.doc.num_rows()))
    };
    state.cursor.pos.row = target;
    for _ in 0..rows {
        step(dir, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{Document, Position};

    fn state(lines: &[&str]) -> EditorState {
        EditorState::new(Document::from_lines(lines.iter().copied()), 5, 40)
    }

    #[test]
    fn left_wraps_to_previous_row_end() {
        let mut st = state(&["abc", "de"]);
        st.cursor.pos = Position::new(1, 0);
        handle_motion(MotionKind::Left, &mut st);
        assert_eq!(st.cursor.pos, Position::new(0, 3));
    }

    #[test]
    fn left_at_origin_is_noop() {
        let mut st = state(&["abc"]);
        let r = handle_motion(MotionKind::Left, &mut st);
        assert_eq!(st.cursor.pos, Position::origin());
        assert!(!r.dirty);
    }

    #[test]
    fn right_wraps_to_next_row_start() {
        let mut st = state(&["ab", "c"]);
        st.cursor.pos = Position::new(0, 2);
        handle_motion(MotionKind::Right, &mut st);
        assert_eq!(st.cursor.pos, Position::new(1, 0));
        // from the last row end onto the virtual row, then stop
        st.cursor.pos = Position::new(1, 1);
        handle_motion(MotionKind::Right, &mut st);
        assert_eq!(st.cursor.pos, Position::new(2, 0));
        handle_motion(MotionKind::Right, &mut st);
        assert_eq!(st.cursor.pos, Position::new(2, 0));
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut st = state(&["long line", "ab", "longer line"]);
        st.cursor.pos = Position::new(0, 8);
        handle_motion(MotionKind::Down, &mut st);
        assert_eq!(st.cursor.pos, Position::new(1, 2));
        handle_motion(MotionKind::Down, &mut st);
        assert_eq!(st.cursor.pos, Position::new(2, 2));
        handle_motion(MotionKind::Down, &mut st);
        assert_eq!(st.cursor.pos, Position::new(3, 0));
        handle_motion(MotionKind::Down, &mut st);
        assert_eq!(st.cursor.pos, Position::new(3, 0));
        st.cursor.pos = Position::new(0, 0);
        handle_motion(MotionKind::Up, &mut st);
        assert_eq!(st.cursor.pos, Position::new(0, 0));
    }

    #[test]
    fn home_and_end() {
        let mut st = state(&["hello"]);
        st.cursor.pos = Position::new(0, 2);
        handle_motion(MotionKind::LineEnd, &mut st);
        assert_eq!(st.cursor.pos.col, 5);
        handle_motion(MotionKind::LineStart, &mut st);
        assert_eq!(st.cursor.pos.col, 0);
        // End on the virtual row does nothing
        st.cursor.pos = Position::new(1, 0);
        handle_motion(MotionKind::LineEnd, &mut st);
        assert_eq!(st.cursor.pos, Position::new(1, 0));
    }

    #[test]
    fn page_down_snaps_to_bottom_then_moves_a_screen() {
        let lines: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let mut st = EditorState::new(Document::from_lines(lines), 5, 40);
        handle_motion(MotionKind::PageDown, &mut st);
        // bottom visible row is 4, plus 5 rows
        assert_eq!(st.cursor.pos.row, 9);
        st.scroll();
        assert_eq!(st.viewport.row_offset, 5);
        handle_motion(MotionKind::PageUp, &mut st);
        // top visible row is 5, minus 5 rows
        assert_eq!(st.cursor.pos.row, 0);
    }

    #[test]
    fn page_down_stops_at_virtual_row() {
        let mut st = state(&["a", "b"]);
        handle_motion(MotionKind::PageDown, &mut st);
        assert_eq!(st.cursor.pos, Position::new(2, 0));
    }
}
