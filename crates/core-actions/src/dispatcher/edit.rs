//! Text edits routed to the document at the cursor.

use super::DispatchResult;
use super::motion;
use crate::{EditKind, MotionKind};
use core_state::EditorState;

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor.pos;
    let dirty_before = state.doc.dirty();
    match kind {
        EditKind::InsertChar(ch) => state.doc.insert_char(&mut state.cursor.pos, ch),
        EditKind::InsertNewline => state.doc.insert_newline(&mut state.cursor.pos),
        EditKind::DeleteLeft => state.doc.delete_char(&mut state.cursor.pos),
        EditKind::DeleteUnder => {
            motion::step(MotionKind::Right, state);
            state.doc.delete_char(&mut state.cursor.pos);
        }
    }
    tracing::trace!(target: "actions.dispatch", op = "edit", kind = edit_label(kind), line = before.row, col = before.col, to_line = state.cursor.pos.row, to_col = state.cursor.pos.col);
    if state.doc.dirty() != dirty_before || state.cursor.pos != before {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

// never log inserted bytes, only the kind of edit
fn edit_label(kind: EditKind) -> &'static str {
    match kind {
        EditKind::InsertChar(_) => "insert_char",
        EditKind::InsertNewline => "insert_newline",
        EditKind::DeleteLeft => "delete_left",
        EditKind::DeleteUnder => "delete_under",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{Document, Position};

    fn state(lines: &[&str]) -> EditorState {
        EditorState::new(Document::from_lines(lines.iter().copied()), 5, 40)
    }

    fn text(st: &EditorState) -> String {
        String::from_utf8(st.doc.lines_to_text()).unwrap()
    }

    #[test]
    fn typing_on_empty_document_creates_row() {
        let mut st = state(&[]);
        handle_edit(EditKind::InsertChar(b'h'), &mut st);
        handle_edit(EditKind::InsertChar(b'i'), &mut st);
        assert_eq!(text(&st), "hi\n");
        assert_eq!(st.cursor.pos, Position::new(0, 2));
        assert!(st.doc.is_dirty());
    }

    #[test]
    fn newline_splits_row() {
        let mut st = state(&["hello"]);
        st.cursor.pos = Position::new(0, 3);
        handle_edit(EditKind::InsertNewline, &mut st);
        assert_eq!(text(&st), "hel\nlo\n");
        assert_eq!(st.cursor.pos, Position::new(1, 0));
    }

    #[test]
    fn backspace_at_origin_is_clean_noop() {
        let mut st = state(&["abc"]);
        let r = handle_edit(EditKind::DeleteLeft, &mut st);
        assert!(!r.dirty);
        assert!(!st.doc.is_dirty());
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut st = state(&["abc"]);
        st.cursor.pos = Position::new(0, 1);
        handle_edit(EditKind::DeleteUnder, &mut st);
        assert_eq!(text(&st), "ac\n");
        assert_eq!(st.cursor.pos, Position::new(0, 1));
    }

    #[test]
    fn delete_at_row_end_joins_next_row() {
        let mut st = state(&["ab", "cd"]);
        st.cursor.pos = Position::new(0, 2);
        handle_edit(EditKind::DeleteUnder, &mut st);
        assert_eq!(text(&st), "abcd\n");
        assert_eq!(st.cursor.pos, Position::new(0, 2));
    }
}
