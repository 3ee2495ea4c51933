mod common;

use common::Harness;
use core_events::KeyCode;
use core_syntax::Highlight;
use core_text::Position;
use pretty_assertions::assert_eq;

fn highlight(h: &Harness, row: usize) -> Vec<Highlight> {
    h.state.doc.row(row).unwrap().highlight().to_vec()
}

#[test]
fn finds_comment_and_restores_on_escape() {
    let mut h = Harness::new(&["abc", "a comment here", "def"]);
    let original = highlight(&h, 1);
    h.ctrl('f');
    assert_eq!(h.status(), Some("Search:  (Use ESC/Arrows/Enter)"));
    h.type_str("comment");
    assert_eq!(h.status(), Some("Search: comment (Use ESC/Arrows/Enter)"));
    assert_eq!(h.state.cursor.pos, Position::new(1, 2));
    let overlaid = highlight(&h, 1);
    assert!(overlaid[2..9].iter().all(|c| *c == Highlight::Match));
    assert_eq!(overlaid[..2], original[..2]);
    assert_eq!(overlaid[9..], original[9..]);
    // the match row scrolls to the top of the viewport
    assert_eq!(h.state.viewport.row_offset, 1);

    h.code(KeyCode::Esc);
    assert!(h.prompt.is_none());
    assert_eq!(highlight(&h, 1), original);
    assert_eq!(h.state.cursor.pos, Position::origin());
    assert_eq!(h.state.viewport.row_offset, 0);
    assert_eq!(h.text(), "abc\na comment here\ndef\n");
}

#[test]
fn enter_keeps_cursor_at_match() {
    let mut h = Harness::new(&["abc", "xyz"]);
    h.state.set_file_name("t.c");
    let original = highlight(&h, 1);
    h.ctrl('f');
    h.type_str("yz");
    h.code(KeyCode::Enter);
    assert!(h.prompt.is_none());
    assert_eq!(h.state.cursor.pos, Position::new(1, 1));
    assert_eq!(highlight(&h, 1), original);
    assert_eq!(h.status(), Some(""));
}

#[test]
fn enter_on_empty_query_keeps_prompt_open() {
    let mut h = Harness::new(&["abc"]);
    h.ctrl('f');
    h.code(KeyCode::Enter);
    assert!(h.prompt.is_some());
    h.code(KeyCode::Esc);
    assert!(h.prompt.is_none());
}

#[test]
fn arrows_step_between_matches() {
    let mut h = Harness::new(&["foo", "bar", "foo bar foo"]);
    h.ctrl('f');
    h.type_str("foo");
    assert_eq!(h.state.cursor.pos, Position::new(0, 0));
    h.code(KeyCode::Down);
    assert_eq!(h.state.cursor.pos, Position::new(2, 0));
    h.code(KeyCode::Right);
    assert_eq!(h.state.cursor.pos, Position::new(0, 0));
    h.code(KeyCode::Up);
    assert_eq!(h.state.cursor.pos, Position::new(2, 0));
    // arrows never leave the prompt or move the cursor on their own
    assert!(h.prompt.is_some());
}

#[test]
fn backspacing_query_rescans_from_top() {
    let mut h = Harness::new(&["ab", "abc"]);
    h.ctrl('f');
    h.type_str("abc");
    assert_eq!(h.state.cursor.pos.row, 1);
    h.code(KeyCode::Backspace);
    assert_eq!(h.state.cursor.pos.row, 0);
    assert!(highlight(&h, 1).iter().all(|c| *c == Highlight::Normal));
}

#[test]
fn search_matches_rendered_text_through_tabs() {
    let mut h = Harness::new(&["a\tb"]);
    h.ctrl('f');
    h.type_str("   b");
    // render is "a       b"; match starts inside the tab expansion
    assert_eq!(h.state.cursor.pos, Position::new(0, 1));
}
