//! Property checks for the render projection, coordinate mappings and the
//! save/load round trip.

use core_text::{Document, Position, TAB_STOP};
use proptest::prelude::*;

/// Row content without line terminators; tabs are deliberately frequent.
fn row_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            3 => 0x20u8..0x7f,
            1 => Just(b'\t'),
        ],
        0..40,
    )
}

fn split_saved(text: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = text.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect();
    // The trailing newline yields one empty piece that is not a row.
    lines.pop();
    lines
}

proptest! {
    #[test]
    fn render_has_no_tabs_and_never_shrinks(chars in row_bytes()) {
        let doc = Document::from_lines([chars.clone()]);
        let row = doc.row(0).unwrap();
        prop_assert!(!row.render().contains(&b'\t'));
        prop_assert!(row.render().len() >= row.chars().len());
        prop_assert_eq!(row.render().len(), row.highlight().len());
        if !chars.contains(&b'\t') {
            prop_assert_eq!(row.render(), row.chars());
        }
    }

    #[test]
    fn rx_to_cx_never_overshoots(chars in row_bytes(), rx in 0usize..400) {
        let doc = Document::from_lines([chars]);
        let row = doc.row(0).unwrap();
        let cx = row.rx_to_cx(rx, TAB_STOP);
        prop_assert!(cx <= row.len());
        prop_assert!(row.cx_to_rx(cx, TAB_STOP) <= rx);
    }

    #[test]
    fn mapping_round_trips_on_char_boundaries(chars in row_bytes()) {
        let doc = Document::from_lines([chars]);
        let row = doc.row(0).unwrap();
        for cx in 0..=row.len() {
            let rx = row.cx_to_rx(cx, TAB_STOP);
            prop_assert_eq!(row.rx_to_cx(rx, TAB_STOP), cx);
        }
    }

    #[test]
    fn save_load_round_trip(rows in prop::collection::vec(row_bytes(), 0..12)) {
        let doc = Document::from_lines(rows.clone());
        let again = Document::from_lines(split_saved(&doc.lines_to_text()));
        let reloaded: Vec<Vec<u8>> = again.rows().iter().map(|r| r.chars().to_vec()).collect();
        prop_assert_eq!(reloaded, rows);
    }

    #[test]
    fn typing_then_backspacing_restores_row(
        base in row_bytes(),
        typed in prop::collection::vec(0x20u8..0x7f, 1..10),
        col in 0usize..50,
    ) {
        let mut doc = Document::from_lines([base.clone()]);
        let mut pos = Position::new(0, col.min(base.len()));
        for &b in &typed {
            doc.insert_char(&mut pos, b);
        }
        for _ in &typed {
            doc.delete_char(&mut pos);
        }
        prop_assert_eq!(doc.row(0).unwrap().chars(), base.as_slice());
    }
}
