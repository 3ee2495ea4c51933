//! Stateless key -> Action translation for the editing surface.
//!
//! Only printable ASCII and Tab insert text; other characters are dropped
//! (the document model is one byte per cell). Unbound Ctrl chords translate
//! to nothing.

use crate::{Action, EditKind, MotionKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};

pub fn translate_key(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL) {
        let KeyCode::Char(c) = key.code else {
            return None;
        };
        return match c.to_ascii_lowercase() {
            'q' => Some(Action::Quit),
            's' => Some(Action::Save),
            'f' => Some(Action::Find),
            'h' => Some(Action::Edit(EditKind::DeleteLeft)),
            'l' => Some(Action::Noop),
            _ => None,
        };
    }
    if key.mods.contains(KeyModifiers::ALT) {
        return None;
    }
    let action = match key.code {
        KeyCode::Char(c) if is_insertable(c) => Action::Edit(EditKind::InsertChar(c as u8)),
        KeyCode::Char(_) => return None,
        KeyCode::Tab => Action::Edit(EditKind::InsertChar(b'\t')),
        KeyCode::Enter => Action::Edit(EditKind::InsertNewline),
        KeyCode::Backspace => Action::Edit(EditKind::DeleteLeft),
        KeyCode::Delete => Action::Edit(EditKind::DeleteUnder),
        KeyCode::Esc => Action::Noop,
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Down => Action::Motion(MotionKind::Down),
        KeyCode::Home => Action::Motion(MotionKind::LineStart),
        KeyCode::End => Action::Motion(MotionKind::LineEnd),
        KeyCode::PageUp => Action::Motion(MotionKind::PageUp),
        KeyCode::PageDown => Action::Motion(MotionKind::PageDown),
    };
    Some(action)
}

/// Printable ASCII (space through `~`).
pub(crate) fn is_insertable(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> Option<Action> {
        translate_key(&KeyEvent::plain(code))
    }

    #[test]
    fn printable_ascii_inserts() {
        assert_eq!(
            plain(KeyCode::Char('a')),
            Some(Action::Edit(EditKind::InsertChar(b'a')))
        );
        assert_eq!(
            plain(KeyCode::Char(' ')),
            Some(Action::Edit(EditKind::InsertChar(b' ')))
        );
        assert_eq!(
            plain(KeyCode::Tab),
            Some(Action::Edit(EditKind::InsertChar(b'\t')))
        );
    }

    #[test]
    fn non_ascii_is_ignored() {
        assert_eq!(plain(KeyCode::Char('é')), None);
        assert_eq!(plain(KeyCode::Char('\u{7f}')), None);
    }

    #[test]
    fn ctrl_bindings() {
        assert_eq!(translate_key(&KeyEvent::ctrl('q')), Some(Action::Quit));
        assert_eq!(translate_key(&KeyEvent::ctrl('s')), Some(Action::Save));
        assert_eq!(translate_key(&KeyEvent::ctrl('f')), Some(Action::Find));
        assert_eq!(
            translate_key(&KeyEvent::ctrl('h')),
            Some(Action::Edit(EditKind::DeleteLeft))
        );
        assert_eq!(translate_key(&KeyEvent::ctrl('l')), Some(Action::Noop));
        assert_eq!(translate_key(&KeyEvent::ctrl('x')), None);
    }

    #[test]
    fn named_keys() {
        assert_eq!(plain(KeyCode::Esc), Some(Action::Noop));
        assert_eq!(
            plain(KeyCode::Delete),
            Some(Action::Edit(EditKind::DeleteUnder))
        );
        assert_eq!(
            plain(KeyCode::End),
            Some(Action::Motion(MotionKind::LineEnd))
        );
        assert_eq!(
            plain(KeyCode::PageDown),
            Some(Action::Motion(MotionKind::PageDown))
        );
    }
}
