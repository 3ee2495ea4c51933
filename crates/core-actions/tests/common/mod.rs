#![allow(dead_code)]

use core_actions::{DispatchResult, Prompt, handle_key};
use core_events::{KeyCode, KeyEvent};
use core_state::EditorState;
use core_text::Document;

pub struct Harness {
    pub state: EditorState,
    pub prompt: Option<Prompt>,
}

impl Harness {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            state: EditorState::new(Document::from_lines(lines.iter().copied()), 10, 40),
            prompt: None,
        }
    }

    pub fn key(&mut self, key: KeyEvent) -> DispatchResult {
        let r = handle_key(&key, &mut self.state, &mut self.prompt);
        self.state.scroll();
        r
    }

    pub fn code(&mut self, code: KeyCode) -> DispatchResult {
        self.key(KeyEvent::plain(code))
    }

    pub fn ctrl(&mut self, letter: char) -> DispatchResult {
        self.key(KeyEvent::ctrl(letter))
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.code(KeyCode::Char(c));
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.state.doc.lines_to_text()).unwrap()
    }

    pub fn status(&self) -> Option<&str> {
        self.state.status.as_ref().map(|m| m.text.as_str())
    }
}
