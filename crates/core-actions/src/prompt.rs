//! Single-line prompt shown in the message bar.
//!
//! The prompt is a state machine fed one key at a time by the dispatcher
//! instead of a nested read loop, so the main loop keeps composing frames
//! while the user types. Editing rules:
//! * Backspace, Delete and Ctrl-H drop the last character.
//! * Escape cancels.
//! * Enter confirms only when the input is non-empty.
//! * Printable ASCII appends; everything else is ignored.
//!
//! A search prompt additionally forwards every key to its `FindSession`.

use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::EditorState;

use crate::key_translator::is_insertable;
use crate::search::FindSession;

#[derive(Debug)]
pub enum PromptKind {
    SaveAs,
    Find(FindSession),
}

impl PromptKind {
    fn template(&self) -> (&'static str, &'static str) {
        match self {
            PromptKind::SaveAs => ("Save as: ", " (ESC to cancel)"),
            PromptKind::Find(_) => ("Search: ", " (Use ESC/Arrows/Enter)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    Cancelled,
    Confirmed(String),
}

#[derive(Debug)]
pub struct Prompt {
    kind: PromptKind,
    input: String,
}

impl Prompt {
    pub fn save_as() -> Self {
        Self {
            kind: PromptKind::SaveAs,
            input: String::new(),
        }
    }

    pub fn find(session: FindSession) -> Self {
        Self {
            kind: PromptKind::Find(session),
            input: String::new(),
        }
    }

    pub fn kind(&self) -> &PromptKind {
        &self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn into_kind(self) -> PromptKind {
        self.kind
    }

    /// Message-bar text: the template with the current input spliced in.
    pub fn message(&self) -> String {
        let (before, after) = self.kind.template();
        format!("{before}{}{after}", self.input)
    }

    /// Apply one key to the input line.
    pub fn feed(&mut self, key: &KeyEvent) -> PromptOutcome {
        let ctrl = key.mods.contains(KeyModifiers::CTRL);
        match key.code {
            KeyCode::Backspace | KeyCode::Delete => {
                self.input.pop();
            }
            KeyCode::Char('h') if ctrl => {
                self.input.pop();
            }
            KeyCode::Esc => return PromptOutcome::Cancelled,
            KeyCode::Enter if !self.input.is_empty() => {
                return PromptOutcome::Confirmed(self.input.clone());
            }
            KeyCode::Char(c) if !ctrl && is_insertable(c) => self.input.push(c),
            _ => {}
        }
        PromptOutcome::Pending
    }

    /// Let an attached search session react to `key` with the current input.
    pub fn observe(&mut self, state: &mut EditorState, key: &KeyEvent) {
        if let PromptKind::Find(session) = &mut self.kind {
            session.on_keystroke(state, &self.input, key);
        }
    }
}
