//! Editor actions: key translation, dispatch, prompts and search.
//!
//! A key reaches the editor through `dispatcher::handle_key`. When a prompt
//! is open it owns the key; otherwise the key is translated into an `Action`
//! and dispatched against the `EditorState`.

pub mod dispatcher;
pub mod io_ops;
mod key_translator;
pub mod prompt;
pub mod search;

pub use dispatcher::{DispatchResult, dispatch, handle_key};
pub use key_translator::translate_key;
pub use prompt::{Prompt, PromptKind, PromptOutcome};
pub use search::FindSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(u8),
    InsertNewline,
    /// Backspace: remove the byte left of the cursor (joining rows at column 0).
    DeleteLeft,
    /// Delete: step right, then delete left.
    DeleteUnder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Save,
    Find,
    Quit,
    /// Recognized key with no effect (Ctrl-L, Escape).
    Noop,
}
