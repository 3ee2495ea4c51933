//! Dispatcher applying keys and `Action`s to mutable editor state.
//!
//! Sub-modules:
//! * `motion`  - cursor movement semantics
//! * `edit`    - text mutation (insert/delete/newline)
//! * `command` - save, find and the quit confirmation protocol
//!
//! The open prompt (if any) is owned by the caller and passed in by
//! reference; while it is `Some` every key goes to the prompt.

use crate::prompt::{Prompt, PromptKind, PromptOutcome};
use crate::{Action, translate_key};
use core_events::KeyEvent;
use core_state::EditorState;

mod command;
mod edit;
mod motion;

/// Result of dispatching a single key or `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Route one key: to the open prompt, or through translation and `dispatch`.
pub fn handle_key(
    key: &KeyEvent,
    state: &mut EditorState,
    prompt: &mut Option<Prompt>,
) -> DispatchResult {
    if prompt.is_some() {
        return handle_prompt_key(key, state, prompt);
    }
    match translate_key(key) {
        Some(action) => dispatch(action, state, prompt),
        None => {
            state.reset_quit_confirmations();
            DispatchResult::clean()
        }
    }
}

/// Apply an action to editor state. Any action other than `Quit` resets the
/// quit confirmation counter.
pub fn dispatch(
    action: Action,
    state: &mut EditorState,
    prompt: &mut Option<Prompt>,
) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", action = action_label(&action), "dispatch");
    if action != Action::Quit {
        state.reset_quit_confirmations();
    }
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, state),
        Action::Edit(kind) => edit::handle_edit(kind, state),
        Action::Save => command::save(state, prompt),
        Action::Find => command::find(state, prompt),
        Action::Quit => command::quit(state),
        Action::Noop => DispatchResult::clean(),
    }
}

fn handle_prompt_key(
    key: &KeyEvent,
    state: &mut EditorState,
    slot: &mut Option<Prompt>,
) -> DispatchResult {
    let Some(prompt) = slot.as_mut() else {
        return DispatchResult::clean();
    };
    let outcome = prompt.feed(key);
    prompt.observe(state, key);
    if outcome == PromptOutcome::Pending {
        state.set_status(prompt.message());
        return DispatchResult::dirty();
    }
    let Some(prompt) = slot.take() else {
        return DispatchResult::clean();
    };
    state.set_status("");
    match (prompt.into_kind(), outcome) {
        (PromptKind::SaveAs, PromptOutcome::Confirmed(name)) => {
            tracing::debug!(target: "actions.dispatch", "save_as_confirmed");
            state.set_file_name(name);
            command::write_document(state)
        }
        (PromptKind::SaveAs, _) => {
            state.set_status("Save aborted");
            DispatchResult::dirty()
        }
        (PromptKind::Find(session), outcome) => {
            session.finish(state, matches!(outcome, PromptOutcome::Confirmed(_)));
            DispatchResult::dirty()
        }
    }
}

fn action_label(action: &Action) -> &'static str {
    match action {
        Action::Motion(_) => "motion",
        Action::Edit(_) => "edit",
        Action::Save => "save",
        Action::Find => "find",
        Action::Quit => "quit",
        Action::Noop => "noop",
    }
}
