//! Save, find and quit commands.
//!
//! Saving without a file name opens the save-as prompt; the dispatcher
//! completes the save once the prompt is confirmed. Save failures are shown
//! in the message bar and leave the document (and its dirty counter) as is.

use super::DispatchResult;
use crate::io_ops;
use crate::prompt::Prompt;
use crate::search::FindSession;
use core_state::EditorState;

pub(crate) fn save(state: &mut EditorState, prompt: &mut Option<Prompt>) -> DispatchResult {
    if state.file_name.is_none() {
        let p = Prompt::save_as();
        state.set_status(p.message());
        *prompt = Some(p);
        return DispatchResult::dirty();
    }
    write_document(state)
}

/// Serialize the document to its bound file name.
pub(crate) fn write_document(state: &mut EditorState) -> DispatchResult {
    let Some(path) = state.file_name.clone() else {
        return DispatchResult::clean();
    };
    let bytes = state.doc.lines_to_text();
    match io_ops::save_file(&path, &bytes) {
        Ok(n) => {
            state.doc.mark_clean();
            state.set_status(format!("{n} bytes written to disk"));
        }
        Err(e) => {
            tracing::error!(target: "io", error = %e, "save_failed");
            state.set_status(format!("Can't save! I/O error: {}", e.io_error()));
        }
    }
    DispatchResult::dirty()
}

pub(crate) fn find(state: &mut EditorState, prompt: &mut Option<Prompt>) -> DispatchResult {
    let p = Prompt::find(FindSession::begin(state));
    state.set_status(p.message());
    *prompt = Some(p);
    tracing::debug!(target: "actions.search", "session_start");
    DispatchResult::dirty()
}

/// Quit immediately when clean; otherwise demand `quit_times` extra presses.
pub(crate) fn quit(state: &mut EditorState) -> DispatchResult {
    if state.doc.is_dirty() && state.quit_times_left > 0 {
        state.set_status(format!(
            "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
            state.quit_times_left
        ));
        state.quit_times_left -= 1;
        tracing::info!(target: "actions.dispatch", remaining = state.quit_times_left, "quit_blocked_dirty");
        return DispatchResult::dirty();
    }
    DispatchResult::quit()
}
