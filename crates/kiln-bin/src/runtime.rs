//! Synchronous editor loop.
//!
//! One cycle: bring the cursor into view, compose and present a frame, then
//! block on the input source for at most its poll window. A quiet poll still
//! recomposes so an expired message leaves the message bar.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use core_actions::{Prompt, handle_key, io_ops};
use core_config::Config;
use core_events::InputEvent;
use core_input::InputSource;
use core_render::{Writer, compose_frame};
use core_state::EditorState;
use core_terminal::{RESERVED_ROWS, WindowSize};
use core_text::Document;
use tracing::{debug, info, trace};

pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Build the initial editor state for a terminal of `size`, loading `path`
/// when given. A missing file is not an error.
pub fn build_state(config: &Config, size: WindowSize, path: Option<&Path>) -> Result<EditorState> {
    let editor = config.editor();
    let doc = Document::with_tab_stop(editor.tab_stop);
    let mut state = EditorState::new(doc, size.text_rows(), size.cols as usize)
        .with_quit_times(editor.quit_times)
        .with_message_ttl(editor.message_timeout());
    if let Some(path) = path {
        io_ops::load_into(&mut state, path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        debug!(target: "runtime", rows = state.doc.num_rows(), "file_loaded");
    }
    state.set_status(HELP_MESSAGE);
    Ok(state)
}

pub struct Runtime {
    state: EditorState,
    prompt: Option<Prompt>,
}

impl Runtime {
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            prompt: None,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> LoopControl {
        match event {
            InputEvent::Key(key) => {
                let result = handle_key(key, &mut self.state, &mut self.prompt);
                if result.quit {
                    info!(target: "runtime", "quit_requested");
                    return LoopControl::Quit;
                }
            }
            InputEvent::Resize(cols, rows) => {
                let text_rows = rows.saturating_sub(RESERVED_ROWS) as usize;
                self.state.resize(text_rows, *cols as usize);
            }
        }
        LoopControl::Continue
    }

    pub fn frame(&mut self, now: Instant) -> Writer {
        self.state.scroll();
        compose_frame(&self.state, now)
    }

    /// Drive the loop until a quit is confirmed. `present` receives every
    /// composed frame; the terminal build flushes it to stdout.
    pub fn run<I, F>(&mut self, input: &mut I, mut present: F) -> Result<()>
    where
        I: InputSource,
        F: FnMut(Writer) -> Result<()>,
    {
        let span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter = span.enter();
        loop {
            present(self.frame(Instant::now()))?;
            let Some(event) = input.next_event()? else {
                trace!(target: "runtime", "idle_poll");
                continue;
            };
            if self.handle_event(&event) == LoopControl::Quit {
                break;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn state(&self) -> &EditorState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{KeyCode, KeyEvent};
    use core_input::ScriptedInput;
    use std::io::Write;

    fn size(cols: u16, rows: u16) -> WindowSize {
        WindowSize::checked(cols, rows).unwrap()
    }

    fn key(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::plain(KeyCode::Char(c)))
    }

    fn ctrl(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::ctrl(c))
    }

    #[test]
    fn build_state_without_path_shows_help() {
        let state = build_state(&Config::default(), size(80, 24), None).unwrap();
        assert_eq!(state.doc.num_rows(), 0);
        assert_eq!(state.viewport.rows, 22);
        assert_eq!(state.viewport.cols, 80);
        assert_eq!(
            state.status.as_ref().map(|m| m.text.as_str()),
            Some(HELP_MESSAGE)
        );
        assert_eq!(state.quit_times_left, 3);
    }

    #[test]
    fn build_state_loads_file_and_selects_syntax() {
        let mut file = tempfile::Builder::new().suffix(".c").tempfile().unwrap();
        write!(file, "int x;\r\n// note\n").unwrap();
        let state = build_state(&Config::default(), size(80, 24), Some(file.path())).unwrap();
        assert_eq!(state.doc.num_rows(), 2);
        assert_eq!(state.doc.row(0).unwrap().chars(), b"int x;");
        assert_eq!(state.doc.syntax().map(|s| s.filetype), Some("c"));
        assert!(!state.doc.is_dirty());
    }

    #[test]
    fn build_state_missing_file_starts_empty_with_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.rs");
        let state = build_state(&Config::default(), size(80, 24), Some(&path)).unwrap();
        assert_eq!(state.doc.num_rows(), 0);
        assert_eq!(state.file_name(), Some(path.as_path()));
    }

    #[test]
    fn build_state_unreadable_path_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = build_state(&Config::default(), size(80, 24), Some(dir.path())).unwrap_err();
        assert!(err.to_string().starts_with("failed to open"));
    }

    #[test]
    fn resize_reserves_two_bars() {
        let state = build_state(&Config::default(), size(80, 24), None).unwrap();
        let mut rt = Runtime::new(state);
        assert_eq!(rt.handle_event(&InputEvent::Resize(100, 30)), LoopControl::Continue);
        assert_eq!(rt.state().viewport.rows, 28);
        assert_eq!(rt.state().viewport.cols, 100);
    }

    #[test]
    fn clean_document_quits_on_first_ctrl_q() {
        let state = build_state(&Config::default(), size(40, 10), None).unwrap();
        let mut rt = Runtime::new(state);
        let mut input = ScriptedInput::new([ctrl('q')]);
        let mut frames = 0;
        rt.run(&mut input, |_| {
            frames += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(frames, 1);
        assert!(input.is_empty());
    }

    #[test]
    fn dirty_document_runs_quit_protocol() {
        let state = build_state(&Config::default(), size(80, 10), None).unwrap();
        let mut rt = Runtime::new(state);
        let mut input = ScriptedInput::new([key('a'), ctrl('q'), ctrl('q'), ctrl('q'), ctrl('q')]);
        let mut frames: Vec<Vec<u8>> = Vec::new();
        rt.run(&mut input, |frame| {
            frames.push(frame.to_bytes());
            Ok(())
        })
        .unwrap();
        assert_eq!(frames.len(), 5);
        let last = String::from_utf8_lossy(frames.last().unwrap()).into_owned();
        assert!(last.contains("Press Ctrl-Q 1 more times to quit."));
        assert_eq!(rt.state().doc.lines_to_text(), b"a\n");
    }

    #[test]
    fn present_errors_stop_the_loop() {
        let state = build_state(&Config::default(), size(40, 10), None).unwrap();
        let mut rt = Runtime::new(state);
        let mut input = ScriptedInput::new([key('a')]);
        let err = rt
            .run(&mut input, |_| Err(anyhow::anyhow!("stdout closed")))
            .unwrap_err();
        assert_eq!(err.to_string(), "stdout closed");
        assert!(!input.is_empty());
    }
}
