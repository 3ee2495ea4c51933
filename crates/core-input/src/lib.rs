//! Input sources feeding the editor loop.
//!
//! The loop asks for one event at a time. A source may return `Ok(None)`
//! when nothing arrived within its poll window; the loop then recomposes the
//! frame (so an expired status message disappears) and asks again.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use core_events::InputEvent;
use crossterm::event;

mod key_map;
pub use key_map::{map_event, map_key_event};

pub trait InputSource {
    fn next_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Blocking crossterm reader bounded by a poll timeout.
#[derive(Debug, Clone)]
pub struct CrosstermInput {
    timeout: Duration,
}

impl CrosstermInput {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        if !event::poll(self.timeout)? {
            return Ok(None);
        }
        let raw = event::read()?;
        let mapped = map_event(&raw);
        match &mapped {
            Some(InputEvent::Key(k)) => {
                tracing::trace!(target: "input", mods = %k.mods.bits(), arrow = k.code.is_arrow(), "key");
            }
            Some(InputEvent::Resize(w, h)) => {
                tracing::trace!(target: "input", w, h, "resize");
            }
            None => tracing::trace!(target: "input", "ignored_event"),
        }
        Ok(mapped)
    }
}

/// Replays a fixed event sequence; `None` once exhausted.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }
}
