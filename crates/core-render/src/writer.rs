//! Terminal writer abstraction.
//!
//! A frame is assembled as an ordered list of primitive commands and then
//! serialized in one pass so the terminal receives a single batched write.
//! Consecutive text commands coalesce into one, keeping colour runs compact.
//!
//! Invariants:
//! * Commands preserve ordering; nothing is written before `flush`.
//! * All positions are absolute (0,0) origin; caller ensures bounds.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write, stdout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    MoveTo(u16, u16),
    /// Clear from the cursor to the end of the current line.
    ClearToEol,
    /// Foreground colour; `None` restores the terminal default.
    Fg(Option<Color>),
    Reverse(bool),
    Print(String),
    /// Raw document bytes (may be non-UTF-8).
    Bytes(Vec<u8>),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn hide_cursor(&mut self) {
        self.cmds.push(Command::HideCursor);
    }

    pub fn show_cursor(&mut self) {
        self.cmds.push(Command::ShowCursor);
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }

    pub fn clear_to_eol(&mut self) {
        self.cmds.push(Command::ClearToEol);
    }

    pub fn fg(&mut self, color: Option<Color>) {
        self.cmds.push(Command::Fg(color));
    }

    pub fn reverse(&mut self, on: bool) {
        self.cmds.push(Command::Reverse(on));
    }

    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if s.is_empty() {
            return;
        }
        match self.cmds.last_mut() {
            Some(Command::Print(prev)) => prev.push_str(&s),
            _ => self.cmds.push(Command::Print(s)),
        }
    }

    pub fn bytes(&mut self, b: &[u8]) {
        if b.is_empty() {
            return;
        }
        match self.cmds.last_mut() {
            Some(Command::Bytes(prev)) => prev.extend_from_slice(b),
            _ => self.cmds.push(Command::Bytes(b.to_vec())),
        }
    }

    /// Serialize every command into `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for c in &self.cmds {
            match c {
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
                Command::MoveTo(x, y) => queue!(out, MoveTo(*x, *y))?,
                Command::ClearToEol => queue!(out, Clear(ClearType::UntilNewLine))?,
                Command::Fg(color) => {
                    queue!(out, SetForegroundColor(color.unwrap_or(Color::Reset)))?
                }
                Command::Reverse(true) => queue!(out, SetAttribute(Attribute::Reverse))?,
                Command::Reverse(false) => queue!(out, SetAttribute(Attribute::NoReverse))?,
                Command::Print(s) => queue!(out, Print(s))?,
                Command::Bytes(b) => out.write_all(b)?,
            }
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.cmds.len() * 16);
        // writing into a Vec cannot fail
        let _ = self.write_to(&mut buf);
        buf
    }

    /// Emit the whole frame to stdout with one write.
    pub fn flush(self) -> Result<()> {
        let buf = self.to_bytes();
        let mut out = stdout().lock();
        out.write_all(&buf)?;
        out.flush()?;
        tracing::trace!(target: "render", bytes = buf.len(), commands = self.cmds.len(), "frame_flushed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_text_coalesces() {
        let mut w = Writer::new();
        w.move_to(0, 0);
        w.bytes(b"ab");
        w.bytes(b"c");
        w.fg(Some(Color::DarkRed));
        w.bytes(b"1");
        w.print("x");
        w.print("y");
        assert_eq!(
            w.commands(),
            &[
                Command::MoveTo(0, 0),
                Command::Bytes(b"abc".to_vec()),
                Command::Fg(Some(Color::DarkRed)),
                Command::Bytes(b"1".to_vec()),
                Command::Print("xy".into()),
            ]
        );
    }

    #[test]
    fn empty_text_is_dropped() {
        let mut w = Writer::new();
        w.print("");
        w.bytes(b"");
        assert!(w.commands().is_empty());
    }

    #[test]
    fn serializes_escape_sequences() {
        let mut w = Writer::new();
        w.hide_cursor();
        w.move_to(0, 0);
        w.bytes(b"hi\xff");
        w.clear_to_eol();
        w.show_cursor();
        let out = w.to_bytes();
        assert!(out.starts_with(b"\x1b[?25l"));
        assert!(out.ends_with(b"\x1b[?25h"));
        assert!(out.windows(3).any(|win| win == b"hi\xff"));
        assert!(out.windows(3).any(|win| win == b"\x1b[K"));
    }
}
