//! Highlight class to terminal colour mapping.

use core_syntax::Highlight;
use crossterm::style::Color;

/// Foreground colour for a class; `None` means the terminal default.
/// Uses the standard 8-colour palette (SGR 31-36).
pub fn color_for(hl: Highlight) -> Option<Color> {
    match hl {
        Highlight::Normal => None,
        Highlight::Comment | Highlight::BlockComment => Some(Color::DarkCyan),
        Highlight::Keyword1 => Some(Color::DarkYellow),
        Highlight::Keyword2 => Some(Color::DarkGreen),
        Highlight::String => Some(Color::DarkMagenta),
        Highlight::Number => Some(Color::DarkRed),
        Highlight::Match => Some(Color::DarkBlue),
    }
}

/// Visible stand-in for a control byte: `@`-based caret letter up to 26, `?` above.
pub fn control_placeholder(c: u8) -> Option<char> {
    if !c.is_ascii_control() {
        return None;
    }
    Some(if c <= 26 { (b'@' + c) as char } else { '?' })
}
