//! Row highlighter state machine.

use crate::{Syntax, SyntaxFlags};

/// Per-cell classification of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    BlockComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    /// Transient search overlay; never produced by the highlighter itself.
    Match,
}

/// Token boundary test shared by number and keyword recognition.
/// NUL stands in for "past the end of the row".
pub fn is_separator(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | b'\0')
        || b",.()+-/*=~%<>[];".contains(&c)
}

/// Classify `render` into `hl` (resized to `render.len()`).
///
/// `starts_in_comment` is the predecessor row's open-comment state. Returns
/// whether this row ends inside an unterminated block comment. Without a
/// profile every cell is `Normal` and no comment is ever open.
pub fn highlight_row(
    render: &[u8],
    syntax: Option<&Syntax>,
    starts_in_comment: bool,
    hl: &mut Vec<Highlight>,
) -> bool {
    hl.clear();
    hl.resize(render.len(), Highlight::Normal);
    let Some(syntax) = syntax else {
        return false;
    };

    let line_comment = syntax
        .line_comment
        .map(str::as_bytes)
        .filter(|m| !m.is_empty());
    let block_comment = syntax
        .block_comment
        .map(|(start, end)| (start.as_bytes(), end.as_bytes()))
        .filter(|(start, end)| !start.is_empty() && !end.is_empty());

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = starts_in_comment;

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let rest = &render[i..];
        let prev_hl = if i > 0 { hl[i - 1] } else { Highlight::Normal };

        if let Some(marker) = line_comment
            && in_string.is_none()
            && !in_comment
            && rest.starts_with(marker)
        {
            hl[i..].fill(Highlight::Comment);
            break;
        }

        if let Some((start, end)) = block_comment
            && in_string.is_none()
        {
            if in_comment {
                if rest.starts_with(end) {
                    hl[i..i + end.len()].fill(Highlight::BlockComment);
                    i += end.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    hl[i] = Highlight::BlockComment;
                    i += 1;
                }
                continue;
            } else if rest.starts_with(start) {
                hl[i..i + start.len()].fill(Highlight::BlockComment);
                i += start.len();
                in_comment = true;
                continue;
            }
        }

        if syntax.flags.contains(SyntaxFlags::STRINGS) {
            if let Some(quote) = in_string {
                hl[i] = Highlight::String;
                if c == b'\\' && i + 1 < render.len() {
                    hl[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                hl[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if syntax.flags.contains(SyntaxFlags::NUMBERS)
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            hl[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep
            && let Some((len, class)) = match_keyword(render, i, syntax)
        {
            hl[i..i + len].fill(class.highlight());
            i += len;
            prev_sep = false;
            continue;
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    in_comment
}

/// First keyword starting at `at` that is followed by a separator (or row end).
fn match_keyword(
    render: &[u8],
    at: usize,
    syntax: &Syntax,
) -> Option<(usize, crate::KeywordClass)> {
    let rest = &render[at..];
    syntax.keywords.iter().find_map(|(kw, class)| {
        let kw = kw.as_bytes();
        let after = render.get(at + kw.len()).copied().unwrap_or(b'\0');
        (rest.starts_with(kw) && is_separator(after)).then_some((kw.len(), *class))
    })
}
