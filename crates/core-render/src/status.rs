//! Status bar composition.
//!
//! Two-stage pipeline: `compose_status` produces ordered segments from a
//! `StatusContext`, `format_status` lays them out to an exact terminal width.
//! Left side: `<name up to 20 chars> - <n> lines[ (modified)]`. Right side:
//! `<filetype|no ft> | <line>/<total>`, drawn flush right only when it fits
//! after the left side; otherwise the bar is padded with spaces.

use std::borrow::Cow;
use std::path::Path;

const NAME_WIDTH: usize = 20;

/// Simple DTO describing what we need to render a status bar.
pub struct StatusContext<'a> {
    pub file_name: Option<&'a Path>,
    pub num_rows: usize,
    pub dirty: bool,
    pub filetype: Option<&'static str>,
    /// 0-based cursor row (may equal `num_rows`).
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    FileName(Cow<'a, str>),
    LineCount(usize),
    Modified,
    FileType(&'static str),
    Position { line_1: usize, total: usize },
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let name: Cow<'a, str> = match ctx.file_name {
        Some(p) => p.to_string_lossy(),
        None => "[No Name]".into(),
    };
    let mut out = Vec::with_capacity(5);
    out.push(StatusSegment::FileName(name));
    out.push(StatusSegment::LineCount(ctx.num_rows));
    if ctx.dirty {
        out.push(StatusSegment::Modified);
    }
    out.push(StatusSegment::FileType(ctx.filetype.unwrap_or("no ft")));
    out.push(StatusSegment::Position {
        line_1: ctx.line + 1,
        total: ctx.num_rows,
    });
    out
}

/// Render segments into a bar exactly `width` characters wide.
pub fn format_status(segments: &[StatusSegment<'_>], width: usize) -> String {
    use std::fmt::Write as _;
    let mut left = String::with_capacity(48);
    let mut right = String::with_capacity(24);
    for seg in segments {
        match seg {
            StatusSegment::FileName(name) => left.extend(name.chars().take(NAME_WIDTH)),
            StatusSegment::LineCount(n) => {
                let _ = write!(left, " - {n} lines");
            }
            StatusSegment::Modified => left.push_str(" (modified)"),
            StatusSegment::FileType(ft) => right.push_str(ft),
            StatusSegment::Position { line_1, total } => {
                let _ = write!(right, " | {line_1}/{total}");
            }
        }
    }

    let mut bar: String = left.chars().take(width).collect();
    let mut len = bar.chars().count();
    let right_len = right.chars().count();
    while len < width {
        if width - len == right_len {
            bar.push_str(&right);
            break;
        }
        bar.push(' ');
        len += 1;
    }
    bar
}

pub fn build_status(ctx: &StatusContext, width: usize) -> String {
    format_status(&compose_status(ctx), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx(name: Option<&str>, dirty: bool) -> StatusContext<'_> {
        StatusContext {
            file_name: name.map(Path::new),
            num_rows: 3,
            dirty,
            filetype: Some("c"),
            line: 1,
        }
    }

    #[test]
    fn unnamed_clean_buffer() {
        let mut c = ctx(None, false);
        c.filetype = None;
        let s = build_status(&c, 40);
        assert_eq!(s, "[No Name] - 3 lines          no ft | 2/3");
        assert_eq!(s.len(), 40);
    }

    #[test]
    fn modified_flag_and_filetype() {
        let s = build_status(&ctx(Some("main.c"), true), 50);
        assert_eq!(s, "main.c - 3 lines (modified)                c | 2/3");
    }

    #[test]
    fn long_names_truncate_to_twenty() {
        let s = build_status(&ctx(Some("a_very_long_file_name_indeed.c"), false), 60);
        assert!(s.starts_with("a_very_long_file_nam - 3 lines"));
        assert_eq!(s.chars().count(), 60);
    }

    #[test]
    fn right_side_dropped_when_it_does_not_fit() {
        let s = build_status(&ctx(Some("main.c"), true), 30);
        assert_eq!(s, "main.c - 3 lines (modified)   ");
        let s = build_status(&ctx(Some("main.c"), false), 10);
        assert_eq!(s, "main.c - 3");
    }

    #[test]
    fn segments_in_order() {
        let segs = compose_status(&ctx(Some("x.c"), true));
        assert_eq!(
            segs,
            vec![
                StatusSegment::FileName("x.c".into()),
                StatusSegment::LineCount(3),
                StatusSegment::Modified,
                StatusSegment::FileType("c"),
                StatusSegment::Position { line_1: 2, total: 3 },
            ]
        );
    }
}
