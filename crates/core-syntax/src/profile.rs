//! Static language profiles and filename matching.

use crate::Highlight;

bitflags::bitflags! {
    /// Optional highlighter passes enabled per profile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SyntaxFlags: u8 {
        const NUMBERS = 0b0000_0001;
        const STRINGS = 0b0000_0010;
    }
}

/// Keyword class: control-flow style (`Primary`) or type names (`Secondary`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    Primary,
    Secondary,
}

impl KeywordClass {
    pub fn highlight(self) -> Highlight {
        match self {
            KeywordClass::Primary => Highlight::Keyword1,
            KeywordClass::Secondary => Highlight::Keyword2,
        }
    }
}

/// A read-only language profile.
#[derive(Debug)]
pub struct Syntax {
    /// Display name shown in the status bar.
    pub filetype: &'static str,
    /// Patterns starting with `.` match the file extension exactly; anything
    /// else matches as a substring of the file name.
    pub filematch: &'static [&'static str],
    pub keywords: &'static [(&'static str, KeywordClass)],
    pub line_comment: Option<&'static str>,
    /// (start, end) markers.
    pub block_comment: Option<(&'static str, &'static str)>,
    pub flags: SyntaxFlags,
}

use KeywordClass::{Primary as P, Secondary as S};

const C_KEYWORDS: &[(&str, KeywordClass)] = &[
    ("switch", P),
    ("if", P),
    ("while", P),
    ("for", P),
    ("break", P),
    ("continue", P),
    ("return", P),
    ("else", P),
    ("struct", P),
    ("union", P),
    ("typedef", P),
    ("static", P),
    ("enum", P),
    ("class", P),
    ("case", P),
    ("int", S),
    ("long", S),
    ("double", S),
    ("float", S),
    ("char", S),
    ("unsigned", S),
    ("signed", S),
    ("void", S),
];

const RUST_KEYWORDS: &[(&str, KeywordClass)] = &[
    ("fn", P),
    ("let", P),
    ("mut", P),
    ("if", P),
    ("else", P),
    ("match", P),
    ("while", P),
    ("for", P),
    ("loop", P),
    ("in", P),
    ("return", P),
    ("break", P),
    ("continue", P),
    ("struct", P),
    ("enum", P),
    ("impl", P),
    ("trait", P),
    ("type", P),
    ("pub", P),
    ("use", P),
    ("mod", P),
    ("crate", P),
    ("const", P),
    ("static", P),
    ("where", P),
    ("as", P),
    ("ref", P),
    ("move", P),
    ("unsafe", P),
    ("async", P),
    ("await", P),
    ("dyn", P),
    ("self", P),
    ("Self", P),
    ("super", P),
    ("i8", S),
    ("i16", S),
    ("i32", S),
    ("i64", S),
    ("i128", S),
    ("isize", S),
    ("u8", S),
    ("u16", S),
    ("u32", S),
    ("u64", S),
    ("u128", S),
    ("usize", S),
    ("f32", S),
    ("f64", S),
    ("bool", S),
    ("char", S),
    ("str", S),
    ("String", S),
    ("Vec", S),
    ("Option", S),
    ("Result", S),
    ("Box", S),
];

const PYTHON_KEYWORDS: &[(&str, KeywordClass)] = &[
    ("and", P),
    ("as", P),
    ("assert", P),
    ("break", P),
    ("class", P),
    ("continue", P),
    ("def", P),
    ("del", P),
    ("elif", P),
    ("else", P),
    ("except", P),
    ("finally", P),
    ("for", P),
    ("from", P),
    ("global", P),
    ("if", P),
    ("import", P),
    ("in", P),
    ("is", P),
    ("lambda", P),
    ("nonlocal", P),
    ("not", P),
    ("or", P),
    ("pass", P),
    ("raise", P),
    ("return", P),
    ("try", P),
    ("while", P),
    ("with", P),
    ("yield", P),
    ("None", S),
    ("True", S),
    ("False", S),
    ("int", S),
    ("float", S),
    ("str", S),
    ("list", S),
    ("dict", S),
    ("tuple", S),
    ("set", S),
    ("bool", S),
    ("bytes", S),
];

const NUMBERS_AND_STRINGS: SyntaxFlags = SyntaxFlags::NUMBERS.union(SyntaxFlags::STRINGS);

/// Profile database, searched in order.
pub static SYNTAXES: &[Syntax] = &[
    Syntax {
        filetype: "c",
        filematch: &[".c", ".h", ".cpp"],
        keywords: C_KEYWORDS,
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: NUMBERS_AND_STRINGS,
    },
    Syntax {
        filetype: "rust",
        filematch: &[".rs"],
        keywords: RUST_KEYWORDS,
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: NUMBERS_AND_STRINGS,
    },
    Syntax {
        filetype: "python",
        filematch: &[".py"],
        keywords: PYTHON_KEYWORDS,
        line_comment: Some("#"),
        block_comment: None,
        flags: NUMBERS_AND_STRINGS,
    },
];

impl Syntax {
    /// Whether `filename` selects this profile.
    pub fn matches(&self, filename: &str) -> bool {
        let ext = filename.rfind('.').map(|i| &filename[i..]);
        self.filematch.iter().any(|pattern| {
            if pattern.starts_with('.') {
                ext == Some(*pattern)
            } else {
                filename.contains(pattern)
            }
        })
    }
}

/// First profile whose patterns match `filename`.
pub fn select_for_filename(filename: &str) -> Option<&'static Syntax> {
    let found = SYNTAXES.iter().find(|s| s.matches(filename));
    tracing::debug!(
        target: "syntax",
        filetype = found.map(|s| s.filetype),
        "select_for_filename"
    );
    found
}
