//! Syntax classification for rendered rows.
//!
//! The highlighter is a small left-to-right state machine over a row's
//! *rendered* bytes (tabs already expanded). Exactly one bit of state crosses
//! row boundaries: whether the row begins inside an unterminated block
//! comment. Callers (the document buffer) own the cascade that re-runs rows
//! below an edit until that bit stops changing.
//!
//! Language profiles are static tables selected once per document from its
//! file name. A document without a profile is rendered entirely `Normal`.

pub mod highlight;
pub mod profile;

pub use highlight::{Highlight, highlight_row, is_separator};
pub use profile::{KeywordClass, SYNTAXES, Syntax, SyntaxFlags, select_for_filename};
