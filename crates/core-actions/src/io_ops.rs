//! File IO helpers.
//!
//! Synchronous and minimal. Loading splits on `\n` and strips any trailing
//! `\r`/`\n` bytes from each physical line; saving writes the document's
//! serialized form (every row followed by `\n`) in one call.

use std::path::{Path, PathBuf};

use core_state::EditorState;

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    pub fn is_not_found(&self) -> bool {
        let (Self::Read { source, .. } | Self::Write { source, .. }) = self;
        source.kind() == std::io::ErrorKind::NotFound
    }

    /// Underlying OS error, as shown to the user.
    pub fn io_error(&self) -> &std::io::Error {
        let (Self::Read { source, .. } | Self::Write { source, .. }) = self;
        source
    }
}

/// Split raw file bytes into row contents.
pub fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    content
        .split_inclusive(|&b| b == b'\n')
        .map(|line| {
            let end = line
                .iter()
                .rposition(|&b| b != b'\n' && b != b'\r')
                .map_or(0, |i| i + 1);
            line[..end].to_vec()
        })
        .collect()
}

/// Read `path` into newline-stripped lines.
pub fn open_file(path: &Path) -> Result<Vec<Vec<u8>>, FileError> {
    let content = std::fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = split_lines(&content);
    tracing::info!(target: "io", bytes = content.len(), lines = lines.len(), "file_opened");
    Ok(lines)
}

/// Write `bytes` to `path`, creating or truncating it. Returns the byte count.
pub fn save_file(path: &Path, bytes: &[u8]) -> Result<usize, FileError> {
    std::fs::write(path, bytes).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(target: "io", bytes = bytes.len(), "file_written");
    Ok(bytes.len())
}

/// Load `path` into the state's document and bind the file name (which also
/// selects the highlighting profile). A missing file leaves an empty document
/// bound to that name so the first save creates it.
pub fn load_into(state: &mut EditorState, path: &Path) -> Result<(), FileError> {
    state.set_file_name(path);
    match open_file(path) {
        Ok(lines) => {
            state.doc.load_lines(lines);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            tracing::info!(target: "io", "file_missing_starting_empty");
            Ok(())
        }
        Err(e) => {
            tracing::error!(target: "io", error = %e.io_error(), "file_open_error");
            Err(e)
        }
    }
}
