// Source file loading.
//
// Archival plain-text files are UTF-8, sometimes with a leading byte-order
// mark. The mark is dropped so it never leaks into the first token.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Why a source text could not be loaded. Always fatal for the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("text file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read text file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("text file {} is not valid UTF-8", path.display())]
    InvalidEncoding { path: PathBuf },
}

/// Read a text file, removing a leading byte-order mark if present.
pub fn load_text(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    let text = match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => rest.to_string(),
        None => text,
    };

    info!(path = %path.display(), chars = text.chars().count(), "Loaded text");
    Ok(text)
}
