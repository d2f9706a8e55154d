//! Error types for preview collaborators.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the preview collaborators.
///
/// None of these are fatal to the session; the UI renders them as a line in
/// the preview pane and carries on.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The document payload could not be parsed.
    #[error("Could not read document: {0}")]
    DocumentParse(String),

    /// The image payload could not be decoded.
    #[error("Could not decode image: {0}")]
    ImageDecode(String),

    /// Payload exceeds the configured decode limit.
    #[error("File too large to preview ({size_bytes} bytes, limit {limit_bytes})")]
    TooLarge { size_bytes: u64, limit_bytes: u64 },

    /// Writing a saved copy failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PreviewError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
