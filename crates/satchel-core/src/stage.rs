//! Staging local files into descriptors the registry can ingest.

use std::fs;
use std::path::Path;

use bytes::Bytes;
use compact_str::{CompactString, ToCompactString};

use crate::error::StageError;

/// Fallback media type when the extension maps to nothing.
const OCTET_STREAM: &str = "application/octet-stream";

/// Raw descriptor for one file about to enter the registry.
///
/// Metadata is carried as-is; nothing here is validated against the payload.
#[derive(Debug, Clone)]
pub struct StagedFile {
    /// Original filename.
    pub name: CompactString,
    /// Declared MIME type.
    pub media_type: CompactString,
    /// Payload size in bytes.
    pub size_bytes: u64,
    /// The payload itself.
    pub bytes: Bytes,
}

impl StagedFile {
    /// Build a descriptor directly from parts (synthetic inputs, tests).
    pub fn new(
        name: impl Into<CompactString>,
        media_type: impl Into<CompactString>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size_bytes: bytes.len() as u64,
            bytes,
        }
    }
}

/// Read a local file into a staged descriptor.
///
/// The media type is derived from the filename extension, the way a browser
/// populates a file input's `type` field; the content is never inspected.
pub fn stage_file(path: &Path) -> Result<StagedFile, StageError> {
    if path.exists() && !path.is_file() {
        return Err(StageError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| StageError::io(path, e))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_compact_string())
        .unwrap_or_else(|| path.to_string_lossy().to_compact_string());

    let media_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(OCTET_STREAM)
        .into();

    Ok(StagedFile {
        name,
        media_type,
        size_bytes: bytes.len() as u64,
        bytes: Bytes::from(bytes),
    })
}

/// Stage a batch of paths, preserving input order.
///
/// Fails on the first unreadable path; earlier work is discarded (nothing has
/// entered a registry yet, so there is no partial state to unwind).
pub fn stage_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<StagedFile>, StageError> {
    paths.iter().map(|p| stage_file(p.as_ref())).collect()
}
