//! Staged file handle types.

use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blob::BlobId;

/// Unique identifier for a staged file handle.
///
/// Random v4 UUIDs keep ids collision-free even when a batch stages many
/// files within the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleId(Uuid);

impl HandleId {
    /// Generate a fresh id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HandleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One staged file, tracked for the duration of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileHandle {
    /// Unique identifier for this handle.
    pub id: HandleId,

    /// Original filename, display-only.
    pub name: CompactString,

    /// Declared MIME type, used only for preview-strategy dispatch.
    /// Never validated against the actual content.
    pub media_type: CompactString,

    /// Size in bytes, display-only.
    pub size_bytes: u64,

    /// Reference to the payload in the session blob store.
    /// Exclusively owned by this handle; released when the handle is deleted.
    pub blob: BlobId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_ids_are_unique() {
        let ids: Vec<HandleId> = (0..64).map(|_| HandleId::new()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_handle_id_display_roundtrip() {
        let id = HandleId::new();
        assert_eq!(id.to_string().len(), 36);
    }
}
