//! Session state: the file registry and the active preview selection.

use bytes::Bytes;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::blob::BlobStore;
use crate::handle::{FileHandle, HandleId};
use crate::stage::StagedFile;

/// Owned state for one stash session.
///
/// All mutations go through the transition methods below; each reacts to one
/// discrete user action and leaves the invariants intact: registry order is
/// insertion order, the active selection always names a registered handle,
/// and every registered handle holds a live blob.
#[derive(Debug, Default)]
pub struct Session {
    registry: IndexMap<HandleId, FileHandle>,
    active: Option<HandleId>,
    blobs: BlobStore,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a batch of files, appending one handle per input in input order.
    ///
    /// Each handle gets a fresh id and a freshly-stashed blob; descriptor
    /// metadata is copied as-is. Re-staging an identical file produces a new,
    /// independent handle. Returns the new ids in input order.
    pub fn add_files(&mut self, staged: impl IntoIterator<Item = StagedFile>) -> Vec<HandleId> {
        let mut added = Vec::new();
        for file in staged {
            let blob = self.blobs.stash(file.bytes);
            let handle = FileHandle {
                id: HandleId::new(),
                name: file.name,
                media_type: file.media_type,
                size_bytes: file.size_bytes,
                blob,
            };
            debug!(id = %handle.id, name = %handle.name, "staged file");
            added.push(handle.id);
            self.registry.insert(handle.id, handle);
        }
        added
    }

    /// Delete a handle: release its blob and drop it from the registry, in
    /// the same step. Clears the active selection when it pointed at `id`.
    ///
    /// Unknown ids are a no-op returning `false`, so a repeated delete is
    /// harmless.
    pub fn delete_file(&mut self, id: HandleId) -> bool {
        let Some(handle) = self.registry.shift_remove(&id) else {
            return false;
        };
        if !self.blobs.release(handle.blob) {
            // Never blocks the removal; the handle is already gone.
            warn!(id = %id, "blob was already released for deleted handle");
        }
        if self.active == Some(id) {
            self.active = None;
        }
        debug!(id = %id, name = %handle.name, "deleted file");
        true
    }

    /// Make `id` the active selection.
    ///
    /// Selecting an id that is not in the registry is a no-op returning
    /// `false`; nothing may be rendered for such a selection.
    pub fn select(&mut self, id: HandleId) -> bool {
        if self.registry.contains_key(&id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Drop the active selection unconditionally.
    pub fn clear_selection(&mut self) {
        self.active = None;
    }

    /// Release every remaining blob (best-effort session teardown).
    pub fn close(&mut self) {
        self.active = None;
        self.registry.clear();
        let released = self.blobs.release_all();
        debug!(released, "session closed");
    }

    /// All handles in display (insertion) order.
    pub fn handles(&self) -> impl Iterator<Item = &FileHandle> {
        self.registry.values()
    }

    /// Number of staged files.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Look up a handle by id.
    pub fn get(&self, id: HandleId) -> Option<&FileHandle> {
        self.registry.get(&id)
    }

    /// Look up a handle by display position.
    pub fn handle_at(&self, index: usize) -> Option<&FileHandle> {
        self.registry.get_index(index).map(|(_, handle)| handle)
    }

    /// Display position of a handle.
    pub fn position(&self, id: HandleId) -> Option<usize> {
        self.registry.get_index_of(&id)
    }

    /// The active selection, if any.
    pub fn active(&self) -> Option<HandleId> {
        self.active
    }

    /// The handle behind the active selection, if any.
    pub fn active_handle(&self) -> Option<&FileHandle> {
        self.active.and_then(|id| self.registry.get(&id))
    }

    /// Resolve the payload for a registered handle.
    ///
    /// Returns `None` for ids not in the registry; a registered handle always
    /// resolves (its blob is live by invariant).
    pub fn open_blob(&self, id: HandleId) -> Option<Bytes> {
        let handle = self.registry.get(&id)?;
        self.blobs.open(handle.blob)
    }

    /// Blobs currently live in the store.
    pub fn live_blobs(&self) -> usize {
        self.blobs.live_count()
    }

    /// Blobs created over the session's lifetime.
    pub fn created_blobs(&self) -> u64 {
        self.blobs.created_count()
    }

    /// Blobs released over the session's lifetime.
    pub fn released_blobs(&self) -> u64 {
        self.blobs.released_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::StagedFile;

    fn staged(name: &str, media_type: &str) -> StagedFile {
        StagedFile::new(name, media_type, name.as_bytes().to_vec())
    }

    #[test]
    fn test_add_files_preserves_input_order() {
        let mut session = Session::new();
        let ids = session.add_files(vec![
            staged("a.png", "image/png"),
            staged("b.pdf", "application/pdf"),
            staged("c.txt", "text/plain"),
        ]);

        assert_eq!(ids.len(), 3);
        let names: Vec<_> = session.handles().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.pdf", "c.txt"]);
    }

    #[test]
    fn test_delete_clears_active_selection() {
        let mut session = Session::new();
        let ids = session.add_files(vec![staged("a.png", "image/png")]);

        assert!(session.select(ids[0]));
        assert_eq!(session.active(), Some(ids[0]));

        assert!(session.delete_file(ids[0]));
        assert_eq!(session.active(), None);
        assert!(session.is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut session = Session::new();
        session.add_files(vec![staged("a.png", "image/png")]);

        assert!(!session.delete_file(HandleId::new()));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_select_unknown_id_is_rejected() {
        let mut session = Session::new();
        assert!(!session.select(HandleId::new()));
        assert_eq!(session.active(), None);
    }

    #[test]
    fn test_open_blob_resolves_only_registered_handles() {
        let mut session = Session::new();
        let ids = session.add_files(vec![staged("a.png", "image/png")]);

        assert_eq!(
            session.open_blob(ids[0]).as_deref(),
            Some(b"a.png".as_slice())
        );

        session.delete_file(ids[0]);
        assert!(session.open_blob(ids[0]).is_none());
    }

    #[test]
    fn test_close_releases_everything() {
        let mut session = Session::new();
        session.add_files(vec![
            staged("a.png", "image/png"),
            staged("b.pdf", "application/pdf"),
        ]);

        session.close();
        assert!(session.is_empty());
        assert_eq!(session.released_blobs(), session.created_blobs());
    }
}
