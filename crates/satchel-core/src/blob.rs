//! In-memory blob store with explicit, revocable references.

use std::collections::HashMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Revocable reference to a byte payload owned by a [`BlobStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlobId(pub u64);

/// Owns staged byte payloads behind revocable ids.
///
/// Every payload is stashed exactly once and released at most once. The
/// created/released counters let callers assert the lifetime invariant
/// `released == created - live` at any point in a session.
#[derive(Debug, Default)]
pub struct BlobStore {
    payloads: HashMap<BlobId, Bytes>,
    next_id: u64,
    created: u64,
    released: u64,
}

impl BlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a payload and return its revocable id.
    pub fn stash(&mut self, payload: Bytes) -> BlobId {
        let id = BlobId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.payloads.insert(id, payload);
        id
    }

    /// Resolve an id to its payload, if still live.
    ///
    /// The returned [`Bytes`] is a cheap reference-counted view; the store
    /// keeps ownership until [`release`](Self::release).
    pub fn open(&self, id: BlobId) -> Option<Bytes> {
        self.payloads.get(&id).cloned()
    }

    /// Invalidate an id, dropping its payload.
    ///
    /// Returns `false` if the id was already released (or never existed).
    pub fn release(&mut self, id: BlobId) -> bool {
        match self.payloads.remove(&id) {
            Some(payload) => {
                self.released += 1;
                debug!(id = id.0, bytes = payload.len(), "released blob");
                true
            }
            None => false,
        }
    }

    /// Release every remaining payload. Returns how many were released.
    pub fn release_all(&mut self) -> usize {
        let ids: Vec<BlobId> = self.payloads.keys().copied().collect();
        for id in &ids {
            self.release(*id);
        }
        ids.len()
    }

    /// Number of payloads currently live.
    pub fn live_count(&self) -> usize {
        self.payloads.len()
    }

    /// Total payloads stashed over the store's lifetime.
    pub fn created_count(&self) -> u64 {
        self.created
    }

    /// Total payloads released over the store's lifetime.
    pub fn released_count(&self) -> u64 {
        self.released
    }

    /// Check if no payloads are live.
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}
