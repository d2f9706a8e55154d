//! Asynchronous page counting for paged documents.
//!
//! Resolution is a single round: one request, one [`PagerEvent`]. Events
//! carry the generation stamp captured when the request started so the
//! consumer can discard results that arrive after the selection moved on.

use bytes::Bytes;
use pdf::file::FileOptions;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::PreviewError;

/// One event per request; the channel never sees a second send.
const PAGER_CHANNEL_SIZE: usize = 1;

/// Outcome of one page-count resolution.
#[derive(Debug)]
pub struct PagerEvent {
    /// Generation stamp captured when the request started.
    pub generation: u64,
    /// The resolved page count, or why resolution failed.
    pub outcome: Result<u32, PreviewError>,
}

/// Count the pages in a PDF payload.
pub fn page_count(data: &[u8]) -> Result<u32, PreviewError> {
    let file = FileOptions::cached()
        .load(data.to_vec())
        .map_err(|e| PreviewError::DocumentParse(e.to_string()))?;
    Ok(file.num_pages())
}

/// Start a background page-count resolution.
///
/// Parsing runs on the blocking pool; the receiver yields exactly one
/// [`PagerEvent`] stamped with `generation`. There is no cancellation: if the
/// selection changes before the event lands, the consumer drops it by
/// generation mismatch.
pub fn start_page_count(generation: u64, payload: Bytes) -> mpsc::Receiver<PagerEvent> {
    let (tx, rx) = mpsc::channel(PAGER_CHANNEL_SIZE);

    tokio::spawn(async move {
        let outcome = tokio::task::spawn_blocking(move || page_count(&payload))
            .await
            .unwrap_or_else(|e| Err(PreviewError::DocumentParse(e.to_string())));

        debug!(generation, ok = outcome.is_ok(), "page count resolved");
        let _ = tx.send(PagerEvent { generation, outcome }).await;
    });

    rx
}
