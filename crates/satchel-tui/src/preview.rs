//! Preview pane state and strategy dispatch.

use bytes::Bytes;
use compact_str::CompactString;
use satchel_core::{resolve_strategy, FileHandle, PreviewStrategy};
use satchel_preview::{decode_image, start_page_count, ImageInfo, PagerEvent, PreviewConfig};
use tokio::sync::mpsc;
use tracing::debug;

use crate::image_view::ImageView;

/// Content currently shown in the preview pane.
#[derive(Debug, Default)]
pub enum PreviewContent {
    /// Nothing selected.
    #[default]
    Empty,
    /// Inline image render.
    Image {
        name: CompactString,
        info: ImageInfo,
        view: ImageView,
    },
    /// Paginated document view. `page_count` stays `None` until the pager
    /// resolves; nothing is rendered for the page region before that.
    PagedDocument {
        name: CompactString,
        page_count: Option<u32>,
        scroll: u16,
    },
    /// Save-a-copy card for types with no inline view.
    Download {
        name: CompactString,
        media_type: CompactString,
        size_bytes: u64,
    },
    /// Preview failed; the session carries on.
    Error(String),
}

/// State for the preview pane.
///
/// Every change of what is being previewed bumps the generation; pager
/// events stamped with an older generation are discarded, so a late page
/// count can never describe a file that is no longer on display.
#[derive(Debug, Default)]
pub struct PreviewState {
    pub content: PreviewContent,
    generation: u64,
}

impl PreviewState {
    /// Create an empty preview.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation stamp.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Swap in a preview for `handle`.
    ///
    /// Returns a pager receiver when the strategy resolves asynchronously
    /// (paged documents); the caller polls it from the event loop.
    pub fn open(
        &mut self,
        handle: &FileHandle,
        payload: Bytes,
        config: &PreviewConfig,
    ) -> Option<mpsc::Receiver<PagerEvent>> {
        self.generation += 1;

        match resolve_strategy(&handle.media_type) {
            PreviewStrategy::ImageRender => {
                self.content = match decode_image(&payload, config) {
                    Ok((image, info)) => match ImageView::new(image) {
                        Ok(view) => PreviewContent::Image {
                            name: handle.name.clone(),
                            info,
                            view,
                        },
                        Err(e) => PreviewContent::Error(e),
                    },
                    Err(e) => PreviewContent::Error(e.to_string()),
                };
                None
            }
            PreviewStrategy::PagedDocumentRender => {
                self.content = PreviewContent::PagedDocument {
                    name: handle.name.clone(),
                    page_count: None,
                    scroll: 0,
                };
                Some(start_page_count(self.generation, payload))
            }
            PreviewStrategy::GenericDownload => {
                self.content = PreviewContent::Download {
                    name: handle.name.clone(),
                    media_type: handle.media_type.clone(),
                    size_bytes: handle.size_bytes,
                };
                None
            }
        }
    }

    /// Clear the pane. Bumps the generation so in-flight pager results for
    /// the previous selection are discarded when they land.
    pub fn close(&mut self) {
        self.generation += 1;
        self.content = PreviewContent::Empty;
    }

    /// Apply a pager event. Returns `false` when the event was stale.
    pub fn apply_pager_event(&mut self, event: PagerEvent) -> bool {
        if event.generation != self.generation {
            debug!(
                stale = event.generation,
                current = self.generation,
                "discarding stale pager event"
            );
            return false;
        }

        if let PreviewContent::PagedDocument { page_count, .. } = &mut self.content {
            match event.outcome {
                Ok(count) => *page_count = Some(count),
                Err(e) => self.content = PreviewContent::Error(e.to_string()),
            }
        }
        true
    }

    /// Scroll the paged view up.
    pub fn scroll_up(&mut self, amount: u16) {
        if let PreviewContent::PagedDocument { scroll, .. } = &mut self.content {
            *scroll = scroll.saturating_sub(amount);
        }
    }

    /// Scroll the paged view down, bounded by the rendered page units.
    pub fn scroll_down(&mut self, amount: u16) {
        if let PreviewContent::PagedDocument {
            scroll,
            page_count: Some(count),
            ..
        } = &mut self.content
        {
            let max = count.saturating_mul(crate::ui::PAGE_UNIT_LINES as u32) as u16;
            *scroll = scroll.saturating_add(amount).min(max.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use satchel_core::{HandleId, Session, StagedFile};
    use satchel_preview::PreviewError;

    use super::*;

    fn pdf_handle(session: &mut Session) -> (HandleId, Bytes) {
        let ids = session.add_files(vec![StagedFile::new(
            "doc.pdf",
            "application/pdf",
            b"%PDF-stub".to_vec(),
        )]);
        let payload = session.open_blob(ids[0]).unwrap();
        (ids[0], payload)
    }

    #[tokio::test]
    async fn test_open_paged_document_starts_with_unknown_count() {
        let mut session = Session::new();
        let (id, payload) = pdf_handle(&mut session);
        let handle = session.get(id).unwrap();

        let mut preview = PreviewState::new();
        let rx = preview.open(handle, payload, &PreviewConfig::default());
        assert!(rx.is_some());
        assert!(matches!(
            preview.content,
            PreviewContent::PagedDocument {
                page_count: None,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_matching_pager_event_applies() {
        let mut session = Session::new();
        let (id, payload) = pdf_handle(&mut session);
        let handle = session.get(id).unwrap();

        let mut preview = PreviewState::new();
        let _rx = preview.open(handle, payload, &PreviewConfig::default());

        let applied = preview.apply_pager_event(PagerEvent {
            generation: preview.generation(),
            outcome: Ok(12),
        });
        assert!(applied);
        assert!(matches!(
            preview.content,
            PreviewContent::PagedDocument {
                page_count: Some(12),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_stale_pager_event_is_discarded() {
        let mut session = Session::new();
        let (id, payload) = pdf_handle(&mut session);
        let handle = session.get(id).unwrap();

        let mut preview = PreviewState::new();
        let _rx = preview.open(handle, payload.clone(), &PreviewConfig::default());
        let stale_generation = preview.generation();

        // Selection moves on before the result lands.
        preview.close();
        let handle = session.get(id).unwrap();
        let _rx = preview.open(handle, payload, &PreviewConfig::default());

        let applied = preview.apply_pager_event(PagerEvent {
            generation: stale_generation,
            outcome: Ok(99),
        });
        assert!(!applied);
        assert!(matches!(
            preview.content,
            PreviewContent::PagedDocument {
                page_count: None,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_pager_failure_degrades_to_error_line() {
        let mut session = Session::new();
        let (id, payload) = pdf_handle(&mut session);
        let handle = session.get(id).unwrap();

        let mut preview = PreviewState::new();
        let _rx = preview.open(handle, payload, &PreviewConfig::default());

        preview.apply_pager_event(PagerEvent {
            generation: preview.generation(),
            outcome: Err(PreviewError::DocumentParse("bad xref".into())),
        });
        assert!(matches!(preview.content, PreviewContent::Error(_)));
    }

    #[test]
    fn test_download_card_carries_metadata() {
        let mut session = Session::new();
        let ids = session.add_files(vec![StagedFile::new(
            "slides.pptx",
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            vec![0u8; 64],
        )]);
        let handle = session.get(ids[0]).unwrap();
        let payload = session.open_blob(ids[0]).unwrap();

        let mut preview = PreviewState::new();
        let rx = preview.open(handle, payload, &PreviewConfig::default());
        assert!(rx.is_none());

        match &preview.content {
            PreviewContent::Download {
                name, size_bytes, ..
            } => {
                assert_eq!(name.as_str(), "slides.pptx");
                assert_eq!(*size_bytes, 64);
            }
            other => panic!("expected download card, got {other:?}"),
        }
    }

    #[test]
    fn test_close_empties_pane_and_bumps_generation() {
        let mut preview = PreviewState::new();
        let before = preview.generation();
        preview.close();

        assert!(matches!(preview.content, PreviewContent::Empty));
        assert!(preview.generation() > before);
    }
}
