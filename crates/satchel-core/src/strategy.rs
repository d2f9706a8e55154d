//! Preview strategy dispatch.

use serde::{Deserialize, Serialize};
use strum::Display;

/// How a staged file is presented in the preview pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum PreviewStrategy {
    /// Decode the payload and draw it as a picture.
    #[strum(to_string = "image")]
    ImageRender,
    /// Paginated document view, one display unit per page.
    #[strum(to_string = "paged document")]
    PagedDocumentRender,
    /// No inline view; offer the raw payload for saving under the file's name.
    #[strum(to_string = "download")]
    GenericDownload,
}

/// Map a declared media type to its preview strategy.
///
/// Total over arbitrary input: anything that is neither an image type nor a
/// PDF falls through to [`PreviewStrategy::GenericDownload`]. There is no
/// "unrecognized type" error state.
pub fn resolve_strategy(media_type: &str) -> PreviewStrategy {
    if media_type.starts_with("image/") {
        PreviewStrategy::ImageRender
    } else if media_type.contains("pdf") {
        PreviewStrategy::PagedDocumentRender
    } else {
        PreviewStrategy::GenericDownload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_types() {
        assert_eq!(resolve_strategy("image/png"), PreviewStrategy::ImageRender);
        assert_eq!(resolve_strategy("image/jpeg"), PreviewStrategy::ImageRender);
        assert_eq!(
            resolve_strategy("image/svg+xml"),
            PreviewStrategy::ImageRender
        );
    }

    #[test]
    fn test_pdf_types() {
        assert_eq!(
            resolve_strategy("application/pdf"),
            PreviewStrategy::PagedDocumentRender
        );
        assert_eq!(
            resolve_strategy("application/x-pdf"),
            PreviewStrategy::PagedDocumentRender
        );
    }

    #[test]
    fn test_everything_else_downloads() {
        assert_eq!(
            resolve_strategy(
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            ),
            PreviewStrategy::GenericDownload
        );
        assert_eq!(
            resolve_strategy("text/plain"),
            PreviewStrategy::GenericDownload
        );
        assert_eq!(resolve_strategy(""), PreviewStrategy::GenericDownload);
        assert_eq!(
            resolve_strategy("not a mime type at all"),
            PreviewStrategy::GenericDownload
        );
    }
}
