//! Image decoding for inline rendering.

use image::DynamicImage;
use tracing::debug;

use crate::config::PreviewConfig;
use crate::error::PreviewError;

/// Dimensions and format of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    fn of(image: &DynamicImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

/// Decode an image payload for inline display.
///
/// Payloads over the configured limit are refused rather than decoded; a
/// refusal or decode failure degrades to an error line in the preview pane,
/// it never aborts the session.
pub fn decode_image(
    data: &[u8],
    config: &PreviewConfig,
) -> Result<(DynamicImage, ImageInfo), PreviewError> {
    if data.len() as u64 > config.max_decode_bytes {
        return Err(PreviewError::TooLarge {
            size_bytes: data.len() as u64,
            limit_bytes: config.max_decode_bytes,
        });
    }

    let image =
        image::load_from_memory(data).map_err(|e| PreviewError::ImageDecode(e.to_string()))?;
    let info = ImageInfo::of(&image);
    debug!(width = info.width, height = info.height, "decoded image");
    Ok((image, info))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, RgbaImage};

    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(width, height));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_reports_dimensions() {
        let data = png_bytes(4, 3);
        let (_, info) = decode_image(&data, &PreviewConfig::default()).unwrap();
        assert_eq!(info, ImageInfo { width: 4, height: 3 });
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_image(b"not an image", &PreviewConfig::default()).unwrap_err();
        assert!(matches!(err, PreviewError::ImageDecode(_)));
    }

    #[test]
    fn test_decode_refuses_oversized_payloads() {
        let data = png_bytes(4, 4);
        let config = PreviewConfig::builder()
            .max_decode_bytes(8u64)
            .build()
            .unwrap();

        let err = decode_image(&data, &config).unwrap_err();
        assert!(matches!(err, PreviewError::TooLarge { .. }));
    }
}
