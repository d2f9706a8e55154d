//! Icon lookup by media type.

/// Glyph shown next to a file in the list, chosen by declared media type.
///
/// Deterministic and total: images, PDFs and presentations get their own
/// glyph, everything else a generic one.
pub fn icon_for(media_type: &str) -> &'static str {
    if media_type.starts_with("image/") {
        "◉"
    } else if media_type.contains("pdf") {
        "▤"
    } else if media_type.contains("presentation") || media_type.contains("powerpoint") {
        "▦"
    } else {
        "◆"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_dispatch() {
        assert_eq!(icon_for("image/png"), "◉");
        assert_eq!(icon_for("application/pdf"), "▤");
        assert_eq!(
            icon_for("application/vnd.openxmlformats-officedocument.presentationml.presentation"),
            "▦"
        );
        assert_eq!(icon_for("application/vnd.ms-powerpoint"), "▦");
        assert_eq!(icon_for("text/plain"), "◆");
        assert_eq!(icon_for(""), "◆");
    }
}
