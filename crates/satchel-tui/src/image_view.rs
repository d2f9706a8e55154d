//! Inline terminal image rendering.

use image::DynamicImage;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use ratatui_image::{Resize, StatefulImage};

/// Renders one decoded image into the preview pane, letterboxed to fit.
pub struct ImageView {
    protocol: StatefulProtocol,
}

// Manual Debug implementation since StatefulProtocol doesn't implement Debug
impl std::fmt::Debug for ImageView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageView")
            .field("protocol", &"<StatefulProtocol>")
            .finish()
    }
}

impl ImageView {
    /// Create a view for a decoded image.
    ///
    /// Queries the terminal for its graphics protocol and font size; fails on
    /// terminals that cannot be queried (the caller degrades to an error
    /// line in the preview pane).
    pub fn new(image: DynamicImage) -> Result<Self, String> {
        let picker = Picker::from_query_stdio().map_err(|e| e.to_string())?;
        let protocol = picker.new_resize_protocol(image);
        Ok(Self { protocol })
    }

    /// Render the image into `area`, preserving aspect ratio.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        use ratatui::widgets::StatefulWidget;

        let image = StatefulImage::default().resize(Resize::Fit(None));
        image.render(area, buf, &mut self.protocol);
    }
}
