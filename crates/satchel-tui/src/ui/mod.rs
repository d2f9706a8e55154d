//! UI components and widgets.

mod help;
mod icons;
mod list;
mod preview;

pub use help::render_help_overlay;
pub use icons::icon_for;
pub use list::render_file_list;
pub use preview::render_preview;

use ratatui::layout::{Constraint, Layout, Rect};

/// Lines each page unit occupies in the paged document view.
pub const PAGE_UNIT_LINES: u16 = 4;

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub list: Rect,
    pub preview: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        let list_width = 38;

        // Vertical split: header, main content, footer
        let [header, content, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .areas(area);

        // Horizontal split: file list, preview pane
        let [list, preview] = Layout::horizontal([
            Constraint::Length(list_width),
            Constraint::Min(30),
        ])
        .areas(content);

        Self {
            header,
            list,
            preview,
            footer,
        }
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
