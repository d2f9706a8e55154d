//! The preview pane.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use satchel_core::format_file_size;

use crate::preview::PreviewContent;
use crate::theme::Theme;
use crate::ui::{icon_for, PAGE_UNIT_LINES};

/// Width of the mini sheet drawn for each document page unit.
const PAGE_UNIT_WIDTH: usize = 30;

/// Render the preview pane for the current content.
pub fn render_preview(frame: &mut Frame, area: Rect, content: &mut PreviewContent, theme: &Theme) {
    let title = match content {
        PreviewContent::Empty => " Preview ".to_string(),
        PreviewContent::Image { name, .. } => format!(" {name} "),
        PreviewContent::PagedDocument { name, .. } => format!(" {name} "),
        PreviewContent::Download { name, .. } => format!(" {name} "),
        PreviewContent::Error(_) => " Preview ".to_string(),
    };
    let block = Block::bordered()
        .border_style(theme.border)
        .title(Line::styled(title, theme.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match content {
        PreviewContent::Empty => {
            let hint = Paragraph::new("Nothing selected.\n\nPress Enter to view a file.")
                .style(Style::new().fg(theme.muted))
                .wrap(Wrap { trim: true });
            frame.render_widget(hint, inner);
        }
        PreviewContent::Image { info, view, .. } => {
            let [caption, body] = ratatui::layout::Layout::vertical([
                ratatui::layout::Constraint::Length(1),
                ratatui::layout::Constraint::Min(1),
            ])
            .areas(inner);

            let line = Line::styled(
                format!("{} × {}", info.width, info.height),
                Style::new().fg(theme.muted),
            );
            frame.render_widget(Paragraph::new(line), caption);
            view.render(body, frame.buffer_mut());
        }
        PreviewContent::PagedDocument {
            page_count, scroll, ..
        } => {
            // Until the page count resolves, the page region stays blank.
            if let Some(count) = page_count {
                let pages = Paragraph::new(page_unit_lines(*count, theme))
                    .scroll((*scroll, 0));
                frame.render_widget(pages, inner);
            }
        }
        PreviewContent::Download {
            name,
            media_type,
            size_bytes,
        } => {
            let lines = vec![
                Line::default(),
                Line::from(vec![
                    Span::styled(icon_for(media_type), theme.help_desc),
                    Span::raw("  "),
                    Span::styled(name.to_string(), Style::new().fg(theme.foreground)),
                ]),
                Line::styled(media_type.to_string(), Style::new().fg(theme.muted)),
                Line::styled(format_file_size(*size_bytes), Style::new().fg(theme.muted)),
                Line::default(),
                Line::styled("No inline preview for this type.", Style::new().fg(theme.muted)),
                Line::styled("Press s to save a copy.", Style::new().fg(theme.info)),
            ];
            let card = Paragraph::new(lines).wrap(Wrap { trim: true });
            frame.render_widget(card, inner);
        }
        PreviewContent::Error(message) => {
            let text = Paragraph::new(message.as_str())
                .style(Style::new().fg(theme.error))
                .wrap(Wrap { trim: true });
            frame.render_widget(text, inner);
        }
    }
}

/// One mini sheet per page, in page order.
fn page_unit_lines(count: u32, theme: &Theme) -> Vec<Line<'static>> {
    let style = Style::new().fg(theme.muted);
    let width = PAGE_UNIT_WIDTH;
    let mut lines = Vec::with_capacity(count as usize * PAGE_UNIT_LINES as usize);
    for page in 1..=count {
        let label = format!("Page {page} / {count}");
        lines.push(Line::styled(
            format!("╭{}╮", "─".repeat(width)),
            style,
        ));
        lines.push(Line::styled(format!("│{label:^width$}│"), style));
        lines.push(Line::styled(
            format!("╰{}╯", "─".repeat(PAGE_UNIT_WIDTH)),
            style,
        ));
        lines.push(Line::default());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_units_preserve_page_order() {
        let theme = Theme::dark();
        let lines = page_unit_lines(3, &theme);

        assert_eq!(lines.len(), 3 * PAGE_UNIT_LINES as usize);
        let labels: Vec<String> = lines
            .iter()
            .map(|l| l.to_string())
            .filter(|s| s.contains("Page"))
            .collect();
        assert!(labels[0].contains("Page 1 / 3"));
        assert!(labels[1].contains("Page 2 / 3"));
        assert!(labels[2].contains("Page 3 / 3"));
    }
}
