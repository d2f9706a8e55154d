//! The staged-file list pane.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use satchel_core::{format_file_size, Session};

use crate::theme::Theme;
use crate::ui::icon_for;

/// Render the file list with the cursor row highlighted.
pub fn render_file_list(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    cursor: usize,
    theme: &Theme,
) {
    let block = Block::bordered()
        .border_style(theme.border)
        .title(Line::styled(format!(" Files ({}) ", session.len()), theme.title));

    if session.is_empty() {
        let hint = Paragraph::new("Nothing staged yet.\n\nPress a to add a file.")
            .style(ratatui::style::Style::new().fg(theme.muted))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let active = session.active();
    let items: Vec<ListItem> = session
        .handles()
        .map(|handle| {
            let is_active = active == Some(handle.id);
            let name_style = if is_active { theme.active } else { theme.file };
            let mut spans = vec![
                Span::styled(icon_for(&handle.media_type), theme.help_desc),
                Span::raw(" "),
                Span::styled(handle.name.to_string(), name_style),
                Span::styled(
                    format!("  {}", format_file_size(handle.size_bytes)),
                    ratatui::style::Style::new().fg(theme.muted),
                ),
            ];
            if is_active {
                spans.push(Span::styled(" ●", theme.active));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected);

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
