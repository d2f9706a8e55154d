//! Help overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::event::get_help_sections;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// Render the help overlay centered over the whole screen.
pub fn render_help_overlay(frame: &mut Frame, area: Rect, theme: &Theme) {
    let sections = get_help_sections();

    let mut lines: Vec<Line> = Vec::new();
    for section in &sections {
        lines.push(Line::styled(section.title, theme.title));
        for binding in &section.bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", binding.keys), theme.help_key),
                Span::styled(binding.description, theme.help_desc),
            ]));
        }
        lines.push(Line::default());
    }
    lines.push(Line::styled("Press Esc to close", theme.help_desc));

    let height = lines.len() as u16 + 2;
    let popup = centered_rect(area, 44, height);

    frame.render_widget(Clear, popup);
    let block = Block::bordered()
        .border_style(theme.border)
        .title(Line::styled(" Help ", theme.title));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
