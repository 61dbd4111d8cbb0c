//! Input line and status bar.

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the text being typed, with a cursor placed after it.
pub fn render_input_line(frame: &mut Frame, area: Rect, value: &str, disabled: bool) {
    let title = if disabled {
        "Search (disabled)"
    } else {
        "Search (Esc hides, Ctrl-C quits)"
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::raw(value.to_string()),
    ]))
    .block(block)
    .style(Style::default().fg(Color::Yellow));
    frame.render_widget(paragraph, area);

    let width = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(3)
        .saturating_add(width)
        .min(area.right().saturating_sub(2));
    frame.set_cursor_position((x, area.y.saturating_add(1)));
}
