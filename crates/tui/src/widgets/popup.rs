//! Suggestion list widget.
//!
//! Renders whatever the controller last told its [`SurfaceState`]: the
//! entries, which one is highlighted, and whether the list is visible.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::StatefulWidget;
use ratatui::widgets::Widget;
use sk_core::display::DisplayEntry;
use sk_core::display::SurfaceState;

/// Popup list of display entries. Draws nothing while hidden.
pub struct SuggestionPopup<'a> {
    state: &'a SurfaceState,
}

impl<'a> SuggestionPopup<'a> {
    pub fn new(state: &'a SurfaceState) -> Self {
        Self { state }
    }

    /// Rows needed to show every entry, borders included.
    pub fn height(&self) -> u16 {
        if !self.state.visible || self.state.entries.is_empty() {
            return 0;
        }
        u16::try_from(self.state.entries.len() + 2).unwrap_or(u16::MAX)
    }
}

impl Widget for SuggestionPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.height() == 0 || area.height == 0 {
            return;
        }

        let items: Vec<ListItem> = self.state.entries.iter().map(entry_line).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Suggestions")
                    .style(Style::default().fg(Color::White)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(self.state.highlighted);

        Clear.render(area, buf);
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

fn entry_line(entry: &DisplayEntry) -> ListItem<'static> {
    if !entry.selectable {
        return ListItem::new(Line::from(Span::styled(
            entry.text.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let spans: Vec<Span> = entry
        .markup
        .fragments()
        .iter()
        .map(|fragment| {
            if fragment.emphasized {
                Span::styled(
                    fragment.text.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(fragment.text.clone())
            }
        })
        .collect();

    ListItem::new(Line::from(spans))
}
