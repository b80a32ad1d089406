use crate::ui::app::App;
use crate::ui::theme::{
    status_color, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Tab strip: one entry per panel with a status dot.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled(" ", text_style)];
        for (index, panel) in app.panels().iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            let dot_style = Style::default().fg(status_color(panel.status()));
            let title_style = if index == app.selected_index() {
                Style::default()
                    .fg(ACCENT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            spans.push(Span::styled("● ", dot_style));
            spans.push(Span::styled(panel.kind().title(), title_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
