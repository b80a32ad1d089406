use crate::fetch::FetchStatus;
use crate::ui::app::App;
use crate::ui::theme::{status_color, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints plus the selected panel's status.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// The `r` hint carries the selected view's button label and is left out
    /// while that view has no button.
    pub fn hints(app: &App) -> String {
        let mut hints = String::from(" ←/→: Switch");
        if let Some(label) = app.selected_view().retry_label() {
            hints.push_str(" │ r: ");
            hints.push_str(label);
        }
        hints.push_str(" │ a: Refresh all │ q: Quit");
        hints
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(app);
        let status = app
            .selected_panel()
            .map(|panel| panel.status())
            .unwrap_or(FetchStatus::Idle);
        let status_text = format!("● {:?} ", status);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: hints and labels contain arrows and emoji
        let used = hints.chars().count() + status_text.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status_text, Style::default().fg(status_color(status))),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
