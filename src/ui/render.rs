//! Paints the app: tab header, the selected panel, footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_PENDING,
};
use crate::ui::view::PanelView;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app), header);

    frame.render_widget(Clear, body);
    let title = app
        .selected_panel()
        .map(|panel| panel.kind().title())
        .unwrap_or("");
    render_panel(frame, body, title, &app.selected_view(), app.animation_tick());

    frame.render_widget(Footer::new().widget(app, footer), footer);
}

/// Render one panel view inside a bordered block.
pub fn render_panel(frame: &mut Frame<'_>, area: Rect, title: &str, view: &PanelView, tick: u8) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match view {
        PanelView::Blank => Vec::new(),
        PanelView::Loading { message } => loading_lines(message, tick),
        PanelView::Error {
            headline,
            detail,
            retry_label,
        } => error_lines(headline, detail, retry_label),
        PanelView::Content {
            content,
            retry_label,
        } => {
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", content.headline),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
            ];
            lines.extend(content.details.iter().map(|detail| {
                Line::from(Span::styled(
                    format!("  {}", detail),
                    Style::default().fg(HEADER_TEXT),
                ))
            }));
            lines.push(Line::from(""));
            lines.push(button_line(retry_label));
            lines
        }
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn loading_lines(message: &str, tick: u8) -> Vec<Line<'static>> {
    let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_PENDING)),
            Span::styled(message.to_string(), Style::default().fg(HEADER_TEXT)),
        ]),
    ]
}

fn error_lines(headline: &str, detail: &str, retry_label: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", headline),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", detail),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        button_line(retry_label),
    ]
}

/// The retry button, always rendered as focused.
fn button_line(label: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!(" r  {} ", label),
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
