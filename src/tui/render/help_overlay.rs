use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Tab / 1 2 3", "switch tab"),
    ("j / k", "move cursor"),
    ("a", "add todo or habit"),
    ("e / Enter", "edit todo"),
    ("x / space", "toggle completed"),
    ("d", "delete"),
    ("space", "start/pause pomodoro"),
    ("r", "reset pomodoro"),
    ("+ / -", "work minutes"),
    ("] / [", "break minutes"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Centered help popup listing every key binding
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let width = 44u16.min(area.width);
    let height = (HELP_ENTRIES.len() as u16 + 2).min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<12}", key),
                    Style::default().fg(app.theme.highlight),
                ),
                Span::styled((*action).to_string(), Style::default().fg(app.theme.text)),
            ])
        })
        .collect();

    let body = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(body, inner);
}
