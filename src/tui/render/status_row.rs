use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, Tab};
use crate::tui::toast::ToastKind;

/// Bottom status row: active toast if there is one, key hints otherwise
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(toast) = &app.toast {
        let color = match toast.kind {
            ToastKind::Success => app.theme.green,
            ToastKind::Info => app.theme.cyan,
            ToastKind::Error => app.theme.red,
        };
        let widget = Paragraph::new(Line::from(Span::styled(
            format!(" {} ", toast.message),
            Style::default()
                .fg(app.theme.background)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(app.theme.background));
        frame.render_widget(widget, area);
        return;
    }

    if !app.config.ui.show_key_hints {
        let blank = Paragraph::new("").style(Style::default().bg(app.theme.background));
        frame.render_widget(blank, area);
        return;
    }

    let widget = Paragraph::new(hint_line(app)).style(Style::default().bg(app.theme.background));
    frame.render_widget(widget, area);
}

fn hint_line(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match app.mode {
        Mode::Form => &[
            ("Tab", "next field"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ],
        Mode::HabitInput => &[("Enter", "add"), ("Esc", "cancel")],
        Mode::Navigate => match app.tab {
            Tab::Todos => &[
                ("j/k", "move"),
                ("a", "add"),
                ("e", "edit"),
                ("x", "done"),
                ("d", "delete"),
                ("?", "help"),
            ],
            Tab::Habits => &[
                ("j/k", "move"),
                ("a", "add"),
                ("x", "toggle"),
                ("d", "delete"),
                ("?", "help"),
            ],
            Tab::Pomodoro => &[
                ("space", "start/pause"),
                ("r", "reset"),
                ("+/-", "work mins"),
                ("]/[", "break mins"),
                ("?", "help"),
            ],
        },
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(app.theme.highlight),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(app.theme.dim),
        ));
    }
    Line::from(spans)
}
