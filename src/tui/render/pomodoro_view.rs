use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use crate::tui::app::App;
use crate::tui::pomodoro::Phase;

/// Render the pomodoro timer: phase title, countdown, progress gauge
pub fn render_pomodoro_view(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // spacer
            Constraint::Length(1), // phase title
            Constraint::Length(1), // spacer
            Constraint::Length(1), // countdown
            Constraint::Length(1), // spacer
            Constraint::Length(1), // gauge
            Constraint::Length(1), // spacer
            Constraint::Length(1), // durations
            Constraint::Min(0),
        ])
        .split(area);

    let phase_color = match app.pomodoro.phase {
        Phase::Work => app.theme.red,
        Phase::Break => app.theme.green,
    };

    let title = Paragraph::new(Line::from(Span::styled(
        app.pomodoro.phase.title(),
        Style::default().fg(phase_color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(app.theme.background));
    frame.render_widget(title, chunks[1]);

    let state = if app.pomodoro.running {
        ""
    } else {
        "  (paused)"
    };
    let countdown = Paragraph::new(Line::from(vec![
        Span::styled(
            app.pomodoro.format_time(),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(state, Style::default().fg(app.theme.dim)),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().bg(app.theme.background));
    frame.render_widget(countdown, chunks[3]);

    // Gauge drains as the phase runs down
    let gauge_area = centered_columns(chunks[5], 40);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(phase_color).bg(app.theme.selection_bg))
        .ratio(app.pomodoro.progress())
        .label("");
    frame.render_widget(gauge, gauge_area);

    let durations = Paragraph::new(Line::from(vec![
        Span::styled("work ", Style::default().fg(app.theme.dim)),
        Span::styled(
            format!("{}m", app.pomodoro.work_minutes),
            Style::default().fg(app.theme.text),
        ),
        Span::styled("   break ", Style::default().fg(app.theme.dim)),
        Span::styled(
            format!("{}m", app.pomodoro.break_minutes),
            Style::default().fg(app.theme.text),
        ),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().bg(app.theme.background));
    frame.render_widget(durations, chunks[7]);
}

/// Center a band of `width` columns inside `area`
fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_columns_clamps_to_area() {
        let area = Rect::new(0, 5, 80, 1);
        let band = centered_columns(area, 40);
        assert_eq!(band, Rect::new(20, 5, 40, 1));

        let narrow = Rect::new(0, 0, 20, 1);
        assert_eq!(centered_columns(narrow, 40), narrow);
    }
}
