use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::todos_view::scroll_offset;

/// Render the habit tracker: optional input line on top, checklist below
pub fn render_habits_view(frame: &mut Frame, app: &App, area: Rect) {
    let input_open = app.mode == Mode::HabitInput;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if input_open { 2 } else { 0 }),
            Constraint::Min(1),
        ])
        .split(area);

    if input_open {
        render_input(frame, app, chunks[0]);
    }
    render_list(frame, app, chunks[1]);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        "+ ",
        Style::default().fg(app.theme.highlight).bg(bg),
    )];
    if app.habit_input.value.is_empty() {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(
            "Enter a new habit",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        // Split the value at the cursor so the bar sits where edits land
        let cursor_byte = app
            .habit_input
            .value
            .char_indices()
            .nth(app.habit_input.cursor)
            .map(|(i, _)| i)
            .unwrap_or(app.habit_input.value.len());
        let (before, after) = app.habit_input.value.split_at(cursor_byte);
        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(
            after.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    let input = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(input, area);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    if app.habits.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No habits yet. Press a to add one.",
            Style::default().fg(app.theme.dim),
        )))
        .style(Style::default().bg(app.theme.background));
        frame.render_widget(msg, area);
        return;
    }

    let height = area.height as usize;
    let scroll = scroll_offset(app.habit_cursor, app.habits.len(), height);

    let mut lines: Vec<Line> = Vec::new();
    for (i, habit) in app.habits.iter().enumerate().skip(scroll).take(height) {
        let selected = i == app.habit_cursor;
        let row_bg = if selected {
            app.theme.selection_bg
        } else {
            app.theme.background
        };

        let (glyph, glyph_color) = if habit.completed {
            ("\u{2713} ", app.theme.green)
        } else {
            ("\u{25CB} ", app.theme.red)
        };

        let mut text_style = Style::default()
            .fg(if selected {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        if habit.completed {
            text_style = text_style
                .fg(app.theme.dim)
                .add_modifier(Modifier::CROSSED_OUT);
        }

        lines.push(Line::from(vec![
            Span::styled(glyph, Style::default().fg(glyph_color).bg(row_bg)),
            Span::styled(habit.text.clone(), text_style),
        ]));
    }

    let list = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(list, area);
}
