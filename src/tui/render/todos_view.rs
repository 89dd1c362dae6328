use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the todo list, or the empty-state message
pub fn render_todos_view(frame: &mut Frame, app: &App, area: Rect) {
    // Empty state only shows when the form is closed, so the panel never
    // covers a misleading "nothing here" message
    if app.todos.is_empty() {
        if app.mode != Mode::Form {
            render_empty_state(frame, app, area);
        }
        return;
    }

    let height = area.height as usize;
    let scroll = scroll_offset(app.todo_cursor, app.todos.len(), height);

    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in app.todos.iter().enumerate().skip(scroll).take(height) {
        let selected = i == app.todo_cursor;
        let row_bg = if selected {
            app.theme.selection_bg
        } else {
            app.theme.background
        };

        let mut spans: Vec<Span> = Vec::new();

        // Checkbox
        let mark = if item.completed { "[x] " } else { "[ ] " };
        spans.push(Span::styled(
            mark,
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));

        // Title, struck through once completed
        let mut title_style = Style::default()
            .fg(if selected {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        if item.completed {
            title_style = title_style
                .fg(app.theme.dim)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        spans.push(Span::styled(item.text.clone(), title_style));

        // Priority
        spans.push(Span::styled("  ", Style::default().bg(row_bg)));
        spans.push(Span::styled(
            item.priority.label(),
            Style::default()
                .fg(app.theme.priority_color(item.priority))
                .bg(row_bg),
        ));

        // Due date (or "No deadline")
        spans.push(Span::styled(
            format!("  {}", item.due_label()),
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));

        // Description, dimmed inline
        if !item.description.is_empty() {
            spans.push(Span::styled(
                format!("  — {}", item.description),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    let list = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(list, area);
}

fn render_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "No todos yet!",
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Press a to add your first one.",
            Style::default().fg(app.theme.dim),
        ))
        .centered(),
    ];
    let msg = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(msg, area);
}

/// First visible row so the cursor stays on screen
pub(super) fn scroll_offset(cursor: usize, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    if cursor < height {
        0
    } else {
        (cursor + 1 - height).min(len - height)
    }
}
