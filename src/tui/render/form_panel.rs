use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::item::Priority;
use crate::tui::app::{App, FormField, TextField};

/// Render the add/edit form as a panel anchored to the bottom of the
/// content area, sliding up over the list.
pub fn render_form_panel(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };

    // Four field rows, optional error row, plus the border
    let error_rows = u16::from(form.error.is_some());
    let height = (4 + error_rows + 2).min(area.height);
    let panel = Rect::new(
        area.x,
        area.y + area.height - height,
        area.width,
        height,
    );

    frame.render_widget(Clear, panel);

    let title = if form.editing_key.is_some() {
        " Edit Todo "
    } else {
        " Add Todo "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut lines = vec![
        text_row(app, "Title", &form.title, form.field == FormField::Title),
        text_row(
            app,
            "Description",
            &form.description,
            form.field == FormField::Description,
        ),
        priority_row(app, form.priority, form.field == FormField::Priority),
        text_row(
            app,
            "Due date",
            &form.due_date,
            form.field == FormField::DueDate,
        ),
    ];
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(app.theme.red),
        )));
    }

    let body = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(body, inner);
}

const LABEL_WIDTH: usize = 13;

fn label_span(app: &App, label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(app.theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim)
    };
    let marker = if focused { "\u{25B8} " } else { "  " };
    Span::styled(
        format!("{}{:<width$}", marker, label, width = LABEL_WIDTH),
        style,
    )
}

fn text_row(app: &App, label: &str, field: &TextField, focused: bool) -> Line<'static> {
    let mut spans = vec![label_span(app, label, focused)];
    if focused {
        // Split at the cursor so the bar tracks edits mid-string
        let cursor_byte = field
            .value
            .char_indices()
            .nth(field.cursor)
            .map(|(i, _)| i)
            .unwrap_or(field.value.len());
        let (before, after) = field.value.split_at(cursor_byte);
        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(app.theme.text_bright),
        ));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight),
        ));
        spans.push(Span::styled(
            after.to_string(),
            Style::default().fg(app.theme.text_bright),
        ));
    } else if field.value.is_empty() && label == "Due date" {
        spans.push(Span::styled(
            "YYYY-MM-DD",
            Style::default().fg(app.theme.dim),
        ));
    } else {
        spans.push(Span::styled(
            field.value.clone(),
            Style::default().fg(app.theme.text),
        ));
    }
    Line::from(spans)
}

fn priority_row(app: &App, priority: Priority, focused: bool) -> Line<'static> {
    let mut spans = vec![label_span(app, "Priority", focused)];
    if focused {
        spans.push(Span::styled(
            "\u{2039} ",
            Style::default().fg(app.theme.dim),
        ));
    }
    spans.push(Span::styled(
        priority.label(),
        Style::default()
            .fg(app.theme.priority_color(priority))
            .add_modifier(if focused {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
    ));
    if focused {
        spans.push(Span::styled(
            " \u{203A}",
            Style::default().fg(app.theme.dim),
        ));
    }
    Line::from(spans)
}
