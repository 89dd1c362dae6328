pub mod form_panel;
pub mod habits_view;
pub mod help_overlay;
pub mod pomodoro_view;
pub mod status_row;
pub mod tab_bar;
pub mod todos_view;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode, Tab};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.tab {
        Tab::Todos => todos_view::render_todos_view(frame, app, chunks[1]),
        Tab::Habits => habits_view::render_habits_view(frame, app, chunks[1]),
        Tab::Pomodoro => pomodoro_view::render_pomodoro_view(frame, app, chunks[1]),
    }

    // Form panel (anchored to the bottom of the content area, over the list)
    if app.mode == Mode::Form && app.form.is_some() {
        form_panel::render_form_panel(frame, app, chunks[1]);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    // Status row
    status_row::render_status_row(frame, app, chunks[2]);
}
