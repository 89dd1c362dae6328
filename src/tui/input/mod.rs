mod form;
mod habits;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Form => form::handle_form(app, key),
        Mode::HabitInput => habits::handle_habit_input(app, key),
    }
}
