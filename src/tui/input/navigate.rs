use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Tab};

/// Navigate mode: tab switching, list movement, and mutation shortcuts
pub fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Global keys first
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Tab => {
            app.tab = app.tab.next();
            return;
        }
        KeyCode::Char('1') => {
            app.tab = Tab::Todos;
            return;
        }
        KeyCode::Char('2') => {
            app.tab = Tab::Habits;
            return;
        }
        KeyCode::Char('3') => {
            app.tab = Tab::Pomodoro;
            return;
        }
        _ => {}
    }

    match app.tab {
        Tab::Todos => handle_todos(app, key),
        Tab::Habits => handle_habits(app, key),
        Tab::Pomodoro => handle_pomodoro(app, key),
    }
}

fn handle_todos(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.todo_cursor + 1 < app.todos.len() {
                app.todo_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.todo_cursor = app.todo_cursor.saturating_sub(1);
        }
        KeyCode::Char('a') => app.open_add_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char('d') => app.delete_selected_todo(),
        KeyCode::Char('x') | KeyCode::Char(' ') => app.toggle_selected_todo(),
        _ => {}
    }
}

fn handle_habits(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.habit_cursor + 1 < app.habits.len() {
                app.habit_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.habit_cursor = app.habit_cursor.saturating_sub(1);
        }
        KeyCode::Char('a') => app.open_habit_input(),
        KeyCode::Char('d') => app.delete_selected_habit(),
        KeyCode::Char('x') | KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected_habit(),
        _ => {}
    }
}

fn handle_pomodoro(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') => app.pomodoro.toggle(),
        KeyCode::Char('r') => app.pomodoro.reset(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.pomodoro.adjust_work(1),
        KeyCode::Char('-') => app.pomodoro.adjust_work(-1),
        KeyCode::Char(']') => app.pomodoro.adjust_break(1),
        KeyCode::Char('[') => app.pomodoro.adjust_break(-1),
        _ => {}
    }
}
