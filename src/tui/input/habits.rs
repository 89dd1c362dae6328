use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// HabitInput mode: the one-line "Enter a new habit" input has focus
pub fn handle_habit_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_habit_input(),
        KeyCode::Enter => app.submit_habit(),
        KeyCode::Backspace => app.habit_input.backspace(),
        KeyCode::Left => app.habit_input.left(),
        KeyCode::Right => app.habit_input.right(),
        KeyCode::Char(c) => app.habit_input.insert(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::Store;
    use crate::model::config::Config;
    use crate::tui::app::Mode;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_enter_adds_a_habit() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Store::new(dir.path().to_path_buf()), Config::default());
        app.open_habit_input();

        for c in "run".chars() {
            handle_habit_input(&mut app, key(KeyCode::Char(c)));
        }
        handle_habit_input(&mut app, key(KeyCode::Enter));

        assert_eq!(app.habits.len(), 1);
        assert_eq!(app.habits[0].text, "run");
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn esc_discards_the_input() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Store::new(dir.path().to_path_buf()), Config::default());
        app.open_habit_input();
        handle_habit_input(&mut app, key(KeyCode::Char('x')));
        handle_habit_input(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.habits.is_empty());
        assert!(app.habit_input.value.is_empty());
    }
}
