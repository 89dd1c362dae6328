use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FormField};

/// Form mode: the slide-up add/edit panel has focus
pub fn handle_form(app: &mut App, key: KeyEvent) {
    let Some(form) = &mut app.form else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.close_form();
        }
        KeyCode::Enter => {
            app.save_form();
        }
        KeyCode::Tab | KeyCode::Down => {
            form.field = form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.field = form.field.prev();
        }
        KeyCode::Left => match form.field {
            FormField::Priority => form.priority = form.priority.prev(),
            _ => {
                if let Some(field) = form.focused_text() {
                    field.left();
                }
            }
        },
        KeyCode::Right => match form.field {
            FormField::Priority => form.priority = form.priority.next(),
            _ => {
                if let Some(field) = form.focused_text() {
                    field.right();
                }
            }
        },
        KeyCode::Backspace => {
            if let Some(field) = form.focused_text() {
                field.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = form.focused_text() {
                field.insert(c);
                // Typing clears the stale validation message
                form.error = None;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::Store;
    use crate::model::config::Config;
    use crate::model::item::Priority;
    use crate::tui::app::Mode;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form_app(dir: &TempDir) -> App {
        let mut app = App::new(Store::new(dir.path().to_path_buf()), Config::default());
        app.open_add_form();
        app
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let dir = TempDir::new().unwrap();
        let mut app = form_app(&dir);
        handle_form(&mut app, key(KeyCode::Char('h')));
        handle_form(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.form.as_ref().unwrap().title.value, "hi");

        handle_form(&mut app, key(KeyCode::Tab));
        handle_form(&mut app, key(KeyCode::Char('d')));
        let form = app.form.as_ref().unwrap();
        assert_eq!(form.title.value, "hi");
        assert_eq!(form.description.value, "d");
    }

    #[test]
    fn arrows_cycle_priority_when_focused() {
        let dir = TempDir::new().unwrap();
        let mut app = form_app(&dir);
        // Title → Description → Priority
        handle_form(&mut app, key(KeyCode::Tab));
        handle_form(&mut app, key(KeyCode::Tab));
        handle_form(&mut app, key(KeyCode::Right));
        assert_eq!(app.form.as_ref().unwrap().priority, Priority::High);
        handle_form(&mut app, key(KeyCode::Left));
        assert_eq!(app.form.as_ref().unwrap().priority, Priority::Medium);
    }

    #[test]
    fn esc_cancels_without_saving() {
        let dir = TempDir::new().unwrap();
        let mut app = form_app(&dir);
        handle_form(&mut app, key(KeyCode::Char('x')));
        handle_form(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.form.is_none());
        assert!(app.todos.is_empty());
    }

    #[test]
    fn enter_with_empty_title_keeps_form_open_with_error() {
        let dir = TempDir::new().unwrap();
        let mut app = form_app(&dir);
        handle_form(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Form);
        assert!(app.form.as_ref().unwrap().error.is_some());

        // Typing clears the error
        handle_form(&mut app, key(KeyCode::Char('t')));
        assert!(app.form.as_ref().unwrap().error.is_none());
    }
}
