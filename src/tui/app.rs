use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config_or_default;
use crate::io::store::{HABITS_SLOT, Store, TODOS_SLOT, data_dir};
use crate::model::config::Config;
use crate::model::habit::Habit;
use crate::model::item::{Item, ItemFields, Priority};
use crate::ops::{habit_ops, item_ops};

use super::input;
use super::pomodoro::Pomodoro;
use super::render;
use super::theme::Theme;
use super::toast::{Toast, ToastKind};

/// Which tab is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Todos,
    Habits,
    Pomodoro,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Todos => "Todos",
            Tab::Habits => "Habits",
            Tab::Pomodoro => "Pomodoro",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Todos => Tab::Habits,
            Tab::Habits => Tab::Pomodoro,
            Tab::Pomodoro => Tab::Todos,
        }
    }

    /// Name used in .state.json
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Todos => "todos",
            Tab::Habits => "habits",
            Tab::Pomodoro => "pomodoro",
        }
    }

    pub fn from_str(s: &str) -> Option<Tab> {
        match s {
            "todos" => Some(Tab::Todos),
            "habits" => Some(Tab::Habits),
            "pomodoro" => Some(Tab::Pomodoro),
            _ => None,
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// The todo form panel is open
    Form,
    /// The one-line habit input is open
    HabitInput,
}

/// A single-line text input with a char-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub value: String,
    /// Cursor position in chars (0..=len)
    pub cursor: usize,
}

impl TextField {
    pub fn with_value(value: String) -> Self {
        let cursor = value.chars().count();
        TextField { value, cursor }
    }

    fn byte_offset(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset();
        self.value.insert(offset, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let offset = self.byte_offset();
        self.value.remove(offset);
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Fields of the slide-up todo form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Priority,
    DueDate,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::DueDate,
            FormField::DueDate => FormField::Title,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Title => FormField::DueDate,
            FormField::Description => FormField::Title,
            FormField::Priority => FormField::Description,
            FormField::DueDate => FormField::Priority,
        }
    }
}

/// State of the add/edit todo form
#[derive(Debug, Clone)]
pub struct TodoForm {
    pub title: TextField,
    pub description: TextField,
    pub priority: Priority,
    pub due_date: TextField,
    /// Key of the entry being edited, or None when adding
    pub editing_key: Option<String>,
    pub field: FormField,
    /// Inline validation message, shown under the title field
    pub error: Option<String>,
}

impl TodoForm {
    /// Blank form for adding
    pub fn new_add() -> Self {
        TodoForm {
            title: TextField::default(),
            description: TextField::default(),
            priority: Priority::default(),
            due_date: TextField::default(),
            editing_key: None,
            field: FormField::Title,
            error: None,
        }
    }

    /// Form pre-populated from an existing entry. This caller-side copy is
    /// what makes unedited fields carry over on save.
    pub fn new_edit(item: &Item) -> Self {
        TodoForm {
            title: TextField::with_value(item.text.clone()),
            description: TextField::with_value(item.description.clone()),
            priority: item.priority,
            due_date: TextField::with_value(item.due_date.clone()),
            editing_key: Some(item.key.clone()),
            field: FormField::Title,
            error: None,
        }
    }

    pub fn fields(&self) -> ItemFields {
        ItemFields {
            text: self.title.value.clone(),
            description: self.description.value.clone(),
            priority: self.priority,
            due_date: self.due_date.value.clone(),
        }
    }

    /// The text field currently focused, if the focus is on one
    pub fn focused_text(&mut self) -> Option<&mut TextField> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::Priority => None,
        }
    }
}

/// Main application state
pub struct App {
    pub store: Store,
    pub config: Config,
    pub theme: Theme,
    pub tab: Tab,
    pub mode: Mode,
    pub should_quit: bool,
    pub show_help: bool,
    /// In-memory todo collection, loaded at startup, saved after every mutation
    pub todos: Vec<Item>,
    pub habits: Vec<Habit>,
    pub todo_cursor: usize,
    pub habit_cursor: usize,
    pub form: Option<TodoForm>,
    pub habit_input: TextField,
    pub pomodoro: Pomodoro,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(store: Store, config: Config) -> Self {
        let todos: Vec<Item> = store.load_or_default(TODOS_SLOT);
        let habits: Vec<Habit> = store.load_or_default(HABITS_SLOT);
        let theme = Theme::from_config(&config.ui);
        let pomodoro = Pomodoro::new(&config.pomodoro);

        App {
            store,
            config,
            theme,
            tab: Tab::Todos,
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            todos,
            habits,
            todo_cursor: 0,
            habit_cursor: 0,
            form: None,
            habit_input: TextField::default(),
            pomodoro,
            toast: None,
        }
    }

    // -----------------------------------------------------------------------
    // Cursor helpers
    // -----------------------------------------------------------------------

    pub fn selected_todo(&self) -> Option<&Item> {
        self.todos.get(self.todo_cursor)
    }

    pub fn selected_habit(&self) -> Option<&Habit> {
        self.habits.get(self.habit_cursor)
    }

    fn clamp_cursors(&mut self) {
        if self.todo_cursor >= self.todos.len() {
            self.todo_cursor = self.todos.len().saturating_sub(1);
        }
        if self.habit_cursor >= self.habits.len() {
            self.habit_cursor = self.habits.len().saturating_sub(1);
        }
    }

    // -----------------------------------------------------------------------
    // Todo mutations: pure ops + fire-and-forget save
    // -----------------------------------------------------------------------

    /// Open a blank add form
    pub fn open_add_form(&mut self) {
        self.form = Some(TodoForm::new_add());
        self.mode = Mode::Form;
    }

    /// Open the form pre-populated from the entry under the cursor
    pub fn open_edit_form(&mut self) {
        if let Some(item) = self.selected_todo() {
            self.form = Some(TodoForm::new_edit(item));
            self.mode = Mode::Form;
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.mode = Mode::Navigate;
    }

    /// Save the open form: upsert on edit, append on add. A validation
    /// failure stays inline in the form and mutates nothing.
    pub fn save_form(&mut self) {
        let Some(form) = &self.form else {
            return;
        };
        let fields = form.fields();
        let editing = form.editing_key.clone();

        let result = match &editing {
            Some(key) => item_ops::upsert_by_key(&self.todos, key, fields),
            None => item_ops::add(&self.todos, fields),
        };

        match result {
            Ok(next) => {
                self.todos = next;
                self.store.save_logged(TODOS_SLOT, &self.todos);
                if editing.is_some() {
                    self.show_toast(ToastKind::Info, "Todo updated successfully!");
                } else {
                    self.show_toast(ToastKind::Success, "Todo added successfully!");
                }
                self.close_form();
            }
            Err(e) => {
                if let Some(form) = &mut self.form {
                    form.error = Some(e.to_string());
                }
            }
        }
    }

    /// Delete the entry under the cursor
    pub fn delete_selected_todo(&mut self) {
        let Some(key) = self.selected_todo().map(|i| i.key.clone()) else {
            return;
        };
        self.todos = item_ops::remove_by_key(&self.todos, &key);
        self.store.save_logged(TODOS_SLOT, &self.todos);
        self.clamp_cursors();
        self.show_toast(ToastKind::Error, "Todo deleted!");
    }

    /// Toggle completion on the entry under the cursor
    pub fn toggle_selected_todo(&mut self) {
        let Some(key) = self.selected_todo().map(|i| i.key.clone()) else {
            return;
        };
        self.todos = item_ops::toggle_completed_by_key(&self.todos, &key);
        self.store.save_logged(TODOS_SLOT, &self.todos);
    }

    // -----------------------------------------------------------------------
    // Habit mutations
    // -----------------------------------------------------------------------

    pub fn open_habit_input(&mut self) {
        self.habit_input.clear();
        self.mode = Mode::HabitInput;
    }

    pub fn close_habit_input(&mut self) {
        self.habit_input.clear();
        self.mode = Mode::Navigate;
    }

    /// Submit the habit input. Blank input is rejected silently and the
    /// input stays open, matching the todo form's keep-open-on-error shape.
    pub fn submit_habit(&mut self) {
        match habit_ops::add_habit(&self.habits, &self.habit_input.value) {
            Ok(next) => {
                self.habits = next;
                self.store.save_logged(HABITS_SLOT, &self.habits);
                self.close_habit_input();
            }
            Err(_) => {
                // Blank habit: no toast, no mutation
            }
        }
    }

    pub fn toggle_selected_habit(&mut self) {
        let Some(id) = self.selected_habit().map(|h| h.id.clone()) else {
            return;
        };
        self.habits = habit_ops::toggle_habit(&self.habits, &id);
        self.store.save_logged(HABITS_SLOT, &self.habits);
    }

    pub fn delete_selected_habit(&mut self) {
        let Some(id) = self.selected_habit().map(|h| h.id.clone()) else {
            return;
        };
        self.habits = habit_ops::remove_habit(&self.habits, &id);
        self.store.save_logged(HABITS_SLOT, &self.habits);
        self.clamp_cursors();
    }

    // -----------------------------------------------------------------------
    // Toasts
    // -----------------------------------------------------------------------

    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast::new(kind, message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Count of pending (not completed) todos, shown in the tab bar
    pub fn pending_count(&self) -> usize {
        self.todos.iter().filter(|i| !i.completed).count()
    }
}

// ---------------------------------------------------------------------------
// UI state persistence
// ---------------------------------------------------------------------------

/// Restore tab and cursors from .state.json
pub fn restore_ui_state(app: &mut App) {
    use crate::io::state::read_ui_state;

    let Some(ui_state) = read_ui_state(app.store.dir()) else {
        return;
    };

    if let Some(tab) = Tab::from_str(&ui_state.tab) {
        app.tab = tab;
    }
    app.todo_cursor = ui_state.todo_cursor;
    app.habit_cursor = ui_state.habit_cursor;
    app.clamp_cursors();
}

/// Save tab and cursors to .state.json
pub fn save_ui_state(app: &App) {
    use crate::io::state::{UiState, write_ui_state};

    let ui_state = UiState {
        tab: app.tab.as_str().to_string(),
        todo_cursor: app.todo_cursor,
        habit_cursor: app.habit_cursor,
    };

    let _ = write_ui_state(app.store.dir(), &ui_state);
}

// ---------------------------------------------------------------------------
// Run loop
// ---------------------------------------------------------------------------

/// Run the TUI application
pub fn run(data_dir_flag: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir(data_dir_flag.map(std::path::Path::new));
    let store = Store::open(dir)?;
    let config = read_config_or_default(store.dir());

    let mut app = App::new(store, config);
    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Save UI state before exit
    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    let mut last_tick = Instant::now();

    loop {
        app.clear_expired_toast();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            // Debounced state save: every ~5 key presses
            save_counter += 1;
            if save_counter >= 5 {
                save_ui_state(app);
                save_counter = 0;
            }
        }

        // One-second pomodoro cadence, independent of input activity.
        // Whole elapsed seconds are consumed so ticks never drift or pile up.
        while last_tick.elapsed() >= Duration::from_secs(1) {
            last_tick += Duration::from_secs(1);
            app.pomodoro.tick();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        let store = Store::new(dir.path().to_path_buf());
        App::new(store, Config::default())
    }

    fn add_via_form(app: &mut App, title: &str) {
        app.open_add_form();
        let form = app.form.as_mut().unwrap();
        form.title = TextField::with_value(title.into());
        app.save_form();
    }

    #[test]
    fn form_save_appends_persists_and_closes() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        add_via_form(&mut app, "Buy milk");
        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.form.is_none());
        assert!(app.toast.is_some());

        // Collection reached disk
        let reloaded: Vec<Item> = app.store.load(TODOS_SLOT).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].text, "Buy milk");
    }

    #[test]
    fn form_save_with_empty_title_shows_inline_error() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.open_add_form();
        app.save_form();

        // Form stays open with the error; collection untouched
        assert_eq!(app.mode, Mode::Form);
        let form = app.form.as_ref().unwrap();
        assert_eq!(form.error.as_deref(), Some("Title is required."));
        assert!(app.todos.is_empty());
        let on_disk: Vec<Item> = app.store.load(TODOS_SLOT).unwrap();
        assert!(on_disk.is_empty());
    }

    #[test]
    fn edit_form_is_prepopulated_and_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        add_via_form(&mut app, "first");
        add_via_form(&mut app, "second");

        app.todo_cursor = 0;
        app.open_edit_form();
        {
            let form = app.form.as_mut().unwrap();
            assert_eq!(form.title.value, "first");
            form.title = TextField::with_value("first, renamed".into());
        }
        app.save_form();

        assert_eq!(app.todos.len(), 2);
        assert_eq!(app.todos[0].text, "first, renamed");
        assert_eq!(app.todos[1].text, "second");
    }

    #[test]
    fn delete_clamps_cursor_and_toasts() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        add_via_form(&mut app, "only");

        app.todo_cursor = 0;
        app.delete_selected_todo();
        assert!(app.todos.is_empty());
        assert_eq!(app.todo_cursor, 0);
        assert_eq!(app.toast.as_ref().unwrap().message, "Todo deleted!");
    }

    #[test]
    fn habit_submit_rejects_blank_and_keeps_input_open() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.open_habit_input();
        app.habit_input = TextField::with_value("   ".into());
        app.submit_habit();
        assert_eq!(app.mode, Mode::HabitInput);
        assert!(app.habits.is_empty());

        app.habit_input = TextField::with_value("stretch".into());
        app.submit_habit();
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.habits.len(), 1);
    }

    #[test]
    fn state_round_trip_restores_tab_and_cursors() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        add_via_form(&mut app, "a");
        add_via_form(&mut app, "b");
        app.tab = Tab::Habits;
        app.todo_cursor = 1;
        save_ui_state(&app);

        let mut fresh = test_app(&dir);
        restore_ui_state(&mut fresh);
        assert_eq!(fresh.tab, Tab::Habits);
        assert_eq!(fresh.todo_cursor, 1);
    }

    #[test]
    fn text_field_edits_at_char_boundaries() {
        let mut field = TextField::with_value("héllo".into());
        assert_eq!(field.cursor, 5);
        field.backspace();
        assert_eq!(field.value, "héll");
        field.left();
        field.left();
        field.insert('x');
        assert_eq!(field.value, "héxll");
    }
}
