use serde::Serialize;

use crate::model::habit::Habit;
use crate::model::item::Item;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoListJson<'a> {
    pub todos: &'a [Item],
}

#[derive(Serialize)]
pub struct HabitListJson<'a> {
    pub habits: &'a [Habit],
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// One todo as a table row: completion mark, key, priority, due, title
pub fn format_todo_line(item: &Item) -> String {
    let mark = if item.completed { "x" } else { " " };
    let mut line = format!(
        "[{}] {}  {:<6}  {:<11}  {}",
        mark,
        item.key,
        item.priority.label(),
        item.due_label(),
        item.text
    );
    if !item.description.is_empty() {
        line.push_str(&format!("\n      {}", item.description));
    }
    line
}

/// One habit as a table row: completion glyph, id, text
pub fn format_habit_line(habit: &Habit) -> String {
    let mark = if habit.completed { "✓" } else { "○" };
    format!("{} {}  {}", mark, habit.id, habit.text)
}
