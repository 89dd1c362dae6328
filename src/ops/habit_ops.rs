use crate::model::habit::Habit;
use crate::ops::item_ops::{ValidationError, generate_key};

/// Append a new habit. Blank input (after trimming) is a `ValidationError`;
/// the habit text itself is stored as typed.
pub fn add_habit(habits: &[Habit], text: &str) -> Result<Vec<Habit>, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let mut next = habits.to_vec();
    next.push(Habit::new(generate_key(), text.to_string()));
    Ok(next)
}

/// Flip `completed` on the habit with `id`. No-op when absent.
pub fn toggle_habit(habits: &[Habit], id: &str) -> Vec<Habit> {
    habits
        .iter()
        .map(|habit| {
            if habit.id == id {
                let mut toggled = habit.clone();
                toggled.completed = !toggled.completed;
                toggled
            } else {
                habit.clone()
            }
        })
        .collect()
}

/// Remove the habit with `id`. No-op when absent.
pub fn remove_habit(habits: &[Habit], id: &str) -> Vec<Habit> {
    habits
        .iter()
        .filter(|habit| habit.id != id)
        .cloned()
        .collect()
}
