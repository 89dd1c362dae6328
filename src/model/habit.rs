use serde::{Deserialize, Serialize};

/// A habit checklist entry.
///
/// Habits persist under their own slot (`habits.json`) with a flat
/// `{id, text, completed}` shape, independent of todos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique id, assigned at creation and never changed
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Habit {
    pub fn new(id: String, text: String) -> Self {
        Habit {
            id,
            text,
            completed: false,
        }
    }
}
