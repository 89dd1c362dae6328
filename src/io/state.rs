use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI state (written to .state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Which tab is showing ("todos", "habits", "pomodoro")
    pub tab: String,
    /// Cursor position in the todos list
    #[serde(default)]
    pub todo_cursor: usize,
    /// Cursor position in the habits list
    #[serde(default)]
    pub habit_cursor: usize,
}

/// Read .state.json from the data directory
pub fn read_ui_state(dir: &Path) -> Option<UiState> {
    let path = dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the data directory
pub fn write_ui_state(dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
