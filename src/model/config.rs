use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pomodoro: PomodoroConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroConfig {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u16,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u16,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        PomodoroConfig {
            work_minutes: 25,
            break_minutes: 5,
        }
    }
}

fn default_work_minutes() -> u16 {
    25
}

fn default_break_minutes() -> u16 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides for the theme, keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
