use ratatui::style::Color;

use crate::model::config::UiConfig;
use crate::model::item::Priority;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1A, 0x02, 0x1A),
            text: Color::Rgb(0xE8, 0xC8, 0xE8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xC0, 0x26, 0xD3),
            dim: Color::Rgb(0x8A, 0x6A, 0x8A),
            red: Color::Rgb(0xFF, 0x20, 0x56),
            yellow: Color::Rgb(0xEA, 0xB3, 0x08),
            green: Color::Rgb(0x10, 0xB9, 0x81),
            cyan: Color::Rgb(0x00, 0xA6, 0xF4),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Get the color for an item priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.red,
            Priority::Medium => self.yellow,
            Priority::Low => self.green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("bogus_slot".into(), "#112233".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        // Unchanged defaults still present
        assert_eq!(theme.selection_bg, Color::Rgb(0x3D, 0x14, 0x38));
    }

    #[test]
    fn test_priority_colors() {
        let theme = Theme::default();
        assert_eq!(theme.priority_color(Priority::High), theme.red);
        assert_eq!(theme.priority_color(Priority::Medium), theme.yellow);
        assert_eq!(theme.priority_color(Priority::Low), theme.green);
    }
}
