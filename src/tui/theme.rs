use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    /// Header bar and input border
    pub accent: Color,
    /// Background of the row under the cursor
    pub highlight: Color,
    /// Empty checkbox marker
    pub marker: Color,
    /// Done marker and done titles
    pub done: Color,
    /// Inline row controls
    pub control: Color,
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1F, 0x1F, 0x24),
            text: Color::Rgb(0xE1, 0xE1, 0xE6),
            dim: Color::Rgb(0x8A, 0x8A, 0x94),
            accent: Color::Rgb(0x82, 0x57, 0xE5),
            highlight: Color::Rgb(0x32, 0x2C, 0x45),
            marker: Color::Rgb(0xB2, 0xB2, 0xB2),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            control: Color::Rgb(0x99, 0x99, 0x99),
            red: Color::Rgb(0xE8, 0x3F, 0x5B),
        }
    }
}

/// Parse a hex color string like "#1DB863" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults.
    /// Unknown slot names and malformed colors are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("event=bad_color slot={} value={}", key, value);
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "dim" => theme.dim = color,
                "accent" => theme.accent = color,
                "highlight" => theme.highlight = color,
                "marker" => theme.marker = color,
                "done" => theme.done = color,
                "control" => theme.control = color,
                "red" => theme.red = color,
                _ => log::warn!("event=unknown_color_slot slot={}", key),
            }
        }
        theme
    }

    /// Title color for a task
    pub fn title_color(&self, done: bool) -> Color {
        if done { self.done } else { self.text }
    }
}
