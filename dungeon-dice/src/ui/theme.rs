//! Color theme and styling for the Dungeon Dice TUI

use ratatui::style::{Color, Modifier, Style};

/// UI color theme
#[derive(Debug, Clone)]
pub struct DiceTheme {
    pub foreground: Color,
    pub title: Color,
    pub border: Color,

    // Buttons
    pub button_fill: Color,
    pub button_text: Color,
    pub button_selected: Color,

    // Hotkey bar
    pub hotkey: Color,
    pub hint_text: Color,
}

impl Default for DiceTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            title: Color::Red,
            border: Color::DarkGray,

            button_fill: Color::Red,
            button_text: Color::White,
            button_selected: Color::LightRed,

            hotkey: Color::Yellow,
            hint_text: Color::DarkGray,
        }
    }
}

impl DiceTheme {
    /// Get style for the "Dungeon Dice" title
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the result message
    pub fn message_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Get style for a die button
    pub fn button_style(&self, selected: bool) -> Style {
        let fill = if selected {
            self.button_selected
        } else {
            self.button_fill
        };

        let style = Style::default().fg(self.button_text).bg(fill);
        if selected {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Get border style
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn hotkey_style(&self) -> Style {
        Style::default().fg(self.hotkey).add_modifier(Modifier::BOLD)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint_text)
    }
}
