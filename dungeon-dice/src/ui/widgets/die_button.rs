//! A single die button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

use dice_core::Die;

use crate::ui::theme::DiceTheme;

/// Widget for one tappable die
pub struct DieButtonWidget<'a> {
    die: Die,
    selected: bool,
    theme: &'a DiceTheme,
}

impl<'a> DieButtonWidget<'a> {
    pub fn new(die: Die, theme: &'a DiceTheme) -> Self {
        Self {
            die,
            selected: false,
            theme,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for DieButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let style = self.theme.button_style(self.selected);
        let block = Block::default().borders(Borders::ALL).border_style(style);

        Paragraph::new(self.die.label())
            .style(style)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
