//! Result message panel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::DiceTheme;

/// Shows the most recent roll, or a prompt before the first one
pub struct ResultMessageWidget<'a> {
    message: &'a str,
    theme: &'a DiceTheme,
}

impl<'a> ResultMessageWidget<'a> {
    pub fn new(message: &'a str, theme: &'a DiceTheme) -> Self {
        Self { message, theme }
    }
}

impl Widget for ResultMessageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.message.is_empty() {
            Line::from(Span::styled("Pick a die to roll", self.theme.hint_style()))
        } else {
            Line::from(Span::styled(
                self.message,
                self.theme.message_style().add_modifier(Modifier::BOLD),
            ))
        };

        // Vertically center a single line
        let top_pad = inner.height.saturating_sub(1) / 2;
        let mut lines = vec![Line::from(""); top_pad as usize];
        lines.push(line);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
