//! Render orchestration for the Dungeon Dice TUI

use dice_core::FaceSource;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, DiceLayout};
use crate::ui::widgets::{DieButtonWidget, ResultMessageWidget};

/// Widest the result panel grows
const MESSAGE_MAX_WIDTH: u16 = 60;

/// Main render function
pub fn render<S: FaceSource>(frame: &mut Frame, app: &App<S>) {
    let layout = app.layout();

    render_title(frame, app, layout.title_area);
    render_message(frame, app, layout.message_area);
    render_buttons(frame, app, &layout);
    render_hotkey_bar(frame, app, layout.hotkey_bar);
}

fn render_title<S: FaceSource>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Dungeon Dice",
        app.theme.title_style(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_message<S: FaceSource>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let panel = centered_rect_fixed(MESSAGE_MAX_WIDTH.min(area.width), area.height, area);
    frame.render_widget(ResultMessageWidget::new(app.message(), &app.theme), panel);
}

fn render_buttons<S: FaceSource>(frame: &mut Frame, app: &App<S>, layout: &DiceLayout) {
    for (index, (die, rect)) in app.board.dice().iter().zip(&layout.buttons).enumerate() {
        let button = DieButtonWidget::new(*die, &app.theme).selected(index == app.selected);
        frame.render_widget(button, *rect);
    }
}

fn render_hotkey_bar<S: FaceSource>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let hotkeys = [
        ("←→↑↓", "select"),
        ("Enter", "roll"),
        ("1-7", "quick roll"),
        ("q", "quit"),
    ];

    let mut spans = Vec::new();
    for (key, action) in hotkeys {
        spans.push(Span::styled(key, app.theme.hotkey_style()));
        spans.push(Span::styled(format!(" {action}  "), app.theme.hint_style()));
    }

    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}
