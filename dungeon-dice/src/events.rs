//! Event handling for the Dungeon Dice TUI

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use dice_core::FaceSource;

use crate::app::App;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event<S: FaceSource>(app: &mut App<S>, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        // The plan is recomputed from the new frame area on the next draw
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event<S: FaceSource>(app: &mut App<S>, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match app.click(mouse.column, mouse.row) {
            Some(_) => EventResult::NeedsRedraw,
            None => EventResult::Continue,
        },
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event<S: FaceSource>(app: &mut App<S>, key: KeyEvent) -> EventResult {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,

        // Navigation
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_down();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_up();
            EventResult::NeedsRedraw
        }

        // Rolling
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.roll_selected();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            match app.roll_at(index) {
                Some(_) => EventResult::NeedsRedraw,
                None => EventResult::Continue,
            }
        }

        _ => EventResult::Continue,
    }
}
