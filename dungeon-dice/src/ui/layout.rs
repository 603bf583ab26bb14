//! Layout calculations for the Dungeon Dice TUI

use dice_core::{GridMetrics, LayoutPlan};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one button row, in cells.
pub const BUTTON_HEIGHT: u16 = 3;

/// Height of the result message panel.
const MESSAGE_HEIGHT: u16 = 5;

/// Calculate the main layout areas
#[derive(Debug, Clone)]
pub struct DiceLayout {
    pub title_area: Rect,
    pub message_area: Rect,
    /// One rectangle per die, in catalog order. Clipped to the screen;
    /// buttons entirely off screen get an empty rectangle.
    pub buttons: Vec<Rect>,
    pub hotkey_bar: Rect,
}

impl DiceLayout {
    /// Calculate layout based on terminal size and the current plan
    pub fn calculate(area: Rect, plan: &LayoutPlan, metrics: &GridMetrics) -> Self {
        let grid_rows = plan.full_rows() as u16;
        let trailing_rows = u16::from(plan.overflow_count > 0);
        let buttons_height = (grid_rows + trailing_rows) * BUTTON_HEIGHT;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),              // Title
                Constraint::Min(0),                 // Spacer
                Constraint::Length(MESSAGE_HEIGHT), // Result message
                Constraint::Min(0),                 // Spacer
                Constraint::Length(buttons_height), // Grid + trailing row
                Constraint::Length(1),              // Hotkey bar
            ])
            .split(area);

        Self {
            title_area: chunks[0],
            message_area: chunks[2],
            buttons: button_rects(chunks[4], plan, metrics),
            hotkey_bar: chunks[5],
        }
    }

    /// Index of the button under a screen position.
    pub fn button_at(&self, column: u16, row: u16) -> Option<usize> {
        self.buttons.iter().position(|rect| {
            !rect.is_empty()
                && column >= rect.x
                && column < rect.right()
                && row >= rect.y
                && row < rect.bottom()
        })
    }
}

/// Place every button: full grid rows first, then the centered trailing row.
pub fn button_rects(area: Rect, plan: &LayoutPlan, metrics: &GridMetrics) -> Vec<Rect> {
    let width = cells(metrics.item_width()).max(1);
    let spacing = cells(metrics.item_spacing());

    let mut rects = Vec::with_capacity(plan.item_count);
    let mut y = area.y;

    let grid_count = plan.grid_count();
    if plan.items_per_row > 0 {
        for start in (0..grid_count).step_by(plan.items_per_row) {
            let in_row = plan.items_per_row.min(grid_count - start);
            push_row(&mut rects, area, y, plan.items_per_row, in_row, width, spacing);
            y = y.saturating_add(BUTTON_HEIGHT);
        }
    }

    let trailing = plan.item_count - grid_count;
    if trailing > 0 {
        push_row(&mut rects, area, y, trailing, trailing, width, spacing);
    }

    rects
}

/// Lay out `count` buttons in one row sized for `slots`, centered in `area`.
fn push_row(
    rects: &mut Vec<Rect>,
    area: Rect,
    y: u16,
    slots: usize,
    count: usize,
    width: u16,
    spacing: u16,
) {
    let slots = slots as u16;
    let row_width = slots
        .saturating_mul(width)
        .saturating_add(slots.saturating_sub(1).saturating_mul(spacing));
    let x0 = area.x + area.width.saturating_sub(row_width) / 2;

    for i in 0..count as u16 {
        let x = x0.saturating_add(i.saturating_mul(width.saturating_add(spacing)));
        let rect = Rect::new(x, y, width, BUTTON_HEIGHT);
        if rect.intersects(area) {
            rects.push(rect.intersection(area));
        } else {
            rects.push(Rect::default());
        }
    }
}

fn cells(value: f64) -> u16 {
    value.round().clamp(0.0, u16::MAX as f64) as u16
}

/// Calculate fixed-size centered area
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
