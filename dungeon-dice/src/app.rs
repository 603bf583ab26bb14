//! Main application state and logic

use dice_core::{FaceSource, RollResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;

use crate::board::Board;
use crate::config::Config;
use crate::ui::layout::DiceLayout;
use crate::ui::theme::DiceTheme;

/// Main application state
pub struct App<S = StdRng> {
    pub board: Board<S>,
    pub theme: DiceTheme,

    /// Selected button, as an index into the catalog
    pub selected: usize,
    /// Screen area of the last frame
    area: Rect,
}

impl App<StdRng> {
    /// Create the application from configuration
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        // Width is unknown until the first frame is drawn.
        Self::with_board(Board::new(config.metrics, 0.0, rng))
    }
}

impl<S: FaceSource> App<S> {
    pub fn with_board(board: Board<S>) -> Self {
        Self {
            board,
            theme: DiceTheme::default(),
            selected: 0,
            area: Rect::default(),
        }
    }

    /// Track the frame area, replanning the grid when the width changes
    pub fn resize(&mut self, area: Rect) {
        if area == self.area {
            return;
        }
        let width_changed = area.width != self.area.width;
        self.area = area;
        if width_changed {
            self.board.set_width(f64::from(area.width));
        }
    }

    /// Button positions for the current frame
    pub fn layout(&self) -> DiceLayout {
        DiceLayout::calculate(self.area, self.board.plan(), self.board.metrics())
    }

    pub fn message(&self) -> &str {
        self.board.message()
    }

    fn dice_count(&self) -> usize {
        self.board.dice().len()
    }

    /// Step between rows: the row width, or one when nothing fits a row
    fn row_step(&self) -> usize {
        self.board.plan().items_per_row.max(1)
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.dice_count();
    }

    pub fn select_prev(&mut self) {
        let count = self.dice_count();
        self.selected = (self.selected + count - 1) % count;
    }

    pub fn select_down(&mut self) {
        let target = self.selected + self.row_step();
        self.selected = target.min(self.dice_count() - 1);
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.row_step());
    }

    /// Roll the selected die
    pub fn roll_selected(&mut self) -> Option<RollResult> {
        self.roll_at(self.selected)
    }

    /// Roll the die at a catalog position and select it
    pub fn roll_at(&mut self, index: usize) -> Option<RollResult> {
        let result = self.board.roll_index(index)?;
        self.selected = index;
        tracing::info!(faces = result.die().faces(), value = result.value(), "roll");
        Some(result)
    }

    /// Roll whichever button is under a screen position
    pub fn click(&mut self, column: u16, row: u16) -> Option<RollResult> {
        let index = self.layout().button_at(column, row)?;
        self.roll_at(index)
    }
}
