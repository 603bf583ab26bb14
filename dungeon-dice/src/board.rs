//! Dice board state shared by the TUI and headless front ends.
//!
//! The board owns the two pieces of mutable presentation state: the current
//! layout plan (replaced when the width changes) and the roll display
//! (replaced when a die is rolled).

use dice_core::{all_dice, Die, FaceSource, GridMetrics, LayoutPlan, RollDisplay, RollResult};

pub struct Board<S> {
    metrics: GridMetrics,
    width: f64,
    plan: LayoutPlan,
    display: RollDisplay<S>,
}

impl<S: FaceSource> Board<S> {
    pub fn new(metrics: GridMetrics, width: f64, source: S) -> Self {
        Self {
            metrics,
            width,
            plan: metrics.plan(width, all_dice().len()),
            display: RollDisplay::with_source(source),
        }
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn plan(&self) -> &LayoutPlan {
        &self.plan
    }

    pub fn dice(&self) -> &'static [Die] {
        all_dice()
    }

    /// Grid dice and trailing-row dice, in catalog order.
    pub fn split(&self) -> (&'static [Die], &'static [Die]) {
        self.plan.split(all_dice())
    }

    /// Recompute the plan for a new width. Returns true if the plan changed.
    pub fn set_width(&mut self, width: f64) -> bool {
        self.width = width;
        let plan = self.metrics.plan(width, all_dice().len());
        let changed = plan != self.plan;
        if changed {
            tracing::debug!(
                width,
                items_per_row = plan.items_per_row,
                overflow_count = plan.overflow_count,
                "layout changed"
            );
        }
        self.plan = plan;
        changed
    }

    /// Roll the die at `index` in catalog order.
    pub fn roll_index(&mut self, index: usize) -> Option<RollResult> {
        let die = *all_dice().get(index)?;
        Some(self.roll(die))
    }

    pub fn roll(&mut self, die: Die) -> RollResult {
        self.display.roll(die)
    }

    pub fn message(&self) -> &str {
        self.display.message()
    }
}
