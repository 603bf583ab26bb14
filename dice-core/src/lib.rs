//! Dice engine for Dungeon Dice.
//!
//! This crate provides:
//! - The fixed catalog of seven polyhedral dice and uniform rolling
//! - The responsive grid planner that splits the dice buttons into full rows
//!   and a trailing, centered overflow row
//! - `RollDisplay`, the current result message
//!
//! # Quick Start
//!
//! ```
//! use dice_core::{all_dice, GridMetrics, RollDisplay};
//!
//! let plan = GridMetrics::default().plan(430.0, all_dice().len());
//! let (grid, trailing) = plan.split(all_dice());
//! assert_eq!((grid.len(), trailing.len()), (6, 1));
//!
//! let mut display = RollDisplay::new();
//! display.roll(trailing[0]);
//! assert!(display.message().starts_with("You rolled a "));
//! ```

pub mod dice;
pub mod display;
pub mod layout;
pub mod testing;

// Primary public API
pub use dice::{all_dice, find, format_result, DiceError, Die, FaceSource, RollResult};
pub use display::RollDisplay;
pub use layout::{plan_layout, GridMetrics, LayoutError, LayoutPlan};
pub use testing::ScriptedFaces;
