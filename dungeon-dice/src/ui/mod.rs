//! UI module for the Dungeon Dice TUI

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;
