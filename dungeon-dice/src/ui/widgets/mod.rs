//! TUI widgets for Dungeon Dice

pub mod die_button;
pub mod result_message;

pub use die_button::DieButtonWidget;
pub use result_message::ResultMessageWidget;
