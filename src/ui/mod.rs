//! Terminal UI: board rendering with a column selector, and a keyboard
//! column source for playing hot-seat games.

pub mod board_widget;
mod game_view;
mod terminal_input;

pub use game_view::render;
pub use terminal_input::{ColumnSelector, TerminalInput};
