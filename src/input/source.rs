use std::io;

use crate::error::BoardError;
use crate::game::GameState;

/// What a column source wants to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Column(usize),
    Quit,
}

/// Supplies column choices for whichever player is to move.
///
/// Implementations may block (keyboard), replay a script (tests), or bridge
/// to any other event source.
pub trait ColumnSource {
    /// Ask for the current player's column.
    fn next_column(&mut self, state: &GameState) -> io::Result<Choice>;

    /// The last choice was rejected; the same player will be asked again.
    fn rejected(&mut self, _column: usize, _error: &BoardError) {}

    /// Called once when the game reaches a win or a draw.
    fn finished(&mut self, _state: &GameState) -> io::Result<()> {
        Ok(())
    }
}
