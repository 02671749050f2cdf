//! Core N-in-a-row game logic: gravity board, player identities, the game
//! state machine, and the turn loop that drives it from a column source.

mod board;
mod player;
pub mod runner;
mod state;

pub use board::{
    Board, BoardConfig, Token, DEFAULT_HEIGHT, DEFAULT_RUN_LENGTH, DEFAULT_WIDTH,
};
pub use player::Player;
pub use runner::{GameRunner, RunResult};
pub use state::{GameOutcome, GameState, GameStatus};
