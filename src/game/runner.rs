use std::io;

use tracing::{debug, info, warn};

use super::{GameOutcome, GameState};
use crate::error::MoveError;
use crate::input::{Choice, ColumnSource};

/// How a call to [`GameRunner::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunResult {
    Finished(GameOutcome),
    /// The column source quit before the game was decided.
    Aborted,
}

/// Turn loop: alternates players, asks the source for columns and retries
/// rejected moves until someone wins or the board fills up.
pub struct GameRunner {
    state: GameState,
}

impl GameRunner {
    pub fn new(state: GameState) -> Self {
        GameRunner { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Play until the game is decided or the source quits.
    pub fn run(&mut self, source: &mut dyn ColumnSource) -> io::Result<RunResult> {
        let config = self.state.board().config();
        info!(
            height = config.height,
            width = config.width,
            run_length = config.run_length,
            "game started"
        );

        let limit = self.state.move_limit();
        for _ in self.state.moves_played()..limit {
            if self.state.is_terminal() {
                break;
            }
            if !self.play_turn(source)? {
                info!(moves = self.state.moves_played(), "game aborted");
                return Ok(RunResult::Aborted);
            }
        }

        // A full board is always marked as a draw by the state.
        let outcome = self.state.outcome().unwrap_or(GameOutcome::Draw);
        info!(?outcome, moves = self.state.moves_played(), "game finished");
        source.finished(&self.state)?;
        Ok(RunResult::Finished(outcome))
    }

    /// Ask for columns until one is accepted. Returns false if the source quit.
    fn play_turn(&mut self, source: &mut dyn ColumnSource) -> io::Result<bool> {
        let player = self.state.current_player();
        loop {
            let column = match source.next_column(&self.state)? {
                Choice::Column(column) => column,
                Choice::Quit => return Ok(false),
            };

            match self.state.apply_move(column) {
                Ok(row) => {
                    debug!(?player, column, row, "token placed");
                    return Ok(true);
                }
                Err(MoveError::Board(err)) => {
                    warn!(?player, column, error = %err, "move rejected");
                    source.rejected(column, &err);
                }
                Err(MoveError::GameOver) => return Ok(true),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::game::{Board, Player, Token};
    use crate::input::ScriptedInput;

    #[test]
    fn test_runner_vertical_win() {
        let mut runner = GameRunner::new(GameState::standard());
        // A stacks column 3, B stacks column 4
        let mut input = ScriptedInput::new([3, 4, 3, 4, 3, 4, 3, 4]);

        let result = runner.run(&mut input).unwrap();

        assert_eq!(result, RunResult::Finished(GameOutcome::Winner(Player::A)));
        assert_eq!(input.remaining(), 1);
        assert!(input.saw_finish());
        assert!(runner.state().board().is_winner(Token::PlayerA));
        assert!(!runner.state().board().is_winner(Token::PlayerB));
    }

    #[test]
    fn test_runner_retries_rejected_moves() {
        let board = Board::with_dimensions(2, 2, 2).unwrap();
        let mut runner = GameRunner::new(GameState::new(board));
        // A:0, B:0, A tries full column 0 and column 5, then plays 1 and wins
        // on the bottom row.
        let mut input = ScriptedInput::new([0, 0, 0, 5, 1]);

        let result = runner.run(&mut input).unwrap();

        assert_eq!(result, RunResult::Finished(GameOutcome::Winner(Player::A)));
        assert_eq!(
            input.rejections(),
            &[
                (0, BoardError::ColumnFull { column: 0 }),
                (5, BoardError::InvalidColumn { column: 5, width: 2 }),
            ]
        );
        assert_eq!(runner.state().moves_played(), 3);
    }

    #[test]
    fn test_runner_abort() {
        let mut runner = GameRunner::new(GameState::standard());
        let mut input = ScriptedInput::new([0, 1]);

        assert_eq!(runner.run(&mut input).unwrap(), RunResult::Aborted);
        assert!(!input.saw_finish());
        assert_eq!(runner.state().moves_played(), 2);
        assert_eq!(runner.state().current_player(), Player::A);
    }

    #[test]
    fn test_runner_draw() {
        let board = Board::with_dimensions(3, 3, 3).unwrap();
        let mut runner = GameRunner::new(GameState::new(board));
        let mut input = ScriptedInput::new([1, 0, 2, 1, 0, 2, 0, 1, 2]);

        let result = runner.run(&mut input).unwrap();

        assert_eq!(result, RunResult::Finished(GameOutcome::Draw));
        assert!(runner.into_state().board().is_full());
    }

    #[test]
    fn test_runner_on_finished_game() {
        let mut state = GameState::new(Board::with_dimensions(1, 2, 2).unwrap());
        state.apply_move(0).unwrap();
        state.apply_move(1).unwrap();
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));

        let mut runner = GameRunner::new(state);
        let mut input = ScriptedInput::new([0]);
        assert_eq!(
            runner.run(&mut input).unwrap(),
            RunResult::Finished(GameOutcome::Draw)
        );
        assert_eq!(input.remaining(), 1);
    }
}
