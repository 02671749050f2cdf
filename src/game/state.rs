use super::{Board, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Start a game on the given (normally empty) board. Player A moves first.
    pub fn new(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::A,
            status: GameStatus::NotStarted,
        }
    }

    /// Standard 7x6, four-in-a-row game
    pub fn standard() -> Self {
        Self::new(Board::standard())
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::Won(player) => Some(GameOutcome::Winner(player)),
            GameStatus::Draw => Some(GameOutcome::Draw),
            GameStatus::NotStarted | GameStatus::InProgress => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn moves_played(&self) -> usize {
        self.board.placed()
    }

    /// Upper bound on the number of moves in one game.
    pub fn move_limit(&self) -> usize {
        self.board.config().cell_count()
    }

    /// Play the current player's token in `column`. Returns the landing row.
    ///
    /// A rejected move leaves the state untouched and the same player to move.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self.board.insert(self.current_player.token(), column)?;

        self.status = if self.board.wins_at(row, column) {
            GameStatus::Won(self.current_player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        if !self.is_terminal() {
            self.current_player = self.current_player.other();
        }

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::game::Token;

    #[test]
    fn test_initial_state() {
        let state = GameState::standard();
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(state.status(), GameStatus::NotStarted);
        assert!(!state.is_terminal());
        assert_eq!(state.move_limit(), 42);
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::standard();
        let row = state.apply_move(3).unwrap();

        assert_eq!(row, 5);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.board().get(5, 3), Token::PlayerA);
        assert_eq!(state.moves_played(), 1);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut state = GameState::new(Board::with_dimensions(2, 3, 2).unwrap());
        state.apply_move(0).unwrap();
        state.apply_move(0).unwrap();

        assert_eq!(
            state.apply_move(0),
            Err(MoveError::Board(BoardError::ColumnFull { column: 0 }))
        );
        assert_eq!(
            state.apply_move(3),
            Err(MoveError::Board(BoardError::InvalidColumn { column: 3, width: 3 }))
        );
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(state.moves_played(), 2);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::standard();

        // A wins with a horizontal line, B stacks on top
        for col in 0..4 {
            state.apply_move(col).unwrap(); // A
            if col < 3 {
                state.apply_move(col).unwrap(); // B
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::A)));
        assert_eq!(state.status(), GameStatus::Won(Player::A));
        // Winner stays the current player
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        //   A B A
        //   A B B
        //   B A A
        let mut state = GameState::new(Board::with_dimensions(3, 3, 3).unwrap());
        for col in [1, 0, 2, 1, 0, 2, 0, 1] {
            state.apply_move(col).unwrap();
            assert!(!state.is_terminal());
        }
        state.apply_move(2).unwrap();

        assert!(state.board().is_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert!(!state.board().is_winner(Token::PlayerA));
        assert!(!state.board().is_winner(Token::PlayerB));
    }
}
