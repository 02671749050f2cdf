use super::board::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Convert player to its board token
    pub fn token(self) -> Token {
        match self {
            Player::A => Token::PlayerA,
            Player::B => Token::PlayerB,
        }
    }

    /// Default label, used when no player name is configured
    pub fn label(self) -> &'static str {
        match self {
            Player::A => "Player 1",
            Player::B => "Player 2",
        }
    }
}
