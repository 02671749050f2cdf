use std::path::PathBuf;

/// Errors produced by the board engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cannot insert the empty token")]
    EmptyToken,

    #[error(
        "invalid board dimensions {height}x{width} with run length {run_length} \
         (need height >= 1, width >= 1, run length >= 2)"
    )]
    InvalidDimension {
        height: usize,
        width: usize,
        run_length: usize,
    },
}

/// Errors that can occur when applying a move to a game in progress.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidColumn { column: 9, width: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(BoardError::ColumnFull { column: 2 }.to_string(), "column 2 is full");
    }

    #[test]
    fn test_move_error_wraps_board_error() {
        let err: MoveError = BoardError::ColumnFull { column: 0 }.into();
        assert_eq!(err, MoveError::Board(BoardError::ColumnFull { column: 0 }));
        assert_eq!(err.to_string(), "column 0 is full");
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be >= 1"
        );
    }
}
