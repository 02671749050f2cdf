use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_RUN_LENGTH: usize = 4;

/// Value held by a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Token {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Token {
    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }

    /// Plain-text glyph used by `Display` and log output.
    pub fn symbol(self) -> char {
        match self {
            Token::Empty => '○',
            Token::PlayerA => '●',
            Token::PlayerB => '◉',
        }
    }
}

/// Board dimensions and the run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    pub run_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            run_length: DEFAULT_RUN_LENGTH,
        }
    }
}

impl BoardConfig {
    pub fn new(height: usize, width: usize, run_length: usize) -> Self {
        BoardConfig {
            height,
            width,
            run_length,
        }
    }

    /// Check that a board can be built with these dimensions: both sides
    /// positive, `height * width` addressable, `run_length >= 2`. Winnability
    /// (`run_length <= max(height, width)`) is not required here.
    pub fn validate(&self) -> Result<(), BoardError> {
        let too_large = self.height.checked_mul(self.width).is_none();
        if self.height < 1 || self.width < 1 || self.run_length < 2 || too_large {
            return Err(BoardError::InvalidDimension {
                height: self.height,
                width: self.width,
                run_length: self.run_length,
            });
        }
        Ok(())
    }

    /// Whether a straight line of `run_length` cells fits on the board.
    pub fn is_winnable(&self) -> bool {
        self.run_length <= self.height.max(self.width)
    }

    /// Saturates for dimensions that `validate` rejects.
    pub fn cell_count(&self) -> usize {
        self.height.checked_mul(self.width).unwrap_or(usize::MAX)
    }
}

/// One of the four sets of straight lines checked for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineFamily {
    Horizontal,
    Vertical,
    /// `\` lines, stepping `(row + 1, col + 1)`.
    DescendingDiagonal,
    /// `/` lines, stepping `(row - 1, col + 1)`.
    AscendingDiagonal,
}

impl LineFamily {
    const ALL: [LineFamily; 4] = [
        LineFamily::Horizontal,
        LineFamily::Vertical,
        LineFamily::DescendingDiagonal,
        LineFamily::AscendingDiagonal,
    ];

    /// (row delta, column delta) between consecutive cells of a line.
    fn step(self) -> (isize, isize) {
        match self {
            LineFamily::Horizontal => (0, 1),
            LineFamily::Vertical => (1, 0),
            LineFamily::DescendingDiagonal => (1, 1),
            LineFamily::AscendingDiagonal => (-1, 1),
        }
    }
}

/// A gravity board of `height` rows by `width` columns.
///
/// Row 0 is the visual top; tokens settle towards row `height - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<Token>,
    placed: usize,
}

impl Board {
    /// Create an empty board
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Board {
            config,
            cells: vec![Token::Empty; config.cell_count()],
            placed: 0,
        })
    }

    pub fn with_dimensions(
        height: usize,
        width: usize,
        run_length: usize,
    ) -> Result<Self, BoardError> {
        Self::new(BoardConfig::new(height, width, run_length))
    }

    /// The standard 7x6 connect-four board.
    pub fn standard() -> Self {
        Board {
            config: BoardConfig::default(),
            cells: vec![Token::Empty; DEFAULT_HEIGHT * DEFAULT_WIDTH],
            placed: 0,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn run_length(&self) -> usize {
        self.config.run_length
    }

    /// Number of tokens placed so far
    pub fn placed(&self) -> usize {
        self.placed
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.config.width + col
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.config.height
            && (col as usize) < self.config.width
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is outside the board; use [`Board::cell`] for a
    /// checked lookup.
    pub fn get(&self, row: usize, col: usize) -> Token {
        assert!(
            row < self.config.height && col < self.config.width,
            "cell ({row}, {col}) outside {}x{} board",
            self.config.height,
            self.config.width
        );
        self.cells[self.index(row, col)]
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Token> {
        if row < self.config.height && col < self.config.width {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Row-major read-only view of every cell.
    pub fn cells(&self) -> &[Token] {
        &self.cells
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Token]> {
        self.cells.chunks(self.config.width)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.config.width {
            return true;
        }
        !self.cells[self.index(0, col)].is_empty()
    }

    /// Columns that can still take a token.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.config.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn insert(&mut self, token: Token, col: usize) -> Result<usize, BoardError> {
        if col >= self.config.width {
            return Err(BoardError::InvalidColumn {
                column: col,
                width: self.config.width,
            });
        }
        if token.is_empty() {
            return Err(BoardError::EmptyToken);
        }

        // Find the lowest empty row in this column
        for row in (0..self.config.height).rev() {
            let idx = self.index(row, col);
            if self.cells[idx].is_empty() {
                self.cells[idx] = token;
                self.placed += 1;
                return Ok(row);
            }
        }

        Err(BoardError::ColumnFull { column: col })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.placed == self.config.cell_count()
    }

    /// Scan every line of every family for `run_length` consecutive `token`s.
    ///
    /// `Token::Empty` is searched like any other value, so an empty board
    /// with a long enough line reports a "win" for `Empty`.
    pub fn is_winner(&self, token: Token) -> bool {
        LineFamily::ALL.iter().any(|&family| {
            self.line_starts(family)
                .into_iter()
                .any(|start| self.has_run(start, family.step(), token))
        })
    }

    /// Check only the lines passing through (row, col), e.g. after the last
    /// move landed there. Always false for an empty or out-of-range cell.
    pub fn wins_at(&self, row: usize, col: usize) -> bool {
        let token = match self.cell(row, col) {
            Some(token) if !token.is_empty() => token,
            _ => return false,
        };

        LineFamily::ALL.iter().any(|&family| {
            let (dr, dc) = family.step();
            let count = 1
                + self.count_from(row, col, (dr, dc), token)
                + self.count_from(row, col, (-dr, -dc), token);
            count >= self.config.run_length
        })
    }

    /// First cell of every maximal line in a family.
    fn line_starts(&self, family: LineFamily) -> Vec<(usize, usize)> {
        let height = self.config.height;
        let width = self.config.width;
        let left_column = (0..height).map(|row| (row, 0));

        match family {
            LineFamily::Horizontal => left_column.collect(),
            LineFamily::Vertical => (0..width).map(|col| (0, col)).collect(),
            LineFamily::DescendingDiagonal => left_column
                .chain((1..width).map(|col| (0, col)))
                .collect(),
            LineFamily::AscendingDiagonal => left_column
                .chain((1..width).map(|col| (height - 1, col)))
                .collect(),
        }
    }

    /// Walk a line from `start` and report whether it holds a long enough run.
    fn has_run(&self, start: (usize, usize), (dr, dc): (isize, isize), token: Token) -> bool {
        let mut run = 0;
        let mut r = start.0 as isize;
        let mut c = start.1 as isize;

        while self.in_bounds(r, c) {
            if self.cells[self.index(r as usize, c as usize)] == token {
                run += 1;
                if run >= self.config.run_length {
                    return true;
                }
            } else {
                run = 0;
            }
            r += dr;
            c += dc;
        }

        false
    }

    /// Consecutive `token`s strictly beyond (row, col) in one direction.
    fn count_from(&self, row: usize, col: usize, (dr, dc): (isize, isize), token: Token) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        while self.in_bounds(r, c) && self.cells[self.index(r as usize, c as usize)] == token {
            count += 1;
            r += dr;
            c += dc;
        }

        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|t| t.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
