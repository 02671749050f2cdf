use std::collections::VecDeque;
use std::io;

use super::source::{Choice, ColumnSource};
use crate::error::BoardError;
use crate::game::GameState;

/// Replays a fixed list of columns, then quits.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    columns: VecDeque<usize>,
    rejections: Vec<(usize, BoardError)>,
    finished: bool,
}

impl ScriptedInput {
    pub fn new(columns: impl IntoIterator<Item = usize>) -> Self {
        ScriptedInput {
            columns: columns.into_iter().collect(),
            rejections: Vec::new(),
            finished: false,
        }
    }

    /// Columns not yet played
    pub fn remaining(&self) -> usize {
        self.columns.len()
    }

    /// Every rejected choice, in order
    pub fn rejections(&self) -> &[(usize, BoardError)] {
        &self.rejections
    }

    pub fn saw_finish(&self) -> bool {
        self.finished
    }
}

impl ColumnSource for ScriptedInput {
    fn next_column(&mut self, _state: &GameState) -> io::Result<Choice> {
        Ok(self
            .columns
            .pop_front()
            .map(Choice::Column)
            .unwrap_or(Choice::Quit))
    }

    fn rejected(&mut self, column: usize, error: &BoardError) {
        self.rejections.push((column, error.clone()));
    }

    fn finished(&mut self, _state: &GameState) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}
