use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::config::PlayersConfig;
use crate::error::BoardError;
use crate::game::GameState;
use crate::input::{Choice, ColumnSource};

/// Cursor over the columns of a board, driven by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSelector {
    selected: usize,
    width: usize,
}

impl ColumnSelector {
    /// Start in the middle column
    pub fn new(width: usize) -> Self {
        ColumnSelector {
            selected: width / 2,
            width,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Apply a key press. Returns a choice once the player drops or quits.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Choice> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Choice::Quit),
            KeyCode::Left => {
                self.selected = (self.selected + self.width - 1) % self.width;
                None
            }
            KeyCode::Right => {
                self.selected = (self.selected + 1) % self.width;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                Some(Choice::Column(self.selected))
            }
            _ => None,
        }
    }
}

/// Keyboard-driven column source drawing to a ratatui terminal.
pub struct TerminalInput<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    players: PlayersConfig,
    message: Option<String>,
}

impl<'a, B: Backend> TerminalInput<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, players: PlayersConfig) -> Self {
        TerminalInput {
            terminal,
            players,
            message: None,
        }
    }

    fn draw(&mut self, state: &GameState, selected: Option<usize>) -> io::Result<()> {
        let players = &self.players;
        let message = &self.message;
        self.terminal
            .draw(|f| super::game_view::render(f, state, players, selected, message))
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(())
    }
}

/// Block until the next key press (ignoring releases and repeats).
fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

impl<B: Backend> ColumnSource for TerminalInput<'_, B> {
    fn next_column(&mut self, state: &GameState) -> io::Result<Choice> {
        let mut selector = ColumnSelector::new(state.board().width());
        loop {
            self.draw(state, Some(selector.selected()))?;
            let key = read_key()?;
            if let Some(choice) = selector.handle_key(key) {
                self.message = None;
                return Ok(choice);
            }
        }
    }

    fn rejected(&mut self, _column: usize, error: &BoardError) {
        self.message = Some(match error {
            BoardError::ColumnFull { .. } => "Column is full!".to_string(),
            BoardError::InvalidColumn { .. } => "Invalid column!".to_string(),
            other => other.to_string(),
        });
    }

    fn finished(&mut self, state: &GameState) -> io::Result<()> {
        self.message = Some("Game over! Press any key to exit.".to_string());
        self.draw(state, None)?;
        read_key()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selector_starts_in_middle() {
        assert_eq!(ColumnSelector::new(7).selected(), 3);
        assert_eq!(ColumnSelector::new(4).selected(), 2);
    }

    #[test]
    fn test_selector_wraps_around() {
        let mut selector = ColumnSelector::new(3);
        assert_eq!(selector.handle_key(press(KeyCode::Right)), None);
        assert_eq!(selector.selected(), 2);
        selector.handle_key(press(KeyCode::Right));
        assert_eq!(selector.selected(), 0);
        selector.handle_key(press(KeyCode::Left));
        assert_eq!(selector.selected(), 2);
    }

    #[test]
    fn test_selector_drop_and_quit() {
        let mut selector = ColumnSelector::new(7);
        selector.handle_key(press(KeyCode::Left));
        assert_eq!(selector.handle_key(press(KeyCode::Enter)), Some(Choice::Column(2)));
        assert_eq!(selector.handle_key(press(KeyCode::Char(' '))), Some(Choice::Column(2)));
        assert_eq!(selector.handle_key(press(KeyCode::Down)), Some(Choice::Column(2)));
        assert_eq!(selector.handle_key(press(KeyCode::Char('x'))), None);
        assert_eq!(selector.handle_key(press(KeyCode::Char('q'))), Some(Choice::Quit));
        assert_eq!(selector.handle_key(press(KeyCode::Esc)), Some(Choice::Quit));
    }

    #[test]
    fn test_rejection_message() {
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(40, 20)).unwrap();
        let mut input = TerminalInput::new(&mut terminal, PlayersConfig::default());
        input.rejected(0, &BoardError::ColumnFull { column: 0 });
        assert_eq!(input.message.as_deref(), Some("Column is full!"));

        let state = GameState::standard();
        input.draw(&state, Some(0)).unwrap();
    }
}
