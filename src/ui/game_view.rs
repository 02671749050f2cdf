use crate::config::PlayersConfig;
use crate::game::{GameOutcome, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{board_lines, player_color};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    players: &PlayersConfig,
    selected_column: Option<usize>,
    message: &Option<String>,
) {
    let board_height = board_rows_needed(game_state.board().height());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, players, chunks[0]);

    let selection = selected_column
        .filter(|_| !game_state.is_terminal())
        .map(|col| (game_state.current_player(), col));
    let board_widget =
        Paragraph::new(board_lines(game_state.board(), selection)).alignment(Alignment::Center);
    frame.render_widget(board_widget, chunks[1]);

    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Terminal rows for the framed board: selector, borders and column numbers
/// around `height` board rows, clamped to what a terminal can address.
fn board_rows_needed(height: usize) -> u16 {
    u16::try_from(height).unwrap_or(u16::MAX).saturating_add(4)
}

fn render_header(frame: &mut Frame, game_state: &GameState, players: &PlayersConfig, area: Rect) {
    let board = game_state.board();
    let title = format!("{} in a row", board.run_length());

    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("{} wins!", players.name(player)),
            player_color(player),
        ),
        Some(GameOutcome::Draw) => ("Draw!".to_string(), Color::White),
        None => {
            let player = game_state.current_player();
            (
                format!(
                    "Turn {}/{}  |  {} to move",
                    game_state.moves_played() + 1,
                    game_state.move_limit(),
                    players.name(player)
                ),
                player_color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter/Space/↓: Drop  |  Q/Esc: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_board_rows_needed_saturates() {
        assert_eq!(board_rows_needed(6), 10);
        assert_eq!(board_rows_needed(65_532), u16::MAX);
        assert_eq!(board_rows_needed(70_000), u16::MAX);
        assert_eq!(board_rows_needed(usize::MAX), u16::MAX);
    }

    #[test]
    fn test_render_tall_board_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let state = GameState::new(crate::game::Board::with_dimensions(70_000, 1, 2).unwrap());
        let players = PlayersConfig::default();

        terminal
            .draw(|f| render(f, &state, &players, Some(0), &None))
            .unwrap();
    }

    #[test]
    fn test_render_shows_current_player() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let state = GameState::standard();
        let players = PlayersConfig {
            player_a: "Ada".into(),
            player_b: "Bob".into(),
        };
        let message = Some("Column is full!".to_string());

        terminal
            .draw(|f| render(f, &state, &players, Some(3), &message))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Ada to move"));
        assert!(text.contains("Turn 1/42"));
        assert!(text.contains("Column is full!"));
        assert!(text.contains("4 in a row"));
    }

    #[test]
    fn test_render_shows_winner() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut state = GameState::standard();
        for col in [0, 0, 1, 1, 2, 2, 3] {
            state.apply_move(col).unwrap();
        }
        let players = PlayersConfig::default();

        terminal
            .draw(|f| render(f, &state, &players, Some(3), &None))
            .unwrap();

        assert!(screen_text(&terminal).contains("Player 1 wins!"));
    }
}
