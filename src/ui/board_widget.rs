use crate::game::{Board, Player, Token};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const CELL_WIDTH: usize = 3;

pub fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Green,
        Player::B => Color::Red,
    }
}

fn token_span(token: Token) -> Span<'static> {
    match token {
        Token::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Token::PlayerA => Span::styled(" \u{25cf} ", Style::default().fg(player_color(Player::A))),
        Token::PlayerB => Span::styled(" \u{25cf} ", Style::default().fg(player_color(Player::B))),
    }
}

/// Lines for a framed board of any size. When `selection` is set, the
/// player's token hovers over the selected column and a marker sits below it.
pub fn board_lines(board: &Board, selection: Option<(Player, usize)>) -> Vec<Line<'static>> {
    let width = board.width();
    let inner = "═".repeat(width * CELL_WIDTH + 1);
    let mut lines = Vec::with_capacity(board.height() + 4);

    // Token waiting to drop
    let mut heading = vec![Span::raw("   ")];
    for col in 0..width {
        match selection {
            Some((player, selected)) if selected == col => heading.push(Span::styled(
                " \u{25cf} ",
                Style::default()
                    .fg(player_color(player))
                    .add_modifier(Modifier::BOLD),
            )),
            _ => heading.push(Span::raw("   ")),
        }
    }
    heading.push(Span::raw("  "));
    lines.push(Line::from(heading));

    lines.push(Line::from(format!("  ╔{inner}╗")));
    for row in board.rows() {
        let mut spans = vec![Span::raw("  ║")];
        spans.extend(row.iter().map(|&token| token_span(token)));
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(format!("  ╚{inner}╝")));

    // Column numbers, selected one highlighted
    let mut numbers = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!("{:^width$}", col + 1, width = CELL_WIDTH);
        match selection {
            Some((_, selected)) if selected == col => numbers.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
            _ => numbers.push(Span::raw(label)),
        }
    }
    numbers.push(Span::raw("  "));
    lines.push(Line::from(numbers));

    lines
}
