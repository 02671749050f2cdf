use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use four_in_a_row::config::AppConfig;
use four_in_a_row::game::{GameOutcome, GameRunner, GameState, Player, RunResult};
use four_in_a_row::ui::TerminalInput;

/// Play N-in-a-row (Connect Four) in the terminal.
#[derive(Parser)]
#[command(name = "four-in-a-row", about = "Two-player N-in-a-row in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four_in_a_row.toml")]
    config: PathBuf,

    /// Number of rows
    #[arg(long)]
    height: Option<usize>,

    /// Number of columns
    #[arg(long)]
    width: Option<usize>,

    /// Tokens in a row needed to win
    #[arg(long)]
    run_length: Option<usize>,

    /// Name of the first player
    #[arg(long)]
    player_a: Option<String>,

    /// Name of the second player
    #[arg(long)]
    player_b: Option<String>,

    /// Do not ask for player names
    #[arg(long)]
    no_prompt: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print a TOML file with all default settings and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(run_length) = cli.run_length {
        config.board.run_length = run_length;
    }
    if let Some(log_file) = cli.log_file.clone() {
        config.log.file = Some(log_file);
    }

    if !cli.no_prompt {
        if cli.player_a.is_none() {
            config.players.player_a = prompt_name(Player::A, &config.players.player_a)?;
        }
        if cli.player_b.is_none() {
            config.players.player_b = prompt_name(Player::B, &config.players.player_b)?;
        }
    }
    if let Some(name) = cli.player_a {
        config.players.player_a = name;
    }
    if let Some(name) = cli.player_b {
        config.players.player_b = name;
    }

    config.validate().context("invalid settings")?;
    init_logging(&config)?;

    let board = config.new_board()?;
    let state = GameState::new(board);
    let (result, state) = play(state, &config)?;

    match result {
        RunResult::Finished(outcome) => {
            print!("{}", state.board());
            match outcome {
                GameOutcome::Winner(player) => {
                    println!("{} wins!", config.players.name(player))
                }
                GameOutcome::Draw => println!("Draw!"),
            }
        }
        RunResult::Aborted => println!("Game abandoned."),
    }

    Ok(())
}

/// Ask for a player name on stdin; an empty answer keeps `default`.
fn prompt_name(player: Player, default: &str) -> Result<String> {
    let ordinal = match player {
        Player::A => 1,
        Player::B => 2,
    };
    print!("Name of player {ordinal} [{default}]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let name = line.trim();
    Ok(if name.is_empty() {
        default.to_string()
    } else {
        name.to_string()
    })
}

/// Logs go to a file, if one is configured; the terminal belongs to the game.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log.file else {
        return Ok(());
    };
    let level: tracing::Level = config
        .log
        .level
        .parse()
        .with_context(|| format!("parsing log level '{}'", config.log.level))?;
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn play(state: GameState, config: &AppConfig) -> io::Result<(RunResult, GameState)> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runner = GameRunner::new(state);
    let res = {
        let mut input = TerminalInput::new(&mut terminal, config.players.clone());
        runner.run(&mut input)
    };

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    Ok((res?, runner.into_state()))
}
