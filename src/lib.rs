//! # Four in a Row
//!
//! A two-player N-in-a-row (Connect Four) game. The rule engine works on any
//! board size and run length; a Ratatui front end plays hot-seat games in the
//! terminal.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine, turn loop
//! - [`input`] — Column source trait and scripted input
//! - [`ui`] — Terminal UI: board view and keyboard input
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
