//! Player input handling for the game front-ends.
//!
//! The terminal prompt and the WebSocket endpoint read the same two inputs:
//!
//! 1. the number of players, e.g. `5`
//! 2. the winner announcement, `<name> wins`
//!
//! # Module Organization
//!
//! - [`command`] - Parsing of the player count and the winner announcement
//! - [`cli`] - Line based prompt driving a [`Game`](crate::game::Game)

mod cli;
mod command;

use thiserror::Error;

pub use crate::commands::cli::Cli;
pub use crate::commands::command::{extract_winner, parse_player_count};

/// Greeting printed before the terminal prompt.
pub const WELCOME_MESSAGE: &str = "Let's play poker\nType {name} wins to record a win\n";
/// Prompt asking for the number of players.
pub const PLAYER_PROMPT: &str = "Please enter the number of players: ";
/// Answer to a player count that is not a positive number.
pub const BAD_PLAYER_INPUT_MESSAGE: &str =
    "Bad value received for number of players, please try again with a number";
/// Answer to a winner announcement not following `<name> wins`.
pub const BAD_WINNER_INPUT_MESSAGE: &str = "Bad winner entry, please enter '<name> wins'";

/// Errors raised while parsing player input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    /// The player count is not an integer
    #[error("{}", BAD_PLAYER_INPUT_MESSAGE)]
    BadPlayerCount,
    /// The winner announcement does not follow `<name> wins`
    #[error("{}", BAD_WINNER_INPUT_MESSAGE)]
    BadWinner,
}
