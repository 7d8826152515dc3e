//! Poker - A Texas Hold'em blind timer and league.
//!
//! This is the main entry point of the poker application. It plays one game at
//! a time, raising the blinds on a timer, and records the winners in a league.
//!
//! # Overview
//!
//! A game is started with a number of players. The blinds then rise on a
//! schedule depending on that number, each raise being announced with a
//! `Blind is now <amount>` message. The game ends when a winner is declared,
//! which stops the pending announcements and adds a win to the league.
//!
//! # Modes
//!
//! - `cli` - Plays one game in the terminal, blinds are printed to stdout
//! - `server` - Serves the league over HTTP and games over a WebSocket
//!
//! # Configuration
//!
//! See the [`config`] module for the YAML format. Any value can be overridden
//! with a `POKER_` prefixed environment variable:
//!
//! ```bash
//! export POKER_SERVER__PORT=8080
//! export POKER_BLINDS__BASE_INTERVAL=10
//! ```
//!
//! # Usage
//!
//! ```bash
//! poker --data ./poker-data cli
//! poker --config poker.yaml --data ./poker-data server
//! ```
//!
//! # Architecture
//!
//! - [`blinds`] - Blind schedule, alert scheduler and alert sinks
//! - [`game`] - Game session starting and stopping the blind timer
//! - [`league`] - Players, league table and its JSON file store
//! - [`commands`] - Parsing of player input and terminal prompt
//! - [`server`] - HTTP routes and WebSocket game endpoint
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`utils`] - Path helpers
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use tokio::io::{BufReader, stdin, stdout};

use crate::{
    blinds::{BlindAlerter, StdoutSink, TokioClock},
    commands::{Cli, WELCOME_MESSAGE},
    config::Config,
    game::TexasHoldem,
    league::{FileSystemPlayerStore, PlayerStore},
    server::AppState,
    utils::get_path,
};

mod blinds;
mod commands;
mod config;
mod game;
mod league;
mod server;
mod utils;

/// Command-line arguments.
///
/// # Examples
///
/// ```bash
/// poker --config poker.yaml --data ./poker-data server
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Defaults are used for every value missing from the file.
    #[arg(short, long)]
    config: Option<String>,

    /// Path to the directory holding the league file.
    #[arg(short, long, default_value = ".")]
    data: String,

    #[command(subcommand)]
    mode: Mode,
}

/// How the game is played.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Play one game in the terminal
    Cli,
    /// Serve the league and the browser game over HTTP
    Server,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let args = Args::parse();

    info!("Starting poker {}...", env!("CARGO_PKG_VERSION"));

    let config = Config::load(args.config.as_deref()).context("failed to load config file")?;

    let store_path = get_path(&args.data, &config.store.file);
    let store: Arc<dyn PlayerStore> = Arc::new(
        FileSystemPlayerStore::open(&store_path)
            .await
            .with_context(|| format!("failed to open league {}", store_path.display()))?,
    );

    let game = Arc::new(TexasHoldem::new(
        BlindAlerter::new(Arc::new(TokioClock)),
        store.clone(),
        config.blinds.base_interval,
    ));

    match args.mode {
        Mode::Cli => {
            print!("{}", WELCOME_MESSAGE);

            let mut cli = Cli::new(
                BufReader::new(stdin()),
                stdout(),
                game,
                Arc::new(StdoutSink),
            );
            cli.play_poker().await?;
        }
        Mode::Server => {
            server::serve(AppState { store, game }, config.server_address()).await?;
        }
    }

    Ok(())
}
