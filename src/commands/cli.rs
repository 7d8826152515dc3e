//! Terminal prompt driving a game.
//!
//! This module provides the [`Cli`] which reads the number of players and the
//! winner from a line based input and drives a [`Game`] with them.

use std::{io, sync::Arc};

use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    blinds::AlertSink,
    commands::{
        BAD_PLAYER_INPUT_MESSAGE, BAD_WINNER_INPUT_MESSAGE, PLAYER_PROMPT,
        command::{extract_winner, parse_player_count},
    },
    game::{Game, GameError},
};

/// Line based prompt for one game.
///
/// Blind alerts go to `sink`, which is usually the same terminal as `output`.
///
/// # Examples
///
/// ```no_run
/// # use std::sync::Arc;
/// # use poker::blinds::StdoutSink;
/// # use poker::commands::Cli;
/// # use poker::game::Game;
/// # async fn example(game: Arc<dyn Game>) -> std::io::Result<()> {
/// let input = tokio::io::BufReader::new(tokio::io::stdin());
/// let mut cli = Cli::new(input, tokio::io::stdout(), game, Arc::new(StdoutSink));
/// cli.play_poker().await
/// # }
/// ```
pub struct Cli<R, W> {
    /// Player input
    input: R,
    /// Prompt and error messages
    output: W,
    /// Game driven by the prompt
    game: Arc<dyn Game>,
    /// Destination of the blind alerts
    sink: Arc<dyn AlertSink>,
}

impl<R, W> Cli<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, game: Arc<dyn Game>, sink: Arc<dyn AlertSink>) -> Self {
        Cli {
            input,
            output,
            game,
            sink,
        }
    }

    /// Plays one game.
    ///
    /// 1. Prompts for the number of players and starts the game
    /// 2. Waits for a `<name> wins` line and finishes the game
    ///
    /// Bad input ends the prompt with an explanation and without touching the
    /// game any further.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading the input or writing the output fails.
    pub async fn play_poker(&mut self) -> io::Result<()> {
        self.write(PLAYER_PROMPT).await?;

        let line = self.read_line().await?;
        let Ok(player_count) = parse_player_count(&line) else {
            warn!("bad player count entered: {:?}", line);
            return self.write(BAD_PLAYER_INPUT_MESSAGE).await;
        };

        match self.game.start(player_count, Arc::clone(&self.sink)).await {
            Ok(()) => {}
            Err(GameError::InvalidPlayerCount(e)) => {
                warn!("{}", e);
                return self.write(BAD_PLAYER_INPUT_MESSAGE).await;
            }
            Err(e) => return self.write(&e.to_string()).await,
        }

        let line = self.read_line().await?;
        let Ok(winner) = extract_winner(&line) else {
            warn!("bad winner entered: {:?}", line);
            return self.write(BAD_WINNER_INPUT_MESSAGE).await;
        };

        if let Err(e) = self.game.finish(&winner).await {
            return self.write(&e.to_string()).await;
        }

        info!("recorded {} as winner", winner);
        Ok(())
    }

    /// Reads one line, an empty string at the end of the input.
    async fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line).await?;
        Ok(line)
    }

    async fn write(&mut self, message: &str) -> io::Result<()> {
        self.output.write_all(message.as_bytes()).await?;
        self.output.flush().await
    }
}
