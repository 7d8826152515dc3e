//! Game lifecycle: configure the players, run the blind timer, record the winner.
//!
//! The [`Game`] trait is what the front-ends (terminal prompt and WebSocket
//! endpoint) drive. [`TexasHoldem`] implements it on top of the
//! [`BlindAlerter`](crate::blinds::BlindAlerter) and a
//! [`PlayerStore`](crate::league::PlayerStore).
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──start──▶ Running ──finish──▶ Finished
//!                   ▲  │                  │
//!                   └──┘ start            │ start
//!                   ▲                     │
//!                   └─────────────────────┘
//! ```
//!
//! A new `start` always begins a new session and stops the blind timer of a
//! session left unfinished. `abandon` stops the timer of a front-end that went
//! away and returns to `Idle` without recording anyone.

mod texas_holdem;

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::{
    blinds::{AlertSink, InvalidPlayerCount},
    league::StoreError,
};

pub use crate::game::texas_holdem::TexasHoldem;

/// Errors returned by [`Game`] operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// The number of players is zero or negative
    #[error(transparent)]
    InvalidPlayerCount(#[from] InvalidPlayerCount),
    /// `finish` was called without a running game
    #[error("no game is running")]
    NotRunning,
    /// The winner name is empty
    #[error("the winner name is empty")]
    InvalidWinner,
    /// The winner could not be recorded, the game is finished anyway
    #[error("failed to record the winner: {0}")]
    RecorderFailed(#[source] StoreError),
}

/// A game session driven by a front-end.
#[automock]
#[async_trait]
pub trait Game: Send + Sync {
    /// Starts a new game and its blind timer writing to `sink`.
    ///
    /// Returns as soon as the timer is armed.
    async fn start(&self, player_count: i64, sink: Arc<dyn AlertSink>) -> Result<(), GameError>;
    /// Finishes the running game and records `winner`.
    async fn finish(&self, winner: &str) -> Result<(), GameError>;
    /// Stops the running game without a winner if its alerts go to `sink`.
    ///
    /// Returns whether a game was abandoned. A game started since by another
    /// front-end is left running.
    async fn abandon(&self, sink: &Arc<dyn AlertSink>) -> bool;
}
