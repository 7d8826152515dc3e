//! Player league and score persistence.
//!
//! This module provides the league data model and the [`PlayerStore`] trait used
//! both by the HTTP server and by the game to record a winner.
//!
//! - [`Player`]: a player name with its number of wins
//! - [`PlayerStore`]: read scores, read the league, record a win
//! - [`FileSystemPlayerStore`]: a [`PlayerStore`] persisting the league as JSON
//!
//! # Example Usage
//!
//! ```no_run
//! # async fn example() -> Result<(), StoreError> {
//! let store = FileSystemPlayerStore::open("game.db.json").await?;
//!
//! store.record_win("Chris").await?;
//! assert_eq!(store.score("Chris").await, Some(1));
//! # Ok(())
//! # }
//! ```

mod file_store;
mod player;

use std::path::PathBuf;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

pub use crate::league::file_store::FileSystemPlayerStore;
pub use crate::league::player::{League, Player};

/// Errors raised by a [`PlayerStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The league file could not be read or written
    #[error("problem accessing league file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The league file does not hold a JSON list of players
    #[error("problem parsing league from file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Storage of player scores.
///
/// The game uses [`PlayerStore::record_win`] as its score recorder.
#[automock]
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Returns the number of wins of a player, `None` if the player is unknown.
    async fn score(&self, name: &str) -> Option<u32>;
    /// Returns every player sorted by wins, highest first.
    async fn league(&self) -> League;
    /// Adds one win to a player, creating the player if needed.
    async fn record_win(&self, name: &str) -> Result<(), StoreError>;
}
