//! League persistence in a JSON file.
//!
//! This module provides the [`FileSystemPlayerStore`] which keeps the league in
//! memory and rewrites the whole file after every recorded win.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::{fs, sync::Mutex};

use crate::league::{
    PlayerStore, StoreError,
    player::{League, Player, find, sort_by_wins},
};

/// A [`PlayerStore`] backed by a JSON file.
///
/// The file holds a JSON array of players:
///
/// ```json
/// [{ "Name": "Cleo", "Wins": 32 }, { "Name": "Chris", "Wins": 20 }]
/// ```
///
/// # Thread Safety
///
/// The league is guarded by a mutex held for the whole read-modify-write cycle
/// of [`PlayerStore::record_win`], so concurrent wins are never lost.
///
/// # Examples
///
/// ```no_run
/// # use poker::league::{FileSystemPlayerStore, PlayerStore, StoreError};
/// # async fn example() -> Result<(), StoreError> {
/// let store = FileSystemPlayerStore::open("game.db.json").await?;
/// store.record_win("Cleo").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileSystemPlayerStore {
    /// Path to the JSON league file
    path: PathBuf,
    /// League in file order
    league: Mutex<League>,
}

impl FileSystemPlayerStore {
    /// Opens the league file, creating it if needed.
    ///
    /// An empty or missing file is initialised with an empty league.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Io`] if the file cannot be created, read or initialised
    /// - [`StoreError::Parse`] if the file content is not a list of players
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let io_error = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(io_error)?;

        let content = fs::read_to_string(&path).await.map_err(io_error)?;

        let league: League = if content.trim().is_empty() {
            warn!(
                "no league found in {}, starting with an empty league",
                path.display()
            );
            fs::write(&path, "[]").await.map_err(io_error)?;
            Vec::new()
        } else {
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?
        };

        info!(
            "loaded league of {} players from {}",
            league.len(),
            path.display()
        );

        Ok(FileSystemPlayerStore {
            path,
            league: Mutex::new(league),
        })
    }

    /// Writes the whole league to the file.
    async fn persist(&self, league: &League) -> Result<(), StoreError> {
        let serialized_league = serde_json::to_string(league).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, serialized_league)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!("persisted league to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl PlayerStore for FileSystemPlayerStore {
    async fn score(&self, name: &str) -> Option<u32> {
        let league = self.league.lock().await;
        find(&league, name).map(|player| player.wins)
    }

    async fn league(&self) -> League {
        let mut league = self.league.lock().await.clone();
        sort_by_wins(&mut league);
        league
    }

    async fn record_win(&self, name: &str) -> Result<(), StoreError> {
        let mut league = self.league.lock().await;

        // Only a persisted league replaces the one in memory
        let mut updated_league = league.clone();
        match updated_league.iter_mut().find(|player| player.name == name) {
            Some(player) => player.wins += 1,
            None => updated_league.push(Player::new(name, 1)),
        }

        self.persist(&updated_league).await?;
        *league = updated_league;

        info!("recorded win for {}", name);
        Ok(())
    }
}
