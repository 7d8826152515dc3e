//! Texas Hold'em game session.
//!
//! This module provides [`TexasHoldem`], the [`Game`] implementation owning the
//! blind timer of the current session and recording its winner.

use std::{mem, sync::Arc};

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::{
    blinds::{AlertHandle, AlertSink, BlindAlerter, calculate},
    game::{Game, GameError},
    league::PlayerStore,
};

/// Lifecycle of the current session.
enum Session {
    /// No game started since the process began
    Idle,
    /// A game is running with its blind timer writing to `sink`
    Running {
        handle: AlertHandle,
        sink: Arc<dyn AlertSink>,
    },
    /// The last game has a recorded winner
    Finished,
}

/// A Texas Hold'em game with a blind timer.
///
/// # Thread Safety
///
/// Transitions are serialized by a mutex around the session, so at most one
/// blind timer is live even when several clients share the game.
///
/// # Examples
///
/// ```no_run
/// # use std::sync::Arc;
/// # use poker::blinds::{BlindAlerter, StdoutSink, TokioClock};
/// # use poker::game::{Game, GameError, TexasHoldem};
/// # use poker::league::PlayerStore;
/// # async fn example(store: Arc<dyn PlayerStore>) -> Result<(), GameError> {
/// let game = TexasHoldem::new(BlindAlerter::new(Arc::new(TokioClock)), store, 5);
///
/// game.start(5, Arc::new(StdoutSink)).await?;
/// game.finish("Chris").await?;
/// # Ok(())
/// # }
/// ```
pub struct TexasHoldem {
    /// Scheduler of the blind alerts
    alerter: BlindAlerter,
    /// Recorder of the winners
    store: Arc<dyn PlayerStore>,
    /// Minutes added to the player count to get the blind interval
    base_interval_minutes: u64,
    /// Current session
    session: Mutex<Session>,
}

impl TexasHoldem {
    /// Creates a new idle game.
    ///
    /// # Arguments
    ///
    /// * `alerter` - Scheduler used for the blind alerts of every session
    /// * `store` - Store recording the winner of every session
    /// * `base_interval_minutes` - Base of the blind interval, see [`calculate`]
    pub fn new(
        alerter: BlindAlerter,
        store: Arc<dyn PlayerStore>,
        base_interval_minutes: u64,
    ) -> Self {
        TexasHoldem {
            alerter,
            store,
            base_interval_minutes,
            session: Mutex::new(Session::Idle),
        }
    }
}

#[async_trait]
impl Game for TexasHoldem {
    async fn start(&self, player_count: i64, sink: Arc<dyn AlertSink>) -> Result<(), GameError> {
        let schedule = calculate(player_count, self.base_interval_minutes)?;

        let mut session = self.session.lock().await;

        if let Session::Running { handle, .. } = &*session {
            if !handle.is_finished() {
                warn!("starting a new game while the previous blind timer is still running");
            }
            handle.stop();
        }

        *session = Session::Running {
            handle: self.alerter.schedule(schedule, Arc::clone(&sink)),
            sink,
        };

        info!("game started with {} players", player_count);
        Ok(())
    }

    async fn finish(&self, winner: &str) -> Result<(), GameError> {
        if winner.trim().is_empty() {
            return Err(GameError::InvalidWinner);
        }

        let mut session = self.session.lock().await;

        let handle = match mem::replace(&mut *session, Session::Finished) {
            Session::Running { handle, .. } => handle,
            previous => {
                *session = previous;
                return Err(GameError::NotRunning);
            }
        };
        handle.stop();

        info!("game finished, {} wins", winner);

        self.store
            .record_win(winner)
            .await
            .map_err(GameError::RecorderFailed)
    }

    async fn abandon(&self, sink: &Arc<dyn AlertSink>) -> bool {
        let mut session = self.session.lock().await;

        let Session::Running {
            handle,
            sink: running_sink,
        } = &*session
        else {
            return false;
        };

        // Compare data pointers only, the vtables of one type may differ
        if !std::ptr::addr_eq(Arc::as_ptr(running_sink), Arc::as_ptr(sink)) {
            debug!("game running for another front-end, not abandoned");
            return false;
        }

        handle.stop();
        *session = Session::Idle;

        info!("game abandoned without a winner");
        true
    }
}
