//! Scheduling of blind alerts.
//!
//! This module provides the [`BlindAlerter`] which spawns one delayed task per
//! [`BlindAlert`] and returns an [`AlertHandle`] used to cancel them all at once.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use log::{debug, error, info};
use tokio::task::JoinHandle;

use crate::blinds::{AlertSink, BlindAlert};

/// Source of delays for the scheduler.
///
/// Abstracted so tests can substitute the time source.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Completes once `duration` has elapsed.
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the Tokio timer.
///
/// Under `tokio::time::pause` this clock follows the paused virtual time.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Cancellation handle shared by every alert of one schedule.
///
/// Dropping the handle does not cancel the alerts, [`AlertHandle::stop`] must be called.
#[derive(Debug)]
pub struct AlertHandle {
    /// Set once the schedule is stopped, checked before every write
    cancelled: Arc<AtomicBool>,
    /// One task per scheduled alert
    tasks: Vec<JoinHandle<()>>,
}

impl AlertHandle {
    /// Stops the schedule.
    ///
    /// No alert whose delay has not elapsed yet will be written after this call.
    /// An alert already writing to the sink is allowed to complete.
    pub fn stop(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.tasks.iter().for_each(|task| task.abort());
        debug!("stopped blind schedule of {} alerts", self.tasks.len());
    }

    /// Whether every alert task has completed or been aborted.
    pub fn is_finished(&self) -> bool {
        self.tasks.iter().all(|task| task.is_finished())
    }
}

/// Spawns delayed alert tasks writing to a sink.
///
/// # Examples
///
/// ```no_run
/// # use std::sync::Arc;
/// # use poker::blinds::{BlindAlerter, StdoutSink, TokioClock, calculate};
/// # async fn example() {
/// let alerter = BlindAlerter::new(Arc::new(TokioClock));
/// let schedule = calculate(5, 5).unwrap();
/// let handle = alerter.schedule(schedule, Arc::new(StdoutSink));
/// // ... later, when a winner is declared
/// handle.stop();
/// # }
/// ```
#[derive(Clone)]
pub struct BlindAlerter {
    clock: Arc<dyn Clock>,
}

impl BlindAlerter {
    /// Creates a new alerter waiting on the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        BlindAlerter { clock }
    }

    /// Schedules every alert of `schedule` to be written to `sink`.
    ///
    /// Returns immediately. Each alert runs in its own task so a slow or failed
    /// write never delays the following alerts.
    ///
    /// # Arguments
    ///
    /// * `schedule` - Alerts with delays relative to now
    /// * `sink` - Destination of the alert messages
    pub fn schedule(&self, schedule: Vec<BlindAlert>, sink: Arc<dyn AlertSink>) -> AlertHandle {
        let cancelled = Arc::new(AtomicBool::new(false));

        info!("scheduling {} blind alerts", schedule.len());

        let tasks = schedule
            .into_iter()
            .map(|alert| {
                let clock = Arc::clone(&self.clock);
                let sink = Arc::clone(&sink);
                let cancelled = Arc::clone(&cancelled);

                tokio::spawn(async move {
                    debug!("waiting {:?} before alerting {}", alert.delay, alert);
                    clock.sleep(alert.delay).await;

                    if cancelled.load(Ordering::Acquire) {
                        debug!("alert {} cancelled", alert);
                        return;
                    }

                    match sink.write(alert.message().as_bytes()) {
                        Ok(()) => info!("blind is now {}", alert.amount),
                        Err(e) => error!("failed to send alert {}: {}", alert, e),
                    }
                })
            })
            .collect();

        AlertHandle { cancelled, tasks }
    }
}
