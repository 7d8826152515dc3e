//! Blind levels and their timed delivery.
//!
//! This module groups everything needed to run a blind timer:
//!
//! - [`BlindAlert`] and [`calculate`]: the blind schedule for a number of players
//! - [`BlindAlerter`]: spawns one delayed task per alert and returns an [`AlertHandle`]
//! - [`AlertSink`]: the destination alerts are written to
//!
//! # Example Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use poker::blinds::{BlindAlerter, DEFAULT_BASE_INTERVAL_MINUTES, StdoutSink, TokioClock, calculate};
//! # async fn example() {
//! let alerter = BlindAlerter::new(Arc::new(TokioClock));
//! let schedule = calculate(5, DEFAULT_BASE_INTERVAL_MINUTES).unwrap();
//!
//! let handle = alerter.schedule(schedule, Arc::new(StdoutSink));
//! handle.stop();
//! # }
//! ```

mod blind_alert;
mod blind_alerter;
mod sink;

pub use crate::blinds::blind_alert::{
    BlindAlert, DEFAULT_BASE_INTERVAL_MINUTES, InvalidPlayerCount, calculate,
};
pub use crate::blinds::blind_alerter::{AlertHandle, BlindAlerter, Clock, TokioClock};
#[cfg(test)]
pub use crate::blinds::sink::{MockAlertSink, RecordingSink};
pub use crate::blinds::sink::{AlertSink, ChannelSink, SinkError, StdoutSink};
