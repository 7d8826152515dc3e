//! Destinations for blind alert messages.
//!
//! Both the terminal prompt and the WebSocket endpoint hand an [`AlertSink`] to
//! the game. The scheduler only ever calls [`AlertSink::write`] and never cares
//! which concrete sink it holds.

use std::io::{self, Write};

use mockall::automock;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors returned by a sink write.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying stream rejected the write
    #[error("failed to write alert: {0}")]
    Io(#[from] io::Error),
    /// The receiving side of the sink is gone
    #[error("alert sink is closed")]
    Closed,
}

/// A destination accepting one message per blind alert.
///
/// Implementations must not panic on failure, the error is only logged.
#[automock]
pub trait AlertSink: Send + Sync {
    /// Writes one alert message.
    fn write(&self, message: &[u8]) -> Result<(), SinkError>;
}

/// Sink writing alerts to the process standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl AlertSink for StdoutSink {
    fn write(&self, message: &[u8]) -> Result<(), SinkError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(message)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Sink forwarding alerts as text to a channel.
///
/// The WebSocket endpoint drains the receiving end into the socket, so a write
/// never blocks on the network.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelSink {
    /// Creates a sink and the receiver it forwards to.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelSink { tx }, rx)
    }
}

impl AlertSink for ChannelSink {
    fn write(&self, message: &[u8]) -> Result<(), SinkError> {
        let text = String::from_utf8_lossy(message).into_owned();
        self.tx.send(text).map_err(|_| SinkError::Closed)
    }
}

/// Sink keeping every message it receives.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingSink {
    /// Messages written so far, in write order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl AlertSink for RecordingSink {
    fn write(&self, message: &[u8]) -> Result<(), SinkError> {
        self.messages
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(message).into_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_forwards_message() {
        let (sink, mut rx) = ChannelSink::new();

        sink.write(b"Blind is now 100\n").unwrap();

        assert_eq!(rx.try_recv().unwrap(), "Blind is now 100\n");
    }

    #[test]
    fn test_channel_sink_keeps_order() {
        let (sink, mut rx) = ChannelSink::new();

        sink.write(b"first").unwrap();
        sink.write(b"second").unwrap();

        assert_eq!(rx.try_recv().unwrap(), "first");
        assert_eq!(rx.try_recv().unwrap(), "second");
    }

    #[test]
    fn test_channel_sink_fails_when_receiver_dropped() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);

        let result = sink.write(b"Blind is now 100\n");
        assert!(matches!(result, Err(SinkError::Closed)));
    }

    #[test]
    fn test_stdout_sink_writes() {
        assert!(StdoutSink.write(b"").is_ok());
    }
}
