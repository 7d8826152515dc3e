//! WebSocket endpoint playing one game per connection.
//!
//! The client sends two text frames:
//!
//! 1. the number of players, which starts the game
//! 2. the winner announcement `<name> wins`, which finishes it
//!
//! Blind alerts are sent back as text frames while the game runs. Bad input is
//! answered with an explanation and the frame can be sent again. A client
//! leaving before declaring a winner abandons its game.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};

use crate::{
    blinds::{AlertSink, ChannelSink},
    commands::{
        BAD_PLAYER_INPUT_MESSAGE, BAD_WINNER_INPUT_MESSAGE, extract_winner, parse_player_count,
    },
    game::{Game, GameError},
    server::AppState,
};

/// Upgrades the connection and plays a game on it.
pub async fn websocket_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state.game))
}

/// What the connection expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    AwaitingPlayerCount,
    AwaitingWinner,
}

/// Outcome of a text frame.
#[derive(Debug, PartialEq, Eq)]
enum Reply {
    /// Nothing to send back
    None,
    /// Explanation to send back
    Text(String),
    /// The game is over, the connection can be closed
    Done,
}

/// Game played over one connection.
struct Connection {
    game: Arc<dyn Game>,
    sink: Arc<dyn AlertSink>,
    stage: Stage,
}

impl Connection {
    fn new(game: Arc<dyn Game>, sink: ChannelSink) -> Self {
        Connection {
            game,
            sink: Arc::new(sink),
            stage: Stage::AwaitingPlayerCount,
        }
    }

    async fn on_text(&mut self, text: &str) -> Reply {
        match self.stage {
            Stage::AwaitingPlayerCount => self.on_player_count(text).await,
            Stage::AwaitingWinner => self.on_winner(text).await,
        }
    }

    async fn on_player_count(&mut self, text: &str) -> Reply {
        let Ok(player_count) = parse_player_count(text) else {
            warn!("bad player count received: {:?}", text);
            return Reply::Text(BAD_PLAYER_INPUT_MESSAGE.to_owned());
        };

        match self.game.start(player_count, Arc::clone(&self.sink)).await {
            Ok(()) => {
                self.stage = Stage::AwaitingWinner;
                Reply::None
            }
            Err(GameError::InvalidPlayerCount(e)) => {
                warn!("{}", e);
                Reply::Text(BAD_PLAYER_INPUT_MESSAGE.to_owned())
            }
            Err(e) => Reply::Text(e.to_string()),
        }
    }

    async fn on_winner(&mut self, text: &str) -> Reply {
        let Ok(winner) = extract_winner(text) else {
            warn!("bad winner received: {:?}", text);
            return Reply::Text(BAD_WINNER_INPUT_MESSAGE.to_owned());
        };

        match self.game.finish(&winner).await {
            Ok(()) => {
                info!("recorded {} as winner", winner);
                Reply::Done
            }
            Err(e) => Reply::Text(e.to_string()),
        }
    }

    /// Stops the game of a client gone before declaring a winner.
    async fn close(&self) {
        if self.stage == Stage::AwaitingWinner && self.game.abandon(&self.sink).await {
            info!("client left, game abandoned");
        }
    }
}

/// Forwards blind alerts to the socket while reading the player input.
async fn handle_socket(socket: WebSocket, game: Arc<dyn Game>) {
    let (mut sender, mut receiver) = socket.split();
    let (sink, mut alerts) = ChannelSink::new();
    let mut connection = Connection::new(game, sink);
    let mut finished = false;

    loop {
        tokio::select! {
            Some(alert) = alerts.recv() => {
                if sender.send(Message::Text(alert.into())).await.is_err() {
                    break;
                }
            }
            message = receiver.next() => {
                let text = match message {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => continue,
                };

                match connection.on_text(text.as_str()).await {
                    Reply::None => {}
                    Reply::Text(reply) => {
                        if sender.send(Message::Text(reply.into())).await.is_err() {
                            break;
                        }
                    }
                    Reply::Done => {
                        finished = true;
                        let _ = sender.send(Message::Close(None)).await;
                        break;
                    }
                }
            }
        }
    }

    if !finished {
        connection.close().await;
    }

    debug!("websocket connection closed");
}
