//! HTTP/WebSocket API of the poker league.
//!
//! # Endpoints
//!
//! - `GET /league` - League table as JSON, sorted by wins
//! - `GET /players/{name}` - Number of wins of a player, `404` if unknown
//! - `POST /players/{name}` - Record a win for a player, `202` on success
//! - `GET /game` - HTML page to play a game from the browser
//! - `GET /ws` - WebSocket running a game, see [`websocket`]
//!
//! # Example Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use poker::game::Game;
//! # use poker::league::PlayerStore;
//! # use poker::server::{AppState, serve};
//! # async fn example(store: Arc<dyn PlayerStore>, game: Arc<dyn Game>) -> anyhow::Result<()> {
//! let state = AppState { store, game };
//! serve(state, "0.0.0.0:5000").await?;
//! # Ok(())
//! # }
//! ```

mod websocket;

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use log::{error, info};
use tokio::net::{TcpListener, ToSocketAddrs};

use crate::{game::Game, league::PlayerStore};

/// HTML page of the browser game.
const GAME_PAGE: &str = include_str!("../../assets/game.html");

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// League scores
    pub store: Arc<dyn PlayerStore>,
    /// Game played through the WebSocket
    pub game: Arc<dyn Game>,
}

/// Creates the router with every endpoint.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/league", get(league_handler))
        .route("/players/{name}", get(score_handler).post(win_handler))
        .route("/game", get(game_handler))
        .route("/ws", get(websocket::websocket_handler))
        .with_state(state)
}

/// Serves the API until the process ends.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(state: AppState, address: impl ToSocketAddrs) -> anyhow::Result<()> {
    let listener = TcpListener::bind(address).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

async fn league_handler(State(state): State<AppState>) -> Response {
    let league = state.store.league().await;

    match serde_json::to_string(&league) {
        Ok(body) => (
            [(header::CONTENT_TYPE, mime::APPLICATION_JSON.to_string())],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("failed to serialize league: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn score_handler(Path(name): Path<String>, State(state): State<AppState>) -> Response {
    match state.store.score(&name).await {
        Some(wins) => wins.to_string().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn win_handler(Path(name): Path<String>, State(state): State<AppState>) -> StatusCode {
    match state.store.record_win(&name).await {
        Ok(()) => StatusCode::ACCEPTED,
        Err(e) => {
            error!("failed to record win for {}: {}", name, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn game_handler() -> Html<&'static str> {
    Html(GAME_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        game::MockGame,
        league::{League, MockPlayerStore, Player, StoreError},
    };
    use axum::{
        body::Body,
        http::{Method, Request},
    };
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn create_app(store: MockPlayerStore) -> Router {
        create_router(AppState {
            store: Arc::new(store),
            game: Arc::new(MockGame::new()),
        })
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn store_with_scores() -> MockPlayerStore {
        let mut store = MockPlayerStore::new();
        store.expect_score().returning(|name| match name {
            "Pepper" => Some(20),
            "Floyd" => Some(10),
            _ => None,
        });
        store
    }

    #[tokio::test]
    async fn test_returns_pepper_score() {
        let app = create_app(store_with_scores());

        let response = app
            .oneshot(request(Method::GET, "/players/Pepper"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "20");
    }

    #[tokio::test]
    async fn test_returns_floyd_score() {
        let app = create_app(store_with_scores());

        let response = app
            .oneshot(request(Method::GET, "/players/Floyd"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "10");
    }

    #[tokio::test]
    async fn test_returns_404_for_unknown_player() {
        let app = create_app(store_with_scores());

        let response = app
            .oneshot(request(Method::GET, "/players/Apollo"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_records_win_on_post() {
        let mut store = MockPlayerStore::new();
        store
            .expect_record_win()
            .with(eq("Pepper"))
            .times(1)
            .returning(|_| Ok(()));
        let app = create_app(store);

        let response = app
            .oneshot(request(Method::POST, "/players/Pepper"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_record_win_failure_returns_500() {
        let mut store = MockPlayerStore::new();
        store.expect_record_win().times(1).returning(|_| {
            Err(StoreError::Io {
                path: PathBuf::from("game.db.json"),
                source: std::io::Error::other("read-only file system"),
            })
        });
        let app = create_app(store);

        let response = app
            .oneshot(request(Method::POST, "/players/Pepper"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_returns_league_as_json() {
        let wanted_league = vec![
            Player::new("Cleo", 32),
            Player::new("Chris", 20),
            Player::new("Tiest", 14),
        ];
        let league_clone = wanted_league.clone();
        let mut store = MockPlayerStore::new();
        store
            .expect_league()
            .times(1)
            .returning(move || league_clone.clone());
        let app = create_app(store);

        let response = app.oneshot(request(Method::GET, "/league")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            mime::APPLICATION_JSON.as_ref()
        );
        let league: League = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(league, wanted_league);
    }

    #[tokio::test]
    async fn test_game_page() {
        let app = create_app(MockPlayerStore::new());

        let response = app.oneshot(request(Method::GET, "/game")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("<html"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_app(MockPlayerStore::new());

        let response = app
            .oneshot(request(Method::GET, "/unknown"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
    #[tokio::test]
    async fn test_records_wins_and_returns_league_over_http() {
        let dir = tempfile::TempDir::new().unwrap();
        let store: Arc<dyn PlayerStore> = Arc::new(
            crate::league::FileSystemPlayerStore::open(dir.path().join("game.db.json"))
                .await
                .unwrap(),
        );
        let app = create_router(AppState {
            store,
            game: Arc::new(MockGame::new()),
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let client = reqwest::Client::new();
        for name in ["Pepper", "Pepper", "Pepper", "Floyd"] {
            let response = client
                .post(format!("http://{}/players/{}", address, name))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), reqwest::StatusCode::ACCEPTED);
        }

        let score = client
            .get(format!("http://{}/players/Pepper", address))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(score, "3");

        let league: League = serde_json::from_str(
            &client
                .get(format!("http://{}/league", address))
                .send()
                .await
                .unwrap()
                .text()
                .await
                .unwrap(),
        )
        .unwrap();
        assert_eq!(league, vec![Player::new("Pepper", 3), Player::new("Floyd", 1)]);
    }
}
