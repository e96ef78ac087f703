use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    Extension, Form, Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::Mutex};

use bplcli::{
    api,
    management::{SessionManager, session_state},
    types::{PkceSession, Session, SessionState},
};

// Environment variables are process-global, so tests pointing them at their
// own mock server must not interleave.
static ENV_LOCK: Mutex<()> = Mutex::const_new(());

/// In-memory stand-in for the provider's token endpoint.
#[derive(Default)]
struct TokenMock {
    fail: bool,
    grants: Vec<String>,
}

type SharedTokenMock = Arc<Mutex<TokenMock>>;

async fn token(
    Extension(state): Extension<SharedTokenMock>,
    Form(params): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().await;
    state
        .grants
        .push(params.get("grant_type").cloned().unwrap_or_default());

    if state.fail {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "The supplied grant is invalid",
            })),
        );
    }

    // No refresh_token in the response, like a provider that does not rotate
    (
        StatusCode::OK,
        Json(json!({
            "access_token": "renewed-access-token",
            "token_type": "Bearer",
            "scope": "playlist-modify-public",
            "expires_in": 3600,
        })),
    )
}

/// Binds the token endpoint mock to an ephemeral port and points the client
/// configuration at it.
async fn spawn_token_mock() -> SharedTokenMock {
    let state: SharedTokenMock = Arc::new(Mutex::new(TokenMock::default()));

    let app = Router::new()
        .route("/api/token", post(token))
        .layer(Extension(Arc::clone(&state)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    unsafe {
        std::env::set_var("SPOTIFY_API_TOKEN_URL", format!("http://{}/api/token", addr));
        // A successful renewal persists the session to the data directory;
        // keep test runs out of the real one.
        std::env::set_var("XDG_DATA_HOME", std::env::temp_dir().join("bplcli-test-data"));
    }

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    state
}

/// Serves the real callback route the way the local server wires it up.
async fn spawn_callback_server(cell: Arc<Mutex<Option<PkceSession>>>) -> SocketAddr {
    let app = Router::new()
        .route("/callback", get(api::callback))
        .layer(Extension(cell));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

fn expired_session() -> Session {
    Session {
        access_token: "stale-access-token".to_string(),
        refresh_token: "refresh-token-1".to_string(),
        scope: "playlist-modify-public".to_string(),
        expires_in: 30,
        obtained_at: 0,
    }
}

fn pending_flow() -> Arc<Mutex<Option<PkceSession>>> {
    Arc::new(Mutex::new(Some(PkceSession {
        code_verifier: "test-verifier".to_string(),
        session: None,
    })))
}

#[tokio::test]
async fn expired_session_refreshes_before_use() {
    let _guard = ENV_LOCK.lock().await;
    let state = spawn_token_mock().await;

    let mut manager = SessionManager::new(expired_session());
    assert!(manager.is_expired());

    let token = manager.get_valid_token().await;

    assert_eq!(token, "renewed-access-token");
    // The response carried no refresh token, so the previous one carries over
    assert_eq!(manager.current_session().refresh_token, "refresh-token-1");
    assert!(!manager.is_expired());

    assert_eq!(state.lock().await.grants, vec!["refresh_token".to_string()]);

    // The renewed session is used as-is, without another grant
    let token_again = manager.get_valid_token().await;
    assert_eq!(token_again, "renewed-access-token");
    assert_eq!(state.lock().await.grants.len(), 1);
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_token() {
    let _guard = ENV_LOCK.lock().await;
    let state = spawn_token_mock().await;
    state.lock().await.fail = true;

    let mut manager = SessionManager::new(expired_session());
    let token = manager.get_valid_token().await;

    // The stale token still goes out, and the session is left as it was
    assert_eq!(token, "stale-access-token");
    assert_eq!(manager.current_session().refresh_token, "refresh-token-1");
    assert!(manager.is_expired());

    // Exactly one attempt, no retry
    assert_eq!(state.lock().await.grants, vec!["refresh_token".to_string()]);
}

#[tokio::test]
async fn denied_callback_tears_down_the_flow() {
    let _guard = ENV_LOCK.lock().await;

    let cell = pending_flow();
    let addr = spawn_callback_server(Arc::clone(&cell)).await;

    let body = reqwest::get(format!("http://{}/callback?error=access_denied", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("denied"));

    // The cleared cell classifies as empty, not as a pending exchange, so
    // the waiting flow reports a failure instead of a timeout
    let guard = cell.lock().await;
    assert_eq!(session_state(guard.as_ref(), 0), SessionState::Empty);
}

#[tokio::test]
async fn failed_exchange_tears_down_the_flow() {
    let _guard = ENV_LOCK.lock().await;
    let state = spawn_token_mock().await;
    state.lock().await.fail = true;

    let cell = pending_flow();
    let addr = spawn_callback_server(Arc::clone(&cell)).await;

    let body = reqwest::get(format!("http://{}/callback?code=one-time-code", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Login failed"));
    assert_eq!(state.lock().await.grants, vec!["authorization_code".to_string()]);

    let guard = cell.lock().await;
    assert_eq!(session_state(guard.as_ref(), 0), SessionState::Empty);
}

#[tokio::test]
async fn stray_callback_without_code_leaves_the_flow_pending() {
    let _guard = ENV_LOCK.lock().await;

    let cell = pending_flow();
    let addr = spawn_callback_server(Arc::clone(&cell)).await;

    let body = reqwest::get(format!("http://{}/callback", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Missing authorization code"));

    // A stray request does not abort a flow that is still waiting
    let guard = cell.lock().await;
    assert_eq!(
        session_state(guard.as_ref(), 0),
        SessionState::PendingExchange
    );
}
