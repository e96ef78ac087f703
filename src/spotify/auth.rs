use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::{SessionManager, session_state},
    server::start_api_server,
    success,
    types::{PkceSession, Session, SessionState},
    utils, warning,
};

/// Runs the complete OAuth 2.0 PKCE authorization flow against Spotify.
///
/// This function orchestrates the entire acquisition process:
/// 1. Generating the PKCE code verifier and challenge
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the callback to deliver an exchanged session
/// 5. Persisting the obtained session for future use
///
/// The PKCE (Proof Key for Code Exchange) flow needs no client secret, so
/// nothing sensitive is baked into the binary or its configuration.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe state cell shared with the callback
///   handler. It starts the flow holding the code verifier and ends it
///   holding the exchanged session.
///
/// # Lifecycle
///
/// The shared cell moves through the acquisition states: empty before the
/// flow starts, pending from the moment the verifier is stored until the
/// callback completes the exchange, and valid once a session with an
/// expiry is in place. A denied authorization or a failed exchange clears
/// the cell back to empty, which is how a timeout is told apart from a
/// failure when the wait ends.
///
/// # Error Handling
///
/// - Browser launch failures print the authorization URL for manual use
/// - Persistence failures terminate the program with an error
/// - A timeout or a denied authorization terminates with an error message
pub async fn authorize(shared_state: Arc<Mutex<Option<PkceSession>>>) {
    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope()
    );

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceSession {
            code_verifier: code_verifier.clone(),
            session: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let session = wait_for_session(Arc::clone(&shared_state)).await;

    match session {
        Some(s) => {
            let manager = SessionManager::new(s);
            if let Err(e) = manager.persist().await {
                error!("Failed to save session to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            let lock = shared_state.lock().await;
            let now = Utc::now().timestamp() as u64;
            match session_state(lock.as_ref(), now) {
                SessionState::PendingExchange => {
                    error!("Authentication timed out waiting for the callback.");
                }
                _ => {
                    error!("Authentication failed.");
                }
            }
        }
    }
}

/// Polls the shared state until the callback handler has stored a session or
/// torn the flow down, for at most 60 seconds. Runs concurrently with the
/// local HTTP server.
async fn wait_for_session(shared_state: Arc<Mutex<Option<PkceSession>>>) -> Option<Session> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        match lock.as_ref() {
            Some(pkce_session) => {
                if let Some(session) = &pkce_session.session {
                    return Some(session.clone());
                }
            }
            // The callback cleared the flow after a denial or a failed
            // exchange; no session is coming.
            None => return None,
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a fresh access token.
///
/// Allows the application to renew authenticated access without sending the
/// user back through the browser. Spotify may rotate the refresh token; when
/// the response omits one, the previous refresh token is carried over.
///
/// # Arguments
///
/// * `refresh_token` - Valid refresh token obtained from a previous exchange
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or when the token
/// endpoint refuses the grant, so callers can keep their current session.
pub async fn refresh_session(refresh_token: &str) -> Result<Session, String> {
    let client_id = config::spotify_client_id();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    session_from_token_response(&json, Some(refresh_token))
}

/// Exchanges an authorization code for a session using PKCE.
///
/// Completes the flow started by `authorize`. The code verifier proves that
/// the client completing the exchange is the one that initiated it.
///
/// # Arguments
///
/// * `code` - Authorization code received by the OAuth callback
/// * `verifier` - PKCE code verifier generated at the start of the flow
///
/// # Errors
///
/// Returns an error string on network failures and when the token endpoint
/// rejects the code or verifier.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Session, String> {
    let client_id = config::spotify_client_id();
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    session_from_token_response(&json, None)
}

fn session_from_token_response(
    json: &Value,
    previous_refresh: Option<&str>,
) -> Result<Session, String> {
    let access_token = match json["access_token"].as_str() {
        Some(token) => token.to_string(),
        None => {
            let reason = json["error_description"]
                .as_str()
                .or_else(|| json["error"].as_str())
                .unwrap_or("no access token in response");
            return Err(format!("token request failed: {}", reason));
        }
    };

    let refresh_token = json["refresh_token"]
        .as_str()
        .map(str::to_string)
        .or_else(|| previous_refresh.map(str::to_string))
        .unwrap_or_default();

    Ok(Session {
        access_token,
        refresh_token,
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
