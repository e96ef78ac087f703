use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify, types::PkceSession, warning};

/// Completes the PKCE flow when Spotify redirects back to the local server.
///
/// A denied authorization arrives as an `error` query parameter; it clears
/// the shared state so the waiting authorization flow reports a failure
/// rather than a timeout. A failed code exchange clears it the same way. On
/// a successful exchange the session is stored in the shared state for the
/// waiting flow to pick up.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceSession>>>>,
) -> Html<&'static str> {
    if let Some(reason) = params.get("error") {
        warning!("Authorization was denied: {}", reason);
        *shared_state.lock().await = None;
        return Html("<h4>Authorization denied. You can close this browser window.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    // Take code verifier from state
    let Some(pkce_state) = state.as_mut() else {
        return Html("<h4>No authorization flow in progress.</h4>");
    };

    let verifier = pkce_state.code_verifier.clone();

    match spotify::auth::exchange_code_pkce(code, &verifier).await {
        Ok(session) => {
            pkce_state.session = Some(session);
            Html("<h2>Authentication successful.</h2><p>You can close this browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            *state = None;
            Html("<h4>Login failed.</h4>")
        }
    }
}
