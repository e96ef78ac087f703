use std::path::PathBuf;

use chrono::Utc;

use crate::{
    info, spotify,
    types::{PkceSession, Session, SessionState},
    warning,
};

/// Seconds before expiry at which a session counts as due for renewal.
pub const RENEWAL_MARGIN_SECS: u64 = 60;

/// Classifies the acquisition state cell shared between the authorization
/// flow and the callback handler.
pub fn session_state(flow: Option<&PkceSession>, now: u64) -> SessionState {
    match flow {
        None => SessionState::Empty,
        Some(pkce) => match &pkce.session {
            None => SessionState::PendingExchange,
            Some(session) if now >= renewal_deadline(session) => SessionState::Expired,
            Some(_) => SessionState::Valid,
        },
    }
}

fn renewal_deadline(session: &Session) -> u64 {
    (session.obtained_at + session.expires_in).saturating_sub(RENEWAL_MARGIN_SECS)
}

pub struct SessionManager {
    session: Session,
}

impl SessionManager {
    pub fn new(session: Session) -> Self {
        SessionManager { session }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::session_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let session: Session = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { session })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::session_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.session).map_err(|e| e.to_string())?;
        async_fs::write(Self::session_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns an access token, refreshing it first when the renewal deadline
    /// has passed. A failed refresh keeps the previous token so the caller's
    /// request can still go out and fail with a meaningful status.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            info!("Session is due for renewal, refreshing access token.");
            match spotify::auth::refresh_session(&self.session.refresh_token).await {
                Ok(new_session) => {
                    self.session = new_session;
                    let _ = self.persist().await;
                }
                Err(e) => {
                    warning!("Failed to refresh session, keeping the previous token: {}", e)
                }
            }
        }

        self.session.access_token.clone()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= renewal_deadline(&self.session)
    }

    pub fn state(&self) -> SessionState {
        if self.is_expired() {
            SessionState::Expired
        } else {
            SessionState::Valid
        }
    }

    fn session_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("bplcli/cache/session.json");
        path
    }

    pub fn current_session(&self) -> &Session {
        &self.session
    }
}
