use bplcli::management::{RENEWAL_MARGIN_SECS, SessionManager, session_state};
use bplcli::types::{PkceSession, Session, SessionState};

// Helper function to create a session obtained at a fixed point in time
fn create_test_session(obtained_at: u64, expires_in: u64) -> Session {
    Session {
        access_token: "access-token".to_string(),
        refresh_token: "refresh-token".to_string(),
        scope: "playlist-modify-public playlist-modify-private".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_missing_flow_is_empty() {
    assert_eq!(session_state(None, 1_000), SessionState::Empty);
}

#[test]
fn test_flow_without_session_is_pending_exchange() {
    let flow = PkceSession {
        code_verifier: "verifier".to_string(),
        session: None,
    };

    assert_eq!(
        session_state(Some(&flow), 1_000),
        SessionState::PendingExchange
    );
}

#[test]
fn test_session_is_valid_until_renewal_margin() {
    let flow = PkceSession {
        code_verifier: "verifier".to_string(),
        session: Some(create_test_session(1_000, 3_600)),
    };

    let deadline = 1_000 + 3_600 - RENEWAL_MARGIN_SECS;

    // Just before the renewal deadline the session still counts as valid
    assert_eq!(session_state(Some(&flow), deadline - 1), SessionState::Valid);

    // At the deadline it flips to expired, even though the token itself
    // would live for another minute
    assert_eq!(session_state(Some(&flow), deadline), SessionState::Expired);
    assert_eq!(
        session_state(Some(&flow), deadline + 1_000),
        SessionState::Expired
    );
}

#[test]
fn test_short_lived_session_is_immediately_expired() {
    // A lifetime shorter than the renewal margin is due for renewal from
    // the moment it is obtained
    let flow = PkceSession {
        code_verifier: "verifier".to_string(),
        session: Some(create_test_session(1_000, 30)),
    };

    assert_eq!(session_state(Some(&flow), 1_000), SessionState::Expired);
}

#[test]
fn test_manager_tracks_expiry_with_injected_time() {
    let manager = SessionManager::new(create_test_session(1_000, 3_600));

    assert!(!manager.is_expired_at(1_000));
    assert!(!manager.is_expired_at(1_000 + 3_600 - RENEWAL_MARGIN_SECS - 1));
    assert!(manager.is_expired_at(1_000 + 3_600 - RENEWAL_MARGIN_SECS));
    assert!(manager.is_expired_at(1_000 + 3_600));
}

#[test]
fn test_manager_exposes_current_session() {
    let manager = SessionManager::new(create_test_session(42, 3_600));

    assert_eq!(manager.current_session().obtained_at, 42);
    assert_eq!(manager.current_session().expires_in, 3_600);
    assert_eq!(manager.current_session().access_token, "access-token");
}

#[test]
fn test_manager_state_reflects_wall_clock() {
    let now = chrono::Utc::now().timestamp() as u64;

    let fresh = SessionManager::new(create_test_session(now, 3_600));
    assert_eq!(fresh.state(), SessionState::Valid);

    let stale = SessionManager::new(create_test_session(0, 30));
    assert_eq!(stale.state(), SessionState::Expired);
}
