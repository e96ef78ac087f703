//! Configuration management for the birthday playlist CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Every value ships with a default
//! that points at the production Spotify endpoints and the shared playlist,
//! so a fresh installation works without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `bplcli/.env`. A missing file is not an error
/// since every configuration value has a default.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/bplcli/.env`
/// - macOS: `~/Library/Application Support/bplcli/.env`
/// - Windows: `%LOCALAPPDATA%/bplcli/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be parsed
///
/// # Example
///
/// ```
/// use bplcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("bplcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the server address for the local OAuth callback server.
///
/// Reads the `SERVER_ADDRESS` environment variable which specifies the
/// address and port where the local HTTP server should bind for handling
/// OAuth callbacks during the authentication flow.
///
/// Falls back to `127.0.0.1:8888` when unset.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8888"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8888".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Reads the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform. The authorization flow uses PKCE, so no
/// client secret is involved anywhere.
///
/// Falls back to the client id of the registered birthday playlist app.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .unwrap_or_else(|_| "a2e6aeb9971e4287a1985803be608d24".to_string())
}

/// Returns the Spotify OAuth redirect URI.
///
/// Reads the `SPOTIFY_API_REDIRECT_URI` environment variable which specifies
/// the callback URL that Spotify should redirect to after user authorization.
/// This must match a redirect URI registered in the Spotify application
/// settings and must point at the local callback server.
///
/// Falls back to `http://127.0.0.1:8888/callback` when unset.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI")
        .unwrap_or_else(|_| "http://127.0.0.1:8888/callback".to_string())
}

/// Returns the Spotify API scope permissions.
///
/// Reads the `SPOTIFY_API_AUTH_SCOPE` environment variable which defines the
/// scope of permissions requested during OAuth authentication. Adding tracks
/// to the shared playlist needs the playlist-modify scopes.
///
/// # Example
///
/// ```
/// let scope = spotify_scope(); // e.g., "playlist-modify-public playlist-modify-private"
/// ```
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE")
        .unwrap_or_else(|_| "playlist-modify-public playlist-modify-private".to_string())
}

/// Returns the Spotify OAuth authorization URL.
///
/// Reads the `SPOTIFY_API_AUTH_URL` environment variable which contains the
/// base URL for Spotify's OAuth authorization endpoint. This is where users
/// are redirected to grant permissions to the application.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable which contains the
/// URL for exchanging authorization codes for access tokens during the OAuth
/// flow, and for refreshing access tokens later on.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable which contains the base
/// URL for Spotify's Web API endpoints. This is used for all API operations
/// after authentication.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the id of the shared playlist all submissions land in.
///
/// Reads the `BIRTHDAY_PLAYLIST_ID` environment variable. The playlist is
/// fixed for the lifetime of an installation; the CLI never creates or
/// selects playlists.
pub fn playlist_id() -> String {
    env::var("BIRTHDAY_PLAYLIST_ID").unwrap_or_else(|_| "6yoTyxeEYmrn0GQ0rpATGv".to_string())
}

/// Returns the base URL of the pending-song store.
///
/// Reads the `SONG_STORE_URL` environment variable which points at the
/// trusted web service collecting song submissions made while nobody was
/// authenticated. The store lives outside this application.
pub fn store_apiurl() -> String {
    env::var("SONG_STORE_URL").unwrap_or_else(|_| "https://ethanbonsall.com/api".to_string())
}
