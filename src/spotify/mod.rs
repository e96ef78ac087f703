//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! birthday playlist CLI, implementing authentication, catalog search, and
//! playlist access. It is the only layer that talks to Spotify directly;
//! everything above it works with the typed structures from [`crate::types`].
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles one domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Catalog Search (Tracks)
//!     └── Playlist Operations (Read, Append)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 PKCE (Proof Key for Code Exchange)
//! flow:
//! - **Complete Auth Flow**: From the initial browser redirect to session storage
//! - **PKCE Security**: No client secret is stored or transmitted
//! - **Session Renewal**: Refresh-token grant for expiring sessions
//! - **Local Callback Server**: Temporary HTTP server receiving the OAuth callback
//!
//! ### Search Module
//!
//! [`search`] - Free-text track search against the catalog. Used to resolve
//! submissions that arrive as queries rather than URIs.
//!
//! ### Playlist Module
//!
//! [`playlist`] - Read and append operations on the one shared playlist:
//! - **Full Reads**: Follows pagination until the complete track list is known
//! - **Batched Appends**: Adds tracks in request-sized batches, preserving order
//!
//! The playlist is fixed by configuration. Creating, selecting, or reordering
//! playlists is out of scope for this application.
//!
//! ## Authentication Strategy
//!
//! 1. **Code Verifier Generation**: Creates a cryptographically random verifier
//! 2. **Challenge Creation**: Derives a SHA256 challenge from the verifier
//! 3. **Authorization Request**: Directs the user to Spotify with the challenge
//! 4. **Local Callback**: Receives the authorization code via a temporary HTTP server
//! 5. **Token Exchange**: Exchanges code + verifier for the session tokens
//! 6. **Session Storage**: Persists the session for future runs
//!
//! Sessions count as due for renewal shortly before their actual expiry so
//! that a request never goes out with a token about to lapse mid-flight.
//!
//! ## Error Types
//!
//! - **`reqwest::Error`** - HTTP client errors, network issues, API errors
//! - **`String`** - Authentication and token exchange errors

pub mod auth;
pub mod playlist;
pub mod search;
