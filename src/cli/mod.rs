//! # CLI Module
//!
//! This module provides the command-line interface layer for the birthday
//! playlist CLI. It implements all user-facing commands and coordinates
//! between the Spotify integration, the pending-song store, and the session
//! management underneath.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the
//! application's functionality. It provides commands for:
//!
//! - **Authentication Management**: OAuth 2.0 PKCE flow for Spotify API access
//! - **Playlist Inspection**: Displaying the shared playlist's current tracks
//! - **Submission Handling**: Searching the catalog and adding tracks
//! - **Queue Replay**: Draining the pending-song store into the playlist
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authorization flow with PKCE.
//!   A fresh session immediately replays the pending queue and loads the
//!   playlist, so the first interactive command starts from a current state.
//!
//! ### Playlist Operations
//!
//! - [`playlist`] - Displays the shared playlist's full track list
//! - [`search`] - Searches the catalog and marks tracks already in the playlist
//! - [`add`] - Adds a track to the playlist, by URI or by query
//!
//! ### Queue Operations
//!
//! - [`pending`] - Displays the queued submissions waiting in the store
//! - [`sync`] - Replays the queue into the playlist and refreshes the local state
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Session/Synchronization)
//!     ↓
//! API Layer (Spotify Integration, Pending Store)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each CLI command delegates to the management and API modules while
//! handling user interaction, progress feedback, and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! The CLI implements user-friendly error handling:
//!
//! - **Graceful Degradation**: A failed drain still lets the playlist refresh run
//! - **Helpful Messages**: Clear guidance on how to resolve issues
//! - **Typed Outcomes**: Duplicate submissions and empty queues are reported
//!   as what they are, not as errors
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! bplcli auth                      # Authenticate with Spotify
//! ```
//!
//! ### Regular Usage
//! ```bash
//! bplcli playlist                  # View the shared playlist
//! bplcli search "party anthem"     # Find candidate tracks
//! bplcli add spotify:track:...     # Submit a track
//! bplcli add "party anthem" --search
//! bplcli pending                   # Inspect the queued submissions
//! bplcli sync                      # Replay the queue into the playlist
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::management`] - Session persistence and playlist synchronization
//! - [`crate::pending`] - Pending-song store client
//! - [`crate::types`] - Data structures and type definitions

mod add;
mod auth;
mod pending;
mod playlist;
mod search;
mod sync;

pub use add::add;
pub use auth::auth;
pub use pending::pending;
pub use playlist::playlist;
pub use search::search;
pub use sync::sync;
