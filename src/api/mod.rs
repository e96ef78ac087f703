//! # API Module
//!
//! This module provides the HTTP endpoints served by the local web server
//! that runs for the duration of an authorization flow. It implements the
//! OAuth callback and a health check.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server. This endpoint completes the PKCE flow by
//!   exchanging the authorization code for a session, or reports a denied
//!   authorization.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information, mainly
//!   useful for checking that the callback server actually came up.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function plugged into Axum's routing system by
//! [`crate::server`]. The callback shares its state cell with the
//! authorization flow through an [`axum::Extension`] layer.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use bplcli::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::types`] - Type definitions for the session state

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
