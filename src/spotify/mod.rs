//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! pipeline: authentication, catalog search, and playlist management. It
//! handles all HTTP communication with Spotify's services and translates
//! their JSON responses into the crate's types.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization-code flow, token refresh)
//!     ├── Catalog Search (album search, track listing)
//!     └── Playlist Operations (add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The module implements the OAuth 2.0 authorization-code flow with a client
//! secret. Token-exchange requests authenticate with a Basic authorization
//! header built from the configured client id and secret:
//!
//! 1. **Authorization Request**: [`auth::authorize_url`] builds the URL the
//!    user grants permissions at; the authorization code comes back via the
//!    configured redirect URI.
//! 2. **Code Exchange**: [`auth::exchange_code`] trades the code for an
//!    access token and the long-lived refresh token that is persisted.
//! 3. **Token Refresh**: [`auth::refresh_access_token`] trades the refresh
//!    token for a fresh short-lived access token on demand; the cached
//!    access token lives in [`crate::management::TokenManager`].
//!
//! ## API Coverage
//!
//! - `POST /api/token` - token exchange and refresh
//! - `GET /search` - album search scoped to the configured market
//! - `GET /albums/{id}/tracks` - track listing for a matched album
//! - `POST /playlists/{playlist_id}/tracks` - add tracks to the playlist
//!
//! ## Error Handling
//!
//! A rejected token exchange is an [`crate::error::Error::Auth`]; rejected
//! search and playlist calls surface as `Search`/`Playlist` errors with the
//! status and body attached. A search that simply finds nothing is not an
//! error: the resolver logs a warning and returns an empty list. Response
//! bodies are deserialized into typed structs; any shape mismatch is a
//! `Schema` error.

pub mod auth;
pub mod playlist;
pub mod search;
