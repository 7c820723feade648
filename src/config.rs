//! Configuration management for the Bandcamp-to-Spotify pipeline.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! target playlist, and the refresh-token database location.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `bandspot/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/bandspot/.env`
/// - macOS: `~/Library/Application Support/bandspot/.env`
/// - Windows: `%LOCALAPPDATA%/bandspot/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails.
///
/// # Example
///
/// ```
/// use bandspot::config;
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
    path.push("bandspot/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the title used for run output headers.
///
/// Retrieves the `APP_TITLE` environment variable, a free-form label for this
/// installation (e.g. the name of the storefront being watched).
///
/// # Panics
///
/// Panics if the `APP_TITLE` environment variable is not set.
pub fn app_title() -> String {
    env::var("APP_TITLE").expect("APP_TITLE must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable which
/// contains the client secret obtained when registering the application with
/// Spotify's developer platform. It is combined with the client ID into the
/// Basic authorization header on token-exchange requests.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not
/// set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the ID of the playlist that matched tracks are added to.
///
/// # Panics
///
/// Panics if the `SPOTIFY_PLAYLIST_ID` environment variable is not set.
pub fn spotify_playlist_id() -> String {
    env::var("SPOTIFY_PLAYLIST_ID").expect("SPOTIFY_PLAYLIST_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_API_REDIRECT_URI` environment variable which
/// specifies the callback URL that Spotify redirects to after user
/// authorization. This must match the redirect URI registered in the Spotify
/// application settings.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions.
///
/// Retrieves the `SPOTIFY_API_AUTH_SCOPE` environment variable which defines
/// the scope of permissions requested during OAuth authentication
/// (e.g. `playlist-modify-public`).
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_API_AUTH_URL` environment variable which contains
/// the base URL for Spotify's OAuth authorization endpoint. This is where
/// users are sent to grant permissions to the application.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL for exchanging authorization codes or refresh tokens for access
/// tokens.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints (e.g.
/// `https://api.spotify.com/v1`).
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the market used to scope catalog searches.
///
/// Retrieves the `SPOTIFY_API_MARKET` environment variable, an ISO 3166-1
/// alpha-2 country code (e.g. `DE`). All search and track-listing requests
/// are scoped to this market.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_MARKET` environment variable is not set.
pub fn spotify_market() -> String {
    env::var("SPOTIFY_API_MARKET").expect("SPOTIFY_API_MARKET must be set")
}

/// Returns the path of the refresh-token database.
///
/// Uses the `DATABASE_PATH` environment variable when set, otherwise falls
/// back to `bandspot/bandspot.db` in the platform-specific local data
/// directory.
pub fn database_path() -> PathBuf {
    match env::var("DATABASE_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => {
            let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("bandspot/bandspot.db");
            path
        }
    }
}
