use chrono::Utc;

use crate::{error::Result, spotify, types::TokenResponse};

/// Owns the bearer credential for one pipeline run.
///
/// The refresh token is loaded once from the store and never mutated
/// in-process; the access token and its expiry are cached here and replaced
/// on refresh. One manager is constructed per run and passed by mutable
/// reference to every catalog-calling operation.
pub struct TokenManager {
    refresh_token: String,
    access_token: Option<String>,
    expires_at: i64,
}

impl TokenManager {
    pub fn new(refresh_token: String) -> Self {
        TokenManager {
            refresh_token,
            access_token: None,
            expires_at: 0,
        }
    }

    /// Returns a currently-valid access token.
    ///
    /// If no token is cached, or the cached one has reached its expiry, a
    /// refresh exchange is performed first. A rejected exchange surfaces as
    /// [`crate::error::Error::Auth`].
    pub async fn get_valid_token(&mut self) -> Result<String> {
        if self.needs_refresh(Utc::now().timestamp()) {
            let token = spotify::auth::refresh_access_token(&self.refresh_token).await?;
            self.cache(token);
        }

        Ok(self.access_token.clone().unwrap_or_default())
    }

    fn needs_refresh(&self, now: i64) -> bool {
        self.access_token.is_none() || now >= self.expires_at
    }

    fn cache(&mut self, token: TokenResponse) {
        self.expires_at = Utc::now().timestamp() + token.expires_in as i64;
        self.access_token = Some(token.access_token);
    }
}
