use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, Response, header::AUTHORIZATION};
use url::Url;

use crate::{
    config,
    error::{Error, Result},
    types::TokenResponse,
};

/// Builds the authorization URL the user grants playlist access at.
///
/// The URL carries the configured client id, redirect URI, and scope; the
/// authorization code is delivered to the redirect URI and handed back to
/// this tool via `bandspot auth --code`.
pub fn authorize_url() -> String {
    let url = Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", config::spotify_client_id()),
            ("response_type", "code".to_string()),
            ("redirect_uri", config::spotify_redirect_uri()),
            ("scope", config::spotify_scope()),
        ],
    )
    .expect("SPOTIFY_API_AUTH_URL must be a valid URL");

    url.to_string()
}

/// Exchanges an authorization code for the long-lived refresh token.
///
/// Completes the OAuth 2.0 authorization-code flow. The request carries a
/// Basic authorization header built from the configured client id and
/// secret; a non-success response surfaces as [`Error::Auth`] with the
/// status and body attached. The caller is responsible for persisting the
/// returned refresh token.
pub async fn exchange_code(code: &str) -> Result<String> {
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .header(AUTHORIZATION, basic_auth_header())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?;

    let token = token_response("authorization code exchange", response).await?;
    token.refresh_token.ok_or(Error::Schema {
        context: "authorization code exchange",
        source: serde::de::Error::missing_field("refresh_token"),
    })
}

/// Exchanges a refresh token for a new access token.
///
/// Allows the pipeline to maintain authenticated access without the user
/// re-authorizing. Same failure semantics as [`exchange_code`].
pub async fn refresh_access_token(refresh_token: &str) -> Result<TokenResponse> {
    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .header(AUTHORIZATION, basic_auth_header())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await?;

    token_response("token refresh", response).await
}

fn basic_auth_header() -> String {
    let credentials = format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    );
    format!("Basic {}", STANDARD.encode(credentials))
}

async fn token_response(context: &'static str, response: Response) -> Result<TokenResponse> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Auth { status, body });
    }

    serde_json::from_str(&body).map_err(|source| Error::Schema { context, source })
}
