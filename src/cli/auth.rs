use crate::{config, error, info, management::TokenStore, spotify, success, warning};

/// Runs the authorization flow.
///
/// Without a code: constructs the authorization URL and opens it in the
/// default browser so the user can grant playlist access. With a code:
/// completes the flow by exchanging it for tokens and persisting the
/// refresh token.
pub async fn auth(code: Option<String>) {
    match code {
        Some(code) => store_refresh_token(&code).await,
        None => open_authorize_url(),
    }
}

fn open_authorize_url() {
    let auth_url = spotify::auth::authorize_url();

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    info!("Grant access in the browser, then run: bandspot auth --code <CODE>");
}

async fn store_refresh_token(code: &str) {
    let refresh_token = match spotify::auth::exchange_code(code).await {
        Ok(refresh_token) => refresh_token,
        Err(e) => error!("Authorization failed: {}", e),
    };

    let store = match TokenStore::open(&config::database_path()) {
        Ok(store) => store,
        Err(e) => error!("Cannot open token store: {}", e),
    };

    if let Err(e) = store.set_refresh_token(&refresh_token) {
        error!("Failed to store refresh token: {}", e);
    }

    success!("Authorization successful. Refresh token stored.");
}
