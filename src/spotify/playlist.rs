use reqwest::Client;

use crate::{
    config,
    error::{Error, Result},
    management::TokenManager,
    types::{AddTracksRequest, AddTracksResponse},
};

/// Prepends the given track URIs to the configured playlist.
///
/// The tracks are inserted at playlist position 0 in the order given, with a
/// single POST. An empty input is a no-op: no HTTP call is issued.
pub async fn add_tracks(track_uris: &[String], tokens: &mut TokenManager) -> Result<()> {
    if track_uris.is_empty() {
        return Ok(());
    }

    let token = tokens.get_valid_token().await?;

    let api_url = format!(
        "{}/playlists/{}/tracks",
        config::spotify_apiurl(),
        config::spotify_playlist_id()
    );
    let request = add_tracks_request(track_uris);

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Playlist { status, body });
    }

    let _snapshot: AddTracksResponse =
        serde_json::from_str(&body).map_err(|source| Error::Schema {
            context: "playlist update",
            source,
        })?;

    Ok(())
}

/// Builds the playlist insert request: all tracks at position 0, order
/// preserved.
pub fn add_tracks_request(track_uris: &[String]) -> AddTracksRequest {
    AddTracksRequest {
        uris: track_uris.to_vec(),
        position: 0,
    }
}
