use reqwest::Client;

use crate::{
    config,
    error::{Error, Result},
    management::TokenManager,
    types::{AlbumHit, AlbumTracksResponse, Release, SearchResponse},
    warning,
};

/// Builds the candidate search queries for a release, in priority order.
///
/// The artist-scoped query is preferred; the album-only fallback trades
/// precision for recall on mistagged or variant artist names.
pub fn search_queries(release: &Release) -> Vec<String> {
    vec![
        format!("artist:{} album:{}", release.artist, release.title),
        format!("album:{}", release.title),
    ]
}

/// Resolves a release against the catalog and returns its track URIs.
///
/// Tries each candidate query in order and stops at the first one that
/// returns at least one album; the first album of that result is the match,
/// and its tracks are returned in catalog order. A release that matches no
/// query is an expected outcome: a warning is logged and an empty list
/// returned.
pub async fn resolve(release: &Release, tokens: &mut TokenManager) -> Result<Vec<String>> {
    for query in search_queries(release) {
        let albums = search_albums(&query, tokens).await?;
        if let Some(album) = albums.into_iter().next() {
            return album_track_uris(&album.id, tokens).await;
        }
    }

    warning!(
        "No catalog match for {} - {}",
        release.artist,
        release.title
    );
    Ok(Vec::new())
}

async fn search_albums(query: &str, tokens: &mut TokenManager) -> Result<Vec<AlbumHit>> {
    let token = tokens.get_valid_token().await?;
    let market = config::spotify_market();

    let api_url = format!("{}/search", config::spotify_apiurl());
    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("q", query), ("type", "album"), ("market", market.as_str())])
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Search { status, body });
    }

    let search: SearchResponse = serde_json::from_str(&body).map_err(|source| Error::Schema {
        context: "album search",
        source,
    })?;

    Ok(search.albums.items)
}

async fn album_track_uris(album_id: &str, tokens: &mut TokenManager) -> Result<Vec<String>> {
    let token = tokens.get_valid_token().await?;
    let market = config::spotify_market();

    let api_url = format!("{}/albums/{}/tracks", config::spotify_apiurl(), album_id);
    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("market", market.as_str())])
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Search { status, body });
    }

    let tracks: AlbumTracksResponse =
        serde_json::from_str(&body).map_err(|source| Error::Schema {
            context: "album tracks",
            source,
        })?;

    Ok(tracks.items.into_iter().map(|track| track.uri).collect())
}
