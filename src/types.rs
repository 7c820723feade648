use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone)]
pub struct Release {
    pub url: String,
    pub artist: String,
    pub title: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub albums: AlbumsPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsPage {
    pub items: Vec<AlbumHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumHit {
    pub id: String,
    pub name: String,
    pub artists: Vec<AlbumArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
    pub position: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct ScrapeTableRow {
    pub artist: String,
    pub title: String,
    pub date: String,
    pub outcome: String,
}
