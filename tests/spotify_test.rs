use bandspot::management::TokenManager;
use bandspot::spotify::playlist::{add_tracks, add_tracks_request};
use bandspot::spotify::search::search_queries;
use bandspot::types::Release;

// Helper function to create a test release
fn create_test_release(artist: &str, title: &str) -> Release {
    Release {
        url: "https://label.bandcamp.com/album/test".to_string(),
        artist: artist.to_string(),
        title: title.to_string(),
        date: None,
    }
}

#[test]
fn test_search_queries_prefer_artist_scoped_query() {
    let release = create_test_release("Boards of Canada", "Geogaddi");
    let queries = search_queries(&release);

    assert_eq!(
        queries,
        vec![
            "artist:Boards of Canada album:Geogaddi",
            "album:Geogaddi",
        ]
    );
}

#[test]
fn test_search_queries_always_offer_the_album_only_fallback() {
    let release = create_test_release("anyone", "anything");
    let queries = search_queries(&release);

    assert_eq!(queries.len(), 2);
    assert!(queries[0].starts_with("artist:"));
    assert!(queries[1].starts_with("album:"));
}

#[test]
fn test_add_tracks_request_prepends_in_given_order() {
    let uris = vec![
        "spotify:track:one".to_string(),
        "spotify:track:two".to_string(),
        "spotify:track:three".to_string(),
    ];
    let request = add_tracks_request(&uris);

    assert_eq!(request.position, 0);
    assert_eq!(request.uris, uris);
}

#[test]
fn test_add_tracks_request_serializes_expected_shape() {
    let uris = vec!["spotify:track:one".to_string()];
    let request = add_tracks_request(&uris);
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "uris": ["spotify:track:one"],
            "position": 0
        })
    );
}

#[tokio::test]
async fn test_add_tracks_with_no_tracks_is_a_noop() {
    // no configuration is loaded and no network is available in this test;
    // an empty input must succeed without attempting either
    let mut tokens = TokenManager::new("refresh".to_string());
    let result = add_tracks(&[], &mut tokens).await;

    assert!(result.is_ok());
}
