use bandspot::bandcamp::{
    parse_entry_url, release_from_html, release_urls_from_html, scrape_release_urls,
};
use bandspot::error::Error;
use chrono::NaiveDate;
use url::Url;

// Helper function to build a listing page with grid items before featured items
fn listing_page(grid_hrefs: &[&str], featured_hrefs: &[&str]) -> String {
    let grid_items: String = grid_hrefs
        .iter()
        .map(|href| format!(r#"<li class="music-grid-item"><a href="{href}">a release</a></li>"#))
        .collect();
    let featured_items: String = featured_hrefs
        .iter()
        .map(|href| format!(r#"<li class="featured-item"><a href="{href}">featured</a></li>"#))
        .collect();

    format!(
        r#"<html><body>
        <ol id="music-grid">{grid_items}</ol>
        <ul class="featured-grid">{featured_items}</ul>
        </body></html>"#
    )
}

// Helper function to build a release page
fn release_page(artist: &str, title: &str, credits: &str) -> String {
    format!(
        r#"<html><body>
        <div id="name-section">
            <h2 class="trackTitle">{title}</h2>
            <h3>by <span><a href="/artist">{artist}</a></span></h3>
        </div>
        <div class="tralbumData tralbum-credits">{credits}</div>
        </body></html>"#
    )
}

fn page_url(url: &str) -> Url {
    Url::parse(url).unwrap()
}

#[test]
fn test_grid_items_come_before_featured_items() {
    let html = listing_page(
        &["/album/one", "/album/two"],
        &["/album/featured-one", "/album/featured-two"],
    );
    let urls = release_urls_from_html(&page_url("https://label.bandcamp.com/music"), &html);

    assert_eq!(
        urls,
        vec![
            "https://label.bandcamp.com/album/one",
            "https://label.bandcamp.com/album/two",
            "https://label.bandcamp.com/album/featured-one",
            "https://label.bandcamp.com/album/featured-two",
        ]
    );
}

#[test]
fn test_featured_items_trail_even_when_listed_first_in_document() {
    // featured block above the grid in document order
    let html = r#"<html><body>
        <ul><li class="featured-item"><a href="/album/featured">featured</a></li></ul>
        <ol><li class="music-grid-item"><a href="/album/regular">regular</a></li></ol>
        </body></html>"#;
    let urls = release_urls_from_html(&page_url("https://label.bandcamp.com/music"), html);

    assert_eq!(
        urls,
        vec![
            "https://label.bandcamp.com/album/regular",
            "https://label.bandcamp.com/album/featured",
        ]
    );
}

#[test]
fn test_returns_all_grid_and_featured_entries() {
    let html = listing_page(&["/a", "/b", "/c"], &["/d", "/e"]);
    let urls = release_urls_from_html(&page_url("https://label.bandcamp.com"), &html);

    assert_eq!(urls.len(), 5);
}

#[test]
fn test_relative_hrefs_resolve_against_page_host() {
    // the listing page lives under a path; relative links must still resolve
    // against the scheme + host, not the page path
    let html = listing_page(&["/album/one"], &[]);
    let urls = release_urls_from_html(&page_url("https://label.bandcamp.com/music/latest"), &html);

    assert_eq!(urls, vec!["https://label.bandcamp.com/album/one"]);
}

#[test]
fn test_absolute_hrefs_pass_through_unchanged() {
    let html = listing_page(&["https://other.bandcamp.com/album/elsewhere"], &[]);
    let urls = release_urls_from_html(&page_url("https://label.bandcamp.com/music"), &html);

    assert_eq!(urls, vec!["https://other.bandcamp.com/album/elsewhere"]);
}

#[test]
fn test_duplicate_urls_are_not_deduplicated() {
    // the same release can appear both in the grid and as featured
    let html = listing_page(&["/album/one"], &["/album/one"]);
    let urls = release_urls_from_html(&page_url("https://label.bandcamp.com/music"), &html);

    assert_eq!(
        urls,
        vec![
            "https://label.bandcamp.com/album/one",
            "https://label.bandcamp.com/album/one",
        ]
    );
}

#[test]
fn test_listing_without_release_anchors_yields_nothing() {
    let html = "<html><body><p>nothing for sale</p></body></html>";
    let urls = release_urls_from_html(&page_url("https://label.bandcamp.com/music"), html);

    assert!(urls.is_empty());
}

#[test]
fn test_entry_url_requires_scheme_and_host() {
    assert!(parse_entry_url("https://label.bandcamp.com/music").is_ok());

    assert!(matches!(
        parse_entry_url("label.bandcamp.com/music"),
        Err(Error::InvalidUrl(_))
    ));
    assert!(matches!(
        parse_entry_url("/music/latest"),
        Err(Error::InvalidUrl(_))
    ));
}

#[tokio::test]
async fn test_invalid_entry_url_fails_before_any_fetch() {
    // no network is available to this test; an invalid URL must be rejected
    // before a request is even attempted
    let result = scrape_release_urls("music/latest").await;
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[test]
fn test_release_page_with_date_line() {
    let html = release_page(
        "Cloud Choir",
        "Slow Light",
        "released March 3, 2023 <br> all rights reserved",
    );
    let release = release_from_html("https://label.bandcamp.com/album/slow-light", &html).unwrap();

    assert_eq!(release.artist, "Cloud Choir");
    assert_eq!(release.title, "Slow Light");
    assert_eq!(release.url, "https://label.bandcamp.com/album/slow-light");
    assert_eq!(release.date, NaiveDate::from_ymd_opt(2023, 3, 3));
}

#[test]
fn test_release_date_line_found_between_other_credits() {
    let html = release_page(
        "Cloud Choir",
        "Slow Light",
        "mastered by someone <br> released December 24, 2021 <br> thanks to everyone",
    );
    let release = release_from_html("https://label.bandcamp.com/album/slow-light", &html).unwrap();

    assert_eq!(release.date, NaiveDate::from_ymd_opt(2021, 12, 24));
}

#[test]
fn test_release_without_date_line_has_no_date() {
    let html = release_page("Cloud Choir", "Slow Light", "all rights reserved");
    let release = release_from_html("https://label.bandcamp.com/album/slow-light", &html).unwrap();

    assert!(release.date.is_none());
}

#[test]
fn test_release_keyword_is_case_sensitive() {
    let html = release_page("Cloud Choir", "Slow Light", "Released March 3, 2023");
    let release = release_from_html("https://label.bandcamp.com/album/slow-light", &html).unwrap();

    assert!(release.date.is_none());
}

#[test]
fn test_partial_date_line_does_not_match() {
    // the pattern is anchored on both ends
    let html = release_page(
        "Cloud Choir",
        "Slow Light",
        "this was released March 3, 2023 on vinyl",
    );
    let release = release_from_html("https://label.bandcamp.com/album/slow-light", &html).unwrap();

    assert!(release.date.is_none());
}

#[test]
fn test_release_page_without_credits_block() {
    let html = r#"<html><body>
        <div id="name-section">
            <h2>Slow Light</h2>
            <h3>by <span><a href="/artist">Cloud Choir</a></span></h3>
        </div>
        </body></html>"#;
    let release = release_from_html("https://label.bandcamp.com/album/slow-light", html).unwrap();

    assert!(release.date.is_none());
}

#[test]
fn test_release_page_headings_are_trimmed() {
    let html = release_page("  Cloud Choir  ", "\n  Slow Light\n ", "");
    let release = release_from_html("https://label.bandcamp.com/album/slow-light", &html).unwrap();

    assert_eq!(release.artist, "Cloud Choir");
    assert_eq!(release.title, "Slow Light");
}

#[test]
fn test_release_page_without_title_is_malformed() {
    let html = r#"<html><body>
        <div id="name-section">
            <h3>by <span><a href="/artist">Cloud Choir</a></span></h3>
        </div>
        </body></html>"#;
    let result = release_from_html("https://label.bandcamp.com/album/broken", html);

    assert!(matches!(result, Err(Error::Parse { .. })));
}

#[test]
fn test_release_page_without_artist_is_malformed() {
    let html = r#"<html><body>
        <div id="name-section">
            <h2>Slow Light</h2>
        </div>
        </body></html>"#;
    let result = release_from_html("https://label.bandcamp.com/album/broken", html);

    assert!(matches!(result, Err(Error::Parse { .. })));
}
