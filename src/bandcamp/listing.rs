use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{Error, Result};

const RELEASE_ITEM_SELECTOR: &str = "li.music-grid-item > a";
const FEATURED_ITEM_SELECTOR: &str = "li.featured-item > a";

/// Collects the release page URLs linked from a storefront listing page.
///
/// Fails with [`Error::InvalidUrl`] before any network I/O if `page_url` has
/// no scheme or host, and with [`Error::Fetch`] if the page cannot be
/// retrieved. Re-running re-fetches the page.
pub async fn scrape_release_urls(page_url: &str) -> Result<Vec<String>> {
    let base = parse_entry_url(page_url)?;

    let response = Client::new().get(page_url).send().await?;
    let status = response.status();
    if !(status.is_success() || status.is_redirection()) {
        return Err(Error::Fetch {
            url: page_url.to_string(),
            status,
        });
    }

    let body = response.text().await?;
    Ok(release_urls_from_html(&base, &body))
}

/// Validates that the entry URL is absolute (has scheme and host).
pub fn parse_entry_url(page_url: &str) -> Result<Url> {
    let parsed = Url::parse(page_url).map_err(|_| Error::InvalidUrl(page_url.to_string()))?;
    if !parsed.has_host() {
        return Err(Error::InvalidUrl(page_url.to_string()));
    }
    Ok(parsed)
}

/// Extracts release URLs from a listing document.
///
/// Regular grid items come first, then featured items, each in document
/// order. Duplicates are not removed. Relative hrefs are resolved against
/// the page's own scheme and host; absolute hrefs pass through unchanged.
pub fn release_urls_from_html(page_url: &Url, html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let grid = Selector::parse(RELEASE_ITEM_SELECTOR).unwrap();
    let featured = Selector::parse(FEATURED_ITEM_SELECTOR).unwrap();
    let base = site_root(page_url);

    document
        .select(&grid)
        .chain(document.select(&featured))
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(|href| resolve_href(&base, href))
        .collect()
}

fn is_absolute(href: &str) -> bool {
    Url::parse(href).map(|url| url.has_host()).unwrap_or(false)
}

fn resolve_href(base: &Url, href: &str) -> String {
    if is_absolute(href) {
        href.to_string()
    } else {
        base.join(href)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| href.to_string())
    }
}

// scheme + host of the listing page, with path/query/fragment stripped
fn site_root(page_url: &Url) -> Url {
    let mut base = page_url.clone();
    base.set_path("");
    base.set_query(None);
    base.set_fragment(None);
    base
}
