use chrono::NaiveDate;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::{
    error::{Error, Result},
    types::Release,
};

const TITLE_SELECTOR: &str = "div#name-section h2";
const ARTIST_SELECTOR: &str = "div#name-section h3 span a";
const CREDITS_SELECTOR: &str = "div.tralbumData.tralbum-credits";

const RELEASE_DATE_PATTERN: &str = r"^released (\w+ \d{1,2}, \d{4})$";
const RELEASE_DATE_FORMAT: &str = "%B %d, %Y";

/// Fetches a release page and extracts its metadata.
///
/// Fails with [`Error::Fetch`] if the page cannot be retrieved and with
/// [`Error::Parse`] if the title or artist heading is missing.
pub async fn scrape_release(release_url: &str) -> Result<Release> {
    let response = Client::new().get(release_url).send().await?;
    let status = response.status();
    if !(status.is_success() || status.is_redirection()) {
        return Err(Error::Fetch {
            url: release_url.to_string(),
            status,
        });
    }

    let body = response.text().await?;
    release_from_html(release_url, &body)
}

/// Extracts artist, title, and the optional release date from a release
/// document.
pub fn release_from_html(url: &str, html: &str) -> Result<Release> {
    let document = Html::parse_document(html);

    let title = select_text(&document, TITLE_SELECTOR).ok_or_else(|| Error::Parse {
        url: url.to_string(),
        what: "release title",
    })?;
    let artist = select_text(&document, ARTIST_SELECTOR).ok_or_else(|| Error::Parse {
        url: url.to_string(),
        what: "release artist",
    })?;
    let date = release_date_from_credits(url, &document)?;

    Ok(Release {
        url: url.to_string(),
        artist,
        title,
        date,
    })
}

fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

// The credits block mixes several text lines; only one of them carries the
// `released <Month> <Day>, <Year>` stamp, and many releases omit it entirely.
fn release_date_from_credits(url: &str, document: &Html) -> Result<Option<NaiveDate>> {
    let selector = Selector::parse(CREDITS_SELECTOR).unwrap();
    let pattern = Regex::new(RELEASE_DATE_PATTERN).unwrap();

    let Some(credits) = document.select(&selector).next() else {
        return Ok(None);
    };

    for line in credits.text().flat_map(str::lines) {
        if let Some(captures) = pattern.captures(line.trim()) {
            let date = NaiveDate::parse_from_str(&captures[1], RELEASE_DATE_FORMAT).map_err(
                |_| Error::Parse {
                    url: url.to_string(),
                    what: "release date",
                },
            )?;
            return Ok(Some(date));
        }
    }

    Ok(None)
}
