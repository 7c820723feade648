use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    bandcamp, config, error,
    error::Error,
    info,
    management::{TokenManager, TokenStore},
    spotify, success,
    types::{Release, ScrapeTableRow},
    warning,
};

/// Runs the whole pipeline for one storefront listing page.
///
/// Release pages are processed strictly one after another; the only state
/// carried across releases is the cached access token. A failing release is
/// skipped with a warning, a rejected token exchange aborts the run.
pub async fn scrape(url: String) {
    let store = match TokenStore::open(&config::database_path()) {
        Ok(store) => store,
        Err(e) => error!("Cannot open token store: {}", e),
    };

    let refresh_token = match store.get_refresh_token() {
        Ok(token) => token,
        Err(e) => error!(
            "Failed to load refresh token. Please run bandspot auth\n Error: {}",
            e
        ),
    };

    let mut tokens = TokenManager::new(refresh_token);

    let release_urls = match bandcamp::scrape_release_urls(&url).await {
        Ok(urls) => urls,
        Err(e) => error!("Cannot scrape listing page: {}", e),
    };

    info!(
        "{}: found {} release pages on {}",
        config::app_title(),
        release_urls.len(),
        url
    );

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut rows: Vec<ScrapeTableRow> = Vec::new();

    for (index, release_url) in release_urls.iter().enumerate() {
        pb.set_message(format!(
            "Processing release {}/{}...",
            index + 1,
            release_urls.len()
        ));

        let release = match bandcamp::scrape_release(release_url).await {
            Ok(release) => release,
            Err(e) => {
                warning!("Skipping {}: {}", release_url, e);
                continue;
            }
        };

        let track_uris = match spotify::search::resolve(&release, &mut tokens).await {
            Ok(uris) => uris,
            Err(Error::Auth { status, body }) => {
                pb.finish_and_clear();
                error!("Token refresh rejected ({}): {}", status, body);
            }
            Err(e) => {
                warning!(
                    "Failed to resolve {} - {}: {}",
                    release.artist,
                    release.title,
                    e
                );
                rows.push(outcome_row(&release, "error".to_string()));
                continue;
            }
        };

        if track_uris.is_empty() {
            rows.push(outcome_row(&release, "not matched".to_string()));
            continue;
        }

        match spotify::playlist::add_tracks(&track_uris, &mut tokens).await {
            Ok(_) => {
                rows.push(outcome_row(
                    &release,
                    format!("added {} tracks", track_uris.len()),
                ));
            }
            Err(Error::Auth { status, body }) => {
                pb.finish_and_clear();
                error!("Token refresh rejected ({}): {}", status, body);
            }
            Err(e) => {
                warning!(
                    "Failed to add tracks for {} - {}: {}",
                    release.artist,
                    release.title,
                    e
                );
                rows.push(outcome_row(&release, "error".to_string()));
            }
        }
    }

    pb.finish_and_clear();

    if rows.is_empty() {
        warning!("No releases processed.");
        return;
    }

    let table = Table::new(rows);
    println!("{}", table);

    success!("Scrape run finished.");
}

fn outcome_row(release: &Release, outcome: String) -> ScrapeTableRow {
    ScrapeTableRow {
        artist: release.artist.clone(),
        title: release.title.clone(),
        date: release
            .date
            .map(|date| date.to_string())
            .unwrap_or_default(),
        outcome,
    }
}
