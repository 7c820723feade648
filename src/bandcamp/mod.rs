//! # Bandcamp Scraping Module
//!
//! This module extracts release information from Bandcamp storefront pages.
//! It covers the first two stages of the pipeline:
//!
//! - [`scrape_release_urls`] - collects the release page URLs from a
//!   storefront listing page (regular grid items followed by featured items,
//!   each in document order, relative links resolved against the page's own
//!   scheme and host).
//! - [`scrape_release`] - extracts artist, title, and the optional release
//!   date from a single release page.
//!
//! Fetching and document parsing are split: the `*_from_html` functions are
//! pure and operate on an already-fetched document, which is what the
//! integration tests exercise. The async wrappers add the HTTP fetch and
//! surface non-success statuses as [`crate::error::Error::Fetch`].
//!
//! The selectors target the stable parts of Bandcamp's markup: the
//! `music-grid-item`/`featured-item` list entries on listing pages and the
//! `name-section` heading block plus the `tralbum-credits` text block on
//! release pages. A release page without a title or artist is malformed and
//! rejected; a missing `released <Month> <Day>, <Year>` credits line is
//! normal (many releases omit it) and yields no date.

mod listing;
mod release;

pub use listing::parse_entry_url;
pub use listing::release_urls_from_html;
pub use listing::scrape_release_urls;
pub use release::release_from_html;
pub use release::scrape_release;
