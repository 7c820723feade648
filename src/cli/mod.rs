//! # CLI Module
//!
//! This module provides the command-line interface layer for bandspot. It
//! implements the user-facing commands and coordinates between the scraping,
//! catalog, and persistence components.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Without a code, prints and opens the Spotify authorization
//!   URL. With `--code`, exchanges the authorization code for tokens and
//!   persists the refresh token in the local store. This is a one-time setup
//!   step per installation.
//!
//! ### Scraping
//!
//! - [`scrape`] - The pipeline orchestrator. Collects release page URLs from
//!   the given storefront listing page, then for each release extracts its
//!   metadata, resolves it against the Spotify catalog, and prepends the
//!   matched tracks to the configured playlist. Finishes with a per-release
//!   outcome table.
//!
//! ## Error Handling Philosophy
//!
//! A single release failing to fetch, parse, resolve, or add does not stop
//! the run: the failure is reported with a warning and the loop continues
//! with the next release. Two failures are fatal for the whole run: a
//! rejected token exchange (no further catalog calls can succeed) and a
//! failed listing extraction (there is nothing to iterate). A release that
//! simply has no catalog match is an expected outcome, reported in the final
//! table rather than treated as an error.
//!
//! ## Dependencies
//!
//! This module depends on the core application components:
//! - [`crate::bandcamp`] - Storefront scraping
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::management`] - Token lifecycle and refresh-token persistence
//! - [`crate::types`] - Data structures and type definitions

mod auth;
mod scrape;

pub use auth::auth;
pub use scrape::scrape;
