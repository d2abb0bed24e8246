//
//  tweet-poster
//  config/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Endpoint Configuration Module
//!
//! Constants for the two API generations and helpers to validate and
//! normalize configured base URLs.
//!
//! ## v1.1 vs v2
//!
//! | | v1.1 | v2 |
//! |---|------|----|
//! | Base | `https://api.twitter.com/1.1` | `https://api.twitter.com/2` |
//! | Post path | `/statuses/update.json` | `/tweets` |
//! | Body | form field `status` | JSON `{"text": ...}` |
//! | Response | returned verbatim | `data` member extracted |
//!
//! ## Usage
//!
//! ```rust
//! use tweet_poster::config::{normalize_base_url, LEGACY_BASE_URL};
//!
//! assert_eq!(normalize_base_url(" https://api.twitter.com/1.1/ ").unwrap(), LEGACY_BASE_URL);
//! assert!(normalize_base_url("ftp://example.com").is_err());
//! ```

use url::Url;

use crate::api::common::{PosterError, PosterResult};

/// Base URL of the legacy v1.1 REST API.
pub const LEGACY_BASE_URL: &str = "https://api.twitter.com/1.1";

/// Base URL of the v2 REST API.
pub const TWEETS_BASE_URL: &str = "https://api.twitter.com/2";

/// Path of the v1.1 status update endpoint, relative to [`LEGACY_BASE_URL`].
pub const STATUS_UPDATE_PATH: &str = "/statuses/update.json";

/// Path of the v2 create tweet endpoint, relative to [`TWEETS_BASE_URL`].
pub const TWEETS_PATH: &str = "/tweets";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Validates a base URL and strips surrounding whitespace and trailing slashes.
///
/// # Errors
///
/// Returns [`PosterError::InvalidEndpoint`] if the value does not parse as an
/// absolute `http` or `https` URL, or carries a query string or fragment
/// (the signature is computed over the bare URL).
///
/// # Examples
///
/// ```rust
/// use tweet_poster::config::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url("http://127.0.0.1:1234/2///").unwrap(),
///     "http://127.0.0.1:1234/2"
/// );
/// ```
pub fn normalize_base_url(raw: &str) -> PosterResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| PosterError::InvalidEndpoint(format!("'{}': {}", raw.trim(), e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PosterError::InvalidEndpoint(format!(
            "'{}': scheme must be http or https",
            trimmed
        )));
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(PosterError::InvalidEndpoint(format!(
            "'{}': query strings and fragments are not allowed",
            trimmed
        )));
    }

    Ok(trimmed.to_string())
}

/// Joins a normalized base URL and an endpoint path.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
