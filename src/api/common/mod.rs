//
//  tweet-poster
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the v1.1 and v2 clients
//!
//! This module holds the error type shared by both API clients and by the
//! [`TweetPoster`](super::TweetPoster) dispatcher.
//!
//! # Example
//!
//! ```rust
//! use tweet_poster::api::common::PosterError;
//!
//! fn describe(result: Result<String, PosterError>) {
//!     match result {
//!         Ok(payload) => println!("Posted: {}", payload),
//!         Err(PosterError::Api { status: 429, .. }) => println!("Slow down"),
//!         Err(PosterError::InvalidVersion(raw)) => println!("No such API version: {}", raw),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Unified error type for posting operations.
///
/// # Variants
///
/// | Variant | Raised by |
/// |---------|-----------|
/// | `InvalidVersion` | Version parsing at construction, `set_version_str`, config |
/// | `Api` | v2 error envelope with `status >= 400` |
/// | `MissingData` | v2 response without a `data` member |
/// | `Transport` | Any HTTP-level failure from `reqwest` |
/// | `Decode` | v2 response body that is not JSON |
/// | `MissingCredential` | [`Credentials::from_env`](crate::auth::Credentials::from_env) |
/// | `InvalidEndpoint` | A configured base URL that does not parse |
/// | `OAuth` | Signing key construction failure |
///
/// # Notes
///
/// - The `Display` output of `Api` is the composed message
///   `API <title> error <status> : <detail>`, with the title segment omitted
///   when the envelope has none.
/// - `Transport` keeps the underlying `reqwest::Error` as its source so callers
///   can inspect timeouts, connect failures and so on.
#[derive(Error, Debug)]
pub enum PosterError {
    /// The requested API version is neither v1 nor v2.
    ///
    /// # Parameters
    ///
    /// - `0` - The rejected input, verbatim
    #[error("Invalid API version '{0}'. Valid versions: 1, 2")]
    InvalidVersion(String),

    /// The v2 API answered with an error envelope.
    #[error("{}", compose_api_message(*status, title.as_deref(), detail.as_deref()))]
    Api {
        /// The `status` field of the envelope
        status: u64,
        /// Optional short title, e.g. `Too Many Requests`
        title: Option<String>,
        /// Optional human readable detail
        detail: Option<String>,
    },

    /// The v2 API answered without an error and without a `data` member.
    ///
    /// # Parameters
    ///
    /// - `0` - The full serialized response, for diagnostics
    #[error("No data in API Response. Response: {0}")]
    MissingData(String),

    /// The HTTP transport failed.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The v2 API answered with a body that is not JSON.
    #[error("Could not decode API response: {source}. Body: {body}")]
    Decode {
        /// The parser error
        source: serde_json::Error,
        /// The raw response body
        body: String,
    },

    /// A credential could not be found in the environment.
    ///
    /// # Parameters
    ///
    /// - `0` - The name of the missing environment variable
    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// A configured endpoint is not a usable URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// OAuth signature generation failed.
    #[error("OAuth error: {0}")]
    OAuth(String),
}

impl PosterError {
    /// Returns the HTTP-style status carried by an `Api` error, if any.
    pub fn status(&self) -> Option<u64> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Checks if this error is a platform rate limit (status 429).
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// Checks if this error means the credentials were refused (401 or 403).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Builds the message for a v2 error envelope.
///
/// A missing title drops the whole ` <title>` segment; a missing detail
/// renders as an empty string.
pub fn compose_api_message(status: u64, title: Option<&str>, detail: Option<&str>) -> String {
    let title = title.map(|t| format!(" {}", t)).unwrap_or_default();
    format!("API{} error {} : {}", title, status, detail.unwrap_or_default())
}

/// Result alias used throughout the API layer.
pub type PosterResult<T> = Result<T, PosterError>;
