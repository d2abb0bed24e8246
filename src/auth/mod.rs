//
//  tweet-poster
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Both the v1.1 and v2 endpoints are called in user context, which means
//! every request carries an OAuth 1.0a `Authorization` header built from four
//! strings issued by the developer portal.
//!
//! ## Module Structure
//!
//! - [`Credentials`]: the four OAuth 1.0a strings
//! - [`oauth`]: HMAC-SHA1 request signing
//!
//! ## Example
//!
//! ```rust
//! use tweet_poster::auth::{Credentials, OAuthSigner};
//!
//! let credentials = Credentials::new("token", "token-secret", "consumer-key", "consumer-secret");
//! let signer = OAuthSigner::new(&credentials);
//! let header = signer.sign("POST", "https://api.twitter.com/2/tweets", &[]).unwrap();
//! assert!(header.starts_with("OAuth "));
//! ```

pub mod oauth;

pub use oauth::*;

use std::fmt;

use crate::api::common::{PosterError, PosterResult};

/// Environment variable holding the user access token.
pub const ENV_ACCESS_TOKEN: &str = "TWITTER_ACCESS_TOKEN";
/// Environment variable holding the user access token secret.
pub const ENV_ACCESS_TOKEN_SECRET: &str = "TWITTER_ACCESS_TOKEN_SECRET";
/// Environment variable holding the application consumer key.
pub const ENV_CONSUMER_KEY: &str = "TWITTER_CONSUMER_KEY";
/// Environment variable holding the application consumer secret.
pub const ENV_CONSUMER_SECRET: &str = "TWITTER_CONSUMER_SECRET";

/// OAuth 1.0a user-context credentials.
///
/// The values are opaque to this crate: they are only ever fed into the
/// signature and the `Authorization` header. `Debug` output is redacted so a
/// stray `{:?}` or `tracing` field never leaks them.
///
/// # Example
///
/// ```rust
/// use tweet_poster::auth::Credentials;
///
/// let credentials = Credentials::new("token", "token-secret", "key", "secret");
/// assert!(!format!("{:?}", credentials).contains("token-secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The user's access token.
    pub access_token: String,
    /// The user's access token secret.
    pub access_token_secret: String,
    /// The application's consumer (API) key.
    pub consumer_key: String,
    /// The application's consumer (API) secret.
    pub consumer_secret: String,
}

impl Credentials {
    /// Creates credentials from the four OAuth 1.0a strings.
    ///
    /// The argument order follows the order in which the developer portal
    /// lists them for a user: access token pair first, consumer pair second.
    pub fn new(
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// Reads the credentials from the `TWITTER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::MissingCredential`] naming the first variable
    /// that is unset or empty.
    pub fn from_env() -> PosterResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds credentials from an arbitrary name lookup.
    ///
    /// [`Credentials::from_env`] is this function over `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> PosterResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(PosterError::MissingCredential(name))
        };

        Ok(Self {
            access_token: read(ENV_ACCESS_TOKEN)?,
            access_token_secret: read(ENV_ACCESS_TOKEN_SECRET)?,
            consumer_key: read(ENV_CONSUMER_KEY)?,
            consumer_secret: read(ENV_CONSUMER_SECRET)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .field("consumer_key", &"<redacted>")
            .field("consumer_secret", &"<redacted>")
            .finish()
    }
}
