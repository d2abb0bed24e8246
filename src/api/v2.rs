//
//  tweet-poster
//  api/v2.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v2 tweets client and response normalization.
//!
//! The v2 API wraps every answer in an envelope. A failed request carries a
//! problem-details object:
//!
//! ```json
//! {"title": "Too Many Requests", "detail": "Too Many Requests", "status": 429}
//! ```
//!
//! A successful one carries the created tweet under `data`:
//!
//! ```json
//! {"data": {"id": "1445880548472328192", "text": "Hello world!"}}
//! ```
//!
//! [`normalize`] turns the first into [`PosterError::Api`] and the second into
//! the serialized `data` member.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::common::{PosterError, PosterResult};
use crate::auth::{Credentials, OAuthSigner};
use crate::config::{endpoint_url, TWEETS_PATH};

/// Request body of `POST /2/tweets`.
#[derive(Debug, Serialize)]
pub struct CreateTweetRequest<'a> {
    /// The status text.
    pub text: &'a str,
}

/// Classification of a decoded v2 response body.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tweet_poster::api::TweetsResponse;
///
/// let response = TweetsResponse::classify(json!({"status": 403, "detail": "forbidden"}));
/// assert!(matches!(response, TweetsResponse::Error { status: 403, .. }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TweetsResponse {
    /// A numeric `status` of 400 or more.
    Error {
        /// The `status` member
        status: u64,
        /// The `title` member, if present
        title: Option<String>,
        /// The `detail` member, if present
        detail: Option<String>,
    },

    /// A non-null `data` member (and no error status).
    Data(Value),

    /// Anything else; the whole body is kept for diagnostics.
    Unknown(Value),
}

impl TweetsResponse {
    /// Classifies a decoded response body.
    ///
    /// The error check wins over `data`, so an envelope carrying both is an
    /// error. A `status` below 400 is ignored.
    pub fn classify(body: Value) -> Self {
        if let Some(status) = error_status(&body) {
            return Self::Error {
                status,
                title: text_member(&body, "title"),
                detail: text_member(&body, "detail"),
            };
        }

        match body.get("data") {
            Some(data) if !data.is_null() => Self::Data(data.clone()),
            _ => Self::Unknown(body),
        }
    }

    /// Converts the classification into the poster's result.
    pub fn into_result(self) -> PosterResult<String> {
        match self {
            Self::Error {
                status,
                title,
                detail,
            } => Err(PosterError::Api {
                status,
                title,
                detail,
            }),
            Self::Data(data) => Ok(data.to_string()),
            Self::Unknown(body) => Err(PosterError::MissingData(body.to_string())),
        }
    }
}

/// Normalizes a decoded v2 response body.
///
/// # Returns
///
/// - `Ok(String)` - The compact JSON serialization of `data` alone
/// - `Err(PosterError::Api)` - The body is an error envelope
/// - `Err(PosterError::MissingData)` - The body has no `data` member
pub fn normalize(body: Value) -> PosterResult<String> {
    TweetsResponse::classify(body).into_result()
}

/// Reads `status` as an error code when it is a number of at least 400.
///
/// Floats count too; `429.0` reports as `429`, fractions are truncated.
fn error_status(body: &Value) -> Option<u64> {
    let status = body.get("status")?;
    let code = status.as_u64().or_else(|| {
        status
            .as_f64()
            .filter(|s| s.is_finite() && *s >= 400.0)
            .map(|s| s as u64)
    })?;
    (code >= 400).then_some(code)
}

/// Reads an optional member as text. Non-string scalars are rendered as JSON.
fn text_member(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Client for `POST /2/tweets`.
#[derive(Debug)]
pub struct TweetsClient {
    http: Client,
    url: String,
    signer: OAuthSigner,
}

impl TweetsClient {
    /// Creates a client for the v2 API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::Transport`] if the HTTP client cannot be built.
    pub fn new(credentials: &Credentials, base_url: &str, timeout: Duration) -> PosterResult<Self> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
                .timeout(timeout)
                .build()?,
            url: endpoint_url(base_url, TWEETS_PATH),
            signer: OAuthSigner::new(credentials),
        })
    }

    /// The full endpoint URL this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Creates a tweet and returns the serialized `data` member.
    ///
    /// The JSON body is not part of the OAuth signature.
    ///
    /// # Errors
    ///
    /// - [`PosterError::Transport`] if the request fails
    /// - [`PosterError::Decode`] if the body is not JSON
    /// - [`PosterError::Api`] / [`PosterError::MissingData`] from [`normalize`]
    pub async fn create_tweet(&self, text: &str) -> PosterResult<String> {
        let authorization = self.signer.sign("POST", &self.url, &[])?;

        debug!(url = %self.url, chars = text.chars().count(), "Creating v2 tweet");

        let response = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, authorization)
            .json(&CreateTweetRequest { text })
            .send()
            .await?;

        let http_status = response.status();
        let raw = response.text().await?;
        debug!(status = %http_status, "v2 tweet request answered");

        let body: Value = serde_json::from_str(&raw).map_err(|source| PosterError::Decode {
            source,
            body: raw.clone(),
        })?;

        let classified = TweetsResponse::classify(body);
        if let TweetsResponse::Error { status, .. } = &classified {
            warn!(status, http_status = %http_status, "v2 API returned an error envelope");
        }

        classified.into_result()
    }
}
